//! System metric provider outputs.
//!
//! This module contains the outputs of the metric providers:
//! - [`DateOutput`] - Formatted clock
//! - [`AudioOutput`] - Default playback device
//! - [`NetworkOutput`] - Default interface, gateway, and traffic
//! - [`DiskOutput`] - Mounted disks
//! - [`CpuOutput`] / [`MemoryOutput`] - Load percentages

use serde::{Deserialize, Serialize};

// ============================================================================
// Date
// ============================================================================

/// Date provider output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DateOutput {
    /// The date rendered with the provider's configured format.
    pub formatted: Option<String>,
}

// ============================================================================
// Audio
// ============================================================================

/// An audio endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioDevice {
    /// Device name.
    pub name: Option<String>,
    /// Volume in percent (0-100).
    pub volume: Option<f64>,
    /// Whether the device is muted.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub is_muted: bool,
}

/// Audio provider output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioOutput {
    /// The default playback device.
    pub default_playback_device: Option<AudioDevice>,
}

impl AudioOutput {
    /// Returns the default device volume, if known.
    pub fn volume(&self) -> Option<f64> {
        self.default_playback_device.as_ref().and_then(|d| d.volume)
    }
}

// ============================================================================
// Network
// ============================================================================

/// Physical type of a network interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceKind {
    /// Wired connection.
    Ethernet,
    /// Wireless connection.
    Wifi,
    /// Anything else, or not reported.
    Other,
}

/// A network interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkInterface {
    /// Interface type as reported (e.g. `ethernet`, `wifi`).
    #[serde(rename = "type")]
    pub interface_type: Option<String>,
    /// Friendly interface name.
    pub friendly_name: Option<String>,
}

impl NetworkInterface {
    /// Classifies the reported type, case-insensitively.
    pub fn kind(&self) -> InterfaceKind {
        match self
            .interface_type
            .as_deref()
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("ethernet") => InterfaceKind::Ethernet,
            Some("wifi") => InterfaceKind::Wifi,
            _ => InterfaceKind::Other,
        }
    }
}

/// The default gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Gateway {
    /// Wireless network name.
    pub ssid: Option<String>,
    /// Wireless signal strength in percent.
    pub signal_strength: Option<f64>,
}

/// A transfer rate expressed in IEC units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DataRate {
    /// Rate value in `iec_unit`.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub iec_value: f64,
    /// IEC unit label, e.g. `MiB`.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub iec_unit: String,
}

/// Received and transmitted rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkTraffic {
    /// Download rate.
    pub received: Option<DataRate>,
    /// Upload rate.
    pub transmitted: Option<DataRate>,
}

/// Network provider output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkOutput {
    /// The interface carrying the default route.
    pub default_interface: Option<NetworkInterface>,
    /// The default gateway.
    pub default_gateway: Option<Gateway>,
    /// Current traffic rates.
    pub traffic: Option<NetworkTraffic>,
}

impl NetworkOutput {
    /// Classifies the default interface, [`InterfaceKind::Other`] when absent.
    pub fn interface_kind(&self) -> InterfaceKind {
        self.default_interface
            .as_ref()
            .map_or(InterfaceKind::Other, NetworkInterface::kind)
    }

    /// Returns the gateway signal strength, if reported.
    pub fn signal_strength(&self) -> Option<f64> {
        self.default_gateway.as_ref().and_then(|g| g.signal_strength)
    }
}

// ============================================================================
// Disk
// ============================================================================

/// A size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSize {
    /// Size in bytes.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub bytes: u64,
}

impl DataSize {
    /// Creates a size from a byte count.
    pub fn from_bytes(bytes: u64) -> Self {
        Self { bytes }
    }
}

/// A mounted disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Disk {
    /// Mount point, e.g. `C:\`.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub mount_point: String,
    /// Volume label.
    pub label: Option<String>,
    /// Capacity.
    pub total_space: Option<DataSize>,
    /// Free space.
    pub available_space: Option<DataSize>,
}

/// Disk provider output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DiskOutput {
    /// Disks in provider order.
    #[serde(deserialize_with = "crate::models::serde_util::null_as_default")]
    pub disks: Vec<Disk>,
}

// ============================================================================
// CPU / Memory
// ============================================================================

/// CPU provider output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CpuOutput {
    /// Total usage in percent.
    pub usage: Option<f64>,
}

/// Memory provider output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryOutput {
    /// Usage in percent.
    pub usage: Option<f64>,
    /// Used bytes.
    pub used_memory: Option<u64>,
    /// Installed bytes.
    pub total_memory: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_kind_is_case_insensitive() {
        let iface = NetworkInterface {
            interface_type: Some("WiFi".to_string()),
            friendly_name: None,
        };
        assert_eq!(iface.kind(), InterfaceKind::Wifi);

        let output = NetworkOutput::default();
        assert_eq!(output.interface_kind(), InterfaceKind::Other);
    }

    #[test]
    fn test_network_type_field_name() {
        let output: NetworkOutput = serde_json::from_str(
            r#"{"defaultInterface":{"type":"ethernet"},"defaultGateway":{"signalStrength":80}}"#,
        )
        .unwrap();
        assert_eq!(output.interface_kind(), InterfaceKind::Ethernet);
        assert_eq!(output.signal_strength(), Some(80.0));
    }

    #[test]
    fn test_disk_sizes_parse() {
        let output: DiskOutput = serde_json::from_str(
            r#"{"disks":[{"mountPoint":"C:\\","totalSpace":{"bytes":1024},"availableSpace":{"bytes":512}}]}"#,
        )
        .unwrap();
        assert_eq!(output.disks.len(), 1);
        assert_eq!(output.disks[0].mount_point, "C:\\");
        assert_eq!(output.disks[0].total_space, Some(DataSize::from_bytes(1024)));
    }
}
