//! Provider-related types.
//!
//! This module contains the provider identity types:
//! - [`ProviderKind`] - Enum of the data sources the bar subscribes to
//! - [`ProviderSnapshot`] - One provider's latest typed output

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;
use crate::models::glazewm::GlazeWmOutput;
use crate::models::media::MediaOutput;
use crate::models::system::{
    AudioOutput, CpuOutput, DateOutput, DiskOutput, MemoryOutput, NetworkOutput,
};
use crate::models::tray::SystrayOutput;

// ============================================================================
// Provider Kind
// ============================================================================

/// Data sources the bar can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Clock / formatted date.
    Date,
    /// GlazeWM window manager state.
    GlazeWm,
    /// Media session (now playing).
    Media,
    /// System tray icons.
    Systray,
    /// Default playback device.
    Audio,
    /// Default network interface and traffic.
    Network,
    /// Mounted disks.
    Disk,
    /// CPU usage.
    Cpu,
    /// Memory usage.
    Memory,
}

impl ProviderKind {
    /// Returns the display name for this provider.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::GlazeWm => "GlazeWM",
            Self::Media => "Media",
            Self::Systray => "Systray",
            Self::Audio => "Audio",
            Self::Network => "Network",
            Self::Disk => "Disk",
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
        }
    }

    /// Returns all provider kinds in bar order.
    pub fn all() -> &'static [ProviderKind] {
        &[
            Self::Date,
            Self::GlazeWm,
            Self::Media,
            Self::Systray,
            Self::Audio,
            Self::Network,
            Self::Disk,
            Self::Cpu,
            Self::Memory,
        ]
    }

    /// Returns the provider name used on the wire and in configuration.
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::GlazeWm => "glazewm",
            Self::Media => "media",
            Self::Systray => "systray",
            Self::Audio => "audio",
            Self::Network => "network",
            Self::Disk => "disk",
            Self::Cpu => "cpu",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for ProviderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|k| k.cli_name() == wanted)
            .ok_or_else(|| CoreError::UnknownProvider(s.to_string()))
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cli_name())
    }
}

// ============================================================================
// Provider Snapshot
// ============================================================================

/// The latest output reported by one provider.
///
/// Serialized adjacently tagged so a host can emit
/// `{"provider": "cpu", "output": {"usage": 12.5}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "provider", content = "output", rename_all = "lowercase")]
pub enum ProviderSnapshot {
    /// Date provider output.
    Date(DateOutput),
    /// Window manager output.
    GlazeWm(GlazeWmOutput),
    /// Media session output.
    Media(MediaOutput),
    /// Tray output.
    Systray(SystrayOutput),
    /// Audio output.
    Audio(AudioOutput),
    /// Network output.
    Network(NetworkOutput),
    /// Disk output.
    Disk(DiskOutput),
    /// CPU output.
    Cpu(CpuOutput),
    /// Memory output.
    Memory(MemoryOutput),
}

impl ProviderSnapshot {
    /// Returns the provider this snapshot belongs to.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Date(_) => ProviderKind::Date,
            Self::GlazeWm(_) => ProviderKind::GlazeWm,
            Self::Media(_) => ProviderKind::Media,
            Self::Systray(_) => ProviderKind::Systray,
            Self::Audio(_) => ProviderKind::Audio,
            Self::Network(_) => ProviderKind::Network,
            Self::Disk(_) => ProviderKind::Disk,
            Self::Cpu(_) => ProviderKind::Cpu,
            Self::Memory(_) => ProviderKind::Memory,
        }
    }

    /// Parses one host emission (`{"provider": ..., "output": ...}`).
    pub fn from_json(line: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(line)?)
    }

    /// Builds a snapshot for `kind` from a bare output object.
    ///
    /// A `null` output reads as a provider that reported nothing yet.
    pub fn from_output(kind: ProviderKind, output: serde_json::Value) -> Result<Self, CoreError> {
        let output = if output.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            output
        };
        let snapshot = match kind {
            ProviderKind::Date => Self::Date(serde_json::from_value(output)?),
            ProviderKind::GlazeWm => Self::GlazeWm(serde_json::from_value(output)?),
            ProviderKind::Media => Self::Media(serde_json::from_value(output)?),
            ProviderKind::Systray => Self::Systray(serde_json::from_value(output)?),
            ProviderKind::Audio => Self::Audio(serde_json::from_value(output)?),
            ProviderKind::Network => Self::Network(serde_json::from_value(output)?),
            ProviderKind::Disk => Self::Disk(serde_json::from_value(output)?),
            ProviderKind::Cpu => Self::Cpu(serde_json::from_value(output)?),
            ProviderKind::Memory => Self::Memory(serde_json::from_value(output)?),
        };
        Ok(snapshot)
    }

    /// Returns the bare output object without the provider tag.
    pub fn output_value(&self) -> Result<serde_json::Value, CoreError> {
        let value = match self {
            Self::Date(o) => serde_json::to_value(o)?,
            Self::GlazeWm(o) => serde_json::to_value(o)?,
            Self::Media(o) => serde_json::to_value(o)?,
            Self::Systray(o) => serde_json::to_value(o)?,
            Self::Audio(o) => serde_json::to_value(o)?,
            Self::Network(o) => serde_json::to_value(o)?,
            Self::Disk(o) => serde_json::to_value(o)?,
            Self::Cpu(o) => serde_json::to_value(o)?,
            Self::Memory(o) => serde_json::to_value(o)?,
        };
        Ok(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
