//! Right panel: tray, audio, network, disks, CPU, memory.

use serde::Serialize;

use crate::derivation::{
    classify_load, disk_label, floor_percent, format_gb, format_percent, format_rate,
    used_percent, IconTier, LoadLevel,
};
use crate::models::{
    AggregatedState, AudioOutput, CpuOutput, Disk, DiskOutput, InterfaceKind, MemoryOutput,
    NetworkOutput, SystrayOutput, TrayIcon,
};
use crate::view::ViewOptions;

/// Visible tray icons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrayView {
    /// Icons after exclusion, sorted by tooltip.
    pub icons: Vec<TrayIcon>,
}

impl TrayView {
    fn build(tray: &SystrayOutput, options: &ViewOptions) -> Self {
        Self {
            icons: tray
                .visible_icons(&options.tray_exclusions)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

/// Audio segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioView {
    /// Volume-tiered icon path.
    pub icon: String,
    /// `[NN%]` volume text.
    pub text: String,
    /// Load class, unknown when no volume is reported.
    pub load: Option<LoadLevel>,
}

impl AudioView {
    fn build(audio: &AudioOutput, options: &ViewOptions) -> Self {
        let volume = audio.volume().filter(|v| v.is_finite());
        let tier = volume.map_or(IconTier::Zero, |v| options.audio_thresholds.tier(v));
        Self {
            icon: options.icon("audio", tier),
            text: format!("[{}%]", format_percent(floor_percent(volume))),
            load: volume.map(|v| classify_load(v, options.invert_audio_load)),
        }
    }
}

/// Network segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkView {
    /// Interface icon path.
    pub icon: String,
    /// `↓ <rate>` text.
    pub down: String,
    /// `↑ <rate>` text.
    pub up: String,
}

impl NetworkView {
    fn build(network: &NetworkOutput, options: &ViewOptions) -> Self {
        let icon = match network.interface_kind() {
            InterfaceKind::Ethernet => options.icon("eth", IconTier::Zero),
            InterfaceKind::Wifi => {
                let tier = network
                    .signal_strength()
                    .map_or(IconTier::Zero, |s| options.wifi_thresholds.tier(s));
                options.icon("wifi", tier)
            }
            InterfaceKind::Other => options.icon("wifi", IconTier::Zero),
        };
        let traffic = network.traffic.as_ref();
        Self {
            icon,
            down: format!("↓ {}", format_rate(traffic.and_then(|t| t.received.as_ref()))),
            up: format!("↑ {}", format_rate(traffic.and_then(|t| t.transmitted.as_ref()))),
        }
    }
}

/// One disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskView {
    /// Mount point without the trailing backslash.
    pub label: String,
    /// `[used G/total G]` text.
    pub size: String,
    /// `[NN%]` usage text.
    pub text: String,
    /// Load class, unknown when the capacity is zero or absent.
    pub load: Option<LoadLevel>,
}

impl DiskView {
    fn build(disk: &Disk) -> Self {
        let total = disk.total_space.map(|s| s.bytes);
        let available = disk.available_space.map(|s| s.bytes);
        let percent = used_percent(total, available);
        let total_bytes = total.unwrap_or(0);
        let used_bytes = total_bytes.saturating_sub(available.unwrap_or(0));
        Self {
            label: disk_label(&disk.mount_point).to_string(),
            size: format!("[{}G/{}G]", format_gb(used_bytes), format_gb(total_bytes)),
            text: format!("[{}%]", format_percent(percent)),
            load: percent.map(|p| classify_load(f64::from(p), false)),
        }
    }
}

/// Disk segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskSegment {
    /// Disk icon path.
    pub icon: String,
    /// Disks in provider order.
    pub disks: Vec<DiskView>,
}

impl DiskSegment {
    fn build(output: &DiskOutput, options: &ViewOptions) -> Self {
        Self {
            icon: options.icon("disk", IconTier::Zero),
            disks: output.disks.iter().map(DiskView::build).collect(),
        }
    }
}

/// CPU segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuView {
    /// CPU icon path.
    pub icon: String,
    /// `[NN%]` usage text.
    pub text: String,
    /// Load class.
    pub load: Option<LoadLevel>,
}

impl CpuView {
    fn build(cpu: &CpuOutput, options: &ViewOptions) -> Self {
        let usage = floor_percent(cpu.usage);
        Self {
            icon: options.icon("cpu", IconTier::Zero),
            text: format!("[{}%]", format_percent(usage)),
            load: usage.map(|u| classify_load(f64::from(u), false)),
        }
    }
}

/// Memory segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryView {
    /// RAM icon path.
    pub icon: String,
    /// `[used G/total G]` text; absent byte counts read as zero.
    pub size: String,
    /// `[NN%]` usage text.
    pub text: String,
    /// Load class.
    pub load: Option<LoadLevel>,
}

impl MemoryView {
    fn build(memory: &MemoryOutput, options: &ViewOptions) -> Self {
        let usage = floor_percent(memory.usage);
        Self {
            icon: options.icon("ram", IconTier::Zero),
            size: format!(
                "[{}G/{}G]",
                format_gb(memory.used_memory.unwrap_or(0)),
                format_gb(memory.total_memory.unwrap_or(0))
            ),
            text: format!("[{}%]", format_percent(usage)),
            load: usage.map(|u| classify_load(f64::from(u), false)),
        }
    }
}

/// Right panel contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RightPanel {
    /// Tray icons.
    pub tray: Option<TrayView>,
    /// Audio segment.
    pub audio: Option<AudioView>,
    /// Network segment.
    pub network: Option<NetworkView>,
    /// Disk segment.
    pub disks: Option<DiskSegment>,
    /// CPU segment.
    pub cpu: Option<CpuView>,
    /// Memory segment.
    pub memory: Option<MemoryView>,
}

impl RightPanel {
    /// Derives the right panel.
    pub fn build(state: &AggregatedState, options: &ViewOptions) -> Self {
        Self {
            tray: state.systray().map(|t| TrayView::build(t, options)),
            audio: state.audio().map(|a| AudioView::build(a, options)),
            network: state.network().map(|n| NetworkView::build(n, options)),
            disks: state.disk().map(|d| DiskSegment::build(d, options)),
            cpu: state.cpu().map(|c| CpuView::build(c, options)),
            memory: state.memory().map(|m| MemoryView::build(m, options)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AudioDevice, DataRate, DataSize, Gateway, NetworkInterface, NetworkTraffic,
        ProviderSnapshot,
    };

    const GB: u64 = 1024 * 1024 * 1024;

    fn options() -> ViewOptions {
        ViewOptions::default()
    }

    #[test]
    fn test_audio_view() {
        let audio = AudioOutput {
            default_playback_device: Some(AudioDevice {
                volume: Some(40.0),
                ..Default::default()
            }),
        };
        let view = AudioView::build(&audio, &options());
        assert_eq!(view.icon, "./icons/audio-02.png");
        assert_eq!(view.text, "[40%]");
        // Inverted: 60% headroom reads as medium.
        assert_eq!(view.load, Some(LoadLevel::Medium));
    }

    #[test]
    fn test_audio_without_device() {
        let view = AudioView::build(&AudioOutput::default(), &options());
        assert_eq!(view.icon, "./icons/audio-00.png");
        assert_eq!(view.text, "[--%]");
        assert_eq!(view.load, None);
    }

    #[test]
    fn test_network_icons() {
        let ethernet = NetworkOutput {
            default_interface: Some(NetworkInterface {
                interface_type: Some("ethernet".to_string()),
                friendly_name: None,
            }),
            ..Default::default()
        };
        assert_eq!(NetworkView::build(&ethernet, &options()).icon, "./icons/eth-00.png");

        let wifi = NetworkOutput {
            default_interface: Some(NetworkInterface {
                interface_type: Some("wifi".to_string()),
                friendly_name: None,
            }),
            default_gateway: Some(Gateway {
                ssid: None,
                signal_strength: Some(50.0),
            }),
            ..Default::default()
        };
        assert_eq!(NetworkView::build(&wifi, &options()).icon, "./icons/wifi-02.png");

        let unknown = NetworkOutput::default();
        let view = NetworkView::build(&unknown, &options());
        assert_eq!(view.icon, "./icons/wifi-00.png");
        assert_eq!(view.down, "↓ --");
        assert_eq!(view.up, "↑ --");
    }

    #[test]
    fn test_network_traffic_text() {
        let network = NetworkOutput {
            traffic: Some(NetworkTraffic {
                received: Some(DataRate {
                    iec_value: 3.04,
                    iec_unit: "MiB".to_string(),
                }),
                transmitted: None,
            }),
            ..Default::default()
        };
        let view = NetworkView::build(&network, &options());
        assert_eq!(view.down, "↓ 3.0 MiB/s");
        assert_eq!(view.up, "↑ --");
    }

    #[test]
    fn test_disk_view() {
        let disk = Disk {
            mount_point: "C:\\".to_string(),
            label: None,
            total_space: Some(DataSize::from_bytes(100 * GB)),
            available_space: Some(DataSize::from_bytes(40 * GB)),
        };
        let view = DiskView::build(&disk);
        assert_eq!(view.label, "C:");
        assert_eq!(view.size, "[60.0G/100.0G]");
        assert_eq!(view.text, "[60%]");
        assert_eq!(view.load, Some(LoadLevel::Medium));
    }

    #[test]
    fn test_disk_with_zero_capacity() {
        let disk = Disk {
            mount_point: "D:\\".to_string(),
            total_space: Some(DataSize::from_bytes(0)),
            ..Default::default()
        };
        let view = DiskView::build(&disk);
        assert_eq!(view.text, "[--%]");
        assert_eq!(view.size, "[0.0G/0.0G]");
        assert_eq!(view.load, None);
        assert!(!view.text.contains("NaN"));
    }

    #[test]
    fn test_cpu_and_memory() {
        let cpu = CpuView::build(&CpuOutput { usage: Some(7.9) }, &options());
        assert_eq!(cpu.text, "[07%]");
        assert_eq!(cpu.load, Some(LoadLevel::Low));
        assert_eq!(cpu.icon, "./icons/cpu-00.png");

        let memory = MemoryView::build(
            &MemoryOutput {
                usage: Some(91.2),
                used_memory: Some(29 * GB),
                total_memory: None,
            },
            &options(),
        );
        assert_eq!(memory.text, "[91%]");
        assert_eq!(memory.size, "[29.0G/0.0G]");
        assert_eq!(memory.load, Some(LoadLevel::Extreme));
    }

    #[test]
    fn test_panel_omits_absent_providers() {
        let state = AggregatedState::new().with_snapshot(ProviderSnapshot::Cpu(CpuOutput {
            usage: Some(50.0),
        }));
        let panel = RightPanel::build(&state, &options());
        assert!(panel.cpu.is_some());
        assert!(panel.memory.is_none());
        assert!(panel.audio.is_none());
        assert!(panel.tray.is_none());
    }

    #[test]
    fn test_tray_view_applies_exclusions() {
        let mut opts = options();
        opts.tray_exclusions.insert("hidden".to_string());
        let tray = SystrayOutput {
            icons: vec![
                TrayIcon {
                    id: "1".to_string(),
                    tooltip: "Zoom".to_string(),
                    icon_url: String::new(),
                    icon_hash: "zoom".to_string(),
                },
                TrayIcon {
                    id: "2".to_string(),
                    tooltip: "Audio".to_string(),
                    icon_url: String::new(),
                    icon_hash: "hidden".to_string(),
                },
                TrayIcon {
                    id: "3".to_string(),
                    tooltip: "Discord".to_string(),
                    icon_url: String::new(),
                    icon_hash: "discord".to_string(),
                },
            ],
        };
        let view = TrayView::build(&tray, &opts);
        let ids: Vec<&str> = view.icons.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }
}
