//! Bar configuration.

use segbar_core::view::{Shortcut, ViewOptions};
use segbar_core::{ProviderKind, Thresholds};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::StoreError;

/// Bar configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Per-provider settings. Providers not listed use their defaults.
    pub providers: BTreeMap<ProviderKind, ProviderConfig>,
    /// Icon thresholds.
    pub thresholds: ThresholdConfig,
    /// Classify volume as headroom.
    pub invert_audio_load: bool,
    /// Directory holding icon assets.
    pub icons_dir: String,
    /// Tray settings.
    pub tray: TrayConfig,
    /// Launcher shortcuts.
    pub shortcuts: Vec<Shortcut>,
    /// Log level for the segbar crates.
    pub log_level: String,
}

/// Provider-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Whether the bar subscribes to this provider.
    pub enabled: bool,
    /// Refresh interval in milliseconds; `None` means event-driven.
    pub refresh_interval_ms: Option<u64>,
    /// Provider-specific format string (date provider).
    pub formatting: Option<String>,
}

/// Icon threshold triples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Volume thresholds.
    pub audio: Thresholds,
    /// Wireless signal thresholds.
    pub wifi: Thresholds,
}

/// Tray configuration.
///
/// Icon hashes are content hashes of the host's icon images, so the set of
/// non-actionable system entries differs per machine. It ships empty; list
/// the hashes to hide under `tray.excluded_icon_hashes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrayConfig {
    /// Icon hashes that are never shown.
    pub excluded_icon_hashes: HashSet<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_interval_ms: None,
            formatting: None,
        }
    }
}

impl ProviderConfig {
    /// Default settings for a provider.
    pub fn default_for(kind: ProviderKind) -> Self {
        let mut config = Self::default();
        match kind {
            ProviderKind::Date => config.formatting = Some("dd.MM — HH:mm".to_string()),
            ProviderKind::Network | ProviderKind::Cpu => config.refresh_interval_ms = Some(2000),
            ProviderKind::Memory => config.refresh_interval_ms = Some(4000),
            _ => {}
        }
        config
    }

    /// Refresh interval, if the provider polls.
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_ms.map(Duration::from_millis)
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            audio: Thresholds::AUDIO,
            wifi: Thresholds::WIFI,
        }
    }
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            providers: ProviderKind::all()
                .iter()
                .map(|kind| (*kind, ProviderConfig::default_for(*kind)))
                .collect(),
            thresholds: ThresholdConfig::default(),
            invert_audio_load: true,
            icons_dir: "./icons".to_string(),
            tray: TrayConfig::default(),
            shortcuts: Vec::new(),
            log_level: "warn".to_string(),
        }
    }
}

impl BarConfig {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("segbar")
            .join("config.json")
    }

    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from(&Self::default_path())
    }

    /// Loads configuration from a specific path.
    ///
    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: BarConfig = serde_json::from_str(&content)?;
        config.validate()?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Saves configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Checks values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), StoreError> {
        for (kind, provider) in &self.providers {
            if provider.refresh_interval_ms == Some(0) {
                return Err(StoreError::Config(format!(
                    "refresh_interval_ms for {kind} must be positive"
                )));
            }
        }
        let mut ids = HashSet::new();
        for shortcut in &self.shortcuts {
            if !ids.insert(shortcut.id.as_str()) {
                return Err(StoreError::Config(format!(
                    "duplicate shortcut id: {}",
                    shortcut.id
                )));
            }
        }
        Ok(())
    }

    /// Settings for a provider, falling back to its defaults.
    pub fn provider(&self, kind: ProviderKind) -> ProviderConfig {
        self.providers
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| ProviderConfig::default_for(kind))
    }

    /// Returns whether a provider is enabled.
    pub fn is_provider_enabled(&self, kind: ProviderKind) -> bool {
        self.provider(kind).enabled
    }

    /// Enabled providers in bar order.
    pub fn enabled_providers(&self) -> Vec<ProviderKind> {
        ProviderKind::all()
            .iter()
            .copied()
            .filter(|kind| self.is_provider_enabled(*kind))
            .collect()
    }

    /// Builds the rendering options for the view layer.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            audio_thresholds: self.thresholds.audio,
            wifi_thresholds: self.thresholds.wifi,
            invert_audio_load: self.invert_audio_load,
            icons_dir: self.icons_dir.clone(),
            tray_exclusions: self.tray.excluded_icon_hashes.clone(),
            shortcuts: self.shortcuts.clone(),
            ..ViewOptions::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BarConfig::default();
        assert_eq!(config.enabled_providers().len(), ProviderKind::all().len());
        assert_eq!(
            config.provider(ProviderKind::Cpu).refresh_interval(),
            Some(Duration::from_millis(2000))
        );
        assert_eq!(
            config.provider(ProviderKind::Memory).refresh_interval(),
            Some(Duration::from_millis(4000))
        );
        assert_eq!(config.provider(ProviderKind::Media).refresh_interval(), None);
        assert_eq!(
            config.provider(ProviderKind::Date).formatting.as_deref(),
            Some("dd.MM — HH:mm")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = BarConfig::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, BarConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("segbar").join("config.json");

        let mut config = BarConfig::default();
        config.icons_dir = "/usr/share/segbar/icons".to_string();
        config.tray.excluded_icon_hashes.insert("abc".to_string());
        config.save_to(&path).unwrap();

        let loaded = BarConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"providers": {"media": {"enabled": false}}, "thresholds": {"wifi": [10, 50, 80]}}"#,
        )
        .unwrap();

        let config = BarConfig::load_from(&path).unwrap();
        assert!(!config.is_provider_enabled(ProviderKind::Media));
        assert!(config.is_provider_enabled(ProviderKind::Cpu));
        assert_eq!(config.thresholds.wifi.values(), [10.0, 50.0, 80.0]);
        assert_eq!(config.thresholds.audio, Thresholds::AUDIO);
        assert!(!config.enabled_providers().contains(&ProviderKind::Media));
    }

    #[test]
    fn test_descending_thresholds_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"thresholds": {"audio": [66, 33, 5]}}"#).unwrap();
        assert!(BarConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let mut config = BarConfig::default();
        config.providers.insert(
            ProviderKind::Cpu,
            ProviderConfig {
                refresh_interval_ms: Some(0),
                ..ProviderConfig::default()
            },
        );
        assert!(matches!(config.validate(), Err(StoreError::Config(_))));
    }

    #[test]
    fn test_tray_exclusions_from_file() {
        use segbar_core::{AggregatedState, BarView};

        assert!(BarConfig::default().tray.excluded_icon_hashes.is_empty());

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"tray": {"excluded_icon_hashes": ["volume-hash"]}}"#).unwrap();
        let config = BarConfig::load_from(&path).unwrap();

        let state: AggregatedState = serde_json::from_str(
            r#"{"systray": {"icons": [
                {"id": "1", "tooltip": "Volume", "iconHash": "volume-hash"},
                {"id": "2", "tooltip": "Discord", "iconHash": "discord-hash"}
            ]}}"#,
        )
        .unwrap();
        let view = BarView::build(&state, &config.view_options());

        let ids: Vec<&str> = view
            .right
            .tray
            .as_ref()
            .unwrap()
            .icons
            .iter()
            .map(|icon| icon.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_view_options_follow_config() {
        let mut config = BarConfig::default();
        config.invert_audio_load = false;
        config.tray.excluded_icon_hashes.insert("hidden".to_string());

        let options = config.view_options();
        assert!(!options.invert_audio_load);
        assert!(options.tray_exclusions.contains("hidden"));
        assert_eq!(options.icons_dir, "./icons");
    }
}
