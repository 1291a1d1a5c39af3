//! View-model derivation rules.
//!
//! Pure functions that turn raw provider fields into bounded display
//! categories: load classes, icon tiers, and formatted quantities.
//! None of them can fail; degenerate input maps to a fallback.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::models::DataRate;

/// Bytes per gigabyte (binary).
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Shown in place of a number that cannot be computed.
pub const UNKNOWN_VALUE: &str = "--";

/// Shown when the focused window has no process name.
pub const UNKNOWN_PROCESS: &str = "Unknown";

// ============================================================================
// Load Level
// ============================================================================

/// Load class derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadLevel {
    /// Below 30%.
    Low,
    /// 30% up to 65%.
    Medium,
    /// 65% up to 90%.
    High,
    /// 90% and above.
    Extreme,
}

impl LoadLevel {
    /// Returns the style class for this level.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "load-low",
            Self::Medium => "load-medium",
            Self::High => "load-high",
            Self::Extreme => "load-extreme",
        }
    }

    /// Returns all levels in ascending order.
    pub fn all() -> &'static [LoadLevel] {
        &[Self::Low, Self::Medium, Self::High, Self::Extreme]
    }
}

impl std::fmt::Display for LoadLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Classifies a percentage into a [`LoadLevel`].
///
/// With `invert` the value is treated as headroom (`100 - percent`).
/// Each lower bound is inclusive: exactly 30 is [`LoadLevel::Medium`].
pub fn classify_load(percent: f64, invert: bool) -> LoadLevel {
    let load = if invert { 100.0 - percent } else { percent };

    if load < 30.0 {
        LoadLevel::Low
    } else if load < 65.0 {
        LoadLevel::Medium
    } else if load < 90.0 {
        LoadLevel::High
    } else {
        LoadLevel::Extreme
    }
}

// ============================================================================
// Icon Tier
// ============================================================================

/// One of four discrete icon variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum IconTier {
    /// Below the first threshold (fallback variant).
    Zero = 0,
    /// At or above the first threshold.
    One = 1,
    /// At or above the second threshold.
    Two = 2,
    /// At or above the third threshold.
    Three = 3,
}

impl IconTier {
    /// Numeric index, 0 through 3.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Asset file suffix, `00` through `03`.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Zero => "00",
            Self::One => "01",
            Self::Two => "02",
            Self::Three => "03",
        }
    }
}

/// Selects an icon tier by comparing `value` against an ascending triple.
pub fn select_tier(value: f64, thresholds: [f64; 3]) -> IconTier {
    let [t0, t1, t2] = thresholds;
    if value >= t2 {
        IconTier::Three
    } else if value >= t1 {
        IconTier::Two
    } else if value >= t0 {
        IconTier::One
    } else {
        IconTier::Zero
    }
}

/// A validated ascending threshold triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 3]", into = "[f64; 3]")]
pub struct Thresholds([f64; 3]);

impl Thresholds {
    /// Volume thresholds.
    pub const AUDIO: Thresholds = Thresholds([5.0, 33.0, 66.0]);
    /// Wireless signal thresholds.
    pub const WIFI: Thresholds = Thresholds([5.0, 45.0, 75.0]);

    /// Creates a triple, rejecting non-ascending or non-finite values.
    pub fn new(t0: f64, t1: f64, t2: f64) -> Result<Self, CoreError> {
        if !(t0.is_finite() && t1.is_finite() && t2.is_finite()) || t0 > t1 || t1 > t2 {
            return Err(CoreError::InvalidData(format!(
                "thresholds must be finite and ascending, got [{t0}, {t1}, {t2}]"
            )));
        }
        Ok(Self([t0, t1, t2]))
    }

    /// Returns the raw triple.
    pub fn values(&self) -> [f64; 3] {
        self.0
    }

    /// Selects the tier for `value`.
    pub fn tier(&self, value: f64) -> IconTier {
        select_tier(value, self.0)
    }
}

impl TryFrom<[f64; 3]> for Thresholds {
    type Error = CoreError;

    fn try_from(value: [f64; 3]) -> Result<Self, Self::Error> {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Thresholds> for [f64; 3] {
    fn from(value: Thresholds) -> Self {
        value.0
    }
}

/// Builds an icon asset path: `<dir>/<name>-<NN>.<ext>`.
pub fn icon_path(dir: &str, name: &str, tier: IconTier, ext: &str) -> String {
    format!("{}/{}-{}.{}", dir.trim_end_matches('/'), name, tier.suffix(), ext)
}

// ============================================================================
// Quantities
// ============================================================================

/// Converts bytes to binary gigabytes.
#[allow(clippy::cast_precision_loss)]
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Formats bytes as gigabytes with one decimal, e.g. `60.0`.
pub fn format_gb(bytes: u64) -> String {
    format!("{:.1}", bytes_to_gb(bytes))
}

/// Used percentage of a capacity, floored.
///
/// Returns `None` for a zero or absent total.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn used_percent(total: Option<u64>, available: Option<u64>) -> Option<u32> {
    let total = total.filter(|t| *t > 0)?;
    let used = total.saturating_sub(available.unwrap_or(0));
    Some(((used as f64 / total as f64) * 100.0).floor() as u32)
}

/// Zero-pads a percentage to two digits, or [`UNKNOWN_VALUE`].
pub fn format_percent(percent: Option<u32>) -> String {
    match percent {
        Some(p) => format!("{p:02}"),
        None => UNKNOWN_VALUE.to_string(),
    }
}

/// Floors a raw percentage reading into a whole number.
///
/// Non-finite or negative readings are treated as unknown.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn floor_percent(value: Option<f64>) -> Option<u32> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.floor() as u32)
}

/// Formats a transfer rate as `1.2 MiB/s`, or [`UNKNOWN_VALUE`].
pub fn format_rate(rate: Option<&DataRate>) -> String {
    match rate {
        Some(r) if r.iec_value.is_finite() => format!("{:.1} {}/s", r.iec_value, r.iec_unit),
        _ => UNKNOWN_VALUE.to_string(),
    }
}

// ============================================================================
// Labels
// ============================================================================

/// Cleans an executable name into a window label.
///
/// Strips a trailing `.exe` (any case), trims whitespace, and capitalizes
/// the first character. Missing or blank names become [`UNKNOWN_PROCESS`].
pub fn clean_process_name(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_PROCESS.to_string();
    };

    let mut name = raw.trim();
    let len = name.len();
    if len >= 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".exe")
    {
        name = name[..len - 4].trim_end();
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => UNKNOWN_PROCESS.to_string(),
    }
}

/// Display label for a mount point: the trailing backslash is dropped.
pub fn disk_label(mount_point: &str) -> &str {
    mount_point.strip_suffix('\\').unwrap_or(mount_point)
}

// ============================================================================
// Tests
// ============================================================================
