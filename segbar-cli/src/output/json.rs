//! JSON output formatting.

use anyhow::Result;
use segbar_core::ProviderCommand;
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// Result of the click command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickOutput {
    pub segment: String,
    pub target_id: String,
    /// `sent`, `suppressed`, `ignored`, or `toggled` for local flyouts.
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<ProviderCommand>,
    pub context_menu_prevented: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flyout_open: Option<bool>,
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pretty() {
        let formatter = JsonFormatter::new(true);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact() {
        let formatter = JsonFormatter::new(false);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_click_output_skips_empty_fields() {
        let formatter = JsonFormatter::new(false);
        let output = ClickOutput {
            segment: "lock".to_string(),
            target_id: "lock".to_string(),
            outcome: "suppressed".to_string(),
            provider: None,
            command: None,
            context_menu_prevented: false,
            flyout_open: None,
        };
        let json = formatter.format(&output).unwrap();
        assert!(json.contains(r#""targetId":"lock""#));
        assert!(!json.contains("command"));
        assert!(!json.contains("flyoutOpen"));
    }
}
