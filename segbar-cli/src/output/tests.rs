//! CLI output formatting tests.
//!
//! These tests verify that bar frames and click results are formatted
//! correctly for both text and JSON output modes.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::TextFormatter;
    use super::super::ClickOutput;
    use segbar_core::{AggregatedState, BarView, LoadLevel, ProviderCommand, ViewOptions};

    const STATE: &str = r#"{
        "date": {"formatted": "14.10 — 21:05"},
        "glazewm": {
            "allWorkspaces": [
                {"name": "2", "displayName": "2"},
                {"name": "1", "displayName": "1"}
            ],
            "currentWorkspaces": [
                {"name": "1", "displayName": "1"},
                {"name": "2", "displayName": "2"}
            ],
            "displayedWorkspace": {"name": "1", "displayName": "1"},
            "focusedContainer": {"processName": "explorer.exe"},
            "isPaused": false
        },
        "cpu": {"usage": 95.2},
        "disk": {"disks": [{"mountPoint": "D:\\"}]}
    }"#;

    fn view() -> BarView {
        let state: AggregatedState = serde_json::from_str(STATE).unwrap();
        BarView::build(&state, &ViewOptions::default())
    }

    #[test]
    fn test_bar_without_colors() {
        let formatter = TextFormatter::new(false);
        let text = formatter.format_bar(&view());

        assert!(!text.contains('\x1b'));
        assert!(text.contains("Lock:        active"));
        assert!(text.contains("Date:        14.10 — 21:05"));
        assert!(text.contains("1: ◎ 2: ●  | 1"));
        assert!(text.contains("Window:      Explorer"));
        assert!(text.contains("CPU:         [95%]"));
        assert!(text.contains("Disk D::     [0.0G/0.0G] [--%]"));
    }

    #[test]
    fn test_empty_state() {
        let formatter = TextFormatter::new(false);
        let view = BarView::build(&AggregatedState::new(), &ViewOptions::default());
        assert_eq!(formatter.format_bar(&view), "No provider data");
    }

    #[test]
    fn test_load_colors() {
        let formatter = TextFormatter::new(true);
        assert!(formatter.color_for_load(Some(LoadLevel::Low), "x").contains("\x1b[32m"));
        assert!(formatter.color_for_load(Some(LoadLevel::Medium), "x").contains("\x1b[33m"));
        assert!(formatter.color_for_load(Some(LoadLevel::High), "x").contains("\x1b[31m"));
        let extreme = formatter.color_for_load(Some(LoadLevel::Extreme), "x");
        assert!(extreme.contains("\x1b[1m") && extreme.contains("\x1b[31m"));
        assert_eq!(formatter.color_for_load(None, "[--%]"), "[--%]");
    }

    #[test]
    fn test_colors_disabled() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.color_for_load(Some(LoadLevel::Extreme), "[99%]"), "[99%]");
    }

    #[test]
    fn test_click_sent() {
        let formatter = TextFormatter::new(false);
        let click = ClickOutput {
            segment: "workspace".to_string(),
            target_id: "2".to_string(),
            outcome: "sent".to_string(),
            provider: Some("glazewm".to_string()),
            command: Some(ProviderCommand::focus_workspace("2")),
            context_menu_prevented: false,
            flyout_open: None,
        };
        assert_eq!(
            formatter.format_click(&click),
            r#"Sent: glazewm.runCommand("focus --workspace 2")"#
        );
    }

    #[test]
    fn test_click_suppressed() {
        let formatter = TextFormatter::new(false);
        let click = ClickOutput {
            segment: "tray".to_string(),
            target_id: "icon-1".to_string(),
            outcome: "suppressed".to_string(),
            provider: None,
            command: None,
            context_menu_prevented: false,
            flyout_open: None,
        };
        assert_eq!(formatter.format_click(&click), "suppressed (icon-1)");
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::JsonFormatter;
    use segbar_core::{AggregatedState, BarView, ViewOptions};

    #[test]
    fn test_bar_view_json_shape() {
        let state: AggregatedState =
            serde_json::from_str(r#"{"cpu": {"usage": 12.9}, "media": {}}"#).unwrap();
        let view = BarView::build(&state, &ViewOptions::default());

        let json = JsonFormatter::new(false).format(&view).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["right"]["cpu"]["text"], "[12%]");
        assert_eq!(value["right"]["cpu"]["load"], "low");
        assert_eq!(value["center"]["segment"], "empty");
        assert!(value["left"]["lock"].is_null());
    }
}
