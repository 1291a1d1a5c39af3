//! Pointer event dispatch.
//!
//! Routes a pointer event on a bar item to at most one provider command.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::commands::ProviderCommand;
use crate::error::CoreError;
use crate::traits::{ClickTarget, CommandSink};

/// Physical pointer button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    /// Left button.
    #[default]
    Primary,
    /// Middle button / wheel press.
    Auxiliary,
    /// Right button.
    Secondary,
}

impl FromStr for PointerButton {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" | "left" => Ok(Self::Primary),
            "auxiliary" | "middle" => Ok(Self::Auxiliary),
            "secondary" | "right" => Ok(Self::Secondary),
            other => Err(CoreError::InvalidData(format!("unknown pointer button: {other}"))),
        }
    }
}

/// What kind of pointer event occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A button press on the item.
    #[default]
    Press,
    /// The host's context-menu event.
    ContextMenu,
}

/// A pointer event delivered to a bar item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PointerEvent {
    /// Button that produced the event.
    pub button: PointerButton,
    /// Whether shift was held.
    pub shift: bool,
    /// Event kind.
    pub kind: EventKind,
}

impl PointerEvent {
    /// A button press without modifiers.
    pub fn press(button: PointerButton) -> Self {
        Self {
            button,
            shift: false,
            kind: EventKind::Press,
        }
    }

    /// A context-menu event.
    pub fn context_menu() -> Self {
        Self {
            button: PointerButton::Secondary,
            shift: false,
            kind: EventKind::ContextMenu,
        }
    }

    /// Sets the shift modifier.
    #[must_use]
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }
}

/// Result of dispatching one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The command was handed to the sink.
    Sent(ProviderCommand),
    /// Shift was held; nothing was dispatched.
    Suppressed,
    /// The event maps to no action on this item.
    Ignored,
}

/// Event handler bound to one clickable item.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a, T: ClickTarget + ?Sized> {
    target: &'a T,
    has_custom_handler: bool,
}

impl<'a, T: ClickTarget + ?Sized> Dispatcher<'a, T> {
    /// Creates the handler for `target`.
    ///
    /// `has_custom_handler` marks items whose secondary button is handled
    /// here, so the host's own context menu must not also open.
    pub fn for_item(target: &'a T, has_custom_handler: bool) -> Self {
        Self {
            target,
            has_custom_handler,
        }
    }

    /// Resolves the command an event would produce, without sending it.
    pub fn resolve(&self, event: &PointerEvent) -> DispatchOutcome {
        if event.shift {
            return DispatchOutcome::Suppressed;
        }
        if event.kind == EventKind::ContextMenu {
            return DispatchOutcome::Ignored;
        }

        let command = match event.button {
            PointerButton::Primary => self.target.on_left_click(),
            PointerButton::Auxiliary => self.target.on_middle_click(),
            PointerButton::Secondary => self.target.on_right_click(),
        };
        command.map_or(DispatchOutcome::Ignored, DispatchOutcome::Sent)
    }

    /// Dispatches an event, sending at most one command.
    pub fn dispatch(&self, event: &PointerEvent, sink: &dyn CommandSink) -> DispatchOutcome {
        let outcome = self.resolve(event);
        match &outcome {
            DispatchOutcome::Sent(command) => {
                debug!(target_id = self.target.target_id(), %command, "Dispatching command");
                sink.send(command.clone());
            }
            DispatchOutcome::Suppressed => {
                debug!(target_id = self.target.target_id(), "Shift held, dispatch suppressed");
            }
            DispatchOutcome::Ignored => {}
        }
        outcome
    }

    /// Returns true if the host's default handling of `event` must be prevented.
    ///
    /// Shift-modified events always pass through to the host.
    pub fn prevents_context_menu(&self, event: &PointerEvent) -> bool {
        self.has_custom_handler && event.kind == EventKind::ContextMenu && !event.shift
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrayIcon;
    use crate::traits::RecordingSink;

    fn tray_icon() -> TrayIcon {
        TrayIcon {
            id: "icon-7".to_string(),
            tooltip: "Discord".to_string(),
            icon_url: String::new(),
            icon_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_shift_click_sends_nothing() {
        let icon = tray_icon();
        let sink = RecordingSink::new();
        let dispatcher = Dispatcher::for_item(&icon, true);

        for button in [
            PointerButton::Primary,
            PointerButton::Auxiliary,
            PointerButton::Secondary,
        ] {
            let outcome = dispatcher.dispatch(&PointerEvent::press(button).with_shift(true), &sink);
            assert_eq!(outcome, DispatchOutcome::Suppressed);
        }
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_primary_click_sends_left_click() {
        let icon = tray_icon();
        let sink = RecordingSink::new();
        let dispatcher = Dispatcher::for_item(&icon, true);

        dispatcher.dispatch(&PointerEvent::press(PointerButton::Primary), &sink);

        assert_eq!(
            sink.commands(),
            vec![ProviderCommand::TrayLeftClick {
                icon_id: "icon-7".to_string()
            }]
        );
    }

    #[test]
    fn test_each_button_maps_to_one_action() {
        let icon = tray_icon();
        let sink = RecordingSink::new();
        let dispatcher = Dispatcher::for_item(&icon, true);

        dispatcher.dispatch(&PointerEvent::press(PointerButton::Auxiliary), &sink);
        dispatcher.dispatch(&PointerEvent::press(PointerButton::Secondary), &sink);

        assert_eq!(
            sink.take(),
            vec![
                ProviderCommand::TrayMiddleClick {
                    icon_id: "icon-7".to_string()
                },
                ProviderCommand::TrayRightClick {
                    icon_id: "icon-7".to_string()
                },
            ]
        );
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_context_menu_prevention() {
        let icon = tray_icon();
        let sink = RecordingSink::new();

        let custom = Dispatcher::for_item(&icon, true);
        assert!(custom.prevents_context_menu(&PointerEvent::context_menu()));
        assert!(!custom.prevents_context_menu(&PointerEvent::context_menu().with_shift(true)));
        assert!(!custom.prevents_context_menu(&PointerEvent::press(PointerButton::Secondary)));
        assert_eq!(
            custom.dispatch(&PointerEvent::context_menu(), &sink),
            DispatchOutcome::Ignored
        );

        let plain = Dispatcher::for_item(&icon, false);
        assert!(!plain.prevents_context_menu(&PointerEvent::context_menu()));
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_unbound_button_is_ignored() {
        struct LeftOnly;
        impl ClickTarget for LeftOnly {
            fn target_id(&self) -> &str {
                "left-only"
            }
            fn on_left_click(&self) -> Option<ProviderCommand> {
                Some(ProviderCommand::TogglePlayPause)
            }
        }

        let sink = RecordingSink::new();
        let dispatcher = Dispatcher::for_item(&LeftOnly, false);
        assert_eq!(
            dispatcher.dispatch(&PointerEvent::press(PointerButton::Secondary), &sink),
            DispatchOutcome::Ignored
        );
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_button_parsing() {
        assert_eq!("left".parse::<PointerButton>().unwrap(), PointerButton::Primary);
        assert_eq!("Middle".parse::<PointerButton>().unwrap(), PointerButton::Auxiliary);
        assert_eq!("secondary".parse::<PointerButton>().unwrap(), PointerButton::Secondary);
        assert!("fourth".parse::<PointerButton>().is_err());
    }
}
