//! Trait definitions for segbar.
//!
//! These are the seams between the bar core and its host: where commands
//! leave the core, and what a clickable item must provide.

use std::sync::Mutex;

use crate::commands::ProviderCommand;

/// Destination for provider commands.
///
/// Sending never blocks and never reports completion.
pub trait CommandSink: Send + Sync {
    /// Hands a command to its provider.
    fn send(&self, command: ProviderCommand);
}

/// An item that reacts to pointer buttons.
///
/// Each method returns the command for that button, or `None` when the
/// item has no action bound to it.
pub trait ClickTarget {
    /// Identifier of the item, used in logs and command parameters.
    fn target_id(&self) -> &str;

    /// Command for the primary button.
    fn on_left_click(&self) -> Option<ProviderCommand>;

    /// Command for the middle button.
    fn on_middle_click(&self) -> Option<ProviderCommand> {
        None
    }

    /// Command for the secondary button.
    fn on_right_click(&self) -> Option<ProviderCommand> {
        None
    }
}

/// A sink that keeps every command it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    commands: Mutex<Vec<ProviderCommand>>,
}

impl RecordingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the commands received so far.
    pub fn commands(&self) -> Vec<ProviderCommand> {
        self.commands
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Removes and returns the commands received so far.
    pub fn take(&self) -> Vec<ProviderCommand> {
        self.commands
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }
}

impl CommandSink for RecordingSink {
    fn send(&self, command: ProviderCommand) {
        if let Ok(mut guard) = self.commands.lock() {
            guard.push(command);
        }
    }
}
