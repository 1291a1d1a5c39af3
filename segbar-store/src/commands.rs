//! Channel-backed command sink.

use segbar_core::{CommandSink, ProviderCommand};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Forwards dispatched commands to an async consumer.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<ProviderCommand>,
}

impl ChannelSink {
    /// Wraps an existing sender.
    pub fn new(tx: mpsc::UnboundedSender<ProviderCommand>) -> Self {
        Self { tx }
    }
}

impl CommandSink for ChannelSink {
    fn send(&self, command: ProviderCommand) {
        debug!(%command, "Forwarding command");
        if self.tx.send(command).is_err() {
            warn!("Command receiver dropped");
        }
    }
}

/// Creates a sink and the receiver its commands arrive on.
pub fn command_channel() -> (ChannelSink, mpsc::UnboundedReceiver<ProviderCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelSink::new(tx), rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_commands_arrive_in_order() {
        let (sink, mut rx) = command_channel();
        sink.send(ProviderCommand::TogglePlayPause);
        sink.send(ProviderCommand::focus_workspace("3"));

        assert_eq!(rx.recv().await, Some(ProviderCommand::TogglePlayPause));
        assert_eq!(rx.recv().await, Some(ProviderCommand::focus_workspace("3")));
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (sink, rx) = command_channel();
        drop(rx);
        sink.send(ProviderCommand::TogglePlayPause);
    }
}
