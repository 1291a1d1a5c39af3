//! Domain models for segbar.
//!
//! ## Submodules
//!
//! - [`provider`] - Provider identity (ProviderKind, ProviderSnapshot)
//! - [`state`] - The merged AggregatedState
//! - [`glazewm`] - Window-manager output (Workspace, Monitor)
//! - [`media`] - Media-session output
//! - [`tray`] - Tray icons
//! - [`system`] - Date, audio, network, disk, CPU, memory outputs

pub mod glazewm;
pub mod media;
pub mod provider;
mod serde_util;
pub mod state;
pub mod system;
pub mod tray;

pub use glazewm::{FocusedContainer, GlazeWmOutput, Monitor, Workspace};
pub use media::{MediaOutput, MediaSession, UNKNOWN_ARTIST, UNKNOWN_TRACK};
pub use provider::{ProviderKind, ProviderSnapshot};
pub use state::AggregatedState;
pub use system::{
    AudioDevice, AudioOutput, CpuOutput, DataRate, DataSize, DateOutput, Disk, DiskOutput,
    Gateway, InterfaceKind, MemoryOutput, NetworkInterface, NetworkOutput, NetworkTraffic,
};
pub use tray::{SystrayOutput, TrayIcon};
