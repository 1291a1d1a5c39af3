// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # segbar Core
//!
//! Core types, derivation rules, and dispatch for the segbar status bar.
//!
//! This crate is pure and synchronous. It provides:
//!
//! - Domain models (provider kinds, typed snapshots, the aggregated state)
//! - Derivation rules (load classes, icon tiers, byte and label formatting)
//! - The workspace reconciler
//! - Provider commands and the pointer-event dispatcher
//! - Segment view-models built from one aggregated state
//!
//! ## Key Types
//!
//! ### State
//! - [`ProviderKind`] - The providers a bar subscribes to
//! - [`ProviderSnapshot`] - One provider's latest output
//! - [`AggregatedState`] - Every provider's latest output
//!
//! ### Derivation
//! - [`classify_load`] / [`LoadLevel`] - Percentage to load class
//! - [`select_tier`] / [`IconTier`] - Value to one of four icon variants
//! - [`reconcile`] / [`WorkspaceStrip`] - Annotated workspace list
//!
//! ### Interaction
//! - [`Dispatcher`] - Pointer event to provider command
//! - [`ProviderCommand`] - Commands a provider accepts
//! - [`CommandSink`] - Where commands go

pub mod commands;
pub mod derivation;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod traits;
pub mod view;
pub mod workspaces;

// Re-export error types
pub use error::CoreError;

// Re-export model types
pub use models::{
    AggregatedState, AudioDevice, AudioOutput, CpuOutput, DataRate, DataSize, DateOutput, Disk,
    DiskOutput, FocusedContainer, Gateway, GlazeWmOutput, InterfaceKind, MediaOutput,
    MediaSession, MemoryOutput, Monitor, NetworkInterface, NetworkOutput, NetworkTraffic,
    ProviderKind, ProviderSnapshot, SystrayOutput, TrayIcon, Workspace,
};

// Re-export derivation and interaction
pub use commands::ProviderCommand;
pub use derivation::{
    classify_load, clean_process_name, format_gb, format_percent, select_tier, used_percent,
    IconTier, LoadLevel, Thresholds,
};
pub use dispatch::{DispatchOutcome, Dispatcher, EventKind, PointerButton, PointerEvent};
pub use traits::{ClickTarget, CommandSink, RecordingSink};
pub use view::{BarView, Flyout, ViewOptions};
pub use workspaces::{reconcile, WorkspaceEntry, WorkspaceState, WorkspaceStrip};
