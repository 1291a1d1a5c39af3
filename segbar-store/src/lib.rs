// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # segbar Store
//!
//! Runtime state for the segbar status bar.
//!
//! - [`Aggregator`] merges provider snapshots and publishes the full state
//! - [`BarConfig`] loads and validates the JSON configuration
//! - [`ChannelSink`] forwards dispatched commands to an async consumer

pub mod aggregator;
pub mod commands;
pub mod config;
pub mod error;

pub use aggregator::{
    Aggregator, ProviderFeed, Revision, StateSubscription, DEFAULT_CHANNEL_CAPACITY,
};
pub use commands::{command_channel, ChannelSink};
pub use config::{BarConfig, ProviderConfig, ThresholdConfig, TrayConfig};
pub use error::StoreError;
