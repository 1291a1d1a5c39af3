//! Provider output aggregator.
//!
//! Providers push snapshots through their [`ProviderFeed`] into one mpsc
//! channel. A single task owns the [`AggregatedState`], replaces the
//! reporting provider's entry, and republishes the whole state through a
//! watch channel before it receives the next snapshot.

use chrono::{DateTime, Utc};
use segbar_core::{AggregatedState, ProviderKind, ProviderSnapshot};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::BarConfig;
use crate::error::StoreError;

/// Capacity of the provider → aggregator channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

// ============================================================================
// Published State
// ============================================================================

/// One published state and its version.
#[derive(Debug, Clone, Default)]
pub struct Revision {
    /// Incremented on every publish; 0 is the initial empty state.
    pub version: u64,
    /// The full state at this version.
    pub state: Arc<AggregatedState>,
}

/// Consumer handle for published states.
#[derive(Debug, Clone)]
pub struct StateSubscription {
    rx: watch::Receiver<Revision>,
}

impl StateSubscription {
    /// Returns the latest published state.
    pub fn current(&self) -> Arc<AggregatedState> {
        self.rx.borrow().state.clone()
    }

    /// Returns the latest published version.
    pub fn version(&self) -> u64 {
        self.rx.borrow().version
    }

    /// Waits for the next publish and returns that state.
    ///
    /// Fails with [`StoreError::Closed`] once the aggregator is gone.
    pub async fn changed(&mut self) -> Result<Revision, StoreError> {
        self.rx.changed().await.map_err(|_| StoreError::Closed)?;
        Ok(self.rx.borrow_and_update().clone())
    }
}

// ============================================================================
// Provider Feed
// ============================================================================

/// A provider's registration with the aggregator.
///
/// Emissions on one feed are applied in order.
#[derive(Debug, Clone)]
pub struct ProviderFeed {
    kind: ProviderKind,
    refresh_interval: Option<Duration>,
    tx: mpsc::Sender<ProviderSnapshot>,
}

impl ProviderFeed {
    /// The provider this feed belongs to.
    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// The provider's configured refresh interval; `None` when event-driven.
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval
    }

    /// Returns true once the aggregator has been torn down.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Emits a snapshot.
    pub async fn emit(&self, snapshot: ProviderSnapshot) -> Result<(), StoreError> {
        if snapshot.kind() != self.kind {
            return Err(StoreError::KindMismatch {
                expected: self.kind,
                actual: snapshot.kind(),
            });
        }
        self.tx.send(snapshot).await.map_err(|_| StoreError::Closed)
    }
}

// ============================================================================
// Aggregator
// ============================================================================

/// Owns the merged provider state.
///
/// Lifecycle: [`Aggregator::new`], [`Aggregator::register`] per provider,
/// [`Aggregator::init`] to start the task, [`Aggregator::teardown`] to stop.
pub struct Aggregator {
    config: BarConfig,
    tx: mpsc::Sender<ProviderSnapshot>,
    rx: Option<mpsc::Receiver<ProviderSnapshot>>,
    publisher: watch::Sender<Revision>,
    registered: RwLock<HashSet<ProviderKind>>,
    updated_at: Arc<RwLock<HashMap<ProviderKind, DateTime<Utc>>>>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(BarConfig::default())
    }
}

impl Aggregator {
    /// Creates an aggregator. Nothing runs until [`Aggregator::init`].
    pub fn new(config: BarConfig) -> Self {
        let (tx, rx) = mpsc::channel(DEFAULT_CHANNEL_CAPACITY);
        let (publisher, _) = watch::channel(Revision::default());
        Self {
            config,
            tx,
            rx: Some(rx),
            publisher,
            registered: RwLock::new(HashSet::new()),
            updated_at: Arc::new(RwLock::new(HashMap::new())),
            shutdown: None,
            task: None,
        }
    }

    /// The configuration this aggregator was built with.
    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Registers a provider and returns its feed.
    pub async fn register(&self, kind: ProviderKind) -> Result<ProviderFeed, StoreError> {
        if !self.config.is_provider_enabled(kind) {
            return Err(StoreError::ProviderNotEnabled(kind));
        }
        if self.tx.is_closed() {
            return Err(StoreError::Closed);
        }

        let mut registered = self.registered.write().await;
        if !registered.insert(kind) {
            warn!(provider = ?kind, "Provider registered twice");
            return Err(StoreError::AlreadyRegistered(kind));
        }

        let refresh_interval = self.config.provider(kind).refresh_interval();
        debug!(provider = ?kind, ?refresh_interval, "Provider registered");
        Ok(ProviderFeed {
            kind,
            refresh_interval,
            tx: self.tx.clone(),
        })
    }

    /// Registers every enabled provider.
    pub async fn register_enabled(&self) -> Result<Vec<ProviderFeed>, StoreError> {
        let mut feeds = Vec::new();
        for kind in self.config.enabled_providers() {
            feeds.push(self.register(kind).await?);
        }
        Ok(feeds)
    }

    /// Providers with a live registration.
    pub async fn registered(&self) -> HashSet<ProviderKind> {
        self.registered.read().await.clone()
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Starts the aggregator task. Must be called within a Tokio runtime.
    pub fn init(&mut self) -> Result<(), StoreError> {
        let Some(mut rx) = self.rx.take() else {
            return Err(if self.task.is_some() {
                StoreError::AlreadyStarted
            } else {
                StoreError::Closed
            });
        };

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let publisher = self.publisher.clone();
        let updated_at = self.updated_at.clone();

        let task = tokio::spawn(async move {
            let mut state = publisher.borrow().state.clone();
            let mut version = publisher.borrow().version;

            loop {
                let snapshot = tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    next = rx.recv() => match next {
                        Some(snapshot) => snapshot,
                        None => break,
                    },
                };

                let kind = snapshot.kind();
                state = Arc::new(state.with_snapshot(snapshot));
                version += 1;
                updated_at.write().await.insert(kind, Utc::now());

                publisher.send_replace(Revision {
                    version,
                    state: state.clone(),
                });
                debug!(provider = ?kind, version, "State published");
            }

            rx.close();
            debug!("Aggregator task stopped");
        });

        self.shutdown = Some(shutdown_tx);
        self.task = Some(task);
        info!("Aggregator started");
        Ok(())
    }

    /// Returns true while the task is running.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stops the task and releases every registration.
    ///
    /// Returns the number of registrations released. After this returns,
    /// no further state is published and every feed reports closed.
    pub async fn teardown(&mut self) -> usize {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                warn!(error = %e, "Aggregator task ended abnormally");
            }
        }
        // Never started: dropping the receiver closes every feed.
        self.rx = None;

        let released = {
            let mut registered = self.registered.write().await;
            let count = registered.len();
            registered.clear();
            count
        };
        info!(released, "Aggregator torn down");
        released
    }

    // ========================================================================
    // Observable
    // ========================================================================

    /// Returns the latest published state.
    pub fn current(&self) -> Arc<AggregatedState> {
        self.publisher.borrow().state.clone()
    }

    /// Returns the latest published version.
    pub fn version(&self) -> u64 {
        self.publisher.borrow().version
    }

    /// Subscribes to future publishes.
    pub fn subscribe(&self) -> StateSubscription {
        StateSubscription {
            rx: self.publisher.subscribe(),
        }
    }

    // ========================================================================
    // Staleness
    // ========================================================================

    /// Gets the age of a provider's latest snapshot.
    pub async fn snapshot_age(&self, kind: ProviderKind) -> Option<chrono::Duration> {
        self.updated_at
            .read()
            .await
            .get(&kind)
            .map(|t| Utc::now().signed_duration_since(*t))
    }

    /// Checks if a provider's data is older than `threshold`.
    ///
    /// A provider that never reported is stale.
    pub async fn is_stale(&self, kind: ProviderKind, threshold: Duration) -> bool {
        match self.snapshot_age(kind).await {
            Some(age) => {
                age > chrono::Duration::from_std(threshold).unwrap_or(chrono::Duration::MAX)
            }
            None => true,
        }
    }

    /// Polling providers whose data is older than twice their interval.
    ///
    /// Event-driven providers only count once they are missing entirely.
    pub async fn stale_providers(&self) -> Vec<ProviderKind> {
        let registered = self.registered().await;
        let mut stale = Vec::new();
        for kind in self.config.enabled_providers() {
            if !registered.contains(&kind) {
                continue;
            }
            let is_stale = match self.config.provider(kind).refresh_interval() {
                Some(interval) => self.is_stale(kind, interval * 2).await,
                None => self.snapshot_age(kind).await.is_none(),
            };
            if is_stale {
                stale.push(kind);
            }
        }
        stale
    }
}

impl Drop for Aggregator {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
