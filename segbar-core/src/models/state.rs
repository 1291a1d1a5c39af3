//! The merged view over every provider's latest snapshot.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::warn;

use crate::models::glazewm::GlazeWmOutput;
use crate::models::media::MediaOutput;
use crate::models::provider::{ProviderKind, ProviderSnapshot};
use crate::models::system::{
    AudioOutput, CpuOutput, DateOutput, DiskOutput, MemoryOutput, NetworkOutput,
};
use crate::models::tray::SystrayOutput;

/// Latest snapshot of every provider that has reported.
///
/// A provider that has not emitted yet is simply absent. Values are
/// immutable; merging produces a new state via [`AggregatedState::with_snapshot`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedState {
    snapshots: BTreeMap<ProviderKind, Arc<ProviderSnapshot>>,
}

impl AggregatedState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new state with `snapshot` replacing its provider's entry.
    ///
    /// Every other provider's entry is carried over unchanged.
    #[must_use]
    pub fn with_snapshot(&self, snapshot: ProviderSnapshot) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.insert(snapshot.kind(), Arc::new(snapshot));
        Self { snapshots }
    }

    /// Returns a new state without `kind`'s entry.
    #[must_use]
    pub fn without(&self, kind: ProviderKind) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.remove(&kind);
        Self { snapshots }
    }

    /// Gets the snapshot for a provider.
    pub fn get(&self, kind: ProviderKind) -> Option<&ProviderSnapshot> {
        self.snapshots.get(&kind).map(Arc::as_ref)
    }

    /// Returns true if the provider has reported.
    pub fn contains(&self, kind: ProviderKind) -> bool {
        self.snapshots.contains_key(&kind)
    }

    /// Returns the providers that have reported.
    pub fn kinds(&self) -> impl Iterator<Item = ProviderKind> + '_ {
        self.snapshots.keys().copied()
    }

    /// Number of providers that have reported.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if no provider has reported.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    // ========================================================================
    // Typed accessors
    // ========================================================================

    /// Date output, if reported.
    pub fn date(&self) -> Option<&DateOutput> {
        match self.get(ProviderKind::Date)? {
            ProviderSnapshot::Date(o) => Some(o),
            _ => None,
        }
    }

    /// Window manager output, if reported.
    pub fn glazewm(&self) -> Option<&GlazeWmOutput> {
        match self.get(ProviderKind::GlazeWm)? {
            ProviderSnapshot::GlazeWm(o) => Some(o),
            _ => None,
        }
    }

    /// Media output, if reported.
    pub fn media(&self) -> Option<&MediaOutput> {
        match self.get(ProviderKind::Media)? {
            ProviderSnapshot::Media(o) => Some(o),
            _ => None,
        }
    }

    /// Tray output, if reported.
    pub fn systray(&self) -> Option<&SystrayOutput> {
        match self.get(ProviderKind::Systray)? {
            ProviderSnapshot::Systray(o) => Some(o),
            _ => None,
        }
    }

    /// Audio output, if reported.
    pub fn audio(&self) -> Option<&AudioOutput> {
        match self.get(ProviderKind::Audio)? {
            ProviderSnapshot::Audio(o) => Some(o),
            _ => None,
        }
    }

    /// Network output, if reported.
    pub fn network(&self) -> Option<&NetworkOutput> {
        match self.get(ProviderKind::Network)? {
            ProviderSnapshot::Network(o) => Some(o),
            _ => None,
        }
    }

    /// Disk output, if reported.
    pub fn disk(&self) -> Option<&DiskOutput> {
        match self.get(ProviderKind::Disk)? {
            ProviderSnapshot::Disk(o) => Some(o),
            _ => None,
        }
    }

    /// CPU output, if reported.
    pub fn cpu(&self) -> Option<&CpuOutput> {
        match self.get(ProviderKind::Cpu)? {
            ProviderSnapshot::Cpu(o) => Some(o),
            _ => None,
        }
    }

    /// Memory output, if reported.
    pub fn memory(&self) -> Option<&MemoryOutput> {
        match self.get(ProviderKind::Memory)? {
            ProviderSnapshot::Memory(o) => Some(o),
            _ => None,
        }
    }
}

// ============================================================================
// Serialization: { "<provider>": <output>, ... }
// ============================================================================

impl Serialize for AggregatedState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut outputs = BTreeMap::new();
        for (kind, snapshot) in &self.snapshots {
            let value = snapshot.output_value().map_err(serde::ser::Error::custom)?;
            outputs.insert(kind.cli_name(), value);
        }
        outputs.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AggregatedState {
    /// Entries with an unknown provider name or a malformed output are
    /// skipped so one bad provider cannot hide the others.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut state = AggregatedState::new();
        for (name, output) in raw {
            let kind = match name.parse::<ProviderKind>() {
                Ok(kind) => kind,
                Err(e) => {
                    warn!(provider = %name, error = %e, "Skipping unknown provider entry");
                    continue;
                }
            };
            match ProviderSnapshot::from_output(kind, output) {
                Ok(snapshot) => state = state.with_snapshot(snapshot),
                Err(e) => warn!(provider = ?kind, error = %e, "Skipping malformed provider entry"),
            }
        }
        Ok(state)
    }
}
