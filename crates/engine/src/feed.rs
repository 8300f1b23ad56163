// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Poll-driven data sources and the per-view lifecycle feed.
//!
//! The engine never performs I/O itself: an external polling layer owns
//! fetching and caching, and the engine only ever sees the latest
//! completed snapshot plus a "currently refetching" flag. Errors from the
//! two upstream sources (apply snapshot, device inventory) stay separate
//! end to end so a caller can tell which collaborator failed.

use crate::reconcile::{reconcile, LifecycleView};
use cdi_core::{Device, DeviceCatalog, RawApplySnapshot};
use parking_lot::Mutex;
use thiserror::Error;

/// Upstream fetch failure, surfaced verbatim and never retried
/// automatically; retry is a user-initiated [`LifecycleFeed::mutate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("{message}")]
    Upstream {
        /// Top-level failure description (the dismissible message title).
        message: String,
        /// The upstream API's own error message, when it sent one.
        detail: Option<String>,
    },
}

impl FeedError {
    pub fn upstream(message: impl Into<String>) -> Self {
        FeedError::Upstream { message: message.into(), detail: None }
    }

    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        FeedError::Upstream { message: message.into(), detail: Some(detail.into()) }
    }
}

/// Latest observed state of one polled source.
#[derive(Debug, Clone)]
pub struct SourceState<T> {
    /// Most recent completed payload; in-flight partials are never seen.
    pub data: Option<T>,
    pub error: Option<FeedError>,
    pub is_validating: bool,
}

impl<T> Default for SourceState<T> {
    fn default() -> Self {
        Self { data: None, error: None, is_validating: false }
    }
}

/// Source of apply-status snapshots, keyed by apply ID.
pub trait SnapshotSource {
    fn latest(&self, apply_id: &str) -> SourceState<RawApplySnapshot>;
    fn refetch(&self, apply_id: &str);
}

/// Source of the device inventory.
pub trait InventorySource {
    fn latest(&self) -> SourceState<Vec<Device>>;
    fn refetch(&self);
}

/// Per-source upstream errors, reported separately (never merged).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedErrors {
    pub layout: Option<FeedError>,
    pub resource: Option<FeedError>,
}

/// Per-source refetch flags; the UI may combine them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validating {
    pub layout: bool,
    pub resource: bool,
}

impl Validating {
    pub fn any(&self) -> bool {
        self.layout || self.resource
    }
}

/// What one view observes after combining both sources.
#[derive(Debug, Clone, Default)]
pub struct LifecycleState {
    pub lifecycle: Option<LifecycleView>,
    pub errors: FeedErrors,
    pub validating: Validating,
}

/// Combines the snapshot and inventory sources for one view.
///
/// Reconciliation runs synchronously on read; reading twice without an
/// upstream change yields structurally equal output.
pub struct LifecycleFeed<S, I> {
    snapshots: S,
    inventory: I,
}

impl<S: SnapshotSource, I: InventorySource> LifecycleFeed<S, I> {
    pub fn new(snapshots: S, inventory: I) -> Self {
        Self { snapshots, inventory }
    }

    /// Latest combined state for `apply_id`. A missing key suppresses the
    /// snapshot fetch entirely and yields an idle state.
    pub fn view(&self, apply_id: Option<&str>) -> LifecycleState {
        let Some(apply_id) = apply_id.filter(|k| !k.is_empty()) else {
            return LifecycleState::default();
        };

        let snapshot = self.snapshots.latest(apply_id);
        let inventory = self.inventory.latest();

        if let Some(err) = &snapshot.error {
            tracing::warn!(apply_id, error = %err, "apply snapshot source failed");
        }
        if let Some(err) = &inventory.error {
            tracing::warn!(error = %err, "device inventory source failed");
        }

        let catalog =
            inventory.data.as_deref().map(DeviceCatalog::new).unwrap_or_default();
        let lifecycle =
            snapshot.data.map(|raw| reconcile(&raw.into_snapshot(), &catalog));

        LifecycleState {
            lifecycle,
            errors: FeedErrors { layout: snapshot.error, resource: inventory.error },
            validating: Validating {
                layout: snapshot.is_validating,
                resource: inventory.is_validating,
            },
        }
    }

    /// Re-trigger both underlying fetches. Safe to call repeatedly; the
    /// feed only ever reacts to the latest resolved snapshot.
    pub fn mutate(&self, apply_id: Option<&str>) {
        if let Some(apply_id) = apply_id.filter(|k| !k.is_empty()) {
            self.snapshots.refetch(apply_id);
        }
        self.inventory.refetch();
    }
}

/// In-memory source cell fed by an external poll loop.
///
/// `refetch` only marks the cell as validating and counts the request;
/// whoever drives the polling observes the count and eventually calls
/// [`PollCell::publish`] or [`PollCell::fail`].
#[derive(Debug)]
pub struct PollCell<T: Clone> {
    state: Mutex<CellState<T>>,
}

impl<T: Clone> Default for PollCell<T> {
    fn default() -> Self {
        Self { state: Mutex::new(CellState::default()) }
    }
}

#[derive(Debug)]
struct CellState<T> {
    latest: SourceState<T>,
    refetches: u64,
}

impl<T> Default for CellState<T> {
    fn default() -> Self {
        Self { latest: SourceState::default(), refetches: 0 }
    }
}

impl<T: Clone> PollCell<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed fetch.
    pub fn publish(&self, data: T) {
        let mut state = self.state.lock();
        state.latest.data = Some(data);
        state.latest.error = None;
        state.latest.is_validating = false;
    }

    /// Record a failed fetch. The previous payload, if any, stays visible.
    pub fn fail(&self, error: FeedError) {
        let mut state = self.state.lock();
        state.latest.error = Some(error);
        state.latest.is_validating = false;
    }

    pub fn latest(&self) -> SourceState<T> {
        self.state.lock().latest.clone()
    }

    pub fn mark_refetch(&self) {
        let mut state = self.state.lock();
        state.latest.is_validating = true;
        state.refetches += 1;
    }

    /// How many refetches have been requested.
    pub fn refetch_count(&self) -> u64 {
        self.state.lock().refetches
    }
}

impl SnapshotSource for PollCell<RawApplySnapshot> {
    fn latest(&self, _apply_id: &str) -> SourceState<RawApplySnapshot> {
        PollCell::latest(self)
    }

    fn refetch(&self, _apply_id: &str) {
        self.mark_refetch();
    }
}

impl InventorySource for PollCell<Vec<Device>> {
    fn latest(&self) -> SourceState<Vec<Device>> {
        PollCell::latest(self)
    }

    fn refetch(&self) {
        self.mark_refetch();
    }
}

impl<S: SnapshotSource> SnapshotSource for &S {
    fn latest(&self, apply_id: &str) -> SourceState<RawApplySnapshot> {
        (*self).latest(apply_id)
    }

    fn refetch(&self, apply_id: &str) {
        (*self).refetch(apply_id)
    }
}

impl<I: InventorySource> InventorySource for &I {
    fn latest(&self) -> SourceState<Vec<Device>> {
        (*self).latest()
    }

    fn refetch(&self) {
        (*self).refetch()
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
