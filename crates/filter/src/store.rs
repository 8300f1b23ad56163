// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-view filter state with a version-stamped derived projection.
//!
//! One store per open list view; a view's store is dropped with the view.
//! The projection is recomputed only when the record set or the effective
//! query changed since the last read, keyed by explicit version counters
//! rather than reference identity.

use crate::options::{derive_options, SelectOption};
use std::time::Instant;

/// A per-view query: the AND of one predicate per filterable column.
///
/// `matches` must short-circuit in column order; every column at its
/// sentinel contributes "true" unconditionally.
pub trait Query<R> {
    fn matches(&self, record: &R) -> bool;

    /// Commit any debounced edits that are due. Returns true when the
    /// effective query changed.
    fn tick(&mut self, now: Instant) -> bool {
        let _ = now;
        false
    }
}

/// Mutable filter state plus the cached filtered projection.
#[derive(Debug)]
pub struct FilterStore<R, Q> {
    records: Vec<R>,
    query: Q,
    records_version: u64,
    query_version: u64,
    cached_for: Option<(u64, u64)>,
    cached: Vec<R>,
    recomputes: u64,
}

impl<R: Clone, Q: Query<R>> FilterStore<R, Q> {
    pub fn new(query: Q) -> Self {
        Self {
            records: Vec::new(),
            query,
            records_version: 0,
            query_version: 0,
            cached_for: None,
            cached: Vec::new(),
            recomputes: 0,
        }
    }

    /// Replace the source record set (the feed hands over a fresh array
    /// per poll; there is no in-place mutation).
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.records_version += 1;
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Edit the query immediately. Any edit invalidates the cached
    /// projection, even an edit back to the same value; correctness only
    /// requires that no change goes unnoticed.
    pub fn edit_query(&mut self, edit: impl FnOnce(&mut Q)) {
        edit(&mut self.query);
        self.query_version += 1;
    }

    /// Stage an edit to a debounced field. The effective query is
    /// untouched and the cached projection stays valid; the change lands
    /// when `tick` commits it. Reading `filtered` mid-burst must not
    /// recompute, so keystrokes go through here, not `edit_query`.
    pub fn stage(&mut self, edit: impl FnOnce(&mut Q)) {
        edit(&mut self.query);
    }

    /// Advance debounced fields. Call from the host's tick/re-render path.
    pub fn tick(&mut self, now: Instant) {
        if self.query.tick(now) {
            self.query_version += 1;
        }
    }

    /// The records matching the current query, in original order.
    pub fn filtered(&mut self) -> &[R] {
        let key = (self.records_version, self.query_version);
        if self.cached_for != Some(key) {
            let rows: Vec<R> =
                self.records.iter().filter(|r| self.query.matches(r)).cloned().collect();
            self.cached = rows;
            self.cached_for = Some(key);
            self.recomputes += 1;
        }
        &self.cached
    }

    /// Multi-select choices for one column, derived from the same record
    /// set the projection filters. Independent of the current query, so
    /// a dropdown never loses choices as filters narrow.
    pub fn options<'r, V, F, L>(
        &'r self,
        field: F,
        all_values: &[V],
        label: L,
    ) -> Vec<SelectOption<V>>
    where
        V: PartialEq + Clone + 'r,
        F: Fn(&'r R) -> Option<&'r V>,
        L: Fn(&V) -> String,
    {
        derive_options(&self.records, field, all_values, label)
    }

    /// Number of projection recomputations so far.
    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
