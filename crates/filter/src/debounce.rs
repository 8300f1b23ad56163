// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Debounced value cell for keystroke-driven filter fields.
//!
//! Each `set` supersedes the previous pending value and re-arms the quiet
//! period; the committed value changes only once the period elapses
//! without further edits. Time comes in as explicit instants, so the cell
//! works under any driver (UI tick loop, test clock) without owning a
//! timer thread.

use std::time::{Duration, Instant};

/// Quiet period applied to text filters before recomputing a projection.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// A value that commits only after a quiet period without edits.
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    quiet_period: Duration,
    committed: T,
    pending: Option<Pending<T>>,
}

impl<T: PartialEq> Debounced<T> {
    pub fn new(initial: T) -> Self {
        Self::with_quiet_period(initial, DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(initial: T, quiet_period: Duration) -> Self {
        Self { quiet_period, committed: initial, pending: None }
    }

    /// Stage a new value; resets the quiet-period deadline.
    pub fn set(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending { value, deadline: now + self.quiet_period });
    }

    /// Commit the pending value if its quiet period has elapsed.
    /// Returns true when the committed value changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.flush(),
            _ => false,
        }
    }

    /// Commit any pending value immediately.
    /// Returns true when the committed value changed.
    pub fn flush(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) if pending.value != self.committed => {
                self.committed = pending.value;
                true
            }
            _ => false,
        }
    }

    /// The committed value (pending edits are not visible here).
    pub fn value(&self) -> &T {
        &self.committed
    }

    /// True while an edit is staged but not yet committed.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
