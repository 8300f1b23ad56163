// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase status vocabulary shared by apply and rollback phases.
//!
//! The remote apply service owns the transition rules; this crate only
//! relabels what it reports. Step results reuse the same status domain.

use serde::{Deserialize, Serialize};

/// Status of an apply or rollback phase as reported by the apply service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseStatus {
    /// Steps are executing
    InProgress,
    /// Paused by an operator, resumable
    Suspended,
    /// Cancel requested, still winding down
    Canceling,
    /// Cancel completed
    Canceled,
    /// All steps finished successfully
    Completed,
    /// At least one step failed
    Failed,
}

impl PhaseStatus {
    /// Canonical declared order, used for deriving filter options.
    /// Dropdowns must list statuses in this order, never alphabetical.
    pub const ALL: [PhaseStatus; 6] = [
        PhaseStatus::InProgress,
        PhaseStatus::Suspended,
        PhaseStatus::Canceling,
        PhaseStatus::Canceled,
        PhaseStatus::Completed,
        PhaseStatus::Failed,
    ];

    /// Check if the phase can no longer make progress.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PhaseStatus::Canceled | PhaseStatus::Completed | PhaseStatus::Failed)
    }

    /// Check if the phase is suspended (resumable).
    pub fn is_suspended(&self) -> bool {
        matches!(self, PhaseStatus::Suspended)
    }
}

crate::simple_display! {
    PhaseStatus {
        InProgress => "in_progress",
        Suspended => "suspended",
        Canceling => "canceling",
        Canceled => "canceled",
        Completed => "completed",
        Failed => "failed",
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
