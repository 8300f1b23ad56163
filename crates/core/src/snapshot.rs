// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire DTOs for the apply-status polling endpoint, plus the adaptation
//! step that regroups the flat optional bag into a structured snapshot.
//!
//! The endpoint returns one flat JSON object per poll. Whether a rollback
//! has started is encoded by the mere presence of `rollbackStartedAt`
//! among otherwise-optional siblings; [`RawApplySnapshot::into_snapshot`]
//! turns that into an explicit `rollback: Option<RollbackSection>` so
//! downstream code never discriminates on field presence.

use crate::status::PhaseStatus;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// One planned step of an apply (or rollback) plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStep {
    #[serde(rename = "operationID")]
    pub operation_id: u32,
    /// Operation name ("connect", "disconnect", "boot", ...). The valid
    /// vocabulary is owned by the apply service, not this crate.
    pub operation: String,
    /// Operation IDs this step waits on.
    #[serde(default)]
    pub dependencies: Vec<u32>,
    #[serde(rename = "targetCPUID", default, skip_serializing_if = "Option::is_none")]
    pub target_cpu_id: Option<String>,
    #[serde(rename = "targetDeviceID")]
    pub target_device_id: String,
}

/// Error payload nested inside a response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawResponse {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Wrapper for the secondary check responses (OS boot, get-information).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCheck {
    pub response_body: Option<RawResponse>,
}

/// Reported outcome of one step attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStepResult {
    #[serde(rename = "operationID")]
    pub operation_id: u32,
    pub status: Option<PhaseStatus>,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub response_body: Option<RawResponse>,
    #[serde(rename = "isOSBoot")]
    pub is_os_boot: Option<RawCheck>,
    pub get_information: Option<RawCheck>,
}

/// The flat polling response, exactly as the apply service sends it.
///
/// Every field defaults so an empty or unrecognized object still parses;
/// the reconciler tolerates that rather than rejecting the whole poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawApplySnapshot {
    #[serde(rename = "applyID")]
    pub apply_id: Option<String>,
    pub status: Option<PhaseStatus>,
    pub started_at: Option<String>,
    pub suspended_at: Option<String>,
    pub resumed_at: Option<String>,
    pub canceled_at: Option<String>,
    pub ended_at: Option<String>,
    pub procedures: Option<Vec<RawStep>>,
    pub apply_result: Option<Vec<RawStepResult>>,
    /// Outcomes recorded after a resume. May belong to either phase;
    /// the attribution rules disambiguate by timing.
    pub resume_result: Option<Vec<RawStepResult>>,
    pub rollback_started_at: Option<String>,
    pub rollback_ended_at: Option<String>,
    pub rollback_status: Option<PhaseStatus>,
    pub rollback_procedures: Option<Vec<RawStep>>,
    pub rollback_result: Option<Vec<RawStepResult>>,
}

impl RawApplySnapshot {
    /// Adapt the flat wire bag into the structured form.
    ///
    /// The rollback section exists iff `rollbackStartedAt` is present,
    /// regardless of what `rollbackStatus` says.
    pub fn into_snapshot(self) -> ApplySnapshot {
        let rollback = self.rollback_started_at.as_deref().map(|started| RollbackSection {
            status: self.rollback_status,
            started_at: Timestamp::parse(started),
            ended_at: Timestamp::parse_opt(self.rollback_ended_at.as_deref()),
            procedures: self.rollback_procedures.unwrap_or_default(),
            results: self.rollback_result.unwrap_or_default(),
        });

        ApplySnapshot {
            apply_id: self.apply_id.unwrap_or_default(),
            status: self.status,
            started_at: Timestamp::parse_required(self.started_at.as_deref()),
            suspended_at: Timestamp::parse_opt(self.suspended_at.as_deref()),
            resumed_at: Timestamp::parse_opt(self.resumed_at.as_deref()),
            canceled_at: Timestamp::parse_opt(self.canceled_at.as_deref()),
            ended_at: Timestamp::parse_opt(self.ended_at.as_deref()),
            procedures: self.procedures.unwrap_or_default(),
            apply_result: self.apply_result.unwrap_or_default(),
            resume_result: self.resume_result.unwrap_or_default(),
            rollback,
        }
    }
}

/// Rollback-phase portion of a snapshot. Present iff a rollback started.
#[derive(Debug, Clone, PartialEq)]
pub struct RollbackSection {
    pub status: Option<PhaseStatus>,
    pub started_at: Timestamp,
    pub ended_at: Option<Timestamp>,
    pub procedures: Vec<RawStep>,
    pub results: Vec<RawStepResult>,
}

/// Structured, parsed form of one polling response.
///
/// Ambiguous timestamps (`suspended_at`, `resumed_at`, `canceled_at`) are
/// kept raw here; phase attribution happens in the reconciler.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplySnapshot {
    pub apply_id: String,
    pub status: Option<PhaseStatus>,
    /// Required on the wire; `Invalid` when absent or unparseable.
    pub started_at: Timestamp,
    pub suspended_at: Option<Timestamp>,
    pub resumed_at: Option<Timestamp>,
    pub canceled_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,
    pub procedures: Vec<RawStep>,
    pub apply_result: Vec<RawStepResult>,
    pub resume_result: Vec<RawStepResult>,
    pub rollback: Option<RollbackSection>,
}

crate::builder! {
    pub struct RawStepBuilder => RawStep {
        into {
            operation: String = "connect",
            target_device_id: String = "dev-1",
        }
        set {
            operation_id: u32 = 1,
            dependencies: Vec<u32> = Vec::new(),
        }
        option {
            target_cpu_id: String = None,
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
