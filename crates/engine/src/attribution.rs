// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-step result attribution.
//!
//! A resumed job reports later outcomes in a separate `resumeResult`
//! list, and that list can belong to either phase: resuming a suspended
//! apply lands it in the apply phase, resuming a suspended rollback lands
//! it in the rollback phase. Exactly one phase owns the resume event,
//! decided by whether the resume happened before or after rollback onset.

use crate::reconcile::StepError;
use cdi_core::{ApplySnapshot, RawResponse, RawStepResult};

/// Which phase a lookup is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Apply,
    Rollback,
}

cdi_core::simple_display! {
    PhaseKind {
        Apply => "apply",
        Rollback => "rollback",
    }
}

/// Whether `phase` should consult the resume-result list first.
///
/// False everywhere when no resume happened. Otherwise the rollback
/// phase owns the resume iff rollback onset is strictly earlier than the
/// resume instant; a tie or an unprovable ordering leaves it with the
/// apply phase.
pub fn should_check_resume(snapshot: &ApplySnapshot, phase: PhaseKind) -> bool {
    let Some(resumed_at) = snapshot.resumed_at else { return false };
    let resume_after_rollback =
        snapshot.rollback.as_ref().is_some_and(|r| r.started_at.strictly_before(resumed_at));
    match phase {
        PhaseKind::Apply => !resume_after_rollback,
        PhaseKind::Rollback => resume_after_rollback,
    }
}

fn find(results: &[RawStepResult], operation_id: u32) -> Option<&RawStepResult> {
    results.iter().find(|r| r.operation_id == operation_id)
}

/// Look up the reported outcome for one step in one phase.
///
/// When the phase owns the resume event and the resume list has an entry
/// for the step, that entry wins outright; there is no merging with the
/// original attempt. Otherwise the phase's own result list is consulted.
/// `None` means the step has not been attempted or reported yet.
pub fn result_for(
    snapshot: &ApplySnapshot,
    operation_id: u32,
    phase: PhaseKind,
) -> Option<&RawStepResult> {
    if should_check_resume(snapshot, phase) {
        if let Some(result) = find(&snapshot.resume_result, operation_id) {
            return Some(result);
        }
    }
    match phase {
        PhaseKind::Apply => find(&snapshot.apply_result, operation_id),
        PhaseKind::Rollback => {
            snapshot.rollback.as_ref().and_then(|r| find(&r.results, operation_id))
        }
    }
}

fn error_payload(body: Option<&RawResponse>) -> Option<StepError> {
    let body = body?;
    match (&body.code, &body.message) {
        (Some(code), Some(message)) => {
            Some(StepError { code: code.clone(), message: message.clone() })
        }
        _ => None,
    }
}

/// Extract the step's error, scanning the top-level response body, then
/// the OS-boot-check body, then the get-information body; the first one
/// carrying both a code and a message wins.
pub fn step_error(result: &RawStepResult) -> Option<StepError> {
    error_payload(result.response_body.as_ref())
        .or_else(|| {
            error_payload(result.is_os_boot.as_ref().and_then(|c| c.response_body.as_ref()))
        })
        .or_else(|| {
            error_payload(result.get_information.as_ref().and_then(|c| c.response_body.as_ref()))
        })
}

#[cfg(test)]
#[path = "attribution_tests.rs"]
mod tests;
