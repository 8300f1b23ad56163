// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Apply/rollback timeline reconciliation.
//!
//! Takes one flat polling snapshot and rebuilds the two-phase timeline:
//! an apply phase, an optional rollback phase, and one [`StepView`] per
//! planned step with its outcome attributed to the right attempt.
//!
//! The apply service owns transition legality; this module only relabels
//! timestamps into phases. The ambiguous raw fields (`suspendedAt`,
//! `resumedAt`, `canceledAt`) each belong to exactly one phase: apply if
//! they occurred strictly before the rollback started, rollback otherwise.

use crate::attribution::{result_for, step_error, PhaseKind};
use cdi_core::{ApplySnapshot, DeviceCatalog, PhaseStatus, RawStep, Timestamp};
use serde::{Deserialize, Serialize};

/// One phase of the lifecycle (apply or rollback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub status: Option<PhaseStatus>,
    /// Invalid rather than absent when the snapshot is malformed.
    pub started_at: Timestamp,
    pub suspended_at: Option<Timestamp>,
    pub resumed_at: Option<Timestamp>,
    pub canceled_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,
}

/// Error payload extracted from a step result's response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepError {
    pub code: String,
    pub message: String,
}

/// Outcome of one step within one phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepAttempt {
    pub operation: String,
    pub dependencies: Vec<u32>,
    /// Absent when the step has not been attempted or reported yet.
    pub status: Option<PhaseStatus>,
    pub error: Option<StepError>,
    pub started_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,
}

/// One planned step with its apply outcome and, when the rollback plan
/// includes the same operation, its rollback outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepView {
    pub operation_id: u32,
    pub target_cpu_id: Option<String>,
    /// Decorated as `"<Type>(<deviceID>)"` when the inventory resolves
    /// the device, bare ID otherwise.
    pub target_device: String,
    pub apply: StepAttempt,
    pub rollback: Option<StepAttempt>,
}

/// The reconciled lifecycle: pure derived value, recomputed whole from
/// each snapshot, holding no references back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleView {
    pub apply_id: String,
    pub apply: Phase,
    pub rollback: Option<Phase>,
    pub steps: Vec<StepView>,
}

/// Split an ambiguous raw timestamp between the two phases.
///
/// Returns `(apply, rollback)`; at most one side is populated. A tie
/// (timestamp equal to rollback onset) goes to the rollback phase, and
/// any unprovable ordering (invalid instants) lands there too, matching
/// the strict "earlier than" wire rule.
fn split_timestamp(
    t: Option<Timestamp>,
    rollback_started: Option<Timestamp>,
) -> (Option<Timestamp>, Option<Timestamp>) {
    let Some(t) = t else { return (None, None) };
    match rollback_started {
        None => (Some(t), None),
        Some(onset) if t.strictly_before(onset) => (Some(t), None),
        Some(_) => (None, Some(t)),
    }
}

fn attempt(snapshot: &ApplySnapshot, step: &RawStep, phase: PhaseKind) -> StepAttempt {
    let result = result_for(snapshot, step.operation_id, phase);
    StepAttempt {
        operation: step.operation.clone(),
        dependencies: step.dependencies.clone(),
        status: result.and_then(|r| r.status),
        error: result.and_then(step_error),
        started_at: result.and_then(|r| Timestamp::parse_opt(r.started_at.as_deref())),
        ended_at: result.and_then(|r| Timestamp::parse_opt(r.ended_at.as_deref())),
    }
}

/// Reconcile one snapshot into the structured lifecycle view.
///
/// Pure and total: a snapshot of nothing but unrecognized keys still
/// yields a structurally valid view (invalid `started_at`, everything
/// else absent).
pub fn reconcile(snapshot: &ApplySnapshot, devices: &DeviceCatalog) -> LifecycleView {
    let rollback_started = snapshot.rollback.as_ref().map(|r| r.started_at);

    let (apply_suspended, rollback_suspended) =
        split_timestamp(snapshot.suspended_at, rollback_started);
    let (apply_resumed, rollback_resumed) = split_timestamp(snapshot.resumed_at, rollback_started);
    let (apply_canceled, rollback_canceled) =
        split_timestamp(snapshot.canceled_at, rollback_started);

    let apply = Phase {
        status: snapshot.status,
        started_at: snapshot.started_at,
        suspended_at: apply_suspended,
        resumed_at: apply_resumed,
        canceled_at: apply_canceled,
        ended_at: snapshot.ended_at,
    };

    let rollback = snapshot.rollback.as_ref().map(|section| Phase {
        status: section.status,
        started_at: section.started_at,
        suspended_at: rollback_suspended,
        resumed_at: rollback_resumed,
        canceled_at: rollback_canceled,
        ended_at: section.ended_at,
    });

    let steps = snapshot
        .procedures
        .iter()
        .map(|step| {
            let rollback_step = snapshot
                .rollback
                .as_ref()
                .and_then(|s| s.procedures.iter().find(|p| p.operation_id == step.operation_id));
            StepView {
                operation_id: step.operation_id,
                target_cpu_id: step.target_cpu_id.clone(),
                target_device: devices.label(&step.target_device_id),
                apply: attempt(snapshot, step, PhaseKind::Apply),
                rollback: rollback_step.map(|p| attempt(snapshot, p, PhaseKind::Rollback)),
            }
        })
        .collect();

    tracing::debug!(
        apply_id = %snapshot.apply_id,
        rollback = rollback.is_some(),
        steps = snapshot.procedures.len(),
        "reconciled apply snapshot"
    );

    LifecycleView { apply_id: snapshot.apply_id.clone(), apply, rollback, steps }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
