// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::device::{Device, DeviceType};
use crate::snapshot::{RawApplySnapshot, RawResponse, RawStep, RawStepResult};
use crate::status::PhaseStatus;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core status and timestamp types.
pub mod strategies {
    use crate::status::PhaseStatus;
    use crate::time::Timestamp;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    pub fn arb_phase_status() -> impl Strategy<Value = PhaseStatus> {
        prop_oneof![
            Just(PhaseStatus::InProgress),
            Just(PhaseStatus::Suspended),
            Just(PhaseStatus::Canceling),
            Just(PhaseStatus::Canceled),
            Just(PhaseStatus::Completed),
            Just(PhaseStatus::Failed),
        ]
    }

    /// Timestamps within one day of a fixed origin, plus the invalid case.
    pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
        prop_oneof![
            4 => (0i64..86_400).prop_map(|secs| {
                Timestamp::Valid(Utc.timestamp_opt(1_704_067_200 + secs, 0).single().unwrap_or_default())
            }),
            1 => Just(Timestamp::Invalid),
        ]
    }
}

// ── Wire fixture factories ──────────────────────────────────────────────

pub fn step(operation_id: u32, operation: &str, device_id: &str) -> RawStep {
    RawStep {
        operation_id,
        operation: operation.to_string(),
        dependencies: Vec::new(),
        target_cpu_id: None,
        target_device_id: device_id.to_string(),
    }
}

pub fn step_result(operation_id: u32, status: PhaseStatus) -> RawStepResult {
    RawStepResult { operation_id, status: Some(status), ..RawStepResult::default() }
}

pub fn failed_result(operation_id: u32, code: &str, message: &str) -> RawStepResult {
    RawStepResult {
        operation_id,
        status: Some(PhaseStatus::Failed),
        response_body: Some(RawResponse {
            code: Some(code.to_string()),
            message: Some(message.to_string()),
        }),
        ..RawStepResult::default()
    }
}

pub fn device(device_id: &str, device_type: DeviceType) -> Device {
    Device { device_id: device_id.to_string(), device_type }
}

/// A minimal in-progress snapshot with one connect step.
pub fn running_snapshot(apply_id: &str) -> RawApplySnapshot {
    RawApplySnapshot {
        apply_id: Some(apply_id.to_string()),
        status: Some(PhaseStatus::InProgress),
        started_at: Some("2024-01-01T00:00:00Z".to_string()),
        procedures: Some(vec![step(1, "connect", "dev-1")]),
        ..RawApplySnapshot::default()
    }
}
