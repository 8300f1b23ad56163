// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end lifecycle reconstruction from raw polling JSON.

use cdi_core::{DeviceCatalog, PhaseStatus, RawApplySnapshot, Timestamp};
use cdi_engine::{reconcile, LifecycleView};

fn reconcile_json(json: &str) -> LifecycleView {
    let raw: RawApplySnapshot = serde_json::from_str(json).expect("snapshot json");
    let devices: Vec<cdi_core::Device> = serde_json::from_str(
        r#"[
            { "deviceID": "dev-gpu-1", "type": "gpu" },
            { "deviceID": "dev-ssd-1", "type": "storage" }
        ]"#,
    )
    .expect("inventory json");
    reconcile(&raw.into_snapshot(), &DeviceCatalog::new(&devices))
}

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s)
}

#[test]
fn canceled_apply_with_failed_rollback_timeline() {
    let view = reconcile_json(
        r#"{
            "applyID": "apply-42",
            "status": "CANCELED",
            "startedAt": "2024-01-01T00:00:00Z",
            "canceledAt": "2024-01-01T00:05:00Z",
            "rollbackStartedAt": "2024-01-01T00:06:00Z",
            "rollbackStatus": "FAILED",
            "rollbackEndedAt": "2024-01-01T00:07:00Z"
        }"#,
    );

    assert_eq!(view.apply.status, Some(PhaseStatus::Canceled));
    assert_eq!(view.apply.canceled_at, Some(ts("2024-01-01T00:05:00Z")));

    let rollback = view.rollback.expect("rollback phase");
    assert_eq!(rollback.status, Some(PhaseStatus::Failed));
    assert_eq!(rollback.started_at, ts("2024-01-01T00:06:00Z"));
    assert_eq!(rollback.ended_at, Some(ts("2024-01-01T00:07:00Z")));
    assert_eq!(rollback.canceled_at, None);
}

#[test]
fn suspend_resume_cancel_full_story() {
    // Apply suspends and resumes, then gets canceled; the rollback
    // itself suspends and resumes. The single resumedAt field belongs
    // to the rollback because it postdates rollback onset, and the
    // resume results therefore feed rollback outcomes only.
    let view = reconcile_json(
        r#"{
            "applyID": "apply-7",
            "status": "CANCELED",
            "startedAt": "2024-01-01T09:00:00Z",
            "suspendedAt": "2024-01-01T09:10:00Z",
            "resumedAt": "2024-01-01T09:40:00Z",
            "canceledAt": "2024-01-01T09:20:00Z",
            "procedures": [
                {
                    "operationID": 1,
                    "operation": "connect",
                    "dependencies": [],
                    "targetDeviceID": "dev-gpu-1"
                }
            ],
            "applyResult": [
                { "operationID": 1, "status": "COMPLETED",
                  "startedAt": "2024-01-01T09:01:00Z", "endedAt": "2024-01-01T09:02:00Z" }
            ],
            "resumeResult": [
                { "operationID": 1, "status": "COMPLETED",
                  "startedAt": "2024-01-01T09:41:00Z", "endedAt": "2024-01-01T09:42:00Z" }
            ],
            "rollbackStartedAt": "2024-01-01T09:21:00Z",
            "rollbackStatus": "COMPLETED",
            "rollbackEndedAt": "2024-01-01T09:45:00Z",
            "rollbackProcedures": [
                {
                    "operationID": 1,
                    "operation": "disconnect",
                    "dependencies": [],
                    "targetDeviceID": "dev-gpu-1"
                }
            ],
            "rollbackResult": [
                { "operationID": 1, "status": "FAILED" }
            ]
        }"#,
    );

    // suspendedAt (09:10) and canceledAt (09:20) predate rollback onset
    // (09:21): apply phase. resumedAt (09:40) postdates it: rollback.
    assert_eq!(view.apply.suspended_at, Some(ts("2024-01-01T09:10:00Z")));
    assert_eq!(view.apply.canceled_at, Some(ts("2024-01-01T09:20:00Z")));
    assert_eq!(view.apply.resumed_at, None);

    let rollback = view.rollback.expect("rollback phase");
    assert_eq!(rollback.resumed_at, Some(ts("2024-01-01T09:40:00Z")));
    assert_eq!(rollback.suspended_at, None);
    assert_eq!(rollback.canceled_at, None);

    let step = &view.steps[0];
    assert_eq!(step.target_device, "Gpu(dev-gpu-1)");

    // Apply outcome comes from the original attempt; the resume belongs
    // to the rollback phase.
    assert_eq!(step.apply.operation, "connect");
    assert_eq!(step.apply.status, Some(PhaseStatus::Completed));
    assert_eq!(step.apply.started_at, Some(ts("2024-01-01T09:01:00Z")));

    // Rollback outcome: resume entry wins outright over rollbackResult.
    let rollback_step = step.rollback.as_ref().expect("rollback attempt");
    assert_eq!(rollback_step.operation, "disconnect");
    assert_eq!(rollback_step.status, Some(PhaseStatus::Completed));
    assert_eq!(rollback_step.ended_at, Some(ts("2024-01-01T09:42:00Z")));
}

#[test]
fn step_error_surfaces_from_response_body() {
    let view = reconcile_json(
        r#"{
            "applyID": "apply-9",
            "status": "FAILED",
            "startedAt": "2024-01-01T00:00:00Z",
            "procedures": [
                { "operationID": 1, "operation": "boot", "dependencies": [],
                  "targetCPUID": "cpu-1", "targetDeviceID": "dev-ssd-1" }
            ],
            "applyResult": [
                { "operationID": 1, "status": "FAILED",
                  "isOSBoot": { "responseBody": { "code": "E408", "message": "boot timeout" } } }
            ]
        }"#,
    );

    let step = &view.steps[0];
    assert_eq!(step.target_cpu_id.as_deref(), Some("cpu-1"));
    assert_eq!(step.target_device, "Storage(dev-ssd-1)");

    let error = step.apply.error.as_ref().expect("step error");
    assert_eq!(error.code, "E408");
    assert_eq!(error.message, "boot timeout");
}

#[test]
fn unrecognized_snapshot_is_displayable_not_fatal() {
    let view = reconcile_json(r#"{ "whatIsThis": ["not", "a", "snapshot"] }"#);

    assert_eq!(view.apply_id, "");
    assert_eq!(view.apply.status, None);
    assert_eq!(view.apply.started_at, Timestamp::Invalid);
    assert!(view.rollback.is_none());
    assert!(view.steps.is_empty());
}
