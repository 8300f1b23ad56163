// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end filtering over reconciled step records.

use cdi_core::test_support::{running_snapshot, step, step_result};
use cdi_core::{Clock, DeviceCatalog, FakeClock, PhaseStatus};
use cdi_engine::{reconcile, StepFilter, StepQuery, StepView};
use cdi_filter::{Bounds, FilterStore, DEFAULT_QUIET_PERIOD};

fn reconciled_steps() -> Vec<StepView> {
    let mut raw = running_snapshot("apply-1");
    raw.procedures = Some(vec![
        step(3, "connect", "dev-a"),
        step(7, "connect", "dev-b"),
        step(12, "shutdown", "dev-c"),
    ]);
    raw.apply_result = Some(vec![
        step_result(3, PhaseStatus::Completed),
        step_result(7, PhaseStatus::InProgress),
    ]);
    reconcile(&raw.into_snapshot(), &DeviceCatalog::empty()).steps
}

fn store() -> StepFilter {
    let mut store = FilterStore::new(StepQuery::new());
    store.set_records(reconciled_steps());
    store
}

#[test]
fn id_range_five_to_ten_keeps_only_seven() {
    let mut store = store();
    store.edit_query(|q| q.operation_id = Bounds::between(5, 10));

    let ids: Vec<u32> = store.filtered().iter().map(|s| s.operation_id).collect();
    assert_eq!(ids, vec![7]);
}

#[test]
fn empty_operation_selection_leaves_records_unchanged() {
    let mut store = store();
    store.edit_query(|q| q.operations = Vec::new());

    let ids: Vec<u32> = store.filtered().iter().map(|s| s.operation_id).collect();
    assert_eq!(ids, vec![3, 7, 12]);
}

#[test]
fn filters_combine_with_and() {
    let mut store = store();
    store.edit_query(|q| {
        q.operations = vec!["connect".to_string()];
        q.statuses = vec![PhaseStatus::InProgress];
    });

    let ids: Vec<u32> = store.filtered().iter().map(|s| s.operation_id).collect();
    assert_eq!(ids, vec![7]);
}

#[test]
fn keystroke_burst_filters_once_with_final_text() {
    let clock = FakeClock::new();
    let mut store = store();
    store.filtered();
    let before = store.recomputes();

    // Each keystroke triggers a re-render that reads the projection;
    // none of those reads may recompute it.
    for text in ["d", "de", "dev", "dev-c"] {
        store.stage(|q| q.set_device_filter(text, clock.now()));
        store.tick(clock.now());
        assert_eq!(store.filtered().len(), 3);
        clock.advance(DEFAULT_QUIET_PERIOD / 4);
    }
    assert_eq!(store.recomputes(), before);

    clock.advance(DEFAULT_QUIET_PERIOD);
    store.tick(clock.now());

    let ids: Vec<u32> = store.filtered().iter().map(|s| s.operation_id).collect();
    assert_eq!(ids, vec![12]);

    // The whole burst collapses to one recomputation, using the final
    // committed text.
    assert_eq!(store.recomputes(), before + 1);
}

#[test]
fn fresh_snapshot_replaces_records_under_same_query() {
    let mut store = store();
    store.edit_query(|q| q.statuses = vec![PhaseStatus::Completed]);
    assert_eq!(store.filtered().len(), 1);

    // Next poll: step 7 completed too.
    let mut raw = running_snapshot("apply-1");
    raw.procedures = Some(vec![step(3, "connect", "dev-a"), step(7, "connect", "dev-b")]);
    raw.apply_result = Some(vec![
        step_result(3, PhaseStatus::Completed),
        step_result(7, PhaseStatus::Completed),
    ]);
    store.set_records(reconcile(&raw.into_snapshot(), &DeviceCatalog::empty()).steps);

    assert_eq!(store.filtered().len(), 2);
}
