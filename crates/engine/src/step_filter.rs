// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filterable step-list view: the query every apply-detail table uses.
//!
//! One column per filterable field, each with its own "no constraint"
//! sentinel: unset bounds for ranges, empty string for the device text,
//! empty vec for multi-selects. The device text field is debounced; the
//! others apply immediately.

use crate::reconcile::StepView;
use cdi_core::PhaseStatus;
use cdi_filter::{
    date_in_range, is_selected, number_in_range, numbers_in_range, option_selected,
    substring_included, Bounds, Debounced, FilterStore, Query, SelectOption,
};
use chrono::{DateTime, Utc};
use std::time::Instant;

/// Per-column query state for the step list.
#[derive(Debug, Clone)]
pub struct StepQuery {
    pub operation_id: Bounds<u32>,
    pub dependencies: Bounds<u32>,
    pub operations: Vec<String>,
    pub statuses: Vec<PhaseStatus>,
    pub started_at: Bounds<DateTime<Utc>>,
    device: Debounced<String>,
}

impl StepQuery {
    pub fn new() -> Self {
        Self {
            operation_id: Bounds::default(),
            dependencies: Bounds::default(),
            operations: Vec::new(),
            statuses: Vec::new(),
            started_at: Bounds::default(),
            device: Debounced::new(String::new()),
        }
    }

    /// Stage a device-substring edit; applied after the quiet period.
    pub fn set_device_filter(&mut self, text: impl Into<String>, now: Instant) {
        self.device.set(text.into(), now);
    }

    /// The currently applied device filter (not pending keystrokes).
    pub fn device_filter(&self) -> &str {
        self.device.value()
    }
}

impl Default for StepQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query<StepView> for StepQuery {
    fn matches(&self, step: &StepView) -> bool {
        number_in_range(Some(step.operation_id), &self.operation_id)
            && numbers_in_range(Some(step.apply.dependencies.as_slice()), &self.dependencies)
            && is_selected(&step.apply.operation, &self.operations)
            && option_selected(step.apply.status.as_ref(), &self.statuses)
            && substring_included(Some(&step.target_device), self.device.value())
            && date_in_range(
                step.apply.started_at.and_then(|t| t.as_utc()),
                &self.started_at,
            )
    }

    fn tick(&mut self, now: Instant) -> bool {
        self.device.poll(now)
    }
}

/// Filter store specialized to the step list.
pub type StepFilter = FilterStore<StepView, StepQuery>;

/// Operation dropdown choices: the canonical operation vocabulary comes
/// from the caller (the service owns it), restricted to what the store's
/// loaded steps actually carry.
pub fn operation_options(
    store: &StepFilter,
    all_operations: &[String],
) -> Vec<SelectOption<String>> {
    store.options(|s| Some(&s.apply.operation), all_operations, Clone::clone)
}

/// Status dropdown choices, in the canonical status order.
pub fn status_options(store: &StepFilter) -> Vec<SelectOption<PhaseStatus>> {
    store.options(|s| s.apply.status.as_ref(), &PhaseStatus::ALL, PhaseStatus::to_string)
}

#[cfg(test)]
#[path = "step_filter_tests.rs"]
mod tests;
