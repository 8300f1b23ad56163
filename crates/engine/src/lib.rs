// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cdi-engine: apply lifecycle reconciliation for the dashboard core

pub mod attribution;
pub mod feed;
pub mod reconcile;
pub mod step_filter;

pub use attribution::{result_for, should_check_resume, step_error, PhaseKind};
pub use feed::{
    FeedError, FeedErrors, InventorySource, LifecycleFeed, LifecycleState, PollCell,
    SnapshotSource, SourceState, Validating,
};
pub use reconcile::{reconcile, LifecycleView, Phase, StepAttempt, StepError, StepView};
pub use step_filter::{operation_options, status_options, StepFilter, StepQuery};
