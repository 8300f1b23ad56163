// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cdi-core: shared types for the composable-infrastructure dashboard core

pub mod macros;

pub mod clock;
pub mod device;
pub mod snapshot;
pub mod status;
pub mod time;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use device::{Device, DeviceCatalog, DeviceType};
#[cfg(any(test, feature = "test-support"))]
pub use snapshot::RawStepBuilder;
pub use snapshot::{
    ApplySnapshot, RawApplySnapshot, RawCheck, RawResponse, RawStep, RawStepResult,
    RollbackSection,
};
pub use status::PhaseStatus;
pub use time::Timestamp;
