// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cdi-filter: declarative filtering engine for dashboard list views

pub mod debounce;
pub mod options;
pub mod predicate;
pub mod store;

pub use debounce::{Debounced, DEFAULT_QUIET_PERIOD};
pub use options::{derive_options, SelectOption};
pub use predicate::{
    date_in_range, is_selected, number_in_range, numbers_in_range, option_selected,
    substring_included, Bounds,
};
pub use store::{FilterStore, Query};
