// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Range and membership predicates shared by every list view.
//!
//! The load-bearing invariant: a filter at its "no constraint" sentinel
//! passes every record, including records whose field is absent. The
//! default state of every table shows all rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive range bounds; `None` on either side means unbounded.
///
/// `Bounds::default()` (both sides `None`) is the "no constraint" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self { min: None, max: None }
    }
}

impl<T> Bounds<T> {
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        Self { min, max }
    }

    pub fn between(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    pub fn at_least(min: T) -> Self {
        Self { min: Some(min), max: None }
    }

    pub fn at_most(max: T) -> Self {
        Self { min: None, max: Some(max) }
    }

    /// True when neither bound is set (the sentinel).
    pub fn is_unconstrained(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Scalar range test. An absent value passes only an unconstrained range.
pub fn number_in_range<T: PartialOrd + Copy>(value: Option<T>, bounds: &Bounds<T>) -> bool {
    match value {
        None => bounds.is_unconstrained(),
        Some(v) => {
            bounds.min.is_none_or(|min| v >= min) && bounds.max.is_none_or(|max| v <= max)
        }
    }
}

/// Collection range test: true if any element satisfies the range. An
/// absent or empty collection passes only an unconstrained range.
pub fn numbers_in_range<T: PartialOrd + Copy>(values: Option<&[T]>, bounds: &Bounds<T>) -> bool {
    if bounds.is_unconstrained() {
        return true;
    }
    values.is_some_and(|vs| vs.iter().any(|v| number_in_range(Some(*v), bounds)))
}

/// Instant range test, comparing by instant.
pub fn date_in_range(value: Option<DateTime<Utc>>, bounds: &Bounds<DateTime<Utc>>) -> bool {
    number_in_range(value, bounds)
}

/// Case-sensitive substring test. An empty needle always matches,
/// including against an absent haystack (the sentinel).
pub fn substring_included(haystack: Option<&str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.is_some_and(|h| h.contains(needle))
}

/// Membership test. An empty selection (the sentinel) matches everything.
pub fn is_selected<T: PartialEq>(value: &T, selected: &[T]) -> bool {
    selected.is_empty() || selected.contains(value)
}

/// Membership test for records whose field may be absent. An absent value
/// passes only an empty selection.
pub fn option_selected<T: PartialEq>(value: Option<&T>, selected: &[T]) -> bool {
    match value {
        None => selected.is_empty(),
        Some(v) => is_selected(v, selected),
    }
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
