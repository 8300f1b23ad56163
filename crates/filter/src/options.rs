// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Derivation of multi-select filter choices from the loaded record set.

use serde::{Deserialize, Serialize};

/// One choice in a multi-select filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption<V> {
    pub value: V,
    pub label: String,
}

/// Compute the selectable values for a field.
///
/// Iterates `all_values` in their canonical declared order and keeps only
/// values at least one record actually carries, so the dropdown never
/// offers a choice guaranteed to produce zero rows. An empty record set
/// yields no options.
pub fn derive_options<'r, R, V, F, L>(
    records: &'r [R],
    field: F,
    all_values: &[V],
    label: L,
) -> Vec<SelectOption<V>>
where
    V: PartialEq + Clone + 'r,
    F: Fn(&'r R) -> Option<&'r V>,
    L: Fn(&V) -> String,
{
    if records.is_empty() {
        return Vec::new();
    }

    all_values
        .iter()
        .filter(|candidate| records.iter().any(|r| field(r) == Some(*candidate)))
        .map(|v| SelectOption { value: v.clone(), label: label(v) })
        .collect()
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
