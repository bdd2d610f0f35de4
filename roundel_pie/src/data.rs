// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data normalization: ordering and aggregation.
//!
//! Sorting happens in place on the settings data array, once, before segment
//! construction. Nothing is dropped here: zero-value filtering belongs to
//! the arc builder, so indices stay consistent between the two passes.

use rand::seq::SliceRandom;

use crate::settings::{DataEntry, SortOrder};

/// Reorders `data` in place according to `order`.
///
/// All sorts are stable. Label comparisons are case-insensitive. `Random`
/// performs an unbiased Fisher-Yates shuffle.
pub fn sort_entries(data: &mut [DataEntry], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::Random => data.shuffle(&mut rand::rng()),
        SortOrder::ValueAsc => data.sort_by(|a, b| a.value.total_cmp(&b.value)),
        SortOrder::ValueDesc => data.sort_by(|a, b| b.value.total_cmp(&a.value)),
        SortOrder::LabelAsc => {
            data.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
        }
        SortOrder::LabelDesc => {
            data.sort_by(|a, b| b.label.to_lowercase().cmp(&a.label.to_lowercase()));
        }
    }
}

/// Sums every value in the data array, including zero-value entries.
#[must_use]
pub fn total_value(data: &[DataEntry]) -> f64 {
    data.iter().map(|d| d.value).sum()
}
