// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint-order conventions for generated marks.
//!
//! Marks carry an explicit `z_index`; renderers sort by `(z_index, MarkId)`
//! for a deterministic tie-break. Leader lines sit *behind* the arcs (they
//! visually emerge from under the pie edge) while segment labels paint above
//! everything.

/// Canvas background fill.
pub const BACKGROUND: i32 = -100;
/// Leader lines from segments to their labels.
pub const LEADER_LINES: i32 = -10;
/// Pie segment wedges.
pub const SEGMENTS: i32 = 0;
/// Title, subtitle and footer text.
pub const TITLES: i32 = 80;
/// External segment labels.
pub const SEGMENT_LABELS: i32 = 90;
