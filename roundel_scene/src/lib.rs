// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal retained render surface for chart layout engines.
//!
//! The chart layer creates marks (paths, text) with stable ids and reads
//! their handles back to position dependent elements; a renderer replays the
//! scene in paint order `(z_index, MarkId)`. Animations are *descriptors*:
//! the scene stores the final values immediately and records a fire-and-forget
//! transition per (mark, channel) with last-write-wins semantics, so starting
//! a new transition on an element implicitly supersedes any in-flight one.
//!
//! There is no clock and no interpolation here; an embedding renderer is free
//! to animate the recorded transitions or to apply end states directly.

#![no_std]

extern crate alloc;

mod mark;
mod scene;
mod transition;

pub use mark::{Mark, MarkBody, MarkId, PathMark, TextAnchor, TextBaseline, TextMark};
pub use scene::Scene;
pub use transition::{Channel, Easing, ScheduledTransition, TransitionSpec};
