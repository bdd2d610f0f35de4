// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-and-forget transition descriptors.
//!
//! The scene applies final values immediately and records how a renderer
//! should get there. There is no cancellation token: recording a new
//! transition for the same (mark, channel) replaces the previous one.

use crate::MarkId;

/// Easing functions a renderer is expected to support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant-rate interpolation.
    #[default]
    Linear,
    /// Slow start and end (CSS `ease-in-out` cubic).
    CubicInOut,
    /// Overshoot-and-settle bounce.
    Bounce,
    /// Elastic overshoot.
    ElasticOut,
}

/// The animated property of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// The mark transform (translation/rotation).
    Transform,
    /// The mark opacity.
    Opacity,
    /// The angular sweep of an arc path, animated from zero to its final
    /// extent (load-in effect).
    Sweep,
}

/// How to animate one channel of one mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    /// Duration in milliseconds; `0` means apply instantly.
    pub duration_ms: f64,
    /// Easing function.
    pub easing: Easing,
}

impl TransitionSpec {
    /// Creates a transition with the given duration and easing.
    #[must_use]
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// A zero-duration transition (apply instantly).
    #[must_use]
    pub fn instant() -> Self {
        Self::new(0.0, Easing::Linear)
    }
}

/// A recorded transition: which mark, which channel, and how.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledTransition {
    /// The mark being animated.
    pub mark: MarkId,
    /// The animated property.
    pub channel: Channel,
    /// Duration and easing.
    pub spec: TransitionSpec,
}
