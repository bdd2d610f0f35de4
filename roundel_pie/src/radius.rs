// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie radius resolution.
//!
//! Always produces a numeric result, including degenerate (zero) radii for
//! pathological inputs; leniency here is a policy, not an accident.

use crate::settings::{Padding, RadiusSpec, SizeSettings};

/// The divisor applied to the smaller usable canvas dimension when no outer
/// radius is configured. Empirical: leaves room for labels and leader lines
/// outside the pie.
const DEFAULT_RADIUS_DIVISOR: f64 = 2.8;

/// Resolved inner and outer pie radii in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Radii {
    /// Donut hole radius; `0` for a full pie.
    pub inner: f64,
    /// Pie edge radius.
    pub outer: f64,
}

/// Resolves the final radii from the canvas size, padding and radius specs.
///
/// The usable width is the canvas width minus left/right padding; the usable
/// height is the full canvas height. A percentage outer radius resolves as
/// `floor(smallest / 100 * pct) / 2` against the smaller of the two; an
/// absolute radius is used verbatim. The inner percentage resolves against
/// the *resolved* outer radius.
#[must_use]
pub fn resolve_radii(size: &SizeSettings, padding: &Padding) -> Radii {
    let usable_w = size.canvas_width - padding.left - padding.right;
    let usable_h = size.canvas_height;
    let smallest = usable_w.min(usable_h);

    let outer = match size.pie_outer_radius {
        None => smallest / DEFAULT_RADIUS_DIVISOR,
        Some(RadiusSpec::Pixels(px)) => px,
        Some(RadiusSpec::Percent(pct)) => ((smallest / 100.0) * pct).floor() / 2.0,
    };

    let inner = match size.pie_inner_radius {
        RadiusSpec::Pixels(px) => px,
        RadiusSpec::Percent(pct) => ((outer / 100.0) * pct).floor(),
    };

    Radii { inner, outer }
}
