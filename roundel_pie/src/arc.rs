// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment construction and wedge geometry.
//!
//! Angles throughout are compass degrees: `0` at 12 o'clock, increasing
//! clockwise. Zero-value entries are excluded here (they have no geometry)
//! but they still participate in the totals, so the angular positions of the
//! surviving segments are unchanged by the filtering.

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Color;

use crate::radius::Radii;
use crate::settings::{DataEntry, default_palette};

/// One drawable pie segment with resolved angular extent and color.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Post-filter index: position among the segments that received
    /// geometry, in data order.
    pub index: usize,
    /// Display label.
    pub label: String,
    /// The entry's value.
    pub value: f64,
    /// Tooltip text carried from the data entry.
    pub tooltip: String,
    /// Fill color assigned from the palette.
    pub color: Color,
    /// Absolute start angle in compass degrees.
    pub start_angle: f64,
    /// Absolute end angle in compass degrees.
    pub end_angle: f64,
}

impl Segment {
    /// Angular extent in degrees.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// The bisecting angle in degrees, used for label and pull-out
    /// directions.
    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep() / 2.0
    }
}

/// Cumulative rotation in degrees for the segment at `index`: the angular
/// span of everything before it.
///
/// An out-of-range index is answered with the full-array rotation and a
/// warning rather than a panic; a non-positive total yields `0`.
pub(crate) fn rotation_degrees(values: &[f64], index: usize, total: f64) -> f64 {
    if index > values.len() {
        log::warn!(
            "rotation requested for segment {index} of {}; clamping",
            values.len()
        );
    }
    if total <= 0.0 {
        return 0.0;
    }
    let preceding: f64 = values.iter().take(index).sum();
    preceding / total * 360.0
}

/// Builds the segment list from the (already sorted) data array.
///
/// Zero-value entries are skipped without disturbing the angular positions
/// of their neighbors. Colors are assigned by post-filter position with
/// palette wraparound; an empty palette falls back to the built-in one.
#[must_use]
pub fn build_segments(data: &[DataEntry], colors: &[Color], total: f64) -> Vec<Segment> {
    let fallback;
    let palette = if colors.is_empty() {
        log::warn!("empty segment palette; using the built-in palette");
        fallback = default_palette();
        &fallback
    } else {
        colors
    };

    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let mut segments = Vec::new();
    for (raw_index, entry) in data.iter().enumerate() {
        if entry.value == 0.0 {
            continue;
        }
        let start_angle = rotation_degrees(&values, raw_index, total);
        let end_angle = rotation_degrees(&values, raw_index + 1, total);
        let index = segments.len();
        segments.push(Segment {
            index,
            label: entry.label.clone(),
            value: entry.value,
            tooltip: entry.tooltip.clone(),
            color: palette[index % palette.len()],
            start_angle,
            end_angle,
        });
    }
    segments
}

/// Flattens one wedge (or annular sector, for donuts) into a path.
///
/// The wedge is built at the origin starting from 12 o'clock and sweeping
/// `central_deg` clockwise; callers position it with a translate-rotate
/// transform so pull-out animation stays a pure transform change.
#[must_use]
pub fn wedge_path(radii: &Radii, central_deg: f64, tolerance: f64) -> BezPath {
    let circle = Circle::new(Point::ZERO, radii.outer);
    circle
        .segment(radii.inner, (-90.0f64).to_radians(), central_deg.to_radians())
        .path_elements(tolerance)
        .collect()
}

#[cfg(test)]
mod tests {
    use kurbo::ParamCurve;

    use super::*;
    use crate::data::total_value;

    fn data() -> Vec<DataEntry> {
        vec![
            DataEntry::new("a", 5.0),
            DataEntry::new("b", 20.0),
            DataEntry::new("c", 1.0),
            DataEntry::new("d", 0.0),
        ]
    }

    #[test]
    fn zero_values_are_excluded_but_shift_no_angles() {
        let data = data();
        let total = total_value(&data);
        let segments = build_segments(&data, &default_palette(), total);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].label, "a");
        assert_eq!(segments[2].label, "c");
        assert_eq!(segments[0].start_angle, 0.0);
        // 5 of 26 → 69.23..°; the zero entry contributes nothing after "c".
        assert!((segments[2].end_angle - 360.0).abs() < 1e-9);
    }

    #[test]
    fn angles_are_contiguous_and_monotonic() {
        let data = data();
        let segments = build_segments(&data, &default_palette(), total_value(&data));
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
            assert!(pair[0].start_angle < pair[0].end_angle);
        }
        let sweep_sum: f64 = segments.iter().map(Segment::sweep).sum();
        assert!((sweep_sum - 360.0).abs() < 1e-9, "sweeps cover the circle");
    }

    #[test]
    fn palette_wraps_around() {
        let palette = vec![Color::from_rgb8(1, 2, 3), Color::from_rgb8(4, 5, 6)];
        let data: Vec<DataEntry> = (0..5)
            .map(|i| DataEntry::new(format!("s{i}"), 1.0))
            .collect();
        let segments = build_segments(&data, &palette, 5.0);
        assert_eq!(segments[0].color, segments[2].color);
        assert_eq!(segments[1].color, segments[3].color);
        assert_eq!(segments[0].color, segments[4].color);
    }

    #[test]
    fn empty_palette_falls_back_to_builtin() {
        let data = vec![DataEntry::new("a", 1.0)];
        let segments = build_segments(&data, &[], 1.0);
        assert_eq!(segments[0].color, default_palette()[0]);
    }

    #[test]
    fn out_of_range_rotation_clamps_to_full_circle() {
        let values = [1.0, 1.0];
        assert_eq!(rotation_degrees(&values, 99, 2.0), 360.0);
        assert_eq!(rotation_degrees(&values, 1, 2.0), 180.0);
        assert_eq!(rotation_degrees(&values, 0, 0.0), 0.0, "empty pie");
    }

    #[test]
    fn wedge_sweeps_clockwise_from_twelve_oclock() {
        let radii = Radii {
            inner: 0.0,
            outer: 100.0,
        };
        let path = wedge_path(&radii, 90.0, 0.1);
        let bbox = path.bounding_box();
        // A quarter wedge from 12 to 3 o'clock stays in the +x/-y quadrant.
        assert!(bbox.x0 >= -1.0, "left edge near the origin, got {bbox:?}");
        assert!(bbox.y1 <= 1.0, "bottom edge near the origin, got {bbox:?}");
        assert!(bbox.x1 > 99.0 && bbox.y0 < -99.0);
    }

    #[test]
    fn donut_wedge_keeps_the_hole() {
        let radii = Radii {
            inner: 50.0,
            outer: 100.0,
        };
        let path = wedge_path(&radii, 180.0, 0.1);
        // No point of the path may be inside the inner radius.
        for seg in path.segments() {
            let p = seg.eval(0.5);
            assert!(p.to_vec2().hypot() >= 49.0, "point {p:?} inside the hole");
        }
    }
}
