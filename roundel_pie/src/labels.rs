// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! External segment labels and their leader lines.
//!
//! Each label sits `label_pie_distance` outside the pie edge along its
//! segment's bisecting angle, nudged horizontally away from the pie so text
//! never starts on top of the leader line. The leader runs from the pie edge
//! through a mid-band control point to a nub just short of the label, and is
//! rendered as a single quadratic for a gentle bend instead of a hard
//! polyline corner.
//!
//! The formulas are quadrant-symmetric: the bisecting angle is reduced to
//! its remainder within a 90° quarter and the sine/cosine roles (and signs)
//! swap per quarter. Labels in the two left quarters are additionally shifted
//! by their own measured width so the text grows away from the pie.

use kurbo::{BezPath, Point, Vec2};
use roundel_text::TextMetrics;

/// Horizontal gap between the leader nub and the label text.
const LABEL_X_MARGIN: f64 = 10.0;
/// How far short of the label the leader line stops.
const LINE_NUB: f64 = 5.0;

/// The three control points of one leader line, in absolute canvas
/// coordinates: pie edge, mid-band bend, label nub.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeaderLine {
    /// Edge, bend and nub points, in that order.
    pub points: [Point; 3],
}

/// A positioned segment label with its leader line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Text anchor position (start-anchored baseline).
    pub label_pos: Point,
    /// The connecting leader line.
    pub leader: LeaderLine,
    /// Quadrant of the bisecting angle, `0..=3` clockwise from 12 o'clock.
    pub quarter: u8,
}

/// Places one segment label and its leader line.
///
/// `angle_deg` and `next_angle_deg` are the segment's absolute start angle
/// and its successor's start angle (360 for the last segment), in compass
/// degrees; the label sits on their bisector.
#[must_use]
pub fn place_label(
    center: Point,
    outer_radius: f64,
    label_pie_distance: f64,
    angle_deg: f64,
    next_angle_deg: f64,
    label_metrics: &TextMetrics,
) -> LabelPlacement {
    let center_angle = angle_deg + (next_angle_deg - angle_deg) / 2.0;
    let quarter = ((center_angle / 90.0).floor() as u8).min(3);
    let rem = (center_angle % 90.0).to_radians();

    let r = outer_radius;
    let d = label_pie_distance;
    // The bend sits three quarters of the way out into the label gap.
    let mid = d - d / 4.0;
    let w = label_metrics.width;
    let h_off = label_metrics.height() / 5.0;

    let (s, c) = (rem.sin(), rem.cos());
    // Per-quarter (x, y) direction components at the bisecting angle.
    let (x_dir, y_dir) = match quarter {
        0 => (s, -c),
        1 => (c, s),
        2 => (-s, c),
        _ => (-c, -s),
    };
    // Left-side labels are shifted by their own width and mirrored margins.
    let (label_shift, nub_shift) = if quarter >= 2 {
        (-w - LABEL_X_MARGIN, -LINE_NUB)
    } else {
        (LABEL_X_MARGIN, LINE_NUB)
    };

    let at = |radius: f64| center + Vec2::new(x_dir * radius, y_dir * radius);

    let far = at(r + d);
    let label_pos = Point::new(far.x + label_shift, far.y);
    let edge = at(r);
    let bend = at(r + mid);
    let nub = Point::new(far.x + nub_shift, far.y - h_off);

    LabelPlacement {
        label_pos,
        leader: LeaderLine {
            points: [edge, bend, nub],
        },
        quarter,
    }
}

/// Flattens a leader line into a path: one quadratic through the bend point.
#[must_use]
pub fn leader_path(leader: &LeaderLine) -> BezPath {
    let [edge, bend, nub] = leader.points;
    let mut path = BezPath::new();
    path.move_to(edge);
    path.quad_to(bend, nub);
    path
}

#[cfg(test)]
mod tests {
    use kurbo::PathEl;

    use super::*;

    fn metrics() -> TextMetrics {
        TextMetrics {
            width: 40.0,
            ascent: 8.8,
            descent: 2.2,
        }
    }

    fn place(angle: f64, next: f64) -> LabelPlacement {
        place_label(Point::new(250.0, 250.0), 100.0, 16.0, angle, next, &metrics())
    }

    #[test]
    fn bisector_quarter_classification() {
        assert_eq!(place(0.0, 90.0).quarter, 0, "bisector 45");
        assert_eq!(place(90.0, 180.0).quarter, 1, "bisector 135");
        assert_eq!(place(180.0, 270.0).quarter, 2, "bisector 225");
        assert_eq!(place(270.0, 360.0).quarter, 3, "bisector 315");
        assert_eq!(place(45.0, 135.0).quarter, 1, "bisector 90 opens quarter 1");
    }

    #[test]
    fn leader_starts_on_the_pie_edge() {
        for (angle, next) in [(0.0, 90.0), (90.0, 180.0), (180.0, 270.0), (270.0, 360.0)] {
            let p = place(angle, next);
            let edge = p.leader.points[0] - Point::new(250.0, 250.0);
            assert!((edge.hypot() - 100.0).abs() < 1e-9, "edge at radius 100");
        }
    }

    #[test]
    fn right_side_label_sits_outside_its_nub() {
        let p = place(0.0, 90.0);
        let [_, _, nub] = p.leader.points;
        assert!(p.label_pos.x > nub.x, "text starts past the nub");
        assert!(p.label_pos.x > 250.0, "right of the pie center");
    }

    #[test]
    fn left_side_label_is_shifted_by_its_own_width() {
        let p = place(180.0, 270.0);
        let [_, _, nub] = p.leader.points;
        assert!(p.label_pos.x < nub.x, "text grows leftward, away from the pie");
        assert!(p.label_pos.x < 250.0 - 100.0, "fully left of the pie");
        // The nub is raised by a fifth of the text height.
        let far_y = p.label_pos.y;
        assert!((nub.y - (far_y - metrics().height() / 5.0)).abs() < 1e-9);
    }

    #[test]
    fn top_bisector_points_straight_up() {
        // Bisector 0°/360° degenerates to the 12 o'clock direction.
        let p = place(0.0, 0.0);
        let edge = p.leader.points[0];
        assert!((edge.x - 250.0).abs() < 1e-9);
        assert!((edge.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn leader_path_is_one_quadratic() {
        let p = place(0.0, 90.0);
        let els: Vec<PathEl> = leader_path(&p.leader).into_iter().collect();
        assert_eq!(els.len(), 2);
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(matches!(els[1], PathEl::QuadTo(..)));
    }
}
