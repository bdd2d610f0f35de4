// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An annotated pie/donut chart layout engine.
//!
//! Given labeled numeric values and a finalized [`Settings`] tree, the engine
//! produces a fully laid-out chart inside a fixed-size canvas: proportional
//! arc segments, a title/subtitle/footer block, and external labels connected
//! to their segments by bent leader lines.
//!
//! The interesting part is not drawing arcs but the layout dependencies:
//! header/footer text occupies space that moves the pie center; label boxes
//! have extents known only after measurement; and leader-line endpoints are
//! derived per segment from an angular quadrant classification. The pipeline
//! therefore runs as an explicit ordered sequence of stages inside
//! [`PieChart::render`], where every measurement-dependent stage runs
//! strictly after the stage that realizes what it measures.
//!
//! Rendering targets the retained surface in `roundel_scene`; text extents
//! come from a `roundel_text::TextMeasurer`. Neither is owned here: the
//! engine is a layout layer, not a renderer.

mod arc;
mod chart;
mod data;
mod error;
mod header;
mod labels;
mod radius;
mod settings;
mod z_order;

pub use arc::{Segment, build_segments, wedge_path};
pub use chart::{PieChart, PropValue};
pub use data::{sort_entries, total_value};
pub use error::Error;
pub use header::{HeaderLayout, TextBox, pie_center, place_header_and_footer};
pub use labels::{LabelPlacement, LeaderLine, leader_path, place_label};
pub use radius::{Radii, resolve_radii};
pub use settings::{
    Callbacks, DataEntry, EffectSettings, FooterLocation, FooterSettings, HeaderLocation,
    HeaderSettings, LabelSettings, LoadCallback, LoadEffect, LoadSettings, MiscSettings, Padding,
    PullOutEffect, PullOutSettings, RadiusSpec, SegmentCallback, SegmentEvent, Settings,
    SizeSettings, SortOrder, StyleSettings, TextSettings,
};
pub use z_order::*;
