// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark types retained by the scene.

extern crate alloc;

use alloc::string::String;

use kurbo::{Affine, BezPath, Point};
use peniko::Brush;
use roundel_text::{FontFamily, TextStyle};

/// Stable identity of a retained mark.
///
/// Ids are handed out by [`crate::Scene::insert`] and never reused within a
/// scene's lifetime, so callers can hold them across layout passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    #[must_use]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start (left, for LTR text).
    #[default]
    Start,
    /// Anchor at the horizontal center.
    Middle,
    /// Anchor at the end (right, for LTR text).
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// `y` is the alphabetic baseline (SVG's default).
    #[default]
    Alphabetic,
    /// `y` is the vertical midline.
    Middle,
    /// `y` is the hanging baseline (top).
    Hanging,
}

/// A filled and/or stroked path.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path geometry in scene coordinates (before the mark transform).
    pub path: BezPath,
    /// Fill paint, if any.
    pub fill: Option<Brush>,
    /// Stroke paint, if any.
    pub stroke: Option<Brush>,
    /// Stroke width; ignored when `stroke` is `None`.
    pub stroke_width: f64,
}

impl PathMark {
    /// Creates a filled path with no stroke.
    pub fn filled(path: BezPath, fill: impl Into<Brush>) -> Self {
        Self {
            path,
            fill: Some(fill.into()),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    /// Creates a stroked path with no fill.
    pub fn stroked(path: BezPath, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            path,
            fill: None,
            stroke: Some(stroke.into()),
            stroke_width,
        }
    }

    /// Adds a stroke to this path.
    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = stroke_width;
        self
    }
}

/// A single line of text.
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Preferred font family.
    pub family: FontFamily,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

impl TextMark {
    /// Creates a text mark with default anchoring and a sans-serif family.
    pub fn new(pos: Point, text: impl Into<String>, font_size: f64) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size,
            family: FontFamily::SansSerif,
            anchor: TextAnchor::default(),
            baseline: TextBaseline::default(),
            fill: Brush::default(),
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets the horizontal anchor.
    #[must_use]
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    #[must_use]
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Returns the measurement style for this mark's text.
    #[must_use]
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font_size).with_family(self.family.clone())
    }
}

/// The payload of a retained mark.
#[derive(Clone, Debug)]
pub enum MarkBody {
    /// A filled/stroked path.
    Path(PathMark),
    /// A single line of text.
    Text(TextMark),
}

/// A retained mark: payload plus rendering state.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Paint order hint; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Transform applied to the payload at paint time.
    pub transform: Affine,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// The drawable payload.
    pub body: MarkBody,
}

impl Mark {
    /// Returns the text payload, if this is a text mark.
    #[must_use]
    pub fn as_text(&self) -> Option<&TextMark> {
        match &self.body {
            MarkBody::Text(t) => Some(t),
            MarkBody::Path(_) => None,
        }
    }

    /// Returns the path payload, if this is a path mark.
    #[must_use]
    pub fn as_path(&self) -> Option<&PathMark> {
        match &self.body {
            MarkBody::Path(p) => Some(p),
            MarkBody::Text(_) => None,
        }
    }

    /// Mutable access to the text payload, if this is a text mark.
    pub fn as_text_mut(&mut self) -> Option<&mut TextMark> {
        match &mut self.body {
            MarkBody::Text(t) => Some(t),
            MarkBody::Path(_) => None,
        }
    }
}
