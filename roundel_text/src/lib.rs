// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for pie chart layout.
//!
//! The layout engine needs text extents before anything is painted: the pie
//! radius shrinks to make room for the measured title/subtitle/footer, and
//! leader lines terminate at the measured edge of each label box. Shaping and
//! glyph layout stay downstream; the engine only depends on this small
//! measurement interface.
//!
//! Implementations can be:
//! - heuristic (fast, but inaccurate),
//! - backed by a shaping engine, or
//! - backed by web platform text measurement (e.g. HTML canvas).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used by the layout stages.
///
/// `text` is treated as a single line; callers split on `\n` themselves if
/// they ever want multi-line layout.
pub trait TextMeasurer {
    /// Measures a single line of text in the chart's coordinate units.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Text styling inputs relevant to measurement.
///
/// Intentionally minimal: just enough to make layout deterministic. Richer
/// typography (weights, attributed runs, fallback chains) belongs to the
/// render surface, not to layout.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
}

impl TextStyle {
    /// Creates a style with the given `font_size` and a sans-serif family.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family or family list (e.g. `"arial, verdana"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Creates a named family from any string-ish value.
    pub fn named(name: impl AsRef<str>) -> Self {
        Self::Named(Arc::from(name.as_ref()))
    }

    /// Returns the family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Measured extents for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`, the height of the text box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A tiny heuristic measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em, so a
/// line of `n` characters at size `s` measures `0.6 * s * n` by `s`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            width: 0.6 * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_scales_with_length_and_size() {
        let m = HeuristicTextMeasurer;
        let a = m.measure("abcd", &TextStyle::new(10.0));
        assert!((a.width - 24.0).abs() < 1e-9, "4 chars at 0.6em");
        assert!((a.height() - 10.0).abs() < 1e-9, "one em tall");

        let b = m.measure("abcd", &TextStyle::new(20.0));
        assert!((b.width - 2.0 * a.width).abs() < 1e-9, "width scales with size");
    }

    #[test]
    fn named_family_round_trips_css_string() {
        let fam = FontFamily::named("arial, verdana");
        assert_eq!(fam.as_css_family(), "arial, verdana");
        assert_eq!(FontFamily::Monospace.as_css_family(), "monospace");
    }
}
