// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The finalized settings tree consumed by the layout engine.
//!
//! Configuration merging and validation live upstream; this module only
//! defines the shape the engine reads. The one sanctioned mutation is the
//! one-time in-place data sort performed at the start of a render pass.

use core::fmt;

use peniko::Color;
use roundel_text::FontFamily;

/// One raw input datum: a labeled value plus an optional tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct DataEntry {
    /// Display label, also used as the segment key.
    pub label: String,
    /// Non-negative magnitude. Zero-value entries stay in the data array but
    /// never receive arc geometry.
    pub value: f64,
    /// Tooltip text carried through to the built segment.
    pub tooltip: String,
}

impl DataEntry {
    /// Creates an entry with an empty tooltip.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            tooltip: String::new(),
        }
    }

    /// Sets the tooltip text.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }
}

/// Ordering applied to the data array before segments are built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep the input order.
    #[default]
    None,
    /// Unbiased shuffle.
    Random,
    /// Ascending by value.
    ValueAsc,
    /// Descending by value.
    ValueDesc,
    /// Ascending by label, case-insensitive.
    LabelAsc,
    /// Descending by label, case-insensitive.
    LabelDesc,
}

/// Where the title/subtitle block anchors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderLocation {
    /// Left-aligned at the left canvas padding.
    TopLeft,
    /// Centered at half the canvas width.
    #[default]
    TopCenter,
    /// Overlaid on the vertical pie center instead of stacking above it.
    PieCenter,
}

/// Where the footer anchors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FooterLocation {
    /// Left-aligned at the left canvas padding.
    #[default]
    BottomLeft,
    /// Centered at half the canvas width.
    BottomCenter,
    /// Right-aligned: the measured footer width plus the right padding is
    /// subtracted from the canvas width.
    BottomRight,
}

/// An outer or inner pie radius, absolute or relative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusSpec {
    /// Absolute pixels, used verbatim (no bounds validation, by policy).
    Pixels(f64),
    /// Percentage in `[0, 99]`. The outer radius resolves against the
    /// smaller usable canvas dimension; the inner radius resolves against
    /// the *resolved* outer radius.
    Percent(f64),
}

impl RadiusSpec {
    /// An absolute radius in pixels.
    #[must_use]
    pub fn pixels(px: f64) -> Self {
        Self::Pixels(px)
    }

    /// A percentage radius, clamped to `[0, 99]`.
    #[must_use]
    pub fn percent(pct: f64) -> Self {
        Self::Percent(pct.clamp(0.0, 99.0))
    }

    /// Lenient parse of a radius string such as `"120"` or `"50%"`.
    ///
    /// Malformed percentages degrade to a clamped numeric value (non-digits
    /// are stripped before parsing); a fully malformed absolute spec degrades
    /// to `0` pixels. Both degradations are logged, never propagated.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let s = spec.trim();
        if s.contains('%') {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            let pct = digits.parse::<f64>().unwrap_or_else(|_| {
                log::warn!("malformed radius percentage {spec:?}; treating as 0%");
                0.0
            });
            Self::percent(pct)
        } else {
            match s.parse::<f64>() {
                Ok(px) => Self::Pixels(px),
                Err(_) => {
                    log::warn!("malformed radius spec {spec:?}; treating as 0px");
                    Self::Pixels(0.0)
                }
            }
        }
    }
}

/// Canvas size and radius specification.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeSettings {
    /// Canvas width in pixels.
    pub canvas_width: f64,
    /// Canvas height in pixels.
    pub canvas_height: f64,
    /// Outer pie radius; `None` selects the empirical default
    /// `min(usable_width, canvas_height) / 2.8`, which leaves room for
    /// labels and leader lines outside the pie.
    pub pie_outer_radius: Option<RadiusSpec>,
    /// Inner pie radius (donut hole); defaults to 0%.
    pub pie_inner_radius: RadiusSpec,
}

impl Default for SizeSettings {
    fn default() -> Self {
        Self {
            canvas_width: 500.0,
            canvas_height: 500.0,
            pie_outer_radius: None,
            pie_inner_radius: RadiusSpec::percent(0.0),
        }
    }
}

/// A single styled text element (title, subtitle).
#[derive(Clone, Debug, PartialEq)]
pub struct TextSettings {
    /// The text; empty means the element is absent.
    pub text: String,
    /// Fill color.
    pub color: Color,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font family.
    pub font: FontFamily,
}

impl TextSettings {
    fn empty(color: Color, font_size: f64) -> Self {
        Self {
            text: String::new(),
            color,
            font_size,
            font: FontFamily::SansSerif,
        }
    }
}

/// Title/subtitle block settings.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderSettings {
    /// The chart title.
    pub title: TextSettings,
    /// The chart subtitle; positioned below the title when one exists.
    pub subtitle: TextSettings,
    /// Block anchoring.
    pub location: HeaderLocation,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            title: TextSettings::empty(Color::from_rgb8(0x33, 0x33, 0x33), 18.0),
            subtitle: TextSettings::empty(Color::from_rgb8(0x66, 0x66, 0x66), 14.0),
            location: HeaderLocation::default(),
        }
    }
}

/// Footer settings. The footer never depends on other elements and is
/// positioned exactly once per render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FooterSettings {
    /// The footer text; empty means no footer.
    pub text: String,
    /// Fill color.
    pub color: Color,
    /// Font size in pixels.
    pub font_size: f64,
    /// Font family.
    pub font: FontFamily,
    /// Footer anchoring.
    pub location: FooterLocation,
}

impl Default for FooterSettings {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: Color::from_rgb8(0x66, 0x66, 0x66),
            font_size: 14.0,
            font: FontFamily::SansSerif,
            location: FooterLocation::default(),
        }
    }
}

/// Per-side canvas padding in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    /// Top padding.
    pub top: f64,
    /// Left padding.
    pub left: f64,
    /// Right padding.
    pub right: f64,
    /// Bottom padding.
    pub bottom: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 5.0,
            left: 5.0,
            right: 5.0,
            bottom: 5.0,
        }
    }
}

/// Assorted layout knobs.
#[derive(Clone, Debug, PartialEq)]
pub struct MiscSettings {
    /// Padding between the canvas edge and everything drawn.
    pub canvas_padding: Padding,
    /// Ordering applied to the data array before segment construction.
    pub data_sort_order: SortOrder,
    /// Radial gap between the pie edge and each label anchor.
    pub label_pie_distance: f64,
    /// Vertical gap between the title and the subtitle.
    pub title_subtitle_padding: f64,
}

impl Default for MiscSettings {
    fn default() -> Self {
        Self {
            canvas_padding: Padding::default(),
            data_sort_order: SortOrder::default(),
            label_pie_distance: 16.0,
            title_subtitle_padding: 8.0,
        }
    }
}

/// Segment entrance animation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadEffect {
    /// No entrance animation; segments appear at their final sweep.
    None,
    /// Sweep each segment in from zero over the configured speed.
    #[default]
    Default,
}

/// Pull-out animation selector for the click-to-expand effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PullOutEffect {
    /// No animation; the segment jumps to its pulled-out position.
    None,
    /// Overshoot-and-settle.
    #[default]
    Bounce,
    /// Constant-rate translation.
    Linear,
    /// Elastic overshoot.
    Elastic,
}

/// Entrance animation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadSettings {
    /// Which entrance effect to use.
    pub effect: LoadEffect,
    /// Duration in milliseconds.
    pub speed: f64,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            effect: LoadEffect::default(),
            speed: 1000.0,
        }
    }
}

/// Click-to-expand animation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullOutSettings {
    /// Which pull-out effect to use.
    pub effect: PullOutEffect,
    /// Expansion duration in milliseconds. Collapse always uses a fixed
    /// duration regardless of this value.
    pub speed: f64,
}

impl Default for PullOutSettings {
    fn default() -> Self {
        Self {
            effect: PullOutEffect::default(),
            speed: 300.0,
        }
    }
}

/// Animation and interaction-effect settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectSettings {
    /// Entrance animation.
    pub load: LoadSettings,
    /// Click-to-expand animation.
    pub pull_out_segment_on_click: PullOutSettings,
    /// Whether the embedding renderer should highlight segments on hover.
    /// The layout engine only carries the flag.
    pub highlight_segment_on_mouseover: bool,
    /// Label fade-in duration in milliseconds.
    pub label_fade_in_time: f64,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            load: LoadSettings::default(),
            pull_out_segment_on_click: PullOutSettings::default(),
            highlight_segment_on_mouseover: true,
            label_fade_in_time: 400.0,
        }
    }
}

/// Canvas and palette styling.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSettings {
    /// Background fill; `None` leaves the canvas transparent.
    pub background_color: Option<Color>,
    /// Segment palette, assigned by post-filter position with wraparound.
    pub colors: Vec<Color>,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            background_color: None,
            colors: default_palette(),
        }
    }
}

/// Segment label styling.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSettings {
    /// Label fill color.
    pub color: Color,
    /// Label font size in pixels.
    pub font_size: f64,
    /// Label font family.
    pub font: FontFamily,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x33, 0x33, 0x33),
            font_size: 11.0,
            font: FontFamily::SansSerif,
        }
    }
}

/// The payload handed to segment event callbacks.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentEvent {
    /// Post-filter segment index.
    pub index: usize,
    /// Whether the segment was expanded when the event fired.
    pub expanded: bool,
    /// Segment label.
    pub label: String,
    /// Segment value.
    pub value: f64,
}

/// Callback fired once the chart has finished its initial layout.
pub type LoadCallback = Box<dyn FnMut()>;
/// Callback fired for segment click/mouseover/mouseout events.
pub type SegmentCallback = Box<dyn FnMut(&SegmentEvent)>;

/// User-supplied hooks. Every invocation runs inside an isolation boundary:
/// a panicking callback is logged and discarded, never propagated into the
/// layout pipeline.
#[derive(Default)]
pub struct Callbacks {
    /// Fired after a successful render pass.
    pub onload: Option<LoadCallback>,
    /// Fired when the pointer enters a segment.
    pub on_mouseover_segment: Option<SegmentCallback>,
    /// Fired when the pointer leaves a segment.
    pub on_mouseout_segment: Option<SegmentCallback>,
    /// Fired when a segment is clicked, before any expand/collapse.
    pub on_click_segment: Option<SegmentCallback>,
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("onload", &self.onload.is_some())
            .field("on_mouseover_segment", &self.on_mouseover_segment.is_some())
            .field("on_mouseout_segment", &self.on_mouseout_segment.is_some())
            .field("on_click_segment", &self.on_click_segment.is_some())
            .finish()
    }
}

/// The full settings tree.
#[derive(Debug, Default)]
pub struct Settings {
    /// Canvas size and radii.
    pub size: SizeSettings,
    /// Title/subtitle block.
    pub header: HeaderSettings,
    /// Footer block.
    pub footer: FooterSettings,
    /// Padding, sort order and label distances.
    pub misc: MiscSettings,
    /// Animations and interaction effects.
    pub effects: EffectSettings,
    /// Background and palette.
    pub styles: StyleSettings,
    /// Segment label styling.
    pub labels: LabelSettings,
    /// User hooks.
    pub callbacks: Callbacks,
    /// The input data array. Sorted in place once per render pass.
    pub data: Vec<DataEntry>,
}

impl Settings {
    /// Creates default settings around the given data array.
    #[must_use]
    pub fn new(data: Vec<DataEntry>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }
}

/// The built-in segment palette, used when `styles.colors` is empty.
pub(crate) fn default_palette() -> Vec<Color> {
    vec![
        Color::from_rgb8(0x98, 0xab, 0xc5),
        Color::from_rgb8(0x8a, 0x89, 0xa6),
        Color::from_rgb8(0x7b, 0x68, 0x88),
        Color::from_rgb8(0x6b, 0x48, 0x6b),
        Color::from_rgb8(0xa0, 0x5d, 0x56),
        Color::from_rgb8(0xd0, 0x74, 0x3c),
        Color::from_rgb8(0xff, 0x8c, 0x00),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_percent_clamps_to_0_99() {
        assert_eq!(RadiusSpec::parse("50%"), RadiusSpec::Percent(50.0));
        assert_eq!(RadiusSpec::parse("250%"), RadiusSpec::Percent(99.0));
        assert_eq!(RadiusSpec::parse("%"), RadiusSpec::Percent(0.0));
    }

    #[test]
    fn radius_percent_strips_non_digits() {
        // Mirrors the lenient regex-strip behavior of the original parser.
        assert_eq!(RadiusSpec::parse(" 5 0 % "), RadiusSpec::Percent(50.0));
    }

    #[test]
    fn absolute_radius_parses_or_degrades_to_zero() {
        assert_eq!(RadiusSpec::parse("120"), RadiusSpec::Pixels(120.0));
        assert_eq!(RadiusSpec::parse("bogus"), RadiusSpec::Pixels(0.0));
    }

    #[test]
    fn callbacks_debug_does_not_require_fn_debug() {
        let cb = Callbacks {
            onload: Some(Box::new(|| {})),
            ..Callbacks::default()
        };
        let s = format!("{cb:?}");
        assert!(s.contains("onload: true"), "got {s}");
    }
}
