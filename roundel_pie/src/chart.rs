// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart orchestrator.
//!
//! [`PieChart`] owns the settings tree and, after a render pass, the handles
//! of every mark it created. A render pass runs as one explicit ordered
//! sequence of stages; each stage that depends on measured extents runs
//! strictly after the stage that realizes the thing it measures. There is no
//! hidden registry: everything later stages need is passed along or held in
//! [`PieChart`] itself.
//!
//! User callbacks run inside an isolation boundary. A panicking callback is
//! logged and swallowed; the layout state it was called about stays valid.

use std::panic::{AssertUnwindSafe, catch_unwind};

use kurbo::{Affine, Point, Rect, Shape, Vec2};
use peniko::Color;
use roundel_scene::{
    Channel, Easing, MarkBody, MarkId, PathMark, Scene, TextMark, TransitionSpec,
};
use roundel_text::{TextMeasurer, TextStyle};

use crate::arc::{Segment, build_segments, wedge_path};
use crate::data::{sort_entries, total_value};
use crate::error::Error;
use crate::header::{HeaderLayout, TextBox, pie_center, place_header_and_footer};
use crate::labels::{LabelPlacement, leader_path, place_label};
use crate::radius::{Radii, resolve_radii};
use crate::settings::{
    EffectSettings, LoadCallback, LoadEffect, LoadSettings, PullOutEffect, PullOutSettings,
    SegmentCallback, SegmentEvent, Settings,
};
use crate::z_order;

/// Curve flattening tolerance for wedges and background rects.
const ARC_TOLERANCE: f64 = 0.1;
/// How far an expanded segment is pulled out, in pixels.
const PULL_OUT_DISTANCE: f64 = 8.0;
/// Collapse duration in milliseconds, deliberately independent of the
/// configured expansion speed.
const COLLAPSE_MS: f64 = 400.0;

/// One rendered segment: the resolved geometry plus the handles of the marks
/// realizing it.
#[derive(Debug)]
struct RenderedSegment {
    segment: Segment,
    arc: MarkId,
    label: MarkId,
    leader: MarkId,
    placement: LabelPlacement,
}

/// Everything a render pass produced. Dropped wholesale on destroy.
#[derive(Debug)]
struct Rendered {
    header: HeaderLayout,
    radii: Radii,
    center: Point,
    background: Option<MarkId>,
    segments: Vec<RenderedSegment>,
    expanded: Option<usize>,
}

/// A pie/donut chart: settings plus the retained marks of the last render.
#[derive(Debug)]
pub struct PieChart {
    settings: Settings,
    rendered: Option<Rendered>,
}

impl PieChart {
    /// Creates a chart around a finalized settings tree. Nothing is drawn
    /// until [`render`](Self::render).
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            rendered: None,
        }
    }

    /// Read access to the settings tree. Live mutation goes through
    /// [`update_prop`](Self::update_prop); anything else needs a
    /// [`recreate`](Self::recreate).
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs the full layout pipeline into `scene`.
    ///
    /// Re-rendering an already-rendered chart tears the previous marks down
    /// first, so the pass is idempotent with respect to the scene contents.
    /// The `onload` callback fires (isolated) once the pass completes.
    pub fn render(&mut self, scene: &mut Scene, measurer: &dyn TextMeasurer) {
        self.destroy(scene);

        sort_entries(&mut self.settings.data, self.settings.misc.data_sort_order);

        let background = self.settings.styles.background_color.map(|color| {
            let rect = Rect::new(
                0.0,
                0.0,
                self.settings.size.canvas_width,
                self.settings.size.canvas_height,
            );
            scene.insert(
                MarkBody::Path(PathMark::filled(rect.to_path(ARC_TOLERANCE), color)),
                z_order::BACKGROUND,
            )
        });

        let header = place_header_and_footer(&self.settings, scene, measurer);
        let radii = resolve_radii(&self.settings.size, &self.settings.misc.canvas_padding);
        let center = pie_center(&self.settings, &header);

        let total = total_value(&self.settings.data);
        let segments = if total > 0.0 {
            build_segments(&self.settings.data, &self.settings.styles.colors, total)
        } else {
            log::warn!("pie total is not positive; rendering header and footer only");
            Vec::new()
        };
        // Successor start angles, needed for label bisectors. The last
        // segment's successor is the full circle.
        let next_angles: Vec<f64> = (0..segments.len())
            .map(|i| segments.get(i + 1).map_or(360.0, |s| s.start_angle))
            .collect();

        let load = load_spec(&self.settings.effects.load);
        let fade = fade_spec(&self.settings.effects);
        let labels = &self.settings.labels;
        let label_style = TextStyle::new(labels.font_size).with_family(labels.font.clone());

        let mut rendered_segments = Vec::with_capacity(segments.len());
        for (segment, next_angle) in segments.into_iter().zip(next_angles) {
            let path = wedge_path(&radii, segment.sweep(), ARC_TOLERANCE);
            let arc = scene.insert(
                MarkBody::Path(
                    PathMark::filled(path, segment.color).with_stroke(Color::WHITE, 1.0),
                ),
                z_order::SEGMENTS,
            );
            if let Some(mark) = scene.mark_mut(arc) {
                mark.transform = base_transform(center, &segment);
            }
            scene.transition(arc, Channel::Sweep, load);

            let metrics = measurer.measure(&segment.label, &label_style);
            let placement = place_label(
                center,
                radii.outer,
                self.settings.misc.label_pie_distance,
                segment.start_angle,
                next_angle,
                &metrics,
            );
            let text = TextMark::new(placement.label_pos, segment.label.clone(), labels.font_size)
                .with_family(labels.font.clone())
                .with_fill(labels.color);
            let label = scene.insert(MarkBody::Text(text), z_order::SEGMENT_LABELS);
            scene.transition(label, Channel::Opacity, fade);

            let leader = scene.insert(
                MarkBody::Path(PathMark::stroked(
                    leader_path(&placement.leader),
                    Color::from_rgb8(0x66, 0x66, 0x66),
                    1.0,
                )),
                z_order::LEADER_LINES,
            );
            scene.transition(leader, Channel::Opacity, fade);

            rendered_segments.push(RenderedSegment {
                segment,
                arc,
                label,
                leader,
                placement,
            });
        }

        self.rendered = Some(Rendered {
            header,
            radii,
            center,
            background,
            segments: rendered_segments,
            expanded: None,
        });

        if let Some(cb) = self.settings.callbacks.onload.as_mut() {
            guard("load", || cb());
        }
    }

    /// Removes every mark the last render created. A no-op when nothing is
    /// rendered; safe to call any number of times.
    pub fn destroy(&mut self, scene: &mut Scene) {
        let Some(rendered) = self.rendered.take() else {
            return;
        };
        for id in rendered.header.mark_ids() {
            scene.remove(id);
        }
        if let Some(bg) = rendered.background {
            scene.remove(bg);
        }
        for rs in &rendered.segments {
            scene.remove(rs.arc);
            scene.remove(rs.label);
            scene.remove(rs.leader);
        }
    }

    /// Tears down and re-runs the full pipeline against the current settings.
    pub fn recreate(&mut self, scene: &mut Scene, measurer: &dyn TextMeasurer) {
        self.destroy(scene);
        self.render(scene, measurer);
    }

    /// The post-filter index of the currently expanded segment, if any.
    #[must_use]
    pub fn expanded_segment(&self) -> Option<usize> {
        self.rendered.as_ref().and_then(|r| r.expanded)
    }

    /// Resolved pie center of the last render.
    #[must_use]
    pub fn center(&self) -> Option<Point> {
        self.rendered.as_ref().map(|r| r.center)
    }

    /// Resolved radii of the last render.
    #[must_use]
    pub fn radii(&self) -> Option<Radii> {
        self.rendered.as_ref().map(|r| r.radii)
    }

    /// The realized title of the last render, if one exists.
    #[must_use]
    pub fn title(&self) -> Option<TextBox> {
        self.rendered.as_ref().and_then(|r| r.header.title)
    }

    /// The `index`-th rendered segment, post-filter order.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.rendered
            .as_ref()
            .and_then(|r| r.segments.get(index))
            .map(|rs| &rs.segment)
    }

    /// Number of rendered segments (zero-value entries excluded).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.rendered.as_ref().map_or(0, |r| r.segments.len())
    }

    /// The arc mark handle of the `index`-th segment, for hit testing.
    #[must_use]
    pub fn segment_mark(&self, index: usize) -> Option<MarkId> {
        self.rendered
            .as_ref()
            .and_then(|r| r.segments.get(index))
            .map(|rs| rs.arc)
    }

    /// The label placement of the `index`-th segment.
    #[must_use]
    pub fn label_placement(&self, index: usize) -> Option<LabelPlacement> {
        self.rendered
            .as_ref()
            .and_then(|r| r.segments.get(index))
            .map(|rs| rs.placement)
    }

    /// Handles a click on the `index`-th segment.
    ///
    /// The click callback fires first, with the segment's pre-toggle state.
    /// Then the segment toggles: an expanded segment collapses back, anything
    /// else expands, collapsing whichever segment was expanded before. At
    /// most one segment is ever out.
    pub fn click_segment(&mut self, scene: &mut Scene, index: usize) {
        let Some(rendered) = self.rendered.as_mut() else {
            return;
        };
        let Some(event) = segment_event(rendered, index) else {
            log::warn!("click on unknown segment {index}");
            return;
        };
        fire(
            &mut self.settings.callbacks.on_click_segment,
            "click",
            &event,
        );

        let pull_out = self.settings.effects.pull_out_segment_on_click;
        if rendered.expanded == Some(index) {
            collapse(scene, rendered, index);
        } else {
            if let Some(previous) = rendered.expanded {
                collapse(scene, rendered, previous);
            }
            expand(scene, rendered, &pull_out, index);
        }
    }

    /// Fires the mouseover callback for the `index`-th segment.
    ///
    /// Hover highlighting itself is the renderer's job (gated by
    /// `effects.highlight_segment_on_mouseover`); the engine only dispatches.
    pub fn mouseover_segment(&mut self, index: usize) {
        let Some(rendered) = self.rendered.as_ref() else {
            return;
        };
        let Some(event) = segment_event(rendered, index) else {
            log::warn!("mouseover on unknown segment {index}");
            return;
        };
        fire(
            &mut self.settings.callbacks.on_mouseover_segment,
            "mouseover",
            &event,
        );
    }

    /// Fires the mouseout callback for the `index`-th segment.
    pub fn mouseout_segment(&mut self, index: usize) {
        let Some(rendered) = self.rendered.as_ref() else {
            return;
        };
        let Some(event) = segment_event(rendered, index) else {
            log::warn!("mouseout on unknown segment {index}");
            return;
        };
        fire(
            &mut self.settings.callbacks.on_mouseout_segment,
            "mouseout",
            &event,
        );
    }

    /// Applies a single live settings update addressed by a dotted path.
    ///
    /// Title and subtitle text swap in place when the element already exists;
    /// toggling between empty and non-empty changes which marks exist, so
    /// those cases re-run the pipeline. Callback paths swap the hook without
    /// touching the scene.
    pub fn update_prop(
        &mut self,
        scene: &mut Scene,
        measurer: &dyn TextMeasurer,
        path: &str,
        value: PropValue,
    ) -> Result<(), Error> {
        match path {
            "header.title.text" => {
                let text = expect_text(path, value)?;
                let was_empty = self.settings.header.title.text.is_empty();
                self.settings.header.title.text = text.clone();
                self.apply_header_text(scene, measurer, was_empty, text, |h| h.title);
            }
            "header.subtitle.text" => {
                let text = expect_text(path, value)?;
                let was_empty = self.settings.header.subtitle.text.is_empty();
                self.settings.header.subtitle.text = text.clone();
                self.apply_header_text(scene, measurer, was_empty, text, |h| h.subtitle);
            }
            "callbacks.onload" => {
                self.settings.callbacks.onload = expect_load_callback(path, value)?;
            }
            "callbacks.onMouseoverSegment" => {
                self.settings.callbacks.on_mouseover_segment =
                    expect_segment_callback(path, value)?;
            }
            "callbacks.onMouseoutSegment" => {
                self.settings.callbacks.on_mouseout_segment =
                    expect_segment_callback(path, value)?;
            }
            "callbacks.onClickSegment" => {
                self.settings.callbacks.on_click_segment = expect_segment_callback(path, value)?;
            }
            other => return Err(Error::UnrecognizedProperty(other.to_string())),
        }
        Ok(())
    }

    /// Applies a title/subtitle text change after the settings are updated:
    /// in place when the element's existence is unchanged, full re-render
    /// when the text toggled between empty and non-empty.
    fn apply_header_text(
        &mut self,
        scene: &mut Scene,
        measurer: &dyn TextMeasurer,
        was_empty: bool,
        text: String,
        select: fn(&HeaderLayout) -> Option<TextBox>,
    ) {
        if self.rendered.is_none() {
            return;
        }
        if was_empty != text.is_empty() {
            self.recreate(scene, measurer);
        } else if let Some(tb) = self.rendered.as_ref().and_then(|r| select(&r.header))
            && let Some(t) = scene.mark_mut(tb.mark).and_then(|m| m.as_text_mut())
        {
            t.text = text;
        }
    }
}

fn base_transform(center: Point, segment: &Segment) -> Affine {
    Affine::translate(center.to_vec2()) * Affine::rotate(segment.start_angle.to_radians())
}

fn segment_event(rendered: &Rendered, index: usize) -> Option<SegmentEvent> {
    rendered.segments.get(index).map(|rs| SegmentEvent {
        index,
        expanded: rendered.expanded == Some(index),
        label: rs.segment.label.clone(),
        value: rs.segment.value,
    })
}

fn expand(scene: &mut Scene, rendered: &mut Rendered, pull_out: &PullOutSettings, index: usize) {
    let Some(rs) = rendered.segments.get(index) else {
        return;
    };
    // Pull-out direction is the segment's bisector in the absolute frame.
    let mid = rs.segment.mid_angle().to_radians();
    let offset = Vec2::new(mid.sin(), -mid.cos()) * PULL_OUT_DISTANCE;
    if let Some(mark) = scene.mark_mut(rs.arc) {
        mark.transform = Affine::translate(rendered.center.to_vec2() + offset)
            * Affine::rotate(rs.segment.start_angle.to_radians());
    }
    scene.transition(rs.arc, Channel::Transform, pull_out_spec(pull_out));
    rendered.expanded = Some(index);
}

fn collapse(scene: &mut Scene, rendered: &mut Rendered, index: usize) {
    let Some(rs) = rendered.segments.get(index) else {
        return;
    };
    if let Some(mark) = scene.mark_mut(rs.arc) {
        mark.transform = base_transform(rendered.center, &rs.segment);
    }
    scene.transition(
        rs.arc,
        Channel::Transform,
        TransitionSpec::new(COLLAPSE_MS, Easing::CubicInOut),
    );
    if rendered.expanded == Some(index) {
        rendered.expanded = None;
    }
}

fn load_spec(load: &LoadSettings) -> TransitionSpec {
    match load.effect {
        LoadEffect::None => TransitionSpec::instant(),
        LoadEffect::Default => TransitionSpec::new(load.speed, Easing::CubicInOut),
    }
}

/// Labels fade in only when segments animate in; without a load effect they
/// appear immediately alongside the arcs.
fn fade_spec(effects: &EffectSettings) -> TransitionSpec {
    match effects.load.effect {
        LoadEffect::None => TransitionSpec::instant(),
        LoadEffect::Default => TransitionSpec::new(effects.label_fade_in_time, Easing::Linear),
    }
}

fn pull_out_spec(pull_out: &PullOutSettings) -> TransitionSpec {
    match pull_out.effect {
        PullOutEffect::None => TransitionSpec::instant(),
        PullOutEffect::Bounce => TransitionSpec::new(pull_out.speed, Easing::Bounce),
        PullOutEffect::Linear => TransitionSpec::new(pull_out.speed, Easing::Linear),
        PullOutEffect::Elastic => TransitionSpec::new(pull_out.speed, Easing::ElasticOut),
    }
}

/// Runs a user callback inside the isolation boundary.
fn guard(name: &str, f: impl FnOnce()) {
    if catch_unwind(AssertUnwindSafe(f)).is_err() {
        log::error!("{name} callback panicked; continuing");
    }
}

fn fire(callback: &mut Option<SegmentCallback>, name: &str, event: &SegmentEvent) {
    if let Some(cb) = callback.as_mut() {
        guard(name, || cb(event));
    }
}

/// A value for [`PieChart::update_prop`].
pub enum PropValue {
    /// New text for a text-bearing path.
    Text(String),
    /// New (or cleared) load callback.
    LoadCallback(Option<LoadCallback>),
    /// New (or cleared) segment event callback.
    SegmentCallback(Option<SegmentCallback>),
}

impl std::fmt::Debug for PropValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(t) => f.debug_tuple("Text").field(t).finish(),
            Self::LoadCallback(cb) => f.debug_tuple("LoadCallback").field(&cb.is_some()).finish(),
            Self::SegmentCallback(cb) => f
                .debug_tuple("SegmentCallback")
                .field(&cb.is_some())
                .finish(),
        }
    }
}

fn expect_text(path: &str, value: PropValue) -> Result<String, Error> {
    match value {
        PropValue::Text(t) => Ok(t),
        _ => Err(Error::PropertyType {
            path: path.to_string(),
            expected: "text",
        }),
    }
}

fn expect_load_callback(path: &str, value: PropValue) -> Result<Option<LoadCallback>, Error> {
    match value {
        PropValue::LoadCallback(cb) => Ok(cb),
        _ => Err(Error::PropertyType {
            path: path.to_string(),
            expected: "load callback",
        }),
    }
}

fn expect_segment_callback(path: &str, value: PropValue) -> Result<Option<SegmentCallback>, Error> {
    match value {
        PropValue::SegmentCallback(cb) => Ok(cb),
        _ => Err(Error::PropertyType {
            path: path.to_string(),
            expected: "segment callback",
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use roundel_text::HeuristicTextMeasurer;

    use super::*;
    use crate::settings::DataEntry;

    const M: HeuristicTextMeasurer = HeuristicTextMeasurer;

    fn chart() -> PieChart {
        PieChart::new(Settings::new(vec![
            DataEntry::new("a", 5.0),
            DataEntry::new("b", 20.0),
            DataEntry::new("c", 1.0),
            DataEntry::new("d", 0.0),
        ]))
    }

    #[test]
    fn render_realizes_arcs_labels_and_leaders() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.render(&mut scene, &M);

        // Three non-zero entries, three marks each; no header, no background.
        assert_eq!(chart.segment_count(), 3);
        assert_eq!(scene.len(), 9);
        // The zero-value entry stays in the data array.
        assert_eq!(chart.settings().data.len(), 4);
    }

    #[test]
    fn render_again_replaces_rather_than_accumulates() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.render(&mut scene, &M);
        let before_center = chart.center().unwrap();
        let before_labels: Vec<Point> = (0..3)
            .map(|i| chart.label_placement(i).unwrap().label_pos)
            .collect();

        chart.render(&mut scene, &M);
        assert_eq!(scene.len(), 9, "old marks removed");
        assert_eq!(chart.center().unwrap(), before_center);
        let after_labels: Vec<Point> = (0..3)
            .map(|i| chart.label_placement(i).unwrap().label_pos)
            .collect();
        assert_eq!(before_labels, after_labels, "layout is deterministic");
    }

    #[test]
    fn destroy_then_render_round_trips() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.render(&mut scene, &M);
        let radii = chart.radii().unwrap();

        chart.destroy(&mut scene);
        assert!(scene.is_empty());
        assert!(chart.radii().is_none());
        chart.destroy(&mut scene); // second destroy is a no-op

        chart.render(&mut scene, &M);
        assert_eq!(chart.radii().unwrap(), radii);
        assert_eq!(scene.len(), 9);
    }

    #[test]
    fn header_and_background_marks_are_owned_too() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.settings.header.title.text = "Chart".into();
        chart.settings.footer.text = "source: somewhere".into();
        chart.settings.styles.background_color = Some(Color::WHITE);
        chart.render(&mut scene, &M);
        assert_eq!(scene.len(), 9 + 3);

        chart.destroy(&mut scene);
        assert!(scene.is_empty());
    }

    #[test]
    fn click_moves_expansion_between_segments() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.render(&mut scene, &M);
        let center = chart.center().unwrap();
        let base_a = base_transform(center, chart.segment(0).unwrap());

        chart.click_segment(&mut scene, 0);
        assert_eq!(chart.expanded_segment(), Some(0));
        let arc_a = chart.segment_mark(0).unwrap();
        assert_ne!(scene.mark(arc_a).unwrap().transform, base_a);

        chart.click_segment(&mut scene, 1);
        assert_eq!(chart.expanded_segment(), Some(1), "b replaces a");
        assert_eq!(scene.mark(arc_a).unwrap().transform, base_a, "a is back");

        chart.click_segment(&mut scene, 1);
        assert_eq!(chart.expanded_segment(), None, "second click collapses");
    }

    #[test]
    fn click_callback_sees_pre_toggle_state() {
        let mut scene = Scene::new();
        let mut chart = chart();
        let seen: Rc<RefCell<Vec<(usize, bool)>>> = Rc::default();
        let sink = Rc::clone(&seen);
        chart.settings.callbacks.on_click_segment = Some(Box::new(move |e| {
            sink.borrow_mut().push((e.index, e.expanded));
        }));
        chart.render(&mut scene, &M);

        chart.click_segment(&mut scene, 2);
        chart.click_segment(&mut scene, 2);
        assert_eq!(*seen.borrow(), vec![(2, false), (2, true)]);
    }

    #[test]
    fn panicking_callbacks_do_not_poison_the_chart() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.settings.callbacks.onload = Some(Box::new(|| panic!("load hook")));
        chart.settings.callbacks.on_click_segment = Some(Box::new(|_| panic!("click hook")));
        chart.render(&mut scene, &M);
        assert_eq!(chart.segment_count(), 3, "render completed");

        chart.click_segment(&mut scene, 0);
        assert_eq!(chart.expanded_segment(), Some(0), "toggle still happened");
    }

    #[test]
    fn hover_dispatch_carries_segment_data() {
        let mut scene = Scene::new();
        let mut chart = chart();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let over = Rc::clone(&seen);
        let out = Rc::clone(&seen);
        chart.settings.callbacks.on_mouseover_segment = Some(Box::new(move |e| {
            over.borrow_mut().push(format!("over {}", e.label));
        }));
        chart.settings.callbacks.on_mouseout_segment = Some(Box::new(move |e| {
            out.borrow_mut().push(format!("out {}", e.label));
        }));
        chart.render(&mut scene, &M);

        chart.mouseover_segment(1);
        chart.mouseout_segment(1);
        chart.mouseover_segment(99); // ignored
        assert_eq!(*seen.borrow(), vec!["over b", "out b"]);
    }

    #[test]
    fn label_fade_follows_the_load_effect() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.render(&mut scene, &M);
        let rendered = chart.rendered.as_ref().unwrap();
        let fade = scene
            .transition_for(rendered.segments[0].label, Channel::Opacity)
            .unwrap();
        assert_eq!(fade.duration_ms, 400.0, "default load effect fades labels");

        chart.settings.effects.load.effect = LoadEffect::None;
        chart.render(&mut scene, &M);
        let rendered = chart.rendered.as_ref().unwrap();
        for rs in &rendered.segments {
            let fade = scene.transition_for(rs.label, Channel::Opacity).unwrap();
            assert_eq!(fade.duration_ms, 0.0, "no load effect, no label fade");
            let fade = scene.transition_for(rs.leader, Channel::Opacity).unwrap();
            assert_eq!(fade.duration_ms, 0.0, "leader lines appear with labels");
        }
    }

    #[test]
    fn empty_total_renders_no_segments() {
        let mut scene = Scene::new();
        let mut chart = PieChart::new(Settings::new(vec![DataEntry::new("a", 0.0)]));
        chart.settings.header.title.text = "Empty".into();
        chart.render(&mut scene, &M);
        assert_eq!(chart.segment_count(), 0);
        assert_eq!(scene.len(), 1, "title only");
    }

    #[test]
    fn update_prop_rejects_unknown_paths_and_wrong_shapes() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.render(&mut scene, &M);

        let err = chart
            .update_prop(&mut scene, &M, "size.canvasWidth", PropValue::Text("9".into()))
            .unwrap_err();
        assert!(matches!(err, Error::UnrecognizedProperty(_)));

        let err = chart
            .update_prop(
                &mut scene,
                &M,
                "header.title.text",
                PropValue::LoadCallback(None),
            )
            .unwrap_err();
        assert!(matches!(err, Error::PropertyType { .. }));
    }

    #[test]
    fn title_text_swaps_in_place_but_toggles_recreate() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.settings.header.title.text = "Before".into();
        chart.render(&mut scene, &M);
        let title_mark = chart.title().unwrap().mark;

        chart
            .update_prop(
                &mut scene,
                &M,
                "header.title.text",
                PropValue::Text("After".into()),
            )
            .unwrap();
        let title = chart.title().unwrap();
        assert_eq!(title.mark, title_mark, "same mark, new text");
        let text = scene.mark(title.mark).unwrap().as_text().unwrap();
        assert_eq!(text.text, "After");

        chart
            .update_prop(&mut scene, &M, "header.title.text", PropValue::Text(String::new()))
            .unwrap();
        assert!(chart.title().is_none(), "emptying the title recreates");
        assert_eq!(scene.len(), 9);
    }

    #[test]
    fn callback_paths_swap_hooks_live() {
        let mut scene = Scene::new();
        let mut chart = chart();
        chart.render(&mut scene, &M);

        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let sink = Rc::clone(&seen);
        chart
            .update_prop(
                &mut scene,
                &M,
                "callbacks.onClickSegment",
                PropValue::SegmentCallback(Some(Box::new(move |e| sink.borrow_mut().push(e.index)))),
            )
            .unwrap();
        chart.click_segment(&mut scene, 1);
        assert_eq!(*seen.borrow(), vec![1]);

        chart
            .update_prop(
                &mut scene,
                &M,
                "callbacks.onClickSegment",
                PropValue::SegmentCallback(None),
            )
            .unwrap();
        chart.click_segment(&mut scene, 1);
        assert_eq!(*seen.borrow(), vec![1], "cleared hook no longer fires");
    }
}
