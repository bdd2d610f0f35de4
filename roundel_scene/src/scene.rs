// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained scene.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Affine;

use crate::mark::{Mark, MarkBody, MarkId};
use crate::transition::{Channel, ScheduledTransition, TransitionSpec};

/// A retained collection of marks plus their recorded transitions.
///
/// Scenes here are small (one chart), so lookup is a linear scan; the ids are
/// the ownership handles the layout engine keeps between its passes.
#[derive(Debug, Default)]
pub struct Scene {
    marks: Vec<Mark>,
    transitions: Vec<ScheduledTransition>,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a mark and returns its handle.
    pub fn insert(&mut self, body: MarkBody, z_index: i32) -> MarkId {
        self.next_id += 1;
        let id = MarkId(self.next_id);
        self.marks.push(Mark {
            id,
            z_index,
            transform: Affine::IDENTITY,
            opacity: 1.0,
            body,
        });
        id
    }

    /// Returns the mark with the given id, if present.
    #[must_use]
    pub fn mark(&self, id: MarkId) -> Option<&Mark> {
        self.marks.iter().find(|m| m.id == id)
    }

    /// Mutable access to the mark with the given id.
    pub fn mark_mut(&mut self, id: MarkId) -> Option<&mut Mark> {
        self.marks.iter_mut().find(|m| m.id == id)
    }

    /// Removes a mark and any transitions recorded against it.
    ///
    /// Returns `true` if the mark existed.
    pub fn remove(&mut self, id: MarkId) -> bool {
        let before = self.marks.len();
        self.marks.retain(|m| m.id != id);
        self.transitions.retain(|t| t.mark != id);
        self.marks.len() != before
    }

    /// Removes every mark and transition. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.marks.clear();
        self.transitions.clear();
    }

    /// Number of retained marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Whether the scene holds no marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Iterates marks in insertion order.
    pub fn marks(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter()
    }

    /// Returns marks sorted by `(z_index, id)` for painting.
    #[must_use]
    pub fn in_paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.iter().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Records a transition for one channel of one mark.
    ///
    /// Last write wins: any previous transition for the same (mark, channel)
    /// is replaced, matching the "new transition supersedes in-flight one"
    /// contract.
    pub fn transition(&mut self, mark: MarkId, channel: Channel, spec: TransitionSpec) {
        if let Some(t) = self
            .transitions
            .iter_mut()
            .find(|t| t.mark == mark && t.channel == channel)
        {
            t.spec = spec;
        } else {
            self.transitions.push(ScheduledTransition {
                mark,
                channel,
                spec,
            });
        }
    }

    /// All recorded transitions, in recording order.
    #[must_use]
    pub fn transitions(&self) -> &[ScheduledTransition] {
        &self.transitions
    }

    /// Returns the recorded transition for one (mark, channel), if any.
    #[must_use]
    pub fn transition_for(&self, mark: MarkId, channel: Channel) -> Option<TransitionSpec> {
        self.transitions
            .iter()
            .find(|t| t.mark == mark && t.channel == channel)
            .map(|t| t.spec)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::{BezPath, Point};
    use peniko::color::palette::css;

    use super::*;
    use crate::mark::{PathMark, TextMark};
    use crate::transition::Easing;

    fn text_body(s: &str) -> MarkBody {
        MarkBody::Text(TextMark::new(Point::new(0.0, 0.0), s, 12.0))
    }

    #[test]
    fn paint_order_sorts_by_z_then_id() {
        let mut scene = Scene::new();
        let top = scene.insert(text_body("top"), 10);
        let bottom = scene.insert(text_body("bottom"), -10);
        let mid_a = scene.insert(text_body("a"), 0);
        let mid_b = scene.insert(text_body("b"), 0);

        let order: Vec<MarkId> = scene.in_paint_order().iter().map(|m| m.id).collect();
        assert_eq!(order, alloc::vec![bottom, mid_a, mid_b, top]);
    }

    #[test]
    fn transitions_are_last_write_wins_per_channel() {
        let mut scene = Scene::new();
        let id = scene.insert(text_body("x"), 0);

        scene.transition(id, Channel::Opacity, TransitionSpec::new(500.0, Easing::Linear));
        scene.transition(id, Channel::Transform, TransitionSpec::new(300.0, Easing::Bounce));
        scene.transition(id, Channel::Opacity, TransitionSpec::new(120.0, Easing::CubicInOut));

        assert_eq!(scene.transitions().len(), 2, "one per channel");
        let op = scene.transition_for(id, Channel::Opacity).unwrap();
        assert_eq!(op.duration_ms, 120.0);
        assert_eq!(op.easing, Easing::CubicInOut);
    }

    #[test]
    fn remove_drops_mark_and_its_transitions() {
        let mut scene = Scene::new();
        let keep = scene.insert(text_body("keep"), 0);
        let gone = scene.insert(
            MarkBody::Path(PathMark::filled(BezPath::new(), css::TOMATO)),
            0,
        );
        scene.transition(gone, Channel::Sweep, TransitionSpec::instant());

        assert!(scene.remove(gone));
        assert!(!scene.remove(gone), "second remove is a no-op");
        assert!(scene.mark(keep).is_some());
        assert!(scene.transitions().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut scene = Scene::new();
        let a = scene.insert(text_body("a"), 0);
        scene.clear();
        let b = scene.insert(text_body("b"), 0);
        assert_ne!(a, b);
    }
}
