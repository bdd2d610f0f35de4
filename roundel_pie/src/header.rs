// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header/footer placement and the pie-center resolver.
//!
//! Title and subtitle are interdependent: the subtitle's y-coordinate needs
//! the title's measured height, so both are realized as marks first and
//! positioned second. The footer depends on nothing and is placed exactly
//! once. The resulting [`HeaderLayout`] feeds [`pie_center`], which decides
//! where the pie and its labels revolve.

use kurbo::Point;
use roundel_scene::{MarkBody, MarkId, Scene, TextAnchor, TextMark};
use roundel_text::{TextMeasurer, TextMetrics, TextStyle};

use crate::settings::{FooterLocation, HeaderLocation, Settings, TextSettings};
use crate::z_order;

/// A realized header/footer/label text element: the mark handle, the final
/// anchor position, and the measured extents.
///
/// Carrying the [`MarkId`] directly removes any string-keyed lookup between
/// the stage that creates an element and the stages that read its metrics.
#[derive(Clone, Copy, Debug)]
pub struct TextBox {
    /// Handle of the realized text mark.
    pub mark: MarkId,
    /// Final anchor position (baseline coordinates).
    pub anchor: Point,
    /// Measured extents.
    pub metrics: TextMetrics,
}

/// The realized title/subtitle/footer block for one render pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderLayout {
    /// The title, when `header.title.text` is non-empty.
    pub title: Option<TextBox>,
    /// The subtitle, when `header.subtitle.text` is non-empty.
    pub subtitle: Option<TextBox>,
    /// The footer, when `footer.text` is non-empty.
    pub footer: Option<TextBox>,
}

impl HeaderLayout {
    /// Every mark owned by this block, for teardown.
    pub(crate) fn mark_ids(&self) -> impl Iterator<Item = MarkId> {
        [self.title, self.subtitle, self.footer]
            .into_iter()
            .flatten()
            .map(|b| b.mark)
    }
}

fn realize(
    scene: &mut Scene,
    measurer: &dyn TextMeasurer,
    text: &TextSettings,
    anchor: TextAnchor,
) -> (MarkId, TextMetrics) {
    let style = TextStyle::new(text.font_size).with_family(text.font.clone());
    let metrics = measurer.measure(&text.text, &style);
    let mark = TextMark::new(Point::ZERO, text.text.clone(), text.font_size)
        .with_family(text.font.clone())
        .with_anchor(anchor)
        .with_fill(text.color);
    let id = scene.insert(MarkBody::Text(mark), z_order::TITLES);
    (id, metrics)
}

fn set_anchor(scene: &mut Scene, id: MarkId, anchor: Point) {
    if let Some(t) = scene.mark_mut(id).and_then(|m| m.as_text_mut()) {
        t.pos = anchor;
    }
}

/// Realizes title, subtitle and footer as measurable marks and computes
/// their anchors.
///
/// In `PieCenter` mode a lone title (or subtitle) is centered exactly on the
/// vertical pie centerline; when both exist the title is raised by half the
/// subtitle block so the pair straddles the centerline.
pub fn place_header_and_footer(
    settings: &Settings,
    scene: &mut Scene,
    measurer: &dyn TextMeasurer,
) -> HeaderLayout {
    let pad = &settings.misc.canvas_padding;
    let w = settings.size.canvas_width;
    let h = settings.size.canvas_height;
    let ts_pad = settings.misc.title_subtitle_padding;
    let location = settings.header.location;

    let (header_x, header_anchor) = match location {
        HeaderLocation::TopLeft => (pad.left, TextAnchor::Start),
        HeaderLocation::TopCenter | HeaderLocation::PieCenter => (w / 2.0, TextAnchor::Middle),
    };

    let title = (!settings.header.title.text.is_empty())
        .then(|| realize(scene, measurer, &settings.header.title, header_anchor));
    let subtitle = (!settings.header.subtitle.text.is_empty())
        .then(|| realize(scene, measurer, &settings.header.subtitle, header_anchor));

    // Both marks exist before either is positioned; the subtitle offset
    // depends on the title's measured height.
    let mut layout = HeaderLayout::default();

    if location == HeaderLocation::PieCenter {
        let centerline = (h - pad.bottom) / 2.0 + pad.top;
        if let Some((id, metrics)) = title {
            let y = match subtitle {
                Some((_, sub)) => {
                    centerline + metrics.height() / 2.0 - (sub.height() + ts_pad) / 2.0
                }
                None => centerline + metrics.height() / 2.0,
            };
            let anchor = Point::new(header_x, y);
            set_anchor(scene, id, anchor);
            layout.title = Some(TextBox {
                mark: id,
                anchor,
                metrics,
            });
        }
        if let Some((id, metrics)) = subtitle {
            let y = match layout.title {
                Some(t) => t.anchor.y + ts_pad + metrics.height(),
                None => centerline + metrics.height() / 2.0,
            };
            let anchor = Point::new(header_x, y);
            set_anchor(scene, id, anchor);
            layout.subtitle = Some(TextBox {
                mark: id,
                anchor,
                metrics,
            });
        }
    } else {
        if let Some((id, metrics)) = title {
            let anchor = Point::new(header_x, pad.top + metrics.height());
            set_anchor(scene, id, anchor);
            layout.title = Some(TextBox {
                mark: id,
                anchor,
                metrics,
            });
        }
        if let Some((id, metrics)) = subtitle {
            let y = match layout.title {
                Some(t) => metrics.height() + ts_pad + t.anchor.y,
                None => metrics.height() + pad.top,
            };
            let anchor = Point::new(header_x, y);
            set_anchor(scene, id, anchor);
            layout.subtitle = Some(TextBox {
                mark: id,
                anchor,
                metrics,
            });
        }
    }

    // The footer never moves again: placed here, read by pie_center, done.
    if !settings.footer.text.is_empty() {
        let footer_text = TextSettings {
            text: settings.footer.text.clone(),
            color: settings.footer.color,
            font_size: settings.footer.font_size,
            font: settings.footer.font.clone(),
        };
        let anchor = match settings.footer.location {
            FooterLocation::BottomCenter => TextAnchor::Middle,
            // Right alignment is done by shifting x, not by end-anchoring.
            FooterLocation::BottomLeft | FooterLocation::BottomRight => TextAnchor::Start,
        };
        let (id, metrics) = realize(scene, measurer, &footer_text, anchor);
        let x = match settings.footer.location {
            FooterLocation::BottomLeft => pad.left,
            FooterLocation::BottomCenter => w / 2.0,
            FooterLocation::BottomRight => w - metrics.width - pad.right,
        };
        let anchor = Point::new(x, h - pad.bottom);
        set_anchor(scene, id, anchor);
        layout.footer = Some(TextBox {
            mark: id,
            anchor,
            metrics,
        });
    }

    layout
}

/// Computes the point the pie and its labels are positioned around.
///
/// Header elements push the center down (unless they overlay the pie in
/// `PieCenter` mode); a footer pulls it up by its measured height plus the
/// bottom padding.
#[must_use]
pub fn pie_center(settings: &Settings, header: &HeaderLayout) -> Point {
    let pad = &settings.misc.canvas_padding;
    let stacked = settings.header.location != HeaderLocation::PieCenter;
    let top_title = header.title.filter(|_| stacked);
    let top_subtitle = header.subtitle.filter(|_| stacked);

    let header_offset = match (top_title, top_subtitle) {
        (Some(_), Some(sub)) => sub.anchor.y + settings.misc.title_subtitle_padding,
        (Some(title), None) => title.anchor.y,
        (None, Some(sub)) => sub.anchor.y,
        (None, None) => pad.top,
    };

    let footer_offset = header
        .footer
        .map_or(0.0, |f| f.metrics.height() + pad.bottom);

    Point::new(
        (settings.size.canvas_width - pad.right) / 2.0 + pad.left,
        (settings.size.canvas_height - footer_offset) / 2.0 + header_offset,
    )
}
