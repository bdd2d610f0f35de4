// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `roundel_svg_demo`.
//!
//! Transitions recorded in the scene are ignored: a static SVG shows end
//! states only.

use kurbo::Affine;
use peniko::Brush;
use roundel_scene::{MarkBody, Scene, TextAnchor, TextBaseline};

pub(crate) fn scene_to_svg(scene: &Scene, width: f64, height: f64) -> String {
    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    ));
    out.push('\n');

    for mark in scene.in_paint_order() {
        match &mark.body {
            MarkBody::Path(p) => {
                let d = p.path.to_svg();
                out.push_str(&format!(r#"<path d="{d}""#));
                write_transform_attr(&mut out, mark.transform);
                match &p.fill {
                    Some(fill) => write_paint_attr(&mut out, "fill", fill),
                    None => out.push_str(r#" fill="none""#),
                }
                if let Some(stroke) = &p.stroke {
                    write_paint_attr(&mut out, "stroke", stroke);
                    out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                }
                write_opacity_attr(&mut out, mark.opacity);
                out.push_str("/>\n");
            }
            MarkBody::Text(t) => {
                let baseline = match t.baseline {
                    TextBaseline::Alphabetic => "alphabetic",
                    TextBaseline::Middle => "middle",
                    TextBaseline::Hanging => "hanging",
                };
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" font-size="{}" font-family="{}" dominant-baseline="{}""#,
                    t.pos.x,
                    t.pos.y,
                    t.font_size,
                    t.family.as_css_family(),
                    baseline
                ));
                out.push_str(match t.anchor {
                    TextAnchor::Start => r#" text-anchor="start""#,
                    TextAnchor::Middle => r#" text-anchor="middle""#,
                    TextAnchor::End => r#" text-anchor="end""#,
                });
                write_transform_attr(&mut out, mark.transform);
                write_paint_attr(&mut out, "fill", &t.fill);
                write_opacity_attr(&mut out, mark.opacity);
                out.push('>');
                out.push_str(&escape_xml(&t.text));
                out.push_str("</text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn write_transform_attr(out: &mut String, transform: Affine) {
    if transform == Affine::IDENTITY {
        return;
    }
    let [a, b, c, d, e, f] = transform.as_coeffs();
    out.push_str(&format!(r#" transform="matrix({a} {b} {c} {d} {e} {f})""#));
}

fn write_opacity_attr(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        out.push_str(&format!(r#" opacity="{opacity}""#));
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
