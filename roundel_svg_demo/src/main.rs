// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart demo for `roundel_pie`: lays out a donut chart of programming
//! language usage and dumps the scene to SVG, once as loaded and once with a
//! segment clicked out.

mod svg;

use peniko::Color;
use roundel_pie::{
    DataEntry, FooterLocation, HeaderLocation, PieChart, RadiusSpec, Settings, SortOrder,
};
use roundel_scene::Scene;
use roundel_text::HeuristicTextMeasurer;

fn language_usage() -> Vec<DataEntry> {
    [
        ("JavaScript", 264131.0),
        ("Ruby", 218812.0),
        ("Java", 157618.0),
        ("PHP", 114384.0),
        ("Python", 95002.0),
        ("C+", 78327.0),
        ("C", 67706.0),
        ("Objective-C", 36344.0),
        ("C#", 32170.0),
        ("Shell", 28561.0),
    ]
    .into_iter()
    .map(|(label, value)| DataEntry::new(label, value))
    .collect()
}

fn main() {
    let mut settings = Settings::new(language_usage());
    settings.size.canvas_width = 590.0;
    settings.size.canvas_height = 545.0;
    settings.size.pie_outer_radius = Some(RadiusSpec::parse("88%"));
    settings.size.pie_inner_radius = RadiusSpec::parse("50%");
    settings.header.title.text = "Programming languages".into();
    settings.header.subtitle.text = "Usage by open source repository count.".into();
    settings.header.location = HeaderLocation::TopCenter;
    settings.footer.text = "Source: a point-in-time GitHub survey.".into();
    settings.footer.location = FooterLocation::BottomLeft;
    settings.misc.data_sort_order = SortOrder::ValueDesc;
    settings.styles.background_color = Some(Color::WHITE);
    settings.callbacks.onload = Some(Box::new(|| println!("chart loaded")));

    let mut scene = Scene::new();
    let measurer = HeuristicTextMeasurer;
    let mut chart = PieChart::new(settings);
    chart.render(&mut scene, &measurer);

    let w = chart.settings().size.canvas_width;
    let h = chart.settings().size.canvas_height;
    std::fs::write("roundel_pie_demo.svg", svg::scene_to_svg(&scene, w, h))
        .expect("write roundel_pie_demo.svg");
    println!("wrote roundel_pie_demo.svg");

    // Pull the largest segment out and dump the scene again.
    chart.click_segment(&mut scene, 0);
    std::fs::write("roundel_pie_demo_expanded.svg", svg::scene_to_svg(&scene, w, h))
        .expect("write roundel_pie_demo_expanded.svg");
    println!("wrote roundel_pie_demo_expanded.svg");
}
