// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard donut demo for `donut_layout`.
//!
//! Loads category records (embedded mock data, or a JSON file given as the first argument), lays
//! them out once, and writes one SVG for the idle chart plus one per hovered segment.

mod data;
mod svg;

use anyhow::Context;
use donut_layout::{ChartState, DonutChart, DonutSpec, ProjectionStyle, SelectionEvent};

use crate::data::{DEFAULT_DASHBOARD, Dashboard};
use crate::svg::SvgDonut;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dashboard = match std::env::args().nth(1) {
        Some(path) => {
            let text =
                std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            Dashboard::from_json(&text)?
        }
        None => Dashboard::from_json(DEFAULT_DASHBOARD)?,
    };
    let weights = dashboard.weights()?;

    let style = ProjectionStyle::new()
        .with_stroke_width(dashboard.thickness)
        .with_emphasized_stroke_width(dashboard.thickness * 1.25)
        .with_id_base(0x500);
    let mut spec = DonutSpec::new(dashboard.radius).with_style(style);
    spec.precision = dashboard.precision;

    let mut chart = DonutChart::new(spec);
    chart
        .update(&weights)
        .with_context(|| format!("laying out {:?}", dashboard.title))?;

    let canvas = SvgDonut::new(&dashboard.title, dashboard.radius, dashboard.thickness);
    write_state(&chart, &canvas, "idle")?;

    for index in 0..chart.segments().len() {
        let name = chart.segments()[index].name.clone();
        match chart.handle(SelectionEvent::Enter(index)) {
            Ok(ChartState::Highlighted(_)) => write_state(&chart, &canvas, &slug(&name))?,
            Ok(ChartState::Idle) => {}
            Err(err) => log::info!("skipping {name:?}: {err}"),
        }
        chart.handle(SelectionEvent::Leave)?;
    }
    Ok(())
}

fn write_state(chart: &DonutChart, canvas: &SvgDonut, state: &str) -> anyhow::Result<()> {
    let path = format!("donut_{state}.svg");
    let svg = canvas.to_svg_string(&chart.draw(), &chart.legend());
    std::fs::write(&path, svg).with_context(|| format!("writing {path}"))?;
    println!("wrote {path}");
    Ok(())
}

fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
