// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `donut_demo`.

use donut_layout::{DrawInstruction, LegendEntry};
use kurbo::{Point, Rect};
use peniko::Brush;

/// Curve flattening tolerance for sector paths.
const TOLERANCE: f64 = 0.1;

#[derive(Debug)]
pub(crate) struct SvgDonut {
    title: String,
    center: Point,
    outer_radius: f64,
    legend_x: f64,
    font_size: f64,
}

impl SvgDonut {
    pub(crate) fn new(title: impl Into<String>, radius: f64, thickness: f64) -> Self {
        let outer_radius = radius + thickness * 0.5;
        let pad = 20.0;
        Self {
            title: title.into(),
            center: Point::new(pad + outer_radius, pad * 2.0 + outer_radius),
            outer_radius,
            legend_x: pad * 2.0 + outer_radius * 2.0,
            font_size: 12.0,
        }
    }

    fn view_box(&self, rows: usize) -> Rect {
        let legend_h = rows as f64 * self.font_size * 1.6;
        let height = (self.center.y + self.outer_radius).max(self.center.y + legend_h) + 20.0;
        Rect::new(0.0, 0.0, self.legend_x + 180.0, height)
    }

    pub(crate) fn to_svg_string(&self, draw: &[DrawInstruction], legend: &[LegendEntry]) -> String {
        let view_box = self.view_box(legend.len());
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<text x="20" y="24" font-size="{}" font-weight="bold">{}</text>"#,
            self.font_size * 1.25,
            escape_xml(&self.title)
        ));
        out.push('\n');

        // Emphasized segment last so it paints on top of its neighbours.
        let mut order: Vec<&DrawInstruction> = draw.iter().filter(|d| d.is_visible()).collect();
        order.sort_by_key(|d| (d.emphasized, d.id));
        for d in order {
            let path = d.sector(self.center, TOLERANCE).to_svg();
            out.push_str(&format!(r#"<path id="seg-{}" d="{path}""#, d.id));
            write_paint_attr(&mut out, "fill", &d.color);
            if d.emphasized {
                out.push_str(r#" stroke="white" stroke-width="2""#);
            }
            out.push_str("/>\n");
        }

        for (row, entry) in legend.iter().enumerate() {
            let y = self.center.y - self.outer_radius + row as f64 * self.font_size * 1.6;
            let swatch = self.font_size * 0.8;
            out.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{swatch}" height="{swatch}""#,
                self.legend_x, y
            ));
            write_paint_attr(&mut out, "fill", &entry.color);
            out.push_str("/>\n");
            out.push_str(&format!(
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="hanging""#,
                self.legend_x + swatch + 6.0,
                y,
                self.font_size
            ));
            if entry.emphasized {
                out.push_str(r#" font-weight="bold""#);
            }
            out.push('>');
            out.push_str(&escape_xml(&entry.label));
            out.push_str("</text>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
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

#[cfg(test)]
mod tests {
    use donut_layout::{CategoryWeight, DonutChart, DonutSpec, SelectionEvent};
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn dimmed_segments_carry_opacity_and_legend_is_escaped() {
        let mut chart = DonutChart::new(DonutSpec::new(50.0));
        chart
            .update(&[
                CategoryWeight::value("R&D", 1.0, css::TOMATO),
                CategoryWeight::value("Ops", 1.0, css::GOLD),
            ])
            .unwrap();
        chart.handle(SelectionEvent::Enter(1)).unwrap();

        let svg = SvgDonut::new("Cost", 50.0, 24.0).to_svg_string(&chart.draw(), &chart.legend());
        assert!(svg.contains("R&amp;D 50%"));
        assert!(svg.contains(r#"fill-opacity="#));
        assert!(svg.contains(r#"stroke="white""#));
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn canvas_fits_the_ring_and_legend() {
        // Ring reaches 50 + 24 / 2 = 62; center at (82, 102), legend starts at 164.
        let canvas = SvgDonut::new("Cost", 50.0, 24.0);
        assert_eq!(canvas.outer_radius, 62.0);
        assert_eq!(canvas.view_box(2), Rect::new(0.0, 0.0, 344.0, 184.0));
        let svg = canvas.to_svg_string(&[], &[]);
        assert!(svg.contains(r#"viewBox="0 0 344 184""#));
    }
}
