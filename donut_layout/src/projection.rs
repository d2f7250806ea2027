// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render projection.
//!
//! This is the only stage that knows about emphasis and display rounding. It joins laid-out
//! segments with the current selection and emits one [`DrawInstruction`] per segment, in segment
//! order, for an external drawing surface.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, Circle, Point, Shape, Stroke};
use peniko::Brush;

use crate::arc::ArcSegment;
use crate::normalize::NormalizedSegment;

/// Styling inputs for [`ProjectionStyle::project`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionStyle {
    /// Ring stroke width for segments in their normal state.
    pub stroke_width: f64,
    /// Ring stroke width for the emphasized segment.
    pub emphasized_stroke_width: f64,
    /// Alpha multiplier applied to every other segment while one is emphasized.
    pub dimmed_alpha: f32,
    /// Angle of the ring's zero-rotation reference point, in radians (`kurbo` convention).
    pub start_angle: f64,
    /// Stable-id base; each instruction uses `id_base + segment_index`.
    pub id_base: u64,
}

impl Default for ProjectionStyle {
    fn default() -> Self {
        Self {
            stroke_width: 24.0,
            emphasized_stroke_width: 30.0,
            dimmed_alpha: 0.6,
            start_angle: -FRAC_PI_2,
            id_base: 0,
        }
    }
}

impl ProjectionStyle {
    /// Creates the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the normal stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the stroke width of the emphasized segment.
    pub fn with_emphasized_stroke_width(mut self, stroke_width: f64) -> Self {
        self.emphasized_stroke_width = stroke_width;
        self
    }

    /// Sets the alpha multiplier for non-emphasized segments while a segment is emphasized.
    pub fn with_dimmed_alpha(mut self, alpha: f32) -> Self {
        self.dimmed_alpha = alpha;
        self
    }

    /// Sets the angle of the ring's reference point.
    pub fn with_start_angle(mut self, angle: f64) -> Self {
        self.start_angle = angle;
        self
    }

    /// Sets the stable-id base.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Projects segments and a selection into draw instructions.
    ///
    /// Only the segment at `selection` is emphasized. If `selection` does not name a segment,
    /// nothing is emphasized or dimmed.
    pub fn project(&self, arcs: &[ArcSegment], selection: Option<usize>) -> Vec<DrawInstruction> {
        let selection = selection.filter(|&i| i < arcs.len());
        arcs.iter()
            .enumerate()
            .map(|(index, arc)| {
                let emphasized = selection == Some(index);
                let color = match selection {
                    Some(_) if !emphasized => arc.color.clone().multiply_alpha(self.dimmed_alpha),
                    _ => arc.color.clone(),
                };
                DrawInstruction {
                    id: self.id_base + index as u64,
                    segment_index: index,
                    color,
                    dash_array: [arc.arc_length, arc.circumference],
                    dash_offset: arc.arc_offset,
                    stroke_width: if emphasized {
                        self.emphasized_stroke_width
                    } else {
                        self.stroke_width
                    },
                    emphasized,
                    start_angle: self.start_angle,
                }
            })
            .collect()
    }
}

/// Projects segments with the default [`ProjectionStyle`].
pub fn project(arcs: &[ArcSegment], selection: Option<usize>) -> Vec<DrawInstruction> {
    ProjectionStyle::default().project(arcs, selection)
}

/// A renderer-agnostic description of one ring segment.
///
/// The segment is a dashed stroke along a circle of circumference `dash_array[1]`: one dash of
/// length `dash_array[0]` positioned by `dash_offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawInstruction {
    /// Stable id, deterministic across re-renders.
    pub id: u64,
    /// Position of the segment in the input order.
    pub segment_index: usize,
    /// Stroke paint, already dimmed when another segment is emphasized.
    pub color: Brush,
    /// `[arc_length, circumference]`.
    pub dash_array: [f64; 2],
    /// The segment's arc offset.
    pub dash_offset: f64,
    /// Ring stroke width.
    pub stroke_width: f64,
    /// Whether this is the selected segment.
    pub emphasized: bool,
    /// Angle of the ring's reference point.
    pub start_angle: f64,
}

impl DrawInstruction {
    /// Returns `false` for zero-length segments, which paint nothing.
    pub fn is_visible(&self) -> bool {
        self.dash_array[0] > 0.0
    }

    /// Ring radius.
    pub fn radius(&self) -> f64 {
        self.dash_array[1] / TAU
    }

    /// The circle the dashed stroke is applied to.
    pub fn ring(&self, center: impl Into<Point>) -> Circle {
        Circle::new(center, self.radius())
    }

    /// Stroke style carrying the width and dash pattern.
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width).with_dashes(self.dash_offset, self.dash_array)
    }

    /// Filled annular sector covering the same span as the dashed stroke.
    ///
    /// Useful for backends without dash support.
    pub fn sector(&self, center: impl Into<Point>, tolerance: f64) -> BezPath {
        let radius = self.radius();
        let half = self.stroke_width * 0.5;
        let start_distance = self.dash_array[1] - self.dash_offset;
        let start = self.start_angle + start_distance / radius;
        let sweep = self.dash_array[0] / radius;
        Circle::new(center, radius + half)
            .segment((radius - half).max(0.0), start, sweep)
            .path_elements(tolerance)
            .collect()
    }
}

/// A legend row for one segment.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Position of the segment in the input order.
    pub segment_index: usize,
    /// `"<name> <percentage>%"`, rounded to the segment's display precision.
    pub label: String,
    /// Swatch paint.
    pub color: Brush,
    /// Whether this is the selected segment.
    pub emphasized: bool,
}

/// Builds legend rows, one per segment including zero-length ones.
pub fn legend(segments: &[NormalizedSegment], selection: Option<usize>) -> Vec<LegendEntry> {
    segments
        .iter()
        .enumerate()
        .map(|(index, s)| LegendEntry {
            segment_index: index,
            label: format!("{} {:.*}%", s.name, s.precision, s.percentage),
            color: s.color.clone(),
            emphasized: selection == Some(index),
        })
        .collect()
}
