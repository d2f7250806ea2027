// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc segment layout.
//!
//! Segments are laid out consecutively around a ring of circumference `2πr`, starting from a
//! fixed reference point. Each segment is described the way a dashed circle stroke consumes it:
//! a dash length (`arc_length`) and a dash offset (`arc_offset`). The offset counts down from the
//! full circumference as segments accumulate, which fills the ring clockwise.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::f64::consts::TAU;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::Brush;

use crate::error::LayoutError;
use crate::normalize::{NormalizedSegment, PERCENT_EPSILON};

/// A laid-out slice of the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSegment {
    /// Category label.
    pub name: String,
    /// Paint carried over from the input record.
    pub color: Brush,
    /// Share of the ring in `[0, 100]`.
    pub percentage: f64,
    /// Length of the slice along the ring, in `[0, circumference]`.
    pub arc_length: f64,
    /// Dash offset positioning the slice: `circumference` minus the length of all earlier slices.
    pub arc_offset: f64,
    /// Ring circumference the slice was laid out against.
    pub circumference: f64,
}

impl ArcSegment {
    /// Ring radius this segment was laid out for.
    pub fn radius(&self) -> f64 {
        self.circumference / TAU
    }

    /// Distance along the ring from the reference point to the start of the slice.
    pub fn start_distance(&self) -> f64 {
        self.circumference - self.arc_offset
    }

    /// Distance along the ring from the reference point to the end of the slice.
    pub fn end_distance(&self) -> f64 {
        self.start_distance() + self.arc_length
    }

    /// Returns `true` for zero-length slices.
    ///
    /// These stay in every list so indices line up with the input, but nothing is drawn for them
    /// and they cannot be selected.
    pub fn is_empty(&self) -> bool {
        self.arc_length == 0.0
    }

    /// Angle spanned by the slice, in radians.
    pub fn sweep_angle(&self) -> f64 {
        self.arc_length / self.radius()
    }

    /// Angle at which the slice starts, given the angle of the reference point.
    ///
    /// Angles follow `kurbo`: with a y-down coordinate system, increasing angles run clockwise.
    pub fn start_angle(&self, reference: f64) -> f64 {
        reference + self.start_distance() / self.radius()
    }

    /// Builds a filled annular sector covering this slice.
    ///
    /// The sector is centered on the ring and `thickness` wide, matching what a stroke of that
    /// width along the ring would cover.
    pub fn sector(
        &self,
        center: impl Into<Point>,
        thickness: f64,
        reference: f64,
        tolerance: f64,
    ) -> BezPath {
        let half = thickness * 0.5;
        let outer = self.radius() + half;
        let inner = (self.radius() - half).max(0.0);
        let circle = Circle::new(center, outer);
        let segment = circle.segment(inner, self.start_angle(reference), self.sweep_angle());
        segment.path_elements(tolerance).collect()
    }
}

/// Lays out normalized segments around a ring of the given `radius`.
///
/// For each segment, in order:
/// - `arc_length = percentage / 100 * circumference`
/// - `arc_offset = circumference - cumulative`, where `cumulative` is the total length of the
///   segments before it.
///
/// Zero-percentage segments produce zero-length entries at their position. Any remainder below
/// 100% is left uncovered. Percentages adding up to more than 100 (beyond [`PERCENT_EPSILON`])
/// would overlap and are rejected. The result is deterministic for identical input.
pub fn layout(segments: &[NormalizedSegment], radius: f64) -> Result<Vec<ArcSegment>, LayoutError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(LayoutError::InvalidRadius(radius));
    }
    let circumference = TAU * radius;
    if !circumference.is_finite() {
        return Err(LayoutError::InvalidRadius(radius));
    }

    let mut percent_total = 0.0;
    let mut cumulative = 0.0;
    let mut out = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        let percentage = segment.percentage;
        if !(0.0..=100.0).contains(&percentage) {
            return Err(LayoutError::PercentageOutOfRange { index, percentage });
        }
        percent_total += percentage;
        if percent_total > 100.0 + PERCENT_EPSILON {
            return Err(LayoutError::PercentageSumExceeded {
                total: percent_total,
            });
        }
        let arc_length = percentage / 100.0 * circumference;
        out.push(ArcSegment {
            name: segment.name.clone(),
            color: segment.color.clone(),
            percentage,
            arc_length,
            arc_offset: circumference - cumulative,
            circumference,
        });
        cumulative += arc_length;
    }
    Ok(out)
}
