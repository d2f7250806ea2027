// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One chart instance: configuration, memoized layout, and its own selection.

extern crate alloc;

use alloc::vec::Vec;

use crate::arc::{ArcSegment, layout};
use crate::error::LayoutError;
use crate::normalize::{NormalizedSegment, normalize};
use crate::projection::{DrawInstruction, LegendEntry, ProjectionStyle, legend};
use crate::selection::{ChartState, Selection, SelectionError, SelectionEvent};
use crate::weight::CategoryWeight;

/// Configuration for a [`DonutChart`].
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSpec {
    /// Ring radius in scene coordinates.
    pub radius: f64,
    /// Fractional digits for displayed percentages (`None` means 0).
    pub precision: Option<usize>,
    /// Projection styling.
    pub style: ProjectionStyle,
}

impl Default for DonutSpec {
    fn default() -> Self {
        Self {
            radius: 80.0,
            precision: None,
            style: ProjectionStyle::default(),
        }
    }
}

impl DonutSpec {
    /// Creates a spec for a ring of the given radius.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Sets the display precision.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the projection style.
    pub fn with_style(mut self, style: ProjectionStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Clone, Debug)]
struct CachedLayout {
    weights: Vec<CategoryWeight>,
    radius: f64,
    precision: Option<usize>,
    segments: Vec<NormalizedSegment>,
    arcs: Vec<ArcSegment>,
}

impl CachedLayout {
    fn matches(&self, weights: &[CategoryWeight], spec: &DonutSpec) -> bool {
        self.radius == spec.radius
            && self.precision == spec.precision
            && self.weights.as_slice() == weights
    }
}

/// A donut chart instance.
///
/// The chart recomputes its layout only when the input weights, radius, or precision change,
/// and owns the selection for its segments. Nothing is shared between instances.
#[derive(Clone, Debug, Default)]
pub struct DonutChart {
    spec: DonutSpec,
    selection: Selection,
    cache: Option<CachedLayout>,
}

impl DonutChart {
    /// Creates an empty chart.
    pub fn new(spec: DonutSpec) -> Self {
        Self {
            spec,
            selection: Selection::default(),
            cache: None,
        }
    }

    /// Returns the chart configuration.
    pub fn spec(&self) -> &DonutSpec {
        &self.spec
    }

    /// Replaces the configuration, re-running the layout for the current weights if needed.
    ///
    /// On failure the previous configuration and layout are kept.
    pub fn set_spec(&mut self, spec: DonutSpec) -> Result<(), LayoutError> {
        let previous = core::mem::replace(&mut self.spec, spec);
        let Some(weights) = self.cache.as_ref().map(|c| c.weights.clone()) else {
            return Ok(());
        };
        let result = self.update(&weights).map(|_| ());
        if result.is_err() {
            self.spec = previous;
        }
        result
    }

    /// Feeds new input weights and returns the laid-out segments.
    ///
    /// Identical input to the previous successful call returns the memoized layout. On failure
    /// the previous layout and selection are kept.
    pub fn update(&mut self, weights: &[CategoryWeight]) -> Result<&[ArcSegment], LayoutError> {
        let hit = self
            .cache
            .as_ref()
            .is_some_and(|c| c.matches(weights, &self.spec));
        if hit {
            log::debug!("donut layout: reusing {} segments", weights.len());
        } else {
            let segments = normalize(weights, self.spec.precision)?;
            let arcs = layout(&segments, self.spec.radius)?;
            log::debug!(
                "donut layout: {} segments at radius {}",
                arcs.len(),
                self.spec.radius
            );
            self.selection.refit(&arcs);
            self.cache = Some(CachedLayout {
                weights: weights.to_vec(),
                radius: self.spec.radius,
                precision: self.spec.precision,
                segments,
                arcs,
            });
        }
        Ok(self.segments())
    }

    /// Laid-out segments from the last successful update.
    pub fn segments(&self) -> &[ArcSegment] {
        match &self.cache {
            Some(cache) => &cache.arcs,
            None => &[],
        }
    }

    /// Normalized segments from the last successful update.
    pub fn normalized(&self) -> &[NormalizedSegment] {
        match &self.cache {
            Some(cache) => &cache.segments,
            None => &[],
        }
    }

    /// Position of the segment with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.segments().iter().position(|s| s.name == name)
    }

    /// The chart's selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current chart state.
    pub fn state(&self) -> ChartState {
        self.selection.state()
    }

    /// Selects a segment, replacing any previous selection.
    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        self.selection.select(index)
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Applies a pointer or focus event.
    pub fn handle(&mut self, event: SelectionEvent) -> Result<ChartState, SelectionError> {
        self.selection.apply(event)
    }

    /// Draw instructions for the current layout and selection.
    pub fn draw(&self) -> Vec<DrawInstruction> {
        self.spec
            .style
            .project(self.segments(), self.selection.current())
    }

    /// Legend rows for the current layout and selection.
    pub fn legend(&self) -> Vec<LegendEntry> {
        legend(self.normalized(), self.selection.current())
    }
}
