// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional arc layout for donut and pie charts.
//!
//! Data flows one way through four small stages:
//! - **Normalization** turns caller-owned [`CategoryWeight`] records into percentages
//!   ([`normalize`]).
//! - **Arc layout** converts ordered percentages into dash lengths and offsets around a
//!   ring of fixed circumference ([`layout`]).
//! - **Selection** holds the single highlighted segment, if any ([`Selection`]).
//! - **Projection** joins segments with the selection into renderer-agnostic
//!   [`DrawInstruction`]s and [`LegendEntry`]s ([`project`], [`legend`]).
//!
//! [`DonutChart`] bundles the stages for one chart instance and memoizes the layout.
//!
//! Painting is out of scope: instructions carry `peniko` brushes and `kurbo` geometry that an
//! SVG, canvas, or GPU backend can consume directly.

#![no_std]

extern crate alloc;

mod arc;
mod chart;
mod error;
mod normalize;
mod projection;
mod selection;
mod weight;

pub use arc::{ArcSegment, layout};
pub use chart::{DonutChart, DonutSpec};
pub use error::LayoutError;
pub use normalize::{NormalizedSegment, PERCENT_EPSILON, normalize};
pub use projection::{DrawInstruction, LegendEntry, ProjectionStyle, legend, project};
pub use selection::{ChartState, Selection, SelectionError, SelectionEvent};
pub use weight::{CategoryWeight, Weight};
