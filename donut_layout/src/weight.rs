// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input records supplied by the data collaborator.

extern crate alloc;

use alloc::string::String;

use peniko::Brush;

/// How much of the chart a category claims.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Weight {
    /// A raw, non-negative amount. Percentages are derived from the total of all values.
    Value(f64),
    /// A pre-aggregated share in `[0, 100]`, passed through unchanged.
    Percentage(f64),
}

impl Weight {
    /// Returns the wrapped number regardless of kind.
    pub fn amount(self) -> f64 {
        match self {
            Self::Value(v) | Self::Percentage(v) => v,
        }
    }

    /// Returns `true` for [`Weight::Percentage`].
    pub fn is_percentage(self) -> bool {
        matches!(self, Self::Percentage(_))
    }
}

/// One labeled category of a chart.
///
/// Names must be unique within a chart instance; order is significant because it decides arc
/// placement.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryWeight {
    /// Category label.
    pub name: String,
    /// Category weight.
    pub amount: Weight,
    /// Paint used for the category's arc and legend swatch.
    pub color: Brush,
}

impl CategoryWeight {
    /// Creates a record carrying a raw value.
    pub fn value(name: impl Into<String>, value: f64, color: impl Into<Brush>) -> Self {
        Self {
            name: name.into(),
            amount: Weight::Value(value),
            color: color.into(),
        }
    }

    /// Creates a record carrying a pre-aggregated percentage.
    pub fn percentage(name: impl Into<String>, percentage: f64, color: impl Into<Brush>) -> Self {
        Self {
            name: name.into(),
            amount: Weight::Percentage(percentage),
            color: color.into(),
        }
    }
}
