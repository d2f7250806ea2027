// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validation errors for normalization and arc layout.

use core::fmt;

/// Errors returned by [`normalize`](crate::normalize) and [`layout`](crate::layout).
///
/// Indices refer to positions in the caller's input list.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A raw value is below zero.
    NegativeValue {
        /// Offending record.
        index: usize,
    },
    /// A value or percentage is `NaN` or infinite.
    NonFiniteValue {
        /// Offending record.
        index: usize,
    },
    /// A pre-aggregated percentage lies outside `[0, 100]`.
    PercentageOutOfRange {
        /// Offending record.
        index: usize,
        /// The rejected percentage.
        percentage: f64,
    },
    /// Percentages add up to more than 100.
    PercentageSumExceeded {
        /// The computed sum.
        total: f64,
    },
    /// Raw values and pre-aggregated percentages appear in the same list.
    MixedWeights {
        /// First record whose kind differs from the first record.
        index: usize,
    },
    /// A category name appears more than once.
    DuplicateName {
        /// Second occurrence of the name.
        index: usize,
    },
    /// The ring radius is zero, negative, or not finite.
    InvalidRadius(f64),
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeValue { index } => write!(f, "value at index {index} is negative"),
            Self::NonFiniteValue { index } => write!(f, "value at index {index} is not finite"),
            Self::PercentageOutOfRange { index, percentage } => write!(
                f,
                "percentage {percentage} at index {index} is outside [0, 100]"
            ),
            Self::PercentageSumExceeded { total } => {
                write!(f, "percentages add up to {total}, more than 100")
            }
            Self::MixedWeights { index } => write!(
                f,
                "record at index {index} mixes raw values with percentages"
            ),
            Self::DuplicateName { index } => {
                write!(f, "category name at index {index} is not unique")
            }
            Self::InvalidRadius(r) => write!(f, "radius must be positive and finite, got {r}"),
        }
    }
}

impl core::error::Error for LayoutError {}
