// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportion normalization.
//!
//! Raw values become shares of their total; pre-aggregated percentages are validated and passed
//! through untouched. A remainder below 100 is left as-is and shows up as an uncovered gap in
//! the ring.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use peniko::Brush;

use crate::error::LayoutError;
use crate::weight::{CategoryWeight, Weight};

/// Slack allowed when checking that percentages add up to at most 100.
pub const PERCENT_EPSILON: f64 = 1e-9;

/// A category share expressed as a percentage of the whole ring.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedSegment {
    /// Category label.
    pub name: String,
    /// Share in `[0, 100]`. Never rounded.
    pub percentage: f64,
    /// Paint carried over from the input record.
    pub color: Brush,
    /// Fractional digits to show when the percentage is displayed.
    pub precision: usize,
}

/// Normalizes caller-owned weights into percentages, preserving input order.
///
/// `precision` is a display hint recorded on each segment (default `0`); it does not affect the
/// computed percentages.
///
/// When every record carries a [`Weight::Value`], each percentage is `value / total * 100`. A zero
/// total yields all-zero percentages rather than an error, since an empty chart is a valid state.
/// When every record carries a [`Weight::Percentage`], the numbers are checked for range and
/// returned unmodified.
///
/// Fails without producing any output if a record is invalid, names repeat, or the two weight
/// kinds are mixed.
pub fn normalize(
    weights: &[CategoryWeight],
    precision: Option<usize>,
) -> Result<Vec<NormalizedSegment>, LayoutError> {
    let precision = precision.unwrap_or(0);
    let Some(first) = weights.first() else {
        return Ok(Vec::new());
    };
    let pass_through = first.amount.is_percentage();

    let mut names = HashSet::with_capacity(weights.len());
    let mut total = 0.0;
    let mut max = 0.0_f64;
    for (index, weight) in weights.iter().enumerate() {
        if weight.amount.is_percentage() != pass_through {
            return Err(LayoutError::MixedWeights { index });
        }
        if !names.insert(weight.name.as_str()) {
            return Err(LayoutError::DuplicateName { index });
        }
        let amount = weight.amount.amount();
        if !amount.is_finite() {
            return Err(LayoutError::NonFiniteValue { index });
        }
        match weight.amount {
            Weight::Value(v) if v < 0.0 => {
                return Err(LayoutError::NegativeValue { index });
            }
            Weight::Percentage(p) if !(0.0..=100.0).contains(&p) => {
                return Err(LayoutError::PercentageOutOfRange {
                    index,
                    percentage: p,
                });
            }
            _ => {}
        }
        total += amount;
        max = max.max(amount);
    }

    if pass_through && total > 100.0 + PERCENT_EPSILON {
        return Err(LayoutError::PercentageSumExceeded { total });
    }
    if !pass_through && total == 0.0 {
        log::debug!(
            "normalize: {} categories with zero total, emitting empty shares",
            weights.len()
        );
    }

    // A sum of finite values can still overflow; shares are then taken relative to the largest
    // value, whose scaled sum is bounded by the record count.
    let scaled_total = if total.is_finite() {
        None
    } else {
        log::debug!("normalize: total overflowed, rescaling by the largest value {max}");
        Some(weights.iter().map(|w| w.amount.amount() / max).sum::<f64>())
    };

    let segments = weights
        .iter()
        .map(|weight| {
            let percentage = match (weight.amount, scaled_total) {
                (Weight::Percentage(p), _) => p,
                (Weight::Value(v), Some(scaled)) => v / max / scaled * 100.0,
                (Weight::Value(_), None) if total == 0.0 => 0.0,
                (Weight::Value(v), None) => v / total * 100.0,
            };
            NormalizedSegment {
                name: weight.name.clone(),
                percentage,
                color: weight.color.clone(),
                precision,
            }
        })
        .collect();
    Ok(segments)
}
