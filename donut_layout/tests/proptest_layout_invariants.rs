// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for normalization, arc layout, and selection.
//!
//! 1. Normalized percentages never add up to more than 100.
//! 2. Layout keeps one segment per input and covers `circumference * sum / 100`.
//! 3. Layout of identical input is bit-identical.
//! 4. Reversing the input reverses the lengths, and offsets follow the new order.
//! 5. Zero values produce zero-length segments at their index.
//! 6. A negative value anywhere fails the whole normalization.
//! 7. The last successful selection wins.

use donut_layout::{CategoryWeight, LayoutError, Selection, layout, normalize};
use peniko::color::palette::css;
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn weights_from(values: &[f64]) -> Vec<CategoryWeight> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| CategoryWeight::value(format!("c{i}"), *v, css::SLATE_GRAY))
        .collect()
}

fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(prop_oneof![Just(0.0), 0.0..1.0e6], 0..24)
}

proptest! {
    #[test]
    fn normalized_sum_is_at_most_one_hundred(values in values_strategy()) {
        let segments = normalize(&weights_from(&values), None).unwrap();
        let sum: f64 = segments.iter().map(|s| s.percentage).sum();
        prop_assert!(sum <= 100.0 + EPS, "sum {} for {:?}", sum, values);
        prop_assert!(segments.iter().all(|s| (0.0..=100.0 + EPS).contains(&s.percentage)));
    }
}

proptest! {
    #[test]
    fn layout_covers_the_normalized_share(values in values_strategy(), radius in 0.5..500.0_f64) {
        let segments = normalize(&weights_from(&values), None).unwrap();
        let arcs = layout(&segments, radius).unwrap();
        prop_assert_eq!(arcs.len(), segments.len());

        let circumference = std::f64::consts::TAU * radius;
        let percent: f64 = segments.iter().map(|s| s.percentage).sum();
        let covered: f64 = arcs.iter().map(|a| a.arc_length).sum();
        prop_assert!((covered - circumference * percent / 100.0).abs() <= EPS * circumference);

        let mut cumulative = 0.0;
        for arc in &arcs {
            prop_assert!(arc.arc_length >= 0.0 && arc.arc_length <= circumference + EPS);
            prop_assert!((arc.arc_offset - (circumference - cumulative)).abs() <= EPS * circumference);
            cumulative += arc.arc_length;
        }
    }
}

proptest! {
    #[test]
    fn layout_is_deterministic(values in values_strategy(), radius in 0.5..500.0_f64) {
        let weights = weights_from(&values);
        let a = layout(&normalize(&weights, None).unwrap(), radius).unwrap();
        let b = layout(&normalize(&weights, None).unwrap(), radius).unwrap();
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(x.arc_length.to_bits(), y.arc_length.to_bits());
            prop_assert_eq!(x.arc_offset.to_bits(), y.arc_offset.to_bits());
        }
    }
}

proptest! {
    #[test]
    fn reversing_input_reverses_lengths(values in values_strategy()) {
        let forward = weights_from(&values);
        let mut backward = forward.clone();
        backward.reverse();

        let a = layout(&normalize(&forward, None).unwrap(), 10.0).unwrap();
        let b = layout(&normalize(&backward, None).unwrap(), 10.0).unwrap();
        for (x, y) in a.iter().zip(b.iter().rev()) {
            prop_assert_eq!(&x.name, &y.name);
            prop_assert!((x.arc_length - y.arc_length).abs() <= EPS);
        }

        let mut cumulative = 0.0;
        for arc in &b {
            prop_assert!((arc.start_distance() - cumulative).abs() <= EPS);
            cumulative += arc.arc_length;
        }
    }
}

proptest! {
    #[test]
    fn zero_values_stay_in_place(values in values_strategy(), at in any::<prop::sample::Index>()) {
        let mut values = values;
        values.push(1.0);
        let index = at.index(values.len());
        values[index] = 0.0;

        let arcs = layout(&normalize(&weights_from(&values), None).unwrap(), 10.0).unwrap();
        prop_assert_eq!(arcs.len(), values.len());
        prop_assert_eq!(arcs[index].arc_length, 0.0);
        prop_assert_eq!(&arcs[index].name, &format!("c{index}"));
    }
}

proptest! {
    #[test]
    fn negative_value_fails_everything(values in values_strategy(), at in any::<prop::sample::Index>(), neg in 1.0e-9..1.0e6_f64) {
        let mut values = values;
        values.push(1.0);
        let index = at.index(values.len());
        values[index] = -neg;

        prop_assert_eq!(
            normalize(&weights_from(&values), None),
            Err(LayoutError::NegativeValue { index })
        );
    }
}

proptest! {
    #[test]
    fn last_select_wins(len in 1usize..32, picks in prop::collection::vec(any::<prop::sample::Index>(), 1..16)) {
        let mut selection = Selection::new(len);
        let mut last = None;
        for pick in picks {
            let i = pick.index(len);
            selection.select(i).unwrap();
            last = Some(i);
        }
        prop_assert_eq!(selection.current(), last);
    }
}
