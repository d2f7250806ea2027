// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-segment selection driven by pointer and focus events.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::arc::ArcSegment;

/// Errors returned when a selection request is rejected.
///
/// A rejected request leaves the previous selection in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The index does not refer to a segment.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of segments.
        len: usize,
    },
    /// The segment exists but has zero length.
    Unselectable {
        /// Requested index.
        index: usize,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "segment index {index} out of range for {len} segments")
            }
            Self::Unselectable { index } => {
                write!(f, "segment {index} has zero length and cannot be selected")
            }
        }
    }
}

impl core::error::Error for SelectionError {}

/// Input events from the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Pointer or focus entered the segment at this index.
    Enter(usize),
    /// Pointer or focus left the chart's segments.
    Leave,
}

/// The two states a chart can be in between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartState {
    /// Nothing is highlighted.
    #[default]
    Idle,
    /// The segment at this index is highlighted.
    Highlighted(usize),
}

/// Holds at most one selected segment index.
///
/// Every successful [`select`](Self::select) replaces the previous selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<usize>,
    selectable: Vec<bool>,
}

impl Selection {
    /// Creates an idle selection over `len` segments, all selectable.
    pub fn new(len: usize) -> Self {
        Self {
            selected: None,
            selectable: vec![true; len],
        }
    }

    /// Creates an idle selection over laid-out segments; zero-length segments are not selectable.
    pub fn for_segments(segments: &[ArcSegment]) -> Self {
        Self {
            selected: None,
            selectable: segments.iter().map(|s| !s.is_empty()).collect(),
        }
    }

    /// Number of segments this selection indexes into.
    pub fn len(&self) -> usize {
        self.selectable.len()
    }

    /// Returns `true` if there are no segments to select.
    pub fn is_empty(&self) -> bool {
        self.selectable.is_empty()
    }

    /// Selects the segment at `index`, replacing any previous selection.
    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        match self.selectable.get(index) {
            None => Err(SelectionError::IndexOutOfRange {
                index,
                len: self.len(),
            }),
            Some(false) => Err(SelectionError::Unselectable { index }),
            Some(true) => {
                log::trace!("selection: {:?} -> {index}", self.selected);
                self.selected = Some(index);
                Ok(())
            }
        }
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        if let Some(prev) = self.selected.take() {
            log::trace!("selection: {prev} -> none");
        }
    }

    /// Currently selected index, if any.
    pub fn current(&self) -> Option<usize> {
        self.selected
    }

    /// Current chart state.
    pub fn state(&self) -> ChartState {
        match self.selected {
            Some(index) => ChartState::Highlighted(index),
            None => ChartState::Idle,
        }
    }

    /// Applies an input event and returns the resulting state.
    pub fn apply(&mut self, event: SelectionEvent) -> Result<ChartState, SelectionError> {
        match event {
            SelectionEvent::Enter(index) => self.select(index).inspect_err(|err| {
                log::warn!("selection: rejected {event:?}: {err}");
            })?,
            SelectionEvent::Leave => self.clear(),
        }
        Ok(self.state())
    }

    /// Re-fits the selection to a fresh segment list.
    ///
    /// The selection survives if its index still refers to a selectable segment, and is cleared
    /// otherwise.
    pub fn refit(&mut self, segments: &[ArcSegment]) {
        let selected = self.selected;
        *self = Self::for_segments(segments);
        if let Some(index) = selected
            && self.select(index).is_err()
        {
            log::warn!("selection: dropped index {index} after data change");
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{NormalizedSegment, layout};
    use peniko::color::palette::css;

    fn arcs(percentages: &[f64]) -> Vec<ArcSegment> {
        let segments: Vec<NormalizedSegment> = percentages
            .iter()
            .enumerate()
            .map(|(i, p)| NormalizedSegment {
                name: alloc::format!("s{i}"),
                percentage: *p,
                color: css::GOLD.into(),
                precision: 0,
            })
            .collect();
        layout(&segments, 10.0).unwrap()
    }

    #[test]
    fn starts_idle() {
        let s = Selection::new(3);
        assert_eq!(s.current(), None);
        assert_eq!(s.state(), ChartState::Idle);
    }

    #[test]
    fn last_select_wins() {
        let mut s = Selection::new(3);
        s.select(0).unwrap();
        s.select(2).unwrap();
        assert_eq!(s.current(), Some(2));
        assert_eq!(s.state(), ChartState::Highlighted(2));
    }

    #[test]
    fn out_of_range_select_keeps_prior_state() {
        let mut s = Selection::new(2);
        s.select(1).unwrap();
        assert_eq!(
            s.select(5),
            Err(SelectionError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(s.current(), Some(1));
    }

    #[test]
    fn zero_length_segments_are_unselectable() {
        let mut s = Selection::for_segments(&arcs(&[50.0, 0.0, 50.0]));
        assert_eq!(s.len(), 3);
        assert_eq!(s.select(1), Err(SelectionError::Unselectable { index: 1 }));
        assert_eq!(s.current(), None);
        s.select(2).unwrap();
    }

    #[test]
    fn enter_and_leave_events_toggle_state() {
        let mut s = Selection::new(2);
        assert_eq!(
            s.apply(SelectionEvent::Enter(1)),
            Ok(ChartState::Highlighted(1))
        );
        assert_eq!(s.apply(SelectionEvent::Leave), Ok(ChartState::Idle));
        assert_eq!(s.apply(SelectionEvent::Leave), Ok(ChartState::Idle));
        assert!(s.apply(SelectionEvent::Enter(9)).is_err());
        assert_eq!(s.state(), ChartState::Idle);
    }

    #[test]
    fn refit_keeps_or_drops_selection() {
        let mut s = Selection::for_segments(&arcs(&[30.0, 30.0, 40.0]));
        s.select(2).unwrap();

        s.refit(&arcs(&[10.0, 20.0, 70.0, 0.0]));
        assert_eq!(s.current(), Some(2));
        assert_eq!(s.len(), 4);

        s.refit(&arcs(&[10.0, 90.0]));
        assert_eq!(s.current(), None);

        s.select(1).unwrap();
        s.refit(&arcs(&[100.0, 0.0]));
        assert_eq!(s.current(), None);
    }
}
