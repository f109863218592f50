//! # Range Select Module
//!
//! Two-state machine behind the "secondary-click to start, click again to
//! finish" range gesture.
//!
//! ```text
//!   Idle --begin(ix)--> Active { anchor: ix, extent: ix }
//!   Active --extend(ix)--> Active { extent: ix }
//!   Active --commit(ix) / abort()--> Idle
//! ```
//!
//! Indices refer to the grid that was displayed when the range started, so
//! anything that rebuilds the grid must abort an active range first.

use std::ops::RangeInclusive;

/// Where the range gesture currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeSelectState {
    #[default]
    Idle,
    Active { anchor: usize, extent: usize },
}

/// Inclusive index range between two grid indices, in either order
pub fn ordered_range(a: usize, b: usize) -> RangeInclusive<usize> {
    a.min(b)..=a.max(b)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSelectController {
    state: RangeSelectState,
}

impl RangeSelectController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RangeSelectState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, RangeSelectState::Active { .. })
    }

    pub fn anchor(&self) -> Option<usize> {
        match self.state {
            RangeSelectState::Active { anchor, .. } => Some(anchor),
            RangeSelectState::Idle => None,
        }
    }

    /// Current highlighted span, if a range is in progress
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        match self.state {
            RangeSelectState::Active { anchor, extent } => Some(ordered_range(anchor, extent)),
            RangeSelectState::Idle => None,
        }
    }

    /// Start a range anchored at `index`. Only valid while idle.
    pub fn begin(&mut self, index: usize) {
        debug_assert!(!self.is_active(), "range select already active");
        self.state = RangeSelectState::Active {
            anchor: index,
            extent: index,
        };
    }

    /// Move the extent to `index` and return the new span.
    /// Ignored while idle.
    pub fn extend(&mut self, index: usize) -> Option<RangeInclusive<usize>> {
        if let RangeSelectState::Active { extent, .. } = &mut self.state {
            *extent = index;
        }
        self.range()
    }

    /// Finish the range at `index`, returning the span to apply and going
    /// back to idle. `None` if no range was active.
    pub fn commit(&mut self, index: usize) -> Option<RangeInclusive<usize>> {
        let range = self.extend(index);
        self.state = RangeSelectState::Idle;
        range
    }

    /// Drop an in-progress range. Returns whether one was active.
    pub fn abort(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = RangeSelectState::Idle;
        was_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_range_is_order_independent() {
        assert_eq!(ordered_range(10, 5), 5..=10);
        assert_eq!(ordered_range(5, 10), 5..=10);
        assert_eq!(ordered_range(7, 7), 7..=7);
    }

    #[test]
    fn test_lifecycle() {
        let mut range = RangeSelectController::new();
        assert_eq!(range.state(), RangeSelectState::Idle);
        assert_eq!(range.anchor(), None);

        range.begin(10);
        assert!(range.is_active());
        assert_eq!(range.range(), Some(10..=10));

        assert_eq!(range.extend(3), Some(3..=10));
        assert_eq!(range.anchor(), Some(10));
        assert_eq!(range.state(), RangeSelectState::Active { anchor: 10, extent: 3 });

        assert_eq!(range.commit(5), Some(5..=10));
        assert_eq!(range.state(), RangeSelectState::Idle);
        assert_eq!(range.anchor(), None);
    }

    #[test]
    fn test_idle_ignores_extend_and_commit() {
        let mut range = RangeSelectController::new();
        assert_eq!(range.extend(4), None);
        assert_eq!(range.commit(4), None);
        assert!(!range.is_active());
    }

    #[test]
    fn test_abort() {
        let mut range = RangeSelectController::new();
        assert!(!range.abort());

        range.begin(2);
        range.extend(30);
        assert!(range.abort());
        assert_eq!(range.range(), None);
    }
}
