// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record statuses and the drop-side status derivation.

/// Gesture-derived status of a drag target.
///
/// Driven only by the gesture lifecycle (start/move/end/cancel) and reset
/// operations, never by association changes.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DragTargetStatus {
    /// At its natural layout position, no interaction in progress.
    #[default]
    Idle,
    /// Currently moved by an active gesture.
    Dragged,
    /// Released over at least one drop target.
    Dropped,
}

/// Derived status of a drop target.
///
/// A pure projection of the statuses of the currently associated drag
/// targets; see [`DropTargetStatus::derive`]. It is never directly settable.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DropTargetStatus {
    /// No associated drag target is dragged or dropped.
    #[default]
    Idle,
    /// At least one associated drag target is mid-drag over this target.
    Hovered,
    /// Holds at least one dropped drag target, none currently dragged.
    Occupied,
}

impl DropTargetStatus {
    /// Derives a drop target's status from its associates' statuses.
    ///
    /// [`Hovered`](Self::Hovered) takes precedence over
    /// [`Occupied`](Self::Occupied): a drop target with one dragged and one
    /// already-dropped associate reads as hovered. The result is independent
    /// of iteration order.
    ///
    /// ```
    /// use windfall_dragdrop::{DragTargetStatus, DropTargetStatus};
    ///
    /// let status = DropTargetStatus::derive([
    ///     DragTargetStatus::Dropped,
    ///     DragTargetStatus::Dragged,
    /// ]);
    /// assert_eq!(status, DropTargetStatus::Hovered);
    /// ```
    #[must_use]
    pub fn derive<I: IntoIterator<Item = DragTargetStatus>>(statuses: I) -> Self {
        let mut occupied = false;
        for status in statuses {
            match status {
                DragTargetStatus::Dragged => return Self::Hovered,
                DragTargetStatus::Dropped => occupied = true,
                DragTargetStatus::Idle => {}
            }
        }
        if occupied { Self::Occupied } else { Self::Idle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_derives_idle() {
        assert_eq!(DropTargetStatus::derive([]), DropTargetStatus::Idle);
    }

    #[test]
    fn idle_associates_derive_idle() {
        let status = DropTargetStatus::derive([DragTargetStatus::Idle, DragTargetStatus::Idle]);
        assert_eq!(status, DropTargetStatus::Idle);
    }

    #[test]
    fn any_dropped_derives_occupied() {
        let status = DropTargetStatus::derive([DragTargetStatus::Idle, DragTargetStatus::Dropped]);
        assert_eq!(status, DropTargetStatus::Occupied);
    }

    #[test]
    fn dragged_wins_over_dropped_in_any_order() {
        let a = [DragTargetStatus::Dragged, DragTargetStatus::Dropped];
        let b = [DragTargetStatus::Dropped, DragTargetStatus::Dragged];
        assert_eq!(DropTargetStatus::derive(a), DropTargetStatus::Hovered);
        assert_eq!(DropTargetStatus::derive(b), DropTargetStatus::Hovered);
    }
}
