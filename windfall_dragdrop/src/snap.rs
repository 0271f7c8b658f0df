// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap anchors: the nine canonical rectangle points used for drop alignment.

use kurbo::{Point, Rect, Vec2};

/// Anchor point of a rectangle used for snap alignment.
///
/// A closed set of nine canonical choices: the four corners, the four edge
/// midpoints, and the center. Each maps a rectangle to a point; snapping
/// aligns the drag target's anchor point with the drop target's.
///
/// Coordinates are y-down screen space as reported by the layout
/// collaborator, so "top" is the edge with the smaller `y`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SnapAnchor {
    /// Top-left corner.
    TopLeft,
    /// Midpoint of the top edge.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Midpoint of the left edge.
    CenterLeft,
    /// Center of the rectangle.
    Center,
    /// Midpoint of the right edge.
    CenterRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Midpoint of the bottom edge.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

impl SnapAnchor {
    /// All nine anchors, row by row from top-left.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::Center,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Returns this anchor's point on `rect`.
    #[must_use]
    pub fn point(self, rect: Rect) -> Point {
        let center = rect.center();
        match self {
            Self::TopLeft => Point::new(rect.x0, rect.y0),
            Self::TopCenter => Point::new(center.x, rect.y0),
            Self::TopRight => Point::new(rect.x1, rect.y0),
            Self::CenterLeft => Point::new(rect.x0, center.y),
            Self::Center => center,
            Self::CenterRight => Point::new(rect.x1, center.y),
            Self::BottomLeft => Point::new(rect.x0, rect.y1),
            Self::BottomCenter => Point::new(center.x, rect.y1),
            Self::BottomRight => Point::new(rect.x1, rect.y1),
        }
    }

    /// Visual-space offset still separating a drag target's anchor from a
    /// drop target's anchor.
    ///
    /// Zero means the two rectangles are already aligned on this anchor.
    ///
    /// ```
    /// use kurbo::{Rect, Vec2};
    /// use windfall_dragdrop::SnapAnchor;
    ///
    /// let drag = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// let drop = Rect::new(20.0, 40.0, 40.0, 60.0);
    /// assert_eq!(SnapAnchor::Center.residual(drag, drop), Vec2::new(-25.0, -45.0));
    /// ```
    #[must_use]
    pub fn residual(self, drag_rect: Rect, drop_rect: Rect) -> Vec2 {
        self.point(drag_rect) - self.point(drop_rect)
    }
}
