// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Windfall demos.
//!
//! The binaries in `examples/` drive `windfall_dragdrop` headlessly, playing
//! the roles of the layout and gesture collaborators: they invent resting
//! rectangles, replay the engine's offsets the way a layout pass would, and
//! feed scripted gesture deltas.

use kurbo::{Rect, Vec2};

/// Translates `rect` by `by`: an element's resting rectangle plus the
/// engine's offset, as a real layout pass would report it.
#[must_use]
pub fn offset_rect(rect: Rect, by: Vec2) -> Rect {
    Rect::new(rect.x0 + by.x, rect.y0 + by.y, rect.x1 + by.x, rect.y1 + by.y)
}
