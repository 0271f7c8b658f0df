// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-target configuration: visual scale factors, snap anchor, capacity.

use crate::snap::SnapAnchor;

/// Configuration for a drag target.
///
/// The scale factors describe the visual treatment the rendering collaborator
/// applies while the target is dragged or dropped. The engine needs them
/// because gesture deltas arrive in the scaled space: both the snap resolver
/// and [`visual_offset`](crate::DragContext::visual_offset) must convert
/// between the gesture space and the visual space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragOptions {
    /// Horizontal scale applied while the target is dragged.
    pub drag_scale_x: f64,
    /// Vertical scale applied while the target is dragged.
    pub drag_scale_y: f64,
    /// Horizontal scale applied while the target is dropped.
    pub drop_scale_x: f64,
    /// Vertical scale applied while the target is dropped.
    pub drop_scale_y: f64,
    /// Anchor alignment applied after a drop, or `None` to leave the target
    /// where it was released.
    pub snap: Option<SnapAnchor>,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            drag_scale_x: 1.0,
            drag_scale_y: 1.0,
            drop_scale_x: 1.0,
            drop_scale_y: 1.0,
            snap: None,
        }
    }
}

impl DragOptions {
    /// Sets the scale factors applied while dragged.
    #[must_use]
    pub fn with_drag_scale(mut self, x: f64, y: f64) -> Self {
        self.drag_scale_x = x;
        self.drag_scale_y = y;
        self
    }

    /// Sets the scale factors applied while dropped.
    #[must_use]
    pub fn with_drop_scale(mut self, x: f64, y: f64) -> Self {
        self.drop_scale_x = x;
        self.drop_scale_y = y;
        self
    }

    /// Sets the snap anchor applied after a drop.
    #[must_use]
    pub fn with_snap(mut self, anchor: SnapAnchor) -> Self {
        self.snap = Some(anchor);
        self
    }
}

/// Limit on how many drag targets a drop target may hold at once.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Capacity {
    /// At most this many simultaneously associated drag targets.
    ///
    /// A bound of zero is invalid and rejected at registration.
    Bounded(usize),
    /// No limit.
    Unbounded,
}

impl Capacity {
    /// Whether a drop target currently holding `current` associates can
    /// accept one more.
    pub(crate) fn admits(self, current: usize) -> bool {
        match self {
            Self::Bounded(limit) => current < limit,
            Self::Unbounded => true,
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Bounded(1)
    }
}

/// Configuration for a drop target.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DropOptions {
    /// Maximum number of simultaneously associated drag targets.
    pub capacity: Capacity,
}

impl DropOptions {
    /// Options with the given capacity.
    #[must_use]
    pub const fn with_capacity(capacity: Capacity) -> Self {
        Self { capacity }
    }
}

/// Error returned when registering a drop target with a zero capacity bound.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CapacityError;

impl core::fmt::Display for CapacityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("drop target capacity bound must be at least 1")
    }
}

impl core::error::Error for CapacityError {}
