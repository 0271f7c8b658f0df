// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag/drop registry: record lifecycle, association bookkeeping,
//! gesture state machine, and snap resolution.

use alloc::boxed::Box;
use kurbo::{Rect, Vec2};
use smallvec::SmallVec;

use crate::id::{DragTargetId, DropTargetId};
use crate::options::{Capacity, CapacityError, DragOptions, DropOptions};
use crate::slots::Slots;
use crate::status::{DragTargetStatus, DropTargetStatus};

type Callback<T> = Box<dyn FnMut(&T)>;

/// Association lists are tiny in practice (capacity commonly 1), so they live
/// inline and membership is an equality scan.
type AssociationList<I> = SmallVec<[I; 2]>;

struct DragTargetState<T> {
    payload: T,
    options: DragOptions,
    status: DragTargetStatus,
    offset: Vec2,
    bounds: Rect,
    /// Insertion-ordered: the last entry is the most recently associated
    /// drop target, which the snap resolver treats as innermost.
    drop_targets: AssociationList<DropTargetId>,
}

struct DropTargetState<T> {
    bounds: Rect,
    options: DropOptions,
    status: DropTargetStatus,
    drag_targets: AssociationList<DragTargetId>,
    on_added: Callback<T>,
    on_removed: Callback<T>,
}

/// Registry and engine for one drag/drop interaction space.
///
/// A `DragContext` tracks every live drag target (a payload-carrying element
/// the user can move) and drop target (a zone that reacts to drag targets
/// over it) for one logical session, generic over the payload type `T`.
/// Separate contexts are fully independent; records never associate across
/// them.
///
/// Records are stored in generational slot arenas and addressed by
/// [`DragTargetId`] / [`DropTargetId`]; records refer to each other only
/// through ids, so detaching either side is an index removal plus
/// neighbor-side cleanup rather than a dance around ownership cycles.
///
/// The context is a plain synchronous state machine. External collaborators
/// drive it through three entry-point families:
///
/// - lifecycle: [`register_drag_target`](Self::register_drag_target) /
///   [`unregister_drag_target`](Self::unregister_drag_target) and the drop
///   side equivalents, called on mount/unmount;
/// - layout: [`set_drag_bounds`](Self::set_drag_bounds) /
///   [`set_drop_bounds`](Self::set_drop_bounds), called whenever an
///   element's screen rectangle changes;
/// - gestures: [`drag_start`](Self::drag_start),
///   [`drag_move`](Self::drag_move), [`drag_end`](Self::drag_end),
///   [`drag_cancel`](Self::drag_cancel).
///
/// Two invariants hold at every return: association is mutual (a drop target
/// lists a drag target iff that drag target lists it back), and a drop
/// target never holds more associates than its capacity. Statuses are pure
/// projections of association and gesture state; there is no way to set one
/// directly.
pub struct DragContext<T> {
    drag_targets: Slots<DragTargetState<T>>,
    drop_targets: Slots<DropTargetState<T>>,
}

impl<T> DragContext<T> {
    /// Creates an empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            drag_targets: Slots::new(),
            drop_targets: Slots::new(),
        }
    }

    // --- lifecycle -------------------------------------------------------

    /// Registers a drag target carrying `payload`.
    ///
    /// Each registration is its own record: two drag targets with equal
    /// payloads stay distinct, the id is the tracking key. The payload is
    /// immutable for the record's life.
    pub fn register_drag_target(&mut self, payload: T, options: DragOptions) -> DragTargetId {
        let (idx, generation) = self.drag_targets.insert(DragTargetState {
            payload,
            options,
            status: DragTargetStatus::Idle,
            offset: Vec2::ZERO,
            bounds: Rect::ZERO,
            drop_targets: AssociationList::new(),
        });
        DragTargetId(idx, generation)
    }

    /// Removes a drag target, detaching it from every associated drop
    /// target.
    ///
    /// Each affected drop target has the association removed, its status
    /// re-derived, and its removal callback invoked with the departing
    /// payload. Unregistering an already-removed id is a no-op; unmount
    /// ordering from the rendering collaborator is not assumed race-free.
    pub fn unregister_drag_target(&mut self, id: DragTargetId) {
        let Some(state) = self.drag_targets.remove(id.0, id.1) else {
            return;
        };
        for target in state.drop_targets {
            let Some(drop) = self.drop_targets.get_mut(target.0, target.1) else {
                continue;
            };
            drop.drag_targets.retain(|d| *d != id);
            drop.status = drop_status_of(&self.drag_targets, &drop.drag_targets);
            (drop.on_removed)(&state.payload);
        }
    }

    /// Registers a drop target.
    ///
    /// `on_added` fires when a drag target is dropped onto this target, and
    /// `on_removed` when a dropped target is lifted back out or its record
    /// goes away; pass a no-op closure when removals are of no interest.
    ///
    /// A [`Capacity::Bounded`] limit of zero is malformed and rejected
    /// rather than clamped:
    ///
    /// ```
    /// use windfall_dragdrop::{Capacity, DragContext, DropOptions};
    ///
    /// let mut context = DragContext::<u32>::new();
    /// let result = context.register_drop_target(
    ///     DropOptions::with_capacity(Capacity::Bounded(0)),
    ///     |_| {},
    ///     |_| {},
    /// );
    /// assert!(result.is_err());
    /// ```
    pub fn register_drop_target(
        &mut self,
        options: DropOptions,
        on_added: impl FnMut(&T) + 'static,
        on_removed: impl FnMut(&T) + 'static,
    ) -> Result<DropTargetId, CapacityError> {
        if options.capacity == Capacity::Bounded(0) {
            return Err(CapacityError);
        }
        let (idx, generation) = self.drop_targets.insert(DropTargetState {
            bounds: Rect::ZERO,
            options,
            status: DropTargetStatus::Idle,
            drag_targets: AssociationList::new(),
            on_added: Box::new(on_added),
            on_removed: Box::new(on_removed),
        });
        Ok(DropTargetId(idx, generation))
    }

    /// Removes a drop target, detaching it from every associated drag
    /// target without firing its removal callback.
    ///
    /// A no-op for an already-removed id.
    pub fn unregister_drop_target(&mut self, id: DropTargetId) {
        let Some(state) = self.drop_targets.remove(id.0, id.1) else {
            return;
        };
        for target in state.drag_targets {
            if let Some(drag) = self.drag_targets.get_mut(target.0, target.1) {
                drag.drop_targets.retain(|d| *d != id);
            }
        }
    }

    /// Returns every drag target to its initial state and clears all
    /// associations.
    ///
    /// Each record is detached from its drop targets (firing their removal
    /// callbacks and re-deriving their statuses) and then reset to
    /// [`Idle`](DragTargetStatus::Idle) with a zero offset. Calling this
    /// twice in a row is the same as calling it once.
    pub fn reset_all(&mut self) {
        // Snapshot first: detaching mutates the collections being swept.
        for (idx, generation) in self.drag_targets.ids() {
            let id = DragTargetId(idx, generation);
            self.detach_drag_target(id);
            if let Some(drag) = self.drag_targets.get_mut(idx, generation) {
                drag.status = DragTargetStatus::Idle;
                drag.offset = Vec2::ZERO;
            }
        }
    }

    /// Removes every association of `id`, firing removal callbacks and
    /// re-deriving the affected drop targets' statuses. The record itself
    /// is left alive.
    fn detach_drag_target(&mut self, id: DragTargetId) {
        let associated = match self.drag_targets.get_mut(id.0, id.1) {
            Some(drag) => core::mem::take(&mut drag.drop_targets),
            None => return,
        };
        let Self {
            drag_targets,
            drop_targets,
        } = self;
        let Some(drag) = drag_targets.get(id.0, id.1) else {
            return;
        };
        for target in associated {
            let Some(drop) = drop_targets.get_mut(target.0, target.1) else {
                continue;
            };
            drop.drag_targets.retain(|d| *d != id);
            drop.status = drop_status_of(drag_targets, &drop.drag_targets);
            (drop.on_removed)(&drag.payload);
        }
    }

    // --- layout ----------------------------------------------------------

    /// Reports a drag target's current screen rectangle.
    ///
    /// This is the engine's main loop, to be called on every layout change
    /// (measurement, scrolling, animation, and the re-render that follows
    /// any offset change):
    ///
    /// 1. While the target is [`Dragged`](DragTargetStatus::Dragged), every
    ///    drop target whose rectangle contains the drag rectangle's center
    ///    point is associated (mutually, capacity permitting — full drop
    ///    targets silently decline, and the test reruns on the next call),
    ///    and every drop target that no longer contains the center is
    ///    dissociated. Targets in other statuses keep their associations:
    ///    only user-driven movement re-associates.
    /// 2. Every drop target's status is re-derived, association change or
    ///    not, since some other associate's status may have moved since the
    ///    last call.
    /// 3. While the target is [`Dropped`](DragTargetStatus::Dropped) and
    ///    configured with a snap anchor, the offset is nudged toward the
    ///    most recently associated drop target (the innermost, when drop
    ///    targets nest). The residual is measured in visual space and
    ///    converted back through the drag-time scale factors before being
    ///    applied. Once the residual rounds to zero on both axes the offset
    ///    is left untouched, so the layout/offset feedback loop terminates.
    ///    A zero-area rectangle (an unmeasured, off-screen target) resets
    ///    the offset instead, forcing a measurable position.
    ///
    /// Unknown or stale ids are ignored.
    pub fn set_drag_bounds(&mut self, id: DragTargetId, bounds: Rect) {
        let Self {
            drag_targets,
            drop_targets,
        } = self;
        let Some(drag) = drag_targets.get_mut(id.0, id.1) else {
            return;
        };
        drag.bounds = bounds;

        if drag.status == DragTargetStatus::Dragged {
            let center = bounds.center();
            for ((idx, generation), drop) in drop_targets.iter_mut() {
                let drop_id = DropTargetId(idx, generation);
                if drop.bounds.contains(center) {
                    if !drop.drag_targets.contains(&id)
                        && drop.options.capacity.admits(drop.drag_targets.len())
                    {
                        drag.drop_targets.push(drop_id);
                        drop.drag_targets.push(id);
                    }
                } else if let Some(pos) = drop.drag_targets.iter().position(|d| *d == id) {
                    drop.drag_targets.remove(pos);
                    if let Some(pos) = drag.drop_targets.iter().position(|d| *d == drop_id) {
                        drag.drop_targets.remove(pos);
                    }
                }
            }
        }

        for (_, drop) in drop_targets.iter_mut() {
            drop.status = drop_status_of(drag_targets, &drop.drag_targets);
        }

        let Some(drag) = drag_targets.get_mut(id.0, id.1) else {
            return;
        };
        if drag.status != DragTargetStatus::Dropped {
            return;
        }
        let Some(anchor) = drag.options.snap else {
            return;
        };
        let Some(&target) = drag.drop_targets.last() else {
            return;
        };
        let Some(drop) = drop_targets.get(target.0, target.1) else {
            return;
        };
        if bounds.width() == 0.0 || bounds.height() == 0.0 {
            // Off screen with no measured extent; there is no way to compute
            // a distance to the drop target from here. Returning to the
            // layout origin makes the target measurable again, and the next
            // bounds event snaps it back.
            drag.offset = Vec2::ZERO;
            return;
        }
        let residual = anchor.residual(bounds, drop.bounds);
        let rounded = residual.round();
        if rounded.x != 0.0 || rounded.y != 0.0 {
            // Gesture offsets live in the drag-scaled space; convert the
            // visual-space residual before applying it.
            drag.offset -= Vec2::new(
                residual.x / drag.options.drag_scale_x,
                residual.y / drag.options.drag_scale_y,
            );
        }
    }

    /// Reports a drop target's current screen rectangle.
    ///
    /// Only the stored rectangle changes here; associations reconcile on the
    /// next drag-side bounds event.
    pub fn set_drop_bounds(&mut self, id: DropTargetId, bounds: Rect) {
        if let Some(drop) = self.drop_targets.get_mut(id.0, id.1) {
            drop.bounds = bounds;
        }
    }

    // --- gestures --------------------------------------------------------

    /// Begins a drag gesture on `id`.
    ///
    /// Legal from [`Idle`](DragTargetStatus::Idle) and from
    /// [`Dropped`](DragTargetStatus::Dropped) — re-grabbing a dropped item
    /// first "lifts" it out: every associated drop target's removal callback
    /// fires before the transition. The associations themselves stay;
    /// once the center leaves a drop target's rectangle the overlap pass of
    /// [`set_drag_bounds`](Self::set_drag_bounds) dissolves them.
    ///
    /// A no-op while already dragged, and for stale ids.
    pub fn drag_start(&mut self, id: DragTargetId) {
        let Self {
            drag_targets,
            drop_targets,
        } = self;
        let Some(drag) = drag_targets.get_mut(id.0, id.1) else {
            return;
        };
        if drag.status == DragTargetStatus::Dragged {
            return;
        }
        let associated = drag.drop_targets.clone();
        for target in &associated {
            if let Some(drop) = drop_targets.get_mut(target.0, target.1) {
                (drop.on_removed)(&drag.payload);
            }
        }
        drag.status = DragTargetStatus::Dragged;
        for target in associated {
            refresh_drop_status(drag_targets, drop_targets, target);
        }
    }

    /// Accumulates an incremental gesture movement into the target's offset.
    ///
    /// Deltas are unclamped and unbounded. A no-op unless the target is
    /// currently [`Dragged`](DragTargetStatus::Dragged).
    pub fn drag_move(&mut self, id: DragTargetId, delta: Vec2) {
        if let Some(drag) = self.drag_targets.get_mut(id.0, id.1) {
            if drag.status == DragTargetStatus::Dragged {
                drag.offset += delta;
            }
        }
    }

    /// Ends a drag gesture on `id`.
    ///
    /// Released over no drop target, the record snaps back to its origin:
    /// [`Idle`](DragTargetStatus::Idle) with a zero offset. Otherwise it
    /// becomes [`Dropped`](DragTargetStatus::Dropped) and every associated
    /// drop target's added callback fires, in association order.
    ///
    /// A no-op unless the target is currently
    /// [`Dragged`](DragTargetStatus::Dragged).
    pub fn drag_end(&mut self, id: DragTargetId) {
        let Self {
            drag_targets,
            drop_targets,
        } = self;
        let Some(drag) = drag_targets.get_mut(id.0, id.1) else {
            return;
        };
        if drag.status != DragTargetStatus::Dragged {
            return;
        }
        if drag.drop_targets.is_empty() {
            drag.status = DragTargetStatus::Idle;
            drag.offset = Vec2::ZERO;
            return;
        }
        drag.status = DragTargetStatus::Dropped;
        let associated = drag.drop_targets.clone();
        for target in &associated {
            if let Some(drop) = drop_targets.get_mut(target.0, target.1) {
                (drop.on_added)(&drag.payload);
            }
        }
        for target in associated {
            refresh_drop_status(drag_targets, drop_targets, target);
        }
    }

    /// Cancels an in-progress drag gesture on `id`.
    ///
    /// Status and offset reset to [`Idle`](DragTargetStatus::Idle)/zero
    /// regardless of associations. Associations are left as they were: no
    /// containment re-check runs here, so one formed just before the cancel
    /// persists until a later drag moves the center away. Affected drop
    /// targets' statuses re-derive immediately.
    ///
    /// A no-op unless the target is currently
    /// [`Dragged`](DragTargetStatus::Dragged).
    pub fn drag_cancel(&mut self, id: DragTargetId) {
        let Self {
            drag_targets,
            drop_targets,
        } = self;
        let Some(drag) = drag_targets.get_mut(id.0, id.1) else {
            return;
        };
        if drag.status != DragTargetStatus::Dragged {
            return;
        }
        drag.status = DragTargetStatus::Idle;
        drag.offset = Vec2::ZERO;
        let associated = drag.drop_targets.clone();
        for target in associated {
            refresh_drop_status(drag_targets, drop_targets, target);
        }
    }

    // --- queries ---------------------------------------------------------

    /// Current status of a drag target, or `None` for a stale id.
    #[must_use]
    pub fn drag_status(&self, id: DragTargetId) -> Option<DragTargetStatus> {
        self.drag_targets.get(id.0, id.1).map(|d| d.status)
    }

    /// Current status of a drop target, or `None` for a stale id.
    #[must_use]
    pub fn drop_status(&self, id: DropTargetId) -> Option<DropTargetStatus> {
        self.drop_targets.get(id.0, id.1).map(|d| d.status)
    }

    /// The payload a drag target carries.
    #[must_use]
    pub fn payload(&self, id: DragTargetId) -> Option<&T> {
        self.drag_targets.get(id.0, id.1).map(|d| &d.payload)
    }

    /// A drag target's cumulative gesture-space offset from its layout
    /// position.
    #[must_use]
    pub fn drag_offset(&self, id: DragTargetId) -> Option<Vec2> {
        self.drag_targets.get(id.0, id.1).map(|d| d.offset)
    }

    /// The last rectangle reported for a drag target.
    #[must_use]
    pub fn drag_bounds(&self, id: DragTargetId) -> Option<Rect> {
        self.drag_targets.get(id.0, id.1).map(|d| d.bounds)
    }

    /// The last rectangle reported for a drop target.
    #[must_use]
    pub fn drop_bounds(&self, id: DropTargetId) -> Option<Rect> {
        self.drop_targets.get(id.0, id.1).map(|d| d.bounds)
    }

    /// The drop targets a drag target is associated with, oldest first.
    ///
    /// The last entry is the most recent association; snapping aims there.
    #[must_use]
    pub fn associated_drop_targets(&self, id: DragTargetId) -> Option<&[DropTargetId]> {
        self.drag_targets.get(id.0, id.1).map(|d| &*d.drop_targets)
    }

    /// The drag targets currently associated with a drop target.
    #[must_use]
    pub fn associated_drag_targets(&self, id: DropTargetId) -> Option<&[DragTargetId]> {
        self.drop_targets.get(id.0, id.1).map(|d| &*d.drag_targets)
    }

    /// Whether `id` refers to a live drag target.
    #[must_use]
    pub fn contains_drag_target(&self, id: DragTargetId) -> bool {
        self.drag_targets.contains(id.0, id.1)
    }

    /// Whether `id` refers to a live drop target.
    #[must_use]
    pub fn contains_drop_target(&self, id: DropTargetId) -> bool {
        self.drop_targets.contains(id.0, id.1)
    }

    /// Number of live drag targets.
    #[must_use]
    pub fn drag_target_count(&self) -> usize {
        self.drag_targets.len()
    }

    /// Number of live drop targets.
    #[must_use]
    pub fn drop_target_count(&self) -> usize {
        self.drop_targets.len()
    }

    /// The per-axis scale the renderer should apply to a drag target in its
    /// current status: the drag-time factors while dragged, the drop-time
    /// factors while dropped, identity otherwise.
    #[must_use]
    pub fn visual_scale(&self, id: DragTargetId) -> Option<(f64, f64)> {
        let drag = self.drag_targets.get(id.0, id.1)?;
        Some(match drag.status {
            DragTargetStatus::Dragged => (drag.options.drag_scale_x, drag.options.drag_scale_y),
            DragTargetStatus::Dropped => (drag.options.drop_scale_x, drag.options.drop_scale_y),
            DragTargetStatus::Idle => (1.0, 1.0),
        })
    }

    /// The whole-pixel translation the renderer should apply to a drag
    /// target.
    ///
    /// Gesture deltas accumulate in a space scaled by the drag-time factors.
    /// While the target is dropped and rendered with the drop-time factors
    /// instead, the stored offset is rescaled per axis by
    /// `drag_scale / drop_scale` so the same physical position is produced
    /// under the new scale.
    #[must_use]
    pub fn visual_offset(&self, id: DragTargetId) -> Option<Vec2> {
        let drag = self.drag_targets.get(id.0, id.1)?;
        let offset = match drag.status {
            DragTargetStatus::Idle | DragTargetStatus::Dragged => drag.offset,
            DragTargetStatus::Dropped => Vec2::new(
                drag.offset.x * drag.options.drag_scale_x / drag.options.drop_scale_x,
                drag.offset.y * drag.options.drag_scale_y / drag.options.drop_scale_y,
            ),
        };
        Some(offset.round())
    }
}

impl<T> Default for DragContext<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for DragContext<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragContext")
            .field("drag_targets", &self.drag_targets.len())
            .field("drop_targets", &self.drop_targets.len())
            .finish_non_exhaustive()
    }
}

fn drop_status_of<T>(
    drags: &Slots<DragTargetState<T>>,
    associates: &[DragTargetId],
) -> DropTargetStatus {
    DropTargetStatus::derive(
        associates
            .iter()
            .filter_map(|d| drags.get(d.0, d.1))
            .map(|d| d.status),
    )
}

fn refresh_drop_status<T>(
    drags: &Slots<DragTargetState<T>>,
    drops: &mut Slots<DropTargetState<T>>,
    id: DropTargetId,
) {
    if let Some(drop) = drops.get_mut(id.0, id.1) {
        drop.status = drop_status_of(drags, &drop.drag_targets);
    }
}
