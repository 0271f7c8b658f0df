// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windfall_dragdrop --heading-base-level=0

//! Windfall Drag Drop: drag-and-drop association bookkeeping for UI.
//!
//! This crate is the state engine behind drag-and-drop interactions: UI
//! elements register as *drag targets* (carrying an opaque payload) or as
//! *drop targets* (zones that react to drag targets over them), and a
//! [`DragContext`] keeps the two sides consistent as layout and gestures
//! stream in. It tracks the many-to-many association between the sides,
//! derives each side's status for visual treatment, and nudges dropped
//! items onto a configured anchor point of their drop target.
//!
//! The crate does not render, lay out, or read input. It assumes three
//! external collaborators, each with its own entry-point family:
//!
//! - a **layout system** that reports screen rectangles via
//!   [`DragContext::set_drag_bounds`] and [`DragContext::set_drop_bounds`]
//!   whenever they change;
//! - a **gesture recognizer** that reports one drag at a time per target via
//!   [`DragContext::drag_start`], [`DragContext::drag_move`],
//!   [`DragContext::drag_end`], and [`DragContext::drag_cancel`];
//! - a **renderer** that reads [`DragContext::drag_status`],
//!   [`DragContext::drop_status`], [`DragContext::visual_offset`], and
//!   [`DragContext::visual_scale`] to draw each element.
//!
//! ## How association works
//!
//! On every drag-side bounds report for a target that is mid-gesture, each
//! drop target whose rectangle contains the drag rectangle's *center point*
//! becomes associated — partial overlap counts as soon as the center
//! crosses in — and each one that no longer contains it is dissociated.
//! Associations are mutual, capped per drop target by
//! [`Capacity`] (excess candidates are silently declined and retried on
//! later movement), and only ever change under user-driven movement:
//! programmatic position changes such as snapping or animation never
//! re-associate.
//!
//! A drop target's [`DropTargetStatus`] is a pure projection of its
//! associates' statuses; a drag target's [`DragTargetStatus`] follows the
//! gesture lifecycle alone. Neither can be set directly.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Rect, Vec2};
//! use windfall_dragdrop::{
//!     DragContext, DragOptions, DragTargetStatus, DropOptions, DropTargetStatus, SnapAnchor,
//! };
//!
//! let mut context = DragContext::new();
//!
//! // A jar that tallies the cents dropped into it.
//! let total = Rc::new(Cell::new(0.0_f64));
//! let added = Rc::clone(&total);
//! let removed = Rc::clone(&total);
//! let jar = context
//!     .register_drop_target(
//!         DropOptions::default(),
//!         move |cents: &f64| added.set(added.get() + *cents),
//!         move |cents: &f64| removed.set(removed.get() - *cents),
//!     )
//!     .unwrap();
//! context.set_drop_bounds(jar, Rect::new(100.0, 100.0, 200.0, 200.0));
//!
//! // A quarter, configured to center itself in whatever it lands on.
//! let coin = context.register_drag_target(
//!     25.0_f64,
//!     DragOptions::default().with_snap(SnapAnchor::Center),
//! );
//! context.set_drag_bounds(coin, Rect::new(0.0, 0.0, 20.0, 20.0));
//!
//! // The user picks the coin up and moves it over the jar.
//! context.drag_start(coin);
//! context.drag_move(coin, Vec2::new(135.0, 142.0));
//! context.set_drag_bounds(coin, Rect::new(135.0, 142.0, 155.0, 162.0));
//! assert_eq!(context.drop_status(jar), Some(DropTargetStatus::Hovered));
//!
//! // Releasing drops it in and the tally updates.
//! context.drag_end(coin);
//! assert_eq!(context.drag_status(coin), Some(DragTargetStatus::Dropped));
//! assert_eq!(context.drop_status(jar), Some(DropTargetStatus::Occupied));
//! assert_eq!(total.get(), 25.0);
//!
//! // The next layout report lets the snap resolver center the coin in the
//! // jar: the residual (-5, 2) is folded into the offset.
//! context.set_drag_bounds(coin, Rect::new(135.0, 142.0, 155.0, 162.0));
//! assert_eq!(context.drag_offset(coin), Some(Vec2::new(140.0, 140.0)));
//!
//! // Once aligned, further layout reports leave the offset alone.
//! context.set_drag_bounds(coin, Rect::new(140.0, 140.0, 160.0, 160.0));
//! assert_eq!(context.drag_offset(coin), Some(Vec2::new(140.0, 140.0)));
//! ```
//!
//! ## Design Philosophy
//!
//! - **Bookkeeping only**: the engine owns associations, statuses, and
//!   offsets — nothing visual. Callers decide what hovering or dropping
//!   looks like.
//! - **Arena + ids, no ownership cycles**: records live in generational
//!   slot arenas and refer to each other by id, so the cyclic association
//!   graph needs no shared-ownership machinery and stale handles are
//!   harmless.
//! - **Synchronous and single-threaded**: every entry point runs to
//!   completion on the calling thread; callbacks fire while the context is
//!   exclusively borrowed, so they cannot re-enter it.
//!
//! ## Features
//!
//! - `std` (default): build with the standard library.
//! - `libm`: forward Kurbo's `libm` feature for `no_std` float math.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod context;
mod id;
mod options;
mod slots;
mod snap;
mod status;

pub use context::DragContext;
pub use id::{DragTargetId, DropTargetId};
pub use options::{Capacity, CapacityError, DragOptions, DropOptions};
pub use snap::SnapAnchor;
pub use status::{DragTargetStatus, DropTargetStatus};
