// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational identifiers for drag and drop target records.

/// Identifier for a drag target tracked by a [`DragContext`](crate::DragContext).
///
/// This is a small, copyable handle that stays stable while the record is
/// registered but becomes invalid once it is unregistered.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On registration, a fresh slot is allocated with generation `1`.
/// - On unregistration, the slot is freed and its generation incremented; any
///   existing id that pointed to that slot is now stale.
/// - Stale ids never alias a different live record because the generation must
///   match. Every [`DragContext`](crate::DragContext) operation treats a stale
///   id as a no-op or answers `None`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DragTargetId(pub(crate) u32, pub(crate) u32);

/// Identifier for a drop target tracked by a [`DragContext`](crate::DragContext).
///
/// Same shape and staleness semantics as [`DragTargetId`]; the two id spaces
/// are independent.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DropTargetId(pub(crate) u32, pub(crate) u32);
