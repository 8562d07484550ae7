// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Quadtree: a self-growing quadtree over axis-aligned bounding boxes.
//!
//! Canopy Quadtree is the broad-phase index of a 2D scene: entities report a bounding box,
//! the tree answers "what might be here?" for rendering and collision.
//!
//! - Add objects anywhere. When an object falls outside the tree, the root doubles toward
//!   it (as many times as needed) and the old root becomes one quadrant of the new one.
//! - Remove objects; quadrants left empty are collapsed back into their parent.
//! - Query by rectangle (strict overlap: touching is not overlapping) or by point.
//!
//! The tree stores whatever handle you give it, as long as it implements [`Bounded`].
//! [`Proxy`] pairs a key from your own entity storage with the box it was indexed under.
//!
//! # Example
//!
//! ```rust
//! use canopy_quadtree::{Aabb, Proxy, QuadTree};
//!
//! let mut tree = QuadTree::new(Aabb::new(-1.0, -1.0, 1.0, 1.0), 4);
//! let player = Proxy::new(1_u32, Aabb::new(-0.5, -0.5, 0.0, 0.0));
//! let far_tree = Proxy::new(2_u32, Aabb::new(-10.0, -10.0, -9.0, -9.0));
//! tree.add(player);
//! tree.add(far_tree);
//!
//! // The root grew to cover the far object.
//! assert!(tree.region().contains(&far_tree.aabb));
//!
//! // Touching is not overlapping.
//! let hits = tree.query_range(&Aabb::new(0.0, 0.0, 1.0, 1.0));
//! assert!(hits.is_empty());
//!
//! // Move the player: remove, update, add.
//! let moved = Proxy::new(1_u32, player.aabb.translate(0.75, 0.75));
//! assert!(tree.relocate(&player, moved));
//! let hits = tree.query_range(&Aabb::new(0.0, 0.0, 1.0, 1.0));
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! ## Structure
//!
//! Nodes live in an arena and are addressed by [`NodeId`]. A node has no children or
//! exactly four, in NW, NE, SE, SW order (north is `+y`). Every object sits at the
//! deepest node whose region contains it such that no child of that node does.
//! [`QuadTree::nodes`] exposes the structure for debug drawing and tests.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo through `canopy_aabb`.
//! - `kurbo`: Kurbo interop on [`Aabb`].
//! - `tracing`: spans for `add`/`remove`/`clear`, events for growth, subdivision, and pruning.
//!
//! ## Mutating indexed objects
//!
//! The tree asks an object for its box whenever it needs it. Changing an object's box while
//! it is indexed breaks placement and may make it impossible to remove. Remove it first,
//! change it, then add it again, or use [`QuadTree::relocate`].

#![no_std]

extern crate alloc;

pub mod error;
pub mod tree;
pub mod types;

pub use canopy_aabb::{Aabb, AabbError, Axis, Quadrant};
pub use error::QuadTreeError;
pub use tree::QuadTree;
pub use types::{Bounded, NodeId, NodeView, Proxy};
