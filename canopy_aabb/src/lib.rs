// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy AABB: axis-aligned bounding boxes for spatial indexing and swept collision.
//!
//! - [`Aabb`] is an immutable `Copy` value with per-axis `min`/`max` bounds on X, Y and Z.
//!   2D constructors leave Z unbounded, so the same type serves flat scenes and layered ones.
//! - Overlap is *strict*: boxes that only share an edge do not [intersect](Aabb::intersects).
//!   Containment is non-strict.
//! - Every operation that looks like a mutation ([`translate`](Aabb::translate),
//!   [`scale`](Aabb::scale), [`combine`](Aabb::combine), [`expand`](Aabb::expand),
//!   [`stretch`](Aabb::stretch)) returns a new value.
//! - [`Quadrant`] fixes the NW/NE/SE/SW ordering shared by subdivision and growth in
//!   `canopy_quadtree`.
//!
//! # Example
//!
//! ```rust
//! use canopy_aabb::Aabb;
//!
//! let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
//! let b = Aabb::new(10.0, 0.0, 20.0, 10.0);
//!
//! // Shared edge only: not an intersection.
//! assert!(!a.intersects(&b));
//! assert!(a.combine(&b).contains(&b));
//!
//! // Sweep `a` five units to the right and clamp the motion against `b`.
//! assert_eq!(a.stretch(5.0, 0.0), Aabb::new(0.0, 0.0, 15.0, 10.0));
//! let wall = Aabb::new(12.0, 0.0, 20.0, 10.0);
//! assert_eq!(a.resolve_collision_x(&wall, 5.0), 2.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo when interop is enabled.
//! - `kurbo`: conversions between [`Aabb`] and `kurbo::Rect`.
//!
//! ### Float semantics
//!
//! Bounds are `f64`. NaN coordinates are a caller error: comparisons involving NaN are
//! false, so containment and intersection silently fail. Use [`Aabb::try_new`] where
//! input is untrusted.

#![no_std]

pub mod aabb;
pub mod error;
#[cfg(feature = "kurbo")]
mod kurbo_interop;
pub mod quadrant;

pub use aabb::{Aabb, Axis};
pub use error::AabbError;
pub use quadrant::Quadrant;
