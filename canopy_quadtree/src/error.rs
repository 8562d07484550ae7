// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by [`QuadTree::try_new`](crate::QuadTree::try_new).

use canopy_aabb::AabbError;

/// Why a quadtree could not be constructed.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum QuadTreeError {
    /// Nodes must be able to hold at least one object before subdividing.
    #[error("node capacity must be at least 1")]
    ZeroCapacity,
    /// The root region is not a well-formed box.
    #[error("invalid root region: {0}")]
    InvalidRegion(#[from] AabbError),
    /// The root region cannot be subdivided or doubled.
    #[error("root region must have finite, positive width and height, got {width} x {height}")]
    DegenerateRegion {
        /// Width of the rejected region.
        width: f64,
        /// Height of the rejected region.
        height: f64,
    },
}
