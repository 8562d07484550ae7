// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by checked AABB construction.

use crate::aabb::Axis;

/// Why a set of bounds does not form a valid [`Aabb`](crate::Aabb).
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum AabbError {
    /// A bound on this axis is NaN.
    #[error("bound on the {axis} axis is NaN")]
    NotANumber {
        /// Offending axis.
        axis: Axis,
    },
    /// `min > max` on this axis.
    #[error("inverted bounds on the {axis} axis: min {min} > max {max}")]
    Inverted {
        /// Offending axis.
        axis: Axis,
        /// Minimum bound as given.
        min: f64,
        /// Maximum bound as given.
        max: f64,
    },
}
