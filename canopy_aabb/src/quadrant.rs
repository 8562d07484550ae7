// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant naming and ordering.
//!
//! "North" is `+y` and "east" is `+x`. The index order is NW, NE, SE, SW; both
//! [`Aabb::split`](crate::Aabb::split) and quadtree growth use it.

/// One of the four quadrants of a box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `-x`, `+y`
    NorthWest,
    /// `+x`, `+y`
    NorthEast,
    /// `+x`, `-y`
    SouthEast,
    /// `-x`, `-y`
    SouthWest,
}

impl Quadrant {
    /// All quadrants in index order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Position in [`Quadrant::ALL`] and in the array returned by [`Aabb::split`](crate::Aabb::split).
    pub const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthEast => 2,
            Self::SouthWest => 3,
        }
    }

    /// The diagonally opposite quadrant.
    pub const fn opposite(self) -> Self {
        match self {
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }

    /// Whether this quadrant lies toward `-x`.
    pub const fn is_west(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }

    /// Whether this quadrant lies toward `-y`.
    pub const fn is_south(self) -> bool {
        matches!(self, Self::SouthEast | Self::SouthWest)
    }

    /// Classify an offset by the sign of each component.
    ///
    /// Zero counts as negative on both axes, so `(0, 0)` is [`Quadrant::SouthWest`].
    /// Returns `None` if either component is NaN.
    pub fn from_offset(dx: f64, dy: f64) -> Option<Self> {
        let west = if dx <= 0.0 {
            true
        } else if dx > 0.0 {
            false
        } else {
            return None;
        };
        let south = if dy <= 0.0 {
            true
        } else if dy > 0.0 {
            false
        } else {
            return None;
        };
        Some(match (west, south) {
            (true, false) => Self::NorthWest,
            (false, false) => Self::NorthEast,
            (false, true) => Self::SouthEast,
            (true, true) => Self::SouthWest,
        })
    }
}
