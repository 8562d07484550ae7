// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Aabb`] value type and its geometric operations.

use core::cmp::Ordering;
use core::fmt;

use crate::error::AabbError;
use crate::quadrant::Quadrant;

/// One of the three coordinate axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis; "north" is `+y`.
    Y,
    /// Depth axis, unbounded for 2D boxes.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        })
    }
}

/// Axis-aligned bounding box, optionally bounded in depth.
///
/// The invariant `min <= max` on every axis is a caller contract; [`Aabb::new`] does not
/// check it. Boxes with `min == max` on an axis are valid and behave as points (or
/// segments) on that axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum x (west)
    pub min_x: f64,
    /// Minimum y (south)
    pub min_y: f64,
    /// Minimum z
    pub min_z: f64,
    /// Maximum x (east)
    pub max_x: f64,
    /// Maximum y (north)
    pub max_y: f64,
    /// Maximum z
    pub max_z: f64,
}

impl Aabb {
    /// The box covering all of space.
    pub const EVERYTHING: Self = Self::new_3d(
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
        f64::INFINITY,
        f64::INFINITY,
        f64::INFINITY,
    );

    /// Create a 2D box. Z spans the whole real line.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new_3d(min_x, min_y, f64::NEG_INFINITY, max_x, max_y, f64::INFINITY)
    }

    /// Create a box bounded on all three axes.
    pub const fn new_3d(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Create a 2D box from its minimum corner and size.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(x, y, x + w, y + h)
    }

    /// Create a 2D box from a center point and half extents.
    pub const fn from_center_half_extents(cx: f64, cy: f64, hx: f64, hy: f64) -> Self {
        Self::new(cx - hx, cy - hy, cx + hx, cy + hy)
    }

    /// Checked variant of [`Aabb::new`].
    pub fn try_new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, AabbError> {
        let aabb = Self::new(min_x, min_y, max_x, max_y);
        aabb.validate()?;
        Ok(aabb)
    }

    /// Checked variant of [`Aabb::new_3d`].
    pub fn try_new_3d(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> Result<Self, AabbError> {
        let aabb = Self::new_3d(min_x, min_y, min_z, max_x, max_y, max_z);
        aabb.validate()?;
        Ok(aabb)
    }

    /// Check the `min <= max` invariant and the absence of NaN on every axis.
    pub fn validate(&self) -> Result<(), AabbError> {
        for (axis, min, max) in [
            (Axis::X, self.min_x, self.max_x),
            (Axis::Y, self.min_y, self.max_y),
            (Axis::Z, self.min_z, self.max_z),
        ] {
            if min.is_nan() || max.is_nan() {
                return Err(AabbError::NotANumber { axis });
            }
            if min > max {
                return Err(AabbError::Inverted { axis, min, max });
            }
        }
        Ok(())
    }

    /// Whether [`Aabb::validate`] succeeds.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Extent along z (infinite for 2D boxes).
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Center on x.
    pub fn center_x(&self) -> f64 {
        0.5 * (self.min_x + self.max_x)
    }

    /// Center on y.
    pub fn center_y(&self) -> f64 {
        0.5 * (self.min_y + self.max_y)
    }

    /// Center in the XY plane.
    pub fn center(&self) -> (f64, f64) {
        (self.center_x(), self.center_y())
    }

    /// Whether the XY point lies inside or on the boundary of this box.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        le(self.min_x, x) && le(x, self.max_x) && le(self.min_y, y) && le(y, self.max_y)
    }

    /// Whether `other` lies entirely within this box on every axis (non-strict).
    pub fn contains(&self, other: &Self) -> bool {
        le(self.min_x, other.min_x)
            && le(other.max_x, self.max_x)
            && le(self.min_y, other.min_y)
            && le(other.max_y, self.max_y)
            && le(self.min_z, other.min_z)
            && le(other.max_z, self.max_z)
    }

    /// Whether the boxes overlap on every axis, using open intervals.
    ///
    /// Boxes that only touch along an edge or face do not intersect. Neither does a
    /// zero-size box lying exactly on another box's boundary.
    pub fn intersects(&self, other: &Self) -> bool {
        [Axis::X, Axis::Y, Axis::Z]
            .into_iter()
            .all(|axis| self.overlaps_on(other, axis))
    }

    /// Smallest box containing both boxes.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            min_x: min_t(self.min_x, other.min_x),
            min_y: min_t(self.min_y, other.min_y),
            min_z: min_t(self.min_z, other.min_z),
            max_x: max_t(self.max_x, other.max_x),
            max_y: max_t(self.max_y, other.max_y),
            max_z: max_t(self.max_z, other.max_z),
        }
    }

    /// Translate in the XY plane. Z is unchanged.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
            ..*self
        }
    }

    /// Scale every bound about the origin, not about the box's own center.
    ///
    /// A negative factor mirrors the axis; min and max are swapped so the result stays
    /// well formed. Infinite bounds stay infinite, even under a zero factor, so an
    /// unbounded axis is left as is and a half-infinite one collapses to `(-inf, 0)` or
    /// `(0, inf)`.
    pub fn scale(&self, sx: f64, sy: f64, sz: f64) -> Self {
        let (min_x, max_x) = scale_axis(self.min_x, self.max_x, sx);
        let (min_y, max_y) = scale_axis(self.min_y, self.max_y, sy);
        let (min_z, max_z) = scale_axis(self.min_z, self.max_z, sz);
        Self::new_3d(min_x, min_y, min_z, max_x, max_y, max_z)
    }

    /// Grow the box by `amount` on every XY side. Negative amounts shrink it.
    pub fn expand(&self, amount: f64) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
            ..*self
        }
    }

    /// Extend the box toward the sign of each amount only.
    ///
    /// This is the sweep region of a box about to move by `(amt_x, amt_y)`: a negative
    /// `amt_x` lowers `min_x`, a positive one raises `max_x`, zero leaves the axis alone.
    pub fn stretch(&self, amt_x: f64, amt_y: f64) -> Self {
        let mut out = *self;
        if amt_x < 0.0 {
            out.min_x += amt_x;
        } else if amt_x > 0.0 {
            out.max_x += amt_x;
        }
        if amt_y < 0.0 {
            out.min_y += amt_y;
        } else if amt_y > 0.0 {
            out.max_y += amt_y;
        }
        out
    }

    /// Clamp a move of `move_x` along x so this box stops at `other`'s near edge.
    ///
    /// The result has the same sign as `move_x` and never a larger magnitude. If `other`
    /// is not ahead in the direction of motion, `move_x` is returned unchanged.
    ///
    /// Only the x extents are compared. Pick candidates first, for example with a query
    /// over [`Aabb::stretch`]: a box far above or below the path still clamps the move.
    pub fn resolve_collision_x(&self, other: &Self, move_x: f64) -> f64 {
        clamp_move(self.min_x, self.max_x, other.min_x, other.max_x, move_x)
    }

    /// Clamp a move of `move_y` along y so this box stops at `other`'s near edge.
    ///
    /// See [`Aabb::resolve_collision_x`].
    pub fn resolve_collision_y(&self, other: &Self, move_y: f64) -> f64 {
        clamp_move(self.min_y, self.max_y, other.min_y, other.max_y, move_y)
    }

    /// Strict overlap on a single axis.
    pub fn overlaps_on(&self, other: &Self, axis: Axis) -> bool {
        let ((a0, a1), (b0, b1)) = (self.bounds(axis), other.bounds(axis));
        lt(a0, b1) && lt(b0, a1)
    }

    /// `(min, max)` on `axis`.
    pub fn bounds(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
            Axis::Z => (self.min_z, self.max_z),
        }
    }

    /// Split into four quadrants around `(mid_x, mid_y)`, indexed by [`Quadrant::index`].
    ///
    /// Z bounds are carried over unchanged.
    pub fn split(&self, mid_x: f64, mid_y: f64) -> [Self; 4] {
        let z = |a: Self| Self {
            min_z: self.min_z,
            max_z: self.max_z,
            ..a
        };
        [
            z(Self::new(self.min_x, mid_y, mid_x, self.max_y)),
            z(Self::new(mid_x, mid_y, self.max_x, self.max_y)),
            z(Self::new(mid_x, self.min_y, self.max_x, mid_y)),
            z(Self::new(self.min_x, self.min_y, mid_x, mid_y)),
        ]
    }

    /// Split into four equal quadrants around the center.
    pub fn quadrants(&self) -> [Self; 4] {
        let (cx, cy) = self.center();
        self.split(cx, cy)
    }

    /// Double the XY extent toward `toward`.
    ///
    /// Returns the larger box and the split point at which this box is exactly its
    /// [`toward.opposite()`](Quadrant::opposite) quadrant.
    pub fn doubled_toward(&self, toward: Quadrant) -> (Self, (f64, f64)) {
        let (w, h) = (self.width(), self.height());
        let mut out = *self;
        let split_x = if toward.is_west() {
            out.min_x -= w;
            self.min_x
        } else {
            out.max_x += w;
            self.max_x
        };
        let split_y = if toward.is_south() {
            out.min_y -= h;
            self.min_y
        } else {
            out.max_y += h;
            self.max_y
        };
        (out, (split_x, split_y))
    }
}

fn scale_axis(min: f64, max: f64, factor: f64) -> (f64, f64) {
    let (a, b) = (scale_bound(min, factor), scale_bound(max, factor));
    if factor < 0.0 { (b, a) } else { (a, b) }
}

fn scale_bound(v: f64, factor: f64) -> f64 {
    // inf * 0 is NaN
    if v.is_infinite() && factor == 0.0 {
        v
    } else {
        v * factor
    }
}

fn clamp_move(min: f64, max: f64, other_min: f64, other_max: f64, amount: f64) -> f64 {
    if amount > 0.0 && le(max, other_min) {
        min_t(amount, other_min - max)
    } else if amount < 0.0 && le(other_max, min) {
        max_t(amount, other_max - min)
    } else {
        amount
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
