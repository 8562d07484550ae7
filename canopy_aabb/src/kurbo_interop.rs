// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interop with Kurbo's 2D geometry types.

use kurbo::{Point, Rect};

use crate::Aabb;

impl From<Rect> for Aabb {
    /// Normalizes the rectangle first, so a rect with negative width still yields a
    /// well-formed box.
    fn from(rect: Rect) -> Self {
        let r = rect.abs();
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<Aabb> for Rect {
    fn from(aabb: Aabb) -> Self {
        aabb.to_rect()
    }
}

impl Aabb {
    /// XY footprint as a Kurbo rectangle. Z bounds are dropped.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Whether a Kurbo point lies inside or on the boundary of this box.
    pub fn contains_kurbo_point(&self, p: Point) -> bool {
        self.contains_point(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_conversion_normalizes() {
        let aabb = Aabb::from(Rect::new(10.0, 5.0, 0.0, 0.0));
        assert_eq!(aabb, Aabb::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(aabb.to_rect(), Rect::new(0.0, 0.0, 10.0, 5.0));
        assert!(aabb.contains_kurbo_point(Point::new(10.0, 5.0)));
        assert!(!aabb.contains_kurbo_point(Point::new(10.5, 5.0)));
    }
}
