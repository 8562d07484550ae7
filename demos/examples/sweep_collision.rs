// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep collision.
//!
//! A broad phase plus per-axis collision resolution: stretch the mover's box along its
//! movement, ask the quadtree what that swept box overlaps, then clamp the movement
//! against each candidate one axis at a time.
//!
//! Run:
//! - `cargo run -p canopy_demos --example sweep_collision`

use canopy_quadtree::{Aabb, Proxy, QuadTree};
use kurbo::{Point, Rect};

fn step(tree: &QuadTree<Proxy<u32>>, mover: Aabb, dx: f64, dy: f64) -> Aabb {
    let mut dx = dx;
    for hit in tree.query_range(&mover.stretch(dx, 0.0)) {
        dx = mover.resolve_collision_x(&hit.aabb, dx);
    }
    let mover = mover.translate(dx, 0.0);

    let mut dy = dy;
    for hit in tree.query_range(&mover.stretch(0.0, dy)) {
        dy = mover.resolve_collision_y(&hit.aabb, dy);
    }
    mover.translate(0.0, dy)
}

fn main() {
    let level = [
        // Floor the player stands on.
        Rect::new(-10.0, -1.0, 20.0, 0.0),
        // Wall in the way.
        Rect::new(5.0, -2.0, 6.0, 3.0),
        // Ledge far above; never a candidate.
        Rect::new(0.0, 8.0, 4.0, 9.0),
    ];
    let mut tree = QuadTree::new(Aabb::new(-1.0, -1.0, 1.0, 1.0), 4);
    for (key, r) in (0_u32..).zip(level) {
        tree.add(Proxy::new(key, Aabb::from(r)));
    }

    // Run right and fall: the wall stops the run, the floor stops the fall.
    let player = Aabb::from(Rect::new(0.0, 0.0, 1.0, 1.0));
    let player = step(&tree, player, 10.0, -3.0);
    println!("player ends at {:?}", player.to_rect());
    assert_eq!(player.to_rect(), Rect::new(4.0, 0.0, 5.0, 1.0));
    assert!(player.contains_kurbo_point(Point::new(4.5, 0.5)));
}
