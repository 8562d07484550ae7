// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree growth.
//!
//! Start from a unit root and add objects further and further out. Each time an object
//! does not fit, the root doubles toward it; nothing already indexed moves.
//!
//! Run:
//! - `cargo run -p canopy_demos --example quadtree_growth`

use canopy_quadtree::{Aabb, Proxy, QuadTree};

fn main() {
    let mut tree = QuadTree::new(Aabb::new(0.0, 0.0, 1.0, 1.0), 4);
    let mut added = Vec::new();

    // A spiral walking outward through all four quadrants.
    let steps = [(0.5, 0.5), (3.0, 0.0), (0.0, 6.0), (-9.0, 0.0), (0.0, -20.0), (40.0, 40.0)];
    for (key, (x, y)) in steps.into_iter().enumerate() {
        let p = Proxy::new(key, Aabb::from_center_half_extents(x, y, 0.25, 0.25));
        tree.add(p);
        added.push(p);
        println!(
            "added #{key} at ({x}, {y}): root {:?}, depth {}, {} nodes",
            tree.region(),
            tree.depth(),
            tree.node_count()
        );
        assert!(tree.region().contains(&p.aabb));
    }

    let all = tree.get_all();
    assert_eq!(all.len(), added.len());

    // Queries near the original root only see what lives there.
    let near = tree.query_range(&Aabb::new(0.0, 0.0, 1.0, 1.0));
    println!("near the start: {:?}", near.iter().map(|p| p.key).collect::<Vec<_>>());
    assert!(near.contains(&added[0]));

    // Growth is permanent, even after clearing.
    let region = tree.region();
    tree.clear();
    assert_eq!(tree.region(), region);
    println!("cleared, root still {region:?}");
}
