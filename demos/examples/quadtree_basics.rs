// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Index three entities, watch the root subdivide, query by rectangle and point, then
//! remove everything and see the tree collapse.
//!
//! Run:
//! - `cargo run -p canopy_demos --example quadtree_basics`

use canopy_quadtree::{Aabb, Proxy, QuadTree};
use kurbo::Rect;

struct Entity {
    name: &'static str,
    bounds: Rect,
}

fn main() {
    let entities = [
        Entity {
            name: "crate",
            bounds: Rect::new(10.0, 10.0, 20.0, 20.0),
        },
        Entity {
            name: "barrel",
            bounds: Rect::new(60.0, 60.0, 70.0, 70.0),
        },
        // Straddles the center, so it stays at the root once the root splits.
        Entity {
            name: "signpost",
            bounds: Rect::new(45.0, 45.0, 55.0, 55.0),
        },
    ];
    let proxies: Vec<Proxy<usize>> = entities
        .iter()
        .enumerate()
        .map(|(i, e)| Proxy::new(i, Aabb::from(e.bounds)))
        .collect();

    let mut tree = QuadTree::new(Aabb::from(Rect::new(0.0, 0.0, 100.0, 100.0)), 2);
    for p in &proxies {
        tree.add(*p);
    }
    println!("{tree:?}");
    for node in tree.nodes() {
        println!(
            "{:indent$}{:?} holds {}",
            "",
            node.region.to_rect(),
            node.objects.len(),
            indent = node.depth * 2
        );
    }
    assert_eq!(tree.node_count(), 5);

    let hits = tree.query_range(&Aabb::from(Rect::new(0.0, 0.0, 30.0, 30.0)));
    let names: Vec<_> = hits.iter().map(|p| entities[p.key].name).collect();
    println!("near the origin: {names:?}");
    assert_eq!(names, ["crate"]);

    let hits = tree.query_point(50.0, 50.0);
    let names: Vec<_> = hits.iter().map(|p| entities[p.key].name).collect();
    println!("at the center: {names:?}");
    assert_eq!(names, ["signpost"]);

    for p in &proxies {
        assert!(tree.remove(p));
    }
    println!("after removing everything: {tree:?}");
    assert!(tree.is_empty());
    assert_eq!(tree.node_count(), 1);
}
