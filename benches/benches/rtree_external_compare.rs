// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use canopy_quadtree::{Aabb, Proxy, QuadTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Aabb> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Aabb::from_xywh(x0 + 0.5, y0 + 0.5, cell - 1.0, cell - 1.0));
        }
    }
    out
}

fn to_rstar_rects(v: &[Aabb]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.min_x, r.min_y], [r.max_x, r.max_y]))
        .collect()
}

fn bench_rtree_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let extent = n as f64 * 10.0;
        let query = Aabb::from_xywh(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(Aabb::new(0.0, 0.0, extent, extent), 8),
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        tree.add(Proxy::new(i as u32, r));
                    }
                    black_box(tree.query_range(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let mut tree = RTree::new();
                    for r in rectangles {
                        tree.insert(r);
                    }
                    let aabb =
                        AABB::from_corners([query.min_x, query.min_y], [query.max_x, query.max_y]);
                    black_box(tree.locate_in_envelope_intersecting(&aabb).count());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb =
                        AABB::from_corners([query.min_x, query.min_y], [query.max_x, query.max_y]);
                    black_box(tree.locate_in_envelope_intersecting(&aabb).count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare);
criterion_main!(benches);
