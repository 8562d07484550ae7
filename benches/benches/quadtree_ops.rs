// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_quadtree::{Aabb, Proxy, QuadTree};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn gen_grid_proxies(n: usize, cell: f64) -> Vec<Proxy<u32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Proxy::new(
                (y * n + x) as u32,
                Aabb::from_xywh(x0 + 0.5, y0 + 0.5, cell - 1.0, cell - 1.0),
            ));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_clustered_proxies(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Proxy<u32>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            let key = out.len() as u32;
            out.push(Proxy::new(key, Aabb::from_xywh(cx + dx, cy + dy, 12.0, 12.0)));
        }
    }
    out
}

fn build(items: &[Proxy<u32>], region: Aabb, capacity: usize) -> QuadTree<Proxy<u32>> {
    let mut tree = QuadTree::new(region, capacity);
    for p in items {
        tree.add(*p);
    }
    tree
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for &n in &[32usize, 64, 128] {
        let items = gen_grid_proxies(n, 10.0);
        let extent = n as f64 * 10.0;
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("presized_root_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(Aabb::new(0.0, 0.0, extent, extent), 8),
                |mut tree| {
                    for p in &items {
                        tree.add(*p);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
        // Start from a unit root and let the tree double its way out.
        group.bench_function(format!("growing_root_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(Aabb::new(0.0, 0.0, 1.0, 1.0), 8),
                |mut tree| {
                    for p in &items {
                        tree.add(*p);
                    }
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    for &n in &[64usize, 128] {
        let items = gen_grid_proxies(n, 10.0);
        let extent = n as f64 * 10.0;
        let tree = build(&items, Aabb::new(0.0, 0.0, extent, extent), 8);
        let window = Aabb::from_xywh(100.0, 100.0, 400.0, 400.0);
        group.bench_function(format!("range_window_n{}", n), |b| {
            b.iter(|| black_box(tree.query_range(black_box(&window)).len()))
        });
        group.bench_function(format!("range_everything_n{}", n), |b| {
            b.iter(|| black_box(tree.query_range(black_box(&tree.region())).len()))
        });
        group.bench_function(format!("point_n{}", n), |b| {
            b.iter(|| black_box(tree.query_point(black_box(255.0), black_box(255.0)).len()))
        });
    }
    let items = gen_clustered_proxies(32, 256, 200.0);
    let tree = build(&items, Aabb::new(0.0, 0.0, 1.0, 1.0), 8);
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    let windows: Vec<Aabb> = (0..64)
        .map(|_| Aabb::from_xywh(rng.next_f64() * 2000.0, rng.next_f64() * 2000.0, 150.0, 150.0))
        .collect();
    group.bench_function("range_clustered_64_windows", |b| {
        b.iter(|| {
            let mut hits = 0;
            for w in &windows {
                hits += tree.query_range(w).len();
            }
            black_box(hits);
        })
    });
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("update");
    let n = 64usize;
    let items = gen_grid_proxies(n, 10.0);
    let extent = n as f64 * 10.0;
    group.throughput(Throughput::Elements((n * n) as u64));
    group.bench_function("relocate_all_n64", |b| {
        b.iter_batched(
            || build(&items, Aabb::new(0.0, 0.0, extent, extent), 8),
            |mut tree| {
                for p in &items {
                    let moved = Proxy::new(p.key, p.aabb.translate(3.0, -2.0));
                    tree.relocate(p, moved);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("remove_all_n64", |b| {
        b.iter_batched(
            || build(&items, Aabb::new(0.0, 0.0, extent, extent), 8),
            |mut tree| {
                for p in &items {
                    tree.remove(p);
                }
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_add, bench_query, bench_update);
criterion_main!(benches);
