// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_default_zoom::{
    CachedFit, CanvasMetrics, GraphViewportFitter, GraphZoomInput, LayerPositions, LayoutNode,
    ResourceViewportFitter, ResourceZoomInput, ViewportFitter,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn graph_input(n: usize, seed: u64) -> GraphZoomInput {
    let mut rng = Lcg::new(seed);
    let nodes = (0..n)
        .map(|_| Point::new(rng.next_f64() * 10_000.0, rng.next_f64() * 10_000.0))
        .collect();
    GraphZoomInput {
        nodes,
        canvas: CanvasMetrics::new(1920.0, 1080.0),
    }
}

fn resource_input(n: usize, layers: usize, seed: u64) -> ResourceZoomInput {
    let mut rng = Lcg::new(seed);
    let layer_positions: LayerPositions = (0..layers)
        .map(|i| (format!("layer-{i}"), i as f64 * 150.0))
        .collect();
    let nodes = (0..n)
        .map(|i| {
            LayoutNode::new(
                rng.next_f64() * 50_000.0,
                rng.next_f64() * 500.0,
                format!("layer-{}", i % layers),
            )
        })
        .collect();
    ResourceZoomInput {
        layer_positions,
        nodes,
        canvas: CanvasMetrics::new(1920.0, 1080.0),
    }
}

fn bench_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_default_zoom");
    for &n in &[100_usize, 10_000] {
        let input = graph_input(n, 0x5eed);
        let fitter = GraphViewportFitter::default();
        group.bench_function(format!("fit_{n}"), |b| {
            b.iter(|| black_box(fitter.fit(black_box(&input))));
        });

        let mut cached = CachedFit::new(fitter);
        let _ = cached.get(&input);
        group.bench_function(format!("cached_hit_{n}"), |b| {
            b.iter(|| black_box(cached.get(black_box(&input))));
        });
    }
    group.finish();
}

fn bench_resource(c: &mut Criterion) {
    let mut group = c.benchmark_group("resource_default_zoom");
    for &n in &[100_usize, 10_000] {
        let input = resource_input(n, 4, 0xfeed);
        let fitter = ResourceViewportFitter::default();
        group.bench_function(format!("fit_{n}"), |b| {
            b.iter(|| black_box(fitter.fit(black_box(&input))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_graph, bench_resource);
criterion_main!(benches);
