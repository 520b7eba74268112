// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use skyline_model::histogram::Histogram;
use skyline_solver::{
    boundary::BoundarySolver, brute_force::BruteForceSolver, segment_tree::SegmentTreeSolver,
    solver::RectangleSolver, stack_solver::StackSolver,
};
use std::hint::black_box;

const SEED: u64 = 0x5EED_0F_5C71;
const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];
const BRUTE_FORCE_LIMIT: usize = 10_000;

fn random_histogram(rng: &mut StdRng, len: usize, max_height: u32) -> Histogram<u32> {
    let heights: Vec<u32> = (0..len).map(|_| rng.random_range(0..=max_height)).collect();
    Histogram::new(heights).expect("random heights are admissible")
}

fn bench_solver<S>(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    solver: &mut S,
    histogram: &Histogram<u32>,
) where
    S: RectangleSolver<u32>,
{
    let id = BenchmarkId::new(solver.name().to_string(), histogram.len());
    group.bench_with_input(id, histogram, |b, h| {
        b.iter(|| {
            let outcome = solver.solve(black_box(h)).expect("no overflow");
            black_box(outcome.area())
        })
    });
}

fn bench_random_histograms(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group("random_histograms");

    for &len in SIZES.iter() {
        let histogram = random_histogram(&mut rng, len, 10_000);
        group.throughput(Throughput::Elements(len as u64));

        bench_solver(&mut group, &mut StackSolver::preallocated(len), &histogram);
        bench_solver(&mut group, &mut BoundarySolver::new(), &histogram);
        bench_solver(&mut group, &mut SegmentTreeSolver::new(), &histogram);
        if len <= BRUTE_FORCE_LIMIT {
            bench_solver(&mut group, &mut BruteForceSolver::new(), &histogram);
        }
    }

    group.finish();
}

fn bench_monotone_histograms(c: &mut Criterion) {
    let mut group = c.benchmark_group("monotone_histograms");
    let len = 100_000;
    group.throughput(Throughput::Elements(len as u64));

    let increasing = Histogram::new((0..len as u32).collect()).expect("admissible");
    let decreasing = Histogram::new((0..len as u32).rev().collect()).expect("admissible");

    for (label, histogram) in [("increasing", &increasing), ("decreasing", &decreasing)] {
        let mut solver = StackSolver::preallocated(len);
        group.bench_with_input(BenchmarkId::new("StackSolver", label), histogram, |b, h| {
            b.iter(|| black_box(solver.solve(black_box(h)).expect("no overflow").area()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_histograms, bench_monotone_histograms);
criterion_main!(benches);
