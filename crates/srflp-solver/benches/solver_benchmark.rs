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

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use srflp_bnb::greedy::GreedyBoundSeeder;
use srflp_model::index::FacilityIndex;
use srflp_model::model::{Model, ModelBuilder};
use srflp_solver::solver::SolverBuilder;
use std::hint::black_box;

fn fi(i: usize) -> FacilityIndex {
    FacilityIndex::new(i)
}

fn random_model(n: usize, seed: u64) -> Model<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut b = ModelBuilder::new(n);
    for i in 0..n {
        b.set_width(fi(i), rng.random_range(1..=10) as f64);
        for j in (i + 1)..n {
            b.set_cost(fi(i), fi(j), rng.random_range(0..=25) as f64);
        }
    }
    b.build().expect("generated model is valid")
}

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver_benchmark");
    group.sample_size(10);

    for n in [9usize, 10, 11] {
        let model = random_model(n, 0x5eed + n as u64);

        let seeded = SolverBuilder::new().build();
        group.bench_with_input(BenchmarkId::new("seeded", n), &model, |b, model| {
            b.iter(|| {
                let outcome = seeded.solve(black_box(model)).expect("solve failed");
                black_box(outcome.objective_value())
            })
        });

        let unseeded = SolverBuilder::new().with_greedy_seed(false).build();
        group.bench_with_input(BenchmarkId::new("unseeded", n), &model, |b, model| {
            b.iter(|| {
                let outcome = unseeded.solve(black_box(model)).expect("solve failed");
                black_box(outcome.objective_value())
            })
        });
    }

    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_seed");
    let seeder = GreedyBoundSeeder::new();

    for n in [16usize, 32, 64] {
        let model = random_model(n, n as u64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &model, |b, model| {
            b.iter(|| black_box(seeder.seed(black_box(model))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solver, bench_greedy);
criterion_main!(benches);
