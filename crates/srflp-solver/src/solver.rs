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

//! # Parallel Search Coordinator
//!
//! Runs the exact search for one model:
//!
//! 1. Optionally seed an upper bound with `GreedyBoundSeeder` and install it
//!    into a fresh `SharedIncumbent`.
//! 2. Spawn exactly one named worker thread per facility inside a
//!    `std::thread::scope`. Each worker owns the slice of layouts whose first
//!    facility is its start; threads are started in greedy ranking order.
//! 3. Join all workers. A panicking worker is re-raised on the caller's
//!    thread. Per-worker counters are summed.
//! 4. Read the incumbent. After the join no writer remains, so its cost and
//!    permutation belong together.
//!
//! There is no cancellation and no work stealing: every worker finishes its
//! pruned subtree.
//!
//! ## Usage
//!
//! ```rust
//! use srflp_model::loading::ProblemLoader;
//! use srflp_solver::solver::SolverBuilder;
//!
//! let model = ProblemLoader::new()
//!     .from_str::<f64>(
//!         "4\n\
//!          2 2 2 2\n\
//!          0 10 1 1\n\
//!          0 0 1 1\n\
//!          0 0 0 1\n\
//!          0 0 0 0\n",
//!     )
//!     .unwrap();
//!
//! let solver = SolverBuilder::new()
//!     .with_refresh_interval(1024)
//!     .build();
//! let outcome = solver.solve(&model).unwrap();
//!
//! assert_eq!(outcome.objective_value(), 98.0);
//! assert!(outcome.objective_value() <= outcome.seed().unwrap().objective_value());
//! println!("{}", outcome);
//! ```

use crate::{
    error::SolverError,
    result::SolverOutcome,
    stats::{SearchStatistics, SearchStatisticsBuilder},
};
use srflp_bnb::{
    greedy::GreedyBoundSeeder,
    incumbent::SharedIncumbent,
    stats::WorkerStatistics,
    worker::{BnbWorker, WorkerConfig},
};
use srflp_core::num::SolverFloat;
use srflp_model::{index::FacilityIndex, model::Model};

/// The exact parallel solver. Configure it with `SolverBuilder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    greedy_seed: bool,
    worker_config: WorkerConfig,
}

impl Default for Solver {
    fn default() -> Self {
        SolverBuilder::new().build()
    }
}

impl Solver {
    #[inline]
    pub fn greedy_seed(&self) -> bool {
        self.greedy_seed
    }

    #[inline]
    pub fn worker_config(&self) -> WorkerConfig {
        self.worker_config
    }

    /// Finds a minimum cost layout for `model`.
    pub fn solve<T>(&self, model: &Model<T>) -> Result<SolverOutcome<T>, SolverError>
    where
        T: SolverFloat,
    {
        let start_time = std::time::Instant::now();
        let n = model.num_facilities();

        tracing::info!(
            "Starting search with {} facilities on {} threads (greedy seed: {})",
            n,
            n,
            self.greedy_seed
        );

        let seeder = GreedyBoundSeeder::new();
        let (ranking, seed, incumbent) = if self.greedy_seed {
            let (ranking, solution) = seeder.seed(model).into_parts();
            tracing::info!("Greedy seed cost: {}", solution.objective_value());
            let incumbent = SharedIncumbent::from_solution(&solution);
            (ranking, Some(solution), incumbent)
        } else {
            (seeder.rank(model), None, SharedIncumbent::new(n))
        };

        let totals = self.run_workers(model, &incumbent, &ranking)?;
        let solution = incumbent.snapshot().ok_or(SolverError::NoIncumbent)?;
        let statistics = Self::build_statistics(start_time, totals, ranking.len());

        tracing::info!(
            "Search finished with cost {} after visiting {} nodes in {:.3?}",
            solution.objective_value(),
            statistics.nodes_visited,
            statistics.solve_duration
        );

        Ok(SolverOutcome::new(solution, seed, statistics))
    }

    /// Spawns one worker per entry of `starts` and returns their summed counters.
    fn run_workers<T>(
        &self,
        model: &Model<T>,
        incumbent: &SharedIncumbent<T>,
        starts: &[FacilityIndex],
    ) -> Result<WorkerStatistics, SolverError>
    where
        T: SolverFloat,
    {
        let config = self.worker_config;

        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(starts.len());

            for &start in starts {
                // Workers spawned before a failure still run to completion
                // when the scope joins them.
                let handle = std::thread::Builder::new()
                    .name(format!("srflp-worker-{}", start))
                    .spawn_scoped(scope, move || {
                        BnbWorker::new(model, incumbent, config).run(start)
                    })?;
                handles.push(handle);
            }

            let mut totals = WorkerStatistics::default();
            for handle in handles {
                match handle.join() {
                    Ok(stats) => totals += stats,
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
            Ok(totals)
        })
    }

    fn build_statistics(
        start_time: std::time::Instant,
        totals: WorkerStatistics,
        used_threads: usize,
    ) -> SearchStatistics {
        SearchStatisticsBuilder::new()
            .workers(totals)
            .used_threads(used_threads)
            .solve_duration(start_time.elapsed())
            .build()
    }
}

/// Builder for `Solver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverBuilder {
    greedy_seed: bool,
    worker_config: WorkerConfig,
}

impl Default for SolverBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            greedy_seed: true,
            worker_config: WorkerConfig::default(),
        }
    }

    /// Enables or disables the greedy upper bound. Without it the shared
    /// bound starts at `+inf`; the optimum found is the same.
    #[inline]
    pub fn with_greedy_seed(mut self, enabled: bool) -> Self {
        self.greedy_seed = enabled;
        self
    }

    /// Sets how many nodes a worker visits between two reads of the shared
    /// bound.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is not a power of two.
    #[inline]
    pub fn with_refresh_interval(mut self, interval: u64) -> Self {
        self.worker_config = self.worker_config.with_refresh_interval(interval);
        self
    }

    /// Lets every worker start from the shared bound instead of `+inf`.
    #[inline]
    pub fn with_inherited_bound(mut self, inherit: bool) -> Self {
        self.worker_config = self.worker_config.with_inherited_bound(inherit);
        self
    }

    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            greedy_seed: self.greedy_seed,
            worker_config: self.worker_config,
        }
    }
}
