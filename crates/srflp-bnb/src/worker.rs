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

//! # Branch-and-Bound Worker
//!
//! Recursive depth-first search over one slice of the permutation space.
//!
//! A `BnbWorker` fixes one facility at position 0 and enumerates every
//! completion of it, pruning any partial layout whose cost already reaches
//! the worker's local bound. Partial costs only grow as facilities are added
//! (costs and widths are non-negative), so the partial cost is a valid lower
//! bound for every completion.
//!
//! ## Highlights
//!
//! - One permutation buffer per worker, sized once. Positions past the
//!   current depth are scratch and are overwritten by the next sibling, so
//!   the recursion neither allocates nor undoes anything.
//! - Children are costed in O(depth) with `cost::cost_increment` and pruned
//!   before descent.
//! - The local bound starts at `+inf` (or at the shared bound with
//!   `WorkerConfig::with_inherited_bound`). It tightens when the worker
//!   itself improves the shared incumbent, and by reading the shared bound:
//!   once at the worker's root, then every `refresh_interval` visited nodes.
//!   The interval is a power of two and is tested with a mask.
//!
//! ## Usage
//!
//! ```rust
//! use srflp_bnb::{
//!     incumbent::SharedIncumbent,
//!     stats::WorkerStatistics,
//!     worker::{BnbWorker, WorkerConfig},
//! };
//! use srflp_model::{index::FacilityIndex, model::ModelBuilder};
//!
//! let mut builder = ModelBuilder::<f64>::new(4);
//! builder
//!     .set_cost(FacilityIndex::new(0), FacilityIndex::new(3), 5.0)
//!     .set_cost(FacilityIndex::new(1), FacilityIndex::new(2), 2.0);
//! let model = builder.build().unwrap();
//!
//! let incumbent = SharedIncumbent::new(model.num_facilities());
//! let config = WorkerConfig::new().with_refresh_interval(256);
//!
//! // Sequentially cover every first facility.
//! let totals: WorkerStatistics = model
//!     .facilities()
//!     .map(|start| BnbWorker::new(&model, &incumbent, config).run(start))
//!     .sum();
//!
//! assert!(totals.improvements >= 1);
//! assert!(incumbent.snapshot().unwrap().is_permutation());
//! ```

use crate::{cost, incumbent::SharedIncumbent, stats::WorkerStatistics};
use srflp_core::{num::SolverFloat, set::FacilitySet};
use srflp_model::{index::FacilityIndex, model::Model};

/// Default number of visited nodes between two reads of the shared bound.
pub const DEFAULT_REFRESH_INTERVAL: u64 = 4096;

/// Per-worker search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerConfig {
    refresh_mask: u64,
    inherit_incumbent_bound: bool,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            refresh_mask: DEFAULT_REFRESH_INTERVAL - 1,
            inherit_incumbent_bound: false,
        }
    }
}

impl WorkerConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many visited nodes pass between two reads of the shared bound.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is not a power of two.
    #[inline]
    pub fn with_refresh_interval(mut self, interval: u64) -> Self {
        assert!(
            interval.is_power_of_two(),
            "called `WorkerConfig::with_refresh_interval` with an interval that is not a power of two: {}",
            interval
        );
        self.refresh_mask = interval - 1;
        self
    }

    /// When set, a worker starts with the shared bound as its local bound
    /// instead of `+inf`.
    #[inline]
    pub fn with_inherited_bound(mut self, inherit: bool) -> Self {
        self.inherit_incumbent_bound = inherit;
        self
    }

    #[inline]
    pub fn refresh_interval(&self) -> u64 {
        self.refresh_mask + 1
    }

    #[inline]
    pub fn inherits_incumbent_bound(&self) -> bool {
        self.inherit_incumbent_bound
    }
}

/// Exact search over all layouts starting with a given facility.
pub struct BnbWorker<'a, T> {
    model: &'a Model<T>,
    incumbent: &'a SharedIncumbent<T>,
    config: WorkerConfig,
    /// Positions `0..depth` hold the current partial layout; the rest is scratch.
    permutation: Vec<FacilityIndex>,
    local_bound: T,
    stats: WorkerStatistics,
}

impl<'a, T> BnbWorker<'a, T>
where
    T: SolverFloat,
{
    pub fn new(model: &'a Model<T>, incumbent: &'a SharedIncumbent<T>, config: WorkerConfig) -> Self {
        Self {
            model,
            incumbent,
            config,
            permutation: vec![FacilityIndex::new(0); model.num_facilities()],
            local_bound: T::infinity(),
            stats: WorkerStatistics::default(),
        }
    }

    /// Explores every layout with `start` at position 0 and returns the
    /// worker's counters.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a facility of the model.
    pub fn run(mut self, start: FacilityIndex) -> WorkerStatistics {
        assert!(
            start.get() < self.model.num_facilities(),
            "called `BnbWorker::run` with start facility out of bounds: the len is {} but the index is {}",
            self.model.num_facilities(),
            start.get()
        );

        if self.config.inherit_incumbent_bound {
            self.local_bound = self.incumbent.upper_bound();
        }

        self.permutation[0] = start;
        self.search(FacilitySet::singleton(start.get()), 1, T::zero());

        tracing::debug!("Worker for facility {} finished: {}", start, self.stats);
        self.stats
    }

    fn search(&mut self, used: FacilitySet, depth: usize, cost: T) {
        self.stats.on_node_visited();

        if cost >= self.local_bound {
            self.stats.on_pruned();
            return;
        }

        let n = self.model.num_facilities();
        if depth == n {
            if self.incumbent.try_improve(cost, &self.permutation) {
                self.stats.on_improvement();
                self.local_bound = cost;
            }
            return;
        }

        // The root always reads the shared bound so a seeded incumbent prunes
        // from the first branch on.
        if depth == 1 || self.stats.nodes_visited & self.config.refresh_mask == 0 {
            let global = self.incumbent.upper_bound();
            if global < self.local_bound {
                self.local_bound = global;
            }
        }

        for id in 0..n {
            if used.contains(id) {
                continue;
            }
            let candidate = FacilityIndex::new(id);
            let increment = cost::cost_increment(self.model, &mut self.permutation, depth, candidate);
            let child_cost = cost + increment;
            if child_cost >= self.local_bound {
                self.stats.on_pruned();
                continue;
            }
            self.search(used.with(id), depth + 1, child_cost);
        }
    }
}

impl<T> std::fmt::Debug for BnbWorker<'_, T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BnbWorker")
            .field("config", &self.config)
            .field("local_bound", &self.local_bound)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
