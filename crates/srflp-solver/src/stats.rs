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

use srflp_bnb::stats::WorkerStatistics;

/// Statistics of one `Solver::solve` call, summed over all workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Total nodes visited.
    pub nodes_visited: u64,
    /// Total subtrees pruned against a bound.
    pub nodes_pruned: u64,
    /// Number of times a worker lowered the shared bound.
    pub improvements: u64,
    /// Number of worker threads spawned.
    pub used_threads: usize,
    /// Wall time from the start of seeding to the join of the last worker.
    pub solve_duration: std::time::Duration,
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Nodes Visited: {}", self.nodes_visited)?;
        writeln!(f, "  Nodes Pruned: {}", self.nodes_pruned)?;
        writeln!(f, "  Improvements: {}", self.improvements)?;
        writeln!(f, "  Used Threads: {}", self.used_threads)?;
        writeln!(
            f,
            "  Solve Duration (secs): {:.3}",
            self.solve_duration.as_secs_f64()
        )
    }
}

/// Builder for `SearchStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatisticsBuilder {
    nodes_visited: u64,
    nodes_pruned: u64,
    improvements: u64,
    used_threads: usize,
    solve_duration: std::time::Duration,
}

impl Default for SearchStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatisticsBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes_visited: 0,
            nodes_pruned: 0,
            improvements: 0,
            used_threads: 0,
            solve_duration: std::time::Duration::ZERO,
        }
    }

    /// Takes the three search counters from summed worker statistics.
    #[inline]
    pub fn workers(mut self, totals: WorkerStatistics) -> Self {
        self.nodes_visited = totals.nodes_visited;
        self.nodes_pruned = totals.nodes_pruned;
        self.improvements = totals.improvements;
        self
    }

    #[inline]
    pub fn used_threads(mut self, used_threads: usize) -> Self {
        self.used_threads = used_threads;
        self
    }

    #[inline]
    pub fn solve_duration(mut self, solve_duration: std::time::Duration) -> Self {
        self.solve_duration = solve_duration;
        self
    }

    #[inline]
    pub fn build(self) -> SearchStatistics {
        SearchStatistics {
            nodes_visited: self.nodes_visited,
            nodes_pruned: self.nodes_pruned,
            improvements: self.improvements,
            used_threads: self.used_threads,
            solve_duration: self.solve_duration,
        }
    }
}
