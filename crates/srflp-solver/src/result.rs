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

use crate::stats::SearchStatistics;
use srflp_core::num::SolverFloat;
use srflp_model::solution::Solution;

/// The result of a completed search.
///
/// The search is exhaustive, so `solution` is optimal for the model.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome<T> {
    solution: Solution<T>,
    seed: Option<Solution<T>>,
    statistics: SearchStatistics,
}

impl<T> SolverOutcome<T>
where
    T: SolverFloat,
{
    #[inline]
    pub fn new(solution: Solution<T>, seed: Option<Solution<T>>, statistics: SearchStatistics) -> Self {
        Self {
            solution,
            seed,
            statistics,
        }
    }

    /// The best layout found.
    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    #[inline]
    pub fn objective_value(&self) -> T {
        self.solution.objective_value()
    }

    /// The greedy layout used as the initial bound, if seeding was enabled.
    #[inline]
    pub fn seed(&self) -> Option<&Solution<T>> {
        self.seed.as_ref()
    }

    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    #[inline]
    pub fn into_solution(self) -> Solution<T> {
        self.solution
    }
}

impl<T> std::fmt::Display for SolverOutcome<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(seed) = &self.seed {
            writeln!(f, "Greedy Seed: {:.2}", seed.objective_value())?;
        }
        write!(f, "{}", self.solution)?;
        write!(f, "{}", self.statistics)
    }
}
