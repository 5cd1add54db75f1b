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

//! Greedy bound seeder.
//!
//! Builds one complete layout before the exact search starts so workers can
//! prune against a finite bound from the first refresh on. Facilities are
//! ranked by their total incident cost (row sum), highest first. The highest
//! ranked facility opens the line; every following position takes the unplaced
//! facility with the smallest cost increment, ties going to the better ranked
//! one.
//!
//! The result is an admissible upper bound: it is the cost of a real layout,
//! hence never below the optimum. It is not the deliverable of the solver.

use crate::cost;
use srflp_core::{num::SolverFloat, set::FacilitySet};
use srflp_model::{index::FacilityIndex, model::Model, solution::Solution};
use std::cmp::Ordering;

/// The greedy layout together with the ranking that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedySeed<T> {
    ranking: Vec<FacilityIndex>,
    solution: Solution<T>,
}

impl<T> GreedySeed<T>
where
    T: SolverFloat,
{
    /// Facilities ordered by total incident cost, highest first.
    #[inline]
    pub fn ranking(&self) -> &[FacilityIndex] {
        &self.ranking
    }

    #[inline]
    pub fn solution(&self) -> &Solution<T> {
        &self.solution
    }

    #[inline]
    pub fn into_parts(self) -> (Vec<FacilityIndex>, Solution<T>) {
        (self.ranking, self.solution)
    }
}

/// Constructs greedy layouts used as initial upper bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyBoundSeeder;

impl GreedyBoundSeeder {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Ranks all facilities by row sum, highest first. Equal sums keep
    /// ascending id order.
    pub fn rank<T>(&self, model: &Model<T>) -> Vec<FacilityIndex>
    where
        T: SolverFloat,
    {
        let mut weighted = model
            .facilities()
            .map(|f| (f, model.row_sum(f)))
            .collect::<Vec<_>>();
        // Stable sort keeps ties in id order.
        weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        weighted.into_iter().map(|(f, _)| f).collect()
    }

    /// Builds the greedy layout for `model`.
    pub fn seed<T>(&self, model: &Model<T>) -> GreedySeed<T>
    where
        T: SolverFloat,
    {
        let ranking = self.rank(model);
        let n = ranking.len();
        debug_assert!(n > 0, "called `GreedyBoundSeeder::seed` on an empty model");

        let mut permutation = vec![ranking[0]; n];
        let mut placed = FacilitySet::singleton(ranking[0].get());
        let mut total = T::zero();

        for depth in 1..n {
            let mut best: Option<(FacilityIndex, T)> = None;
            for &candidate in &ranking {
                if placed.contains(candidate.get()) {
                    continue;
                }
                let increment = cost::cost_increment(model, &mut permutation, depth, candidate);
                if best.is_none_or(|(_, best_increment)| increment < best_increment) {
                    best = Some((candidate, increment));
                }
            }

            if let Some((facility, increment)) = best {
                permutation[depth] = facility;
                placed.insert(facility.get());
                total = total + increment;
            }
        }

        tracing::debug!("Greedy seed built with cost {}", total);

        GreedySeed {
            ranking,
            solution: Solution::new(total, permutation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::layout_cost;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use srflp_model::model::ModelBuilder;

    fn fi(i: usize) -> FacilityIndex {
        FacilityIndex::new(i)
    }

    fn random_model(n: usize, seed: u64) -> Model<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut b = ModelBuilder::new(n);
        for i in 0..n {
            b.set_width(fi(i), rng.random_range(1..=9) as f64);
            for j in (i + 1)..n {
                b.set_cost(fi(i), fi(j), rng.random_range(0..=20) as f64);
            }
        }
        b.build().unwrap()
    }

    fn next_permutation(p: &mut [usize]) -> bool {
        let Some(i) = (1..p.len()).rev().find(|&i| p[i - 1] < p[i]) else {
            return false;
        };
        let j = (i..p.len()).rev().find(|&j| p[j] > p[i - 1]).unwrap();
        p.swap(i - 1, j);
        p[i..].reverse();
        true
    }

    fn brute_force_optimum(model: &Model<f64>) -> f64 {
        let mut ids = (0..model.num_facilities()).collect::<Vec<_>>();
        let mut best = f64::INFINITY;
        loop {
            let p = ids.iter().copied().map(fi).collect::<Vec<_>>();
            best = best.min(layout_cost(model, &p));
            if !next_permutation(&mut ids) {
                break best;
            }
        }
    }

    #[test]
    fn test_rank_orders_by_row_sum_descending() {
        let mut b = ModelBuilder::<f64>::new(4);
        b.set_cost(fi(0), fi(1), 1.0)
            .set_cost(fi(2), fi(3), 10.0)
            .set_cost(fi(1), fi(3), 2.0);
        let model = b.build().unwrap();
        // Row sums: 0 -> 1, 1 -> 3, 2 -> 10, 3 -> 12.
        let ranking = GreedyBoundSeeder::new().rank(&model);
        assert_eq!(ranking, vec![fi(3), fi(2), fi(1), fi(0)]);
    }

    #[test]
    fn test_rank_ties_keep_id_order() {
        let model = ModelBuilder::<f64>::new(3).build().unwrap();
        let ranking = GreedyBoundSeeder::new().rank(&model);
        assert_eq!(ranking, vec![fi(0), fi(1), fi(2)]);
    }

    #[test]
    fn test_seed_starts_with_highest_ranked_facility() {
        let model = random_model(7, 11);
        let seed = GreedyBoundSeeder::new().seed(&model);
        assert_eq!(seed.solution().facility_at(0), seed.ranking()[0]);
        assert!(seed.solution().is_permutation());
    }

    #[test]
    fn test_seed_cost_matches_layout_cost() {
        for s in 0..10 {
            let model = random_model(8, s);
            let seed = GreedyBoundSeeder::new().seed(&model);
            assert_eq!(
                seed.solution().objective_value(),
                layout_cost(&model, seed.solution().permutation())
            );
        }
    }

    #[test]
    fn test_seed_is_an_upper_bound_on_the_optimum() {
        for s in 0..8 {
            let model = random_model(6, 100 + s);
            let seed = GreedyBoundSeeder::new().seed(&model);
            assert!(seed.solution().objective_value() >= brute_force_optimum(&model));
        }
    }

    #[test]
    fn test_seed_takes_smallest_increment_not_heaviest_pair() {
        // Row sums rank 0, 2, 1. At depth 1 facility 1 adds 1 * 3 while 2 adds
        // 50 * 3, so the seed places 1 next even though [0, 2, 1] is cheaper.
        let mut b = ModelBuilder::<f64>::new(3);
        b.set_cost(fi(0), fi(1), 1.0).set_cost(fi(0), fi(2), 50.0);
        let model = b.build().unwrap();
        let seed = GreedyBoundSeeder::new().seed(&model);
        assert_eq!(seed.ranking(), &[fi(0), fi(2), fi(1)]);
        assert_eq!(seed.solution().to_ids(), vec![0, 1, 2]);
        // 1 * 3 + 50 * 4
        assert_eq!(seed.solution().objective_value(), 203.0);
    }

    #[test]
    fn test_seed_single_facility() {
        let model = ModelBuilder::<f64>::new(1).build().unwrap();
        let seed = GreedyBoundSeeder::new().seed(&model);
        assert_eq!(seed.solution().to_ids(), vec![0]);
        assert_eq!(seed.solution().objective_value(), 0.0);
    }
}
