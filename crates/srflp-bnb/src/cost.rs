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

//! Distance and incremental cost model.
//!
//! The distance between the facilities at positions `i <= j` is
//!
//! ```raw
//! d(i, j) = (l[p_i] + l[p_j]) / 2 + sum(l[p_k] for i <= k <= j)
//! ```
//!
//! The width sum includes both endpoints. This differs from the textbook SRFLP
//! definition (strict interior `i < k < j`) and is what every function here
//! computes; do not change one without the others.
//!
//! A layout's total cost is the sum over all position pairs `i < j` of
//! `c[p_i][p_j] * d(i, j)`. The search builds it incrementally: placing a
//! facility at position `depth` adds `cost_increment(.., depth, ..)`.

use srflp_core::num::SolverFloat;
use srflp_model::{index::FacilityIndex, model::Model};

/// Distance between the facilities at positions `i` and `j` of `permutation`.
///
/// Only positions `i..=j` are read.
///
/// # Panics
///
/// Panics if `j` is out of bounds for `permutation`. Requires `i <= j`.
#[inline]
pub fn distance<T>(model: &Model<T>, permutation: &[FacilityIndex], i: usize, j: usize) -> T
where
    T: SolverFloat,
{
    debug_assert!(i <= j, "called `cost::distance` with i > j: {} > {}", i, j);

    let half_ends = (model.width(permutation[i]) + model.width(permutation[j])) / two::<T>();
    permutation[i..=j]
        .iter()
        .fold(half_ends, |acc, &f| acc + model.width(f))
}

/// Places `candidate` at `permutation[depth]` and returns the cost it adds
/// against the facilities already at positions `0..depth`.
///
/// Runs in O(depth). A first pass sums the widths of `0..=depth`; the second
/// pass walks the placed facilities in ascending position order and drops
/// each width from that span once its pair is accounted for, so no distance
/// is recomputed from scratch. Pair terms are added in ascending position
/// order, the same order as summing `cost * distance(i, depth)` over
/// `i in 0..depth`. For integer widths every span is exact and the two agree
/// bit for bit.
///
/// The write to `permutation[depth]` is intentional; callers reuse the slot
/// for the next sibling.
///
/// # Panics
///
/// Panics if `depth` is out of bounds for `permutation`.
#[inline]
pub fn cost_increment<T>(
    model: &Model<T>,
    permutation: &mut [FacilityIndex],
    depth: usize,
    candidate: FacilityIndex,
) -> T
where
    T: SolverFloat,
{
    permutation[depth] = candidate;

    let candidate_width = model.width(candidate);
    let row = model.cost_row(candidate);
    let half = two::<T>().recip();

    let placed = &permutation[..depth];
    let mut span = placed
        .iter()
        .fold(candidate_width, |acc, &f| acc + model.width(f));

    let mut increment = T::zero();
    for &facility in placed {
        let placed_width = model.width(facility);
        let d = (placed_width + candidate_width) * half + span;
        increment = increment + row[facility.get()] * d;
        span = span - placed_width;
    }
    increment
}

/// Total cost of a complete (or partial) permutation, accumulated exactly the
/// way the search accumulates it, position by position.
///
/// A permutation evaluated by this function and reached by the search always
/// gets a bit-identical cost.
pub fn layout_cost<T>(model: &Model<T>, permutation: &[FacilityIndex]) -> T
where
    T: SolverFloat,
{
    let mut scratch = permutation.to_vec();
    (1..permutation.len()).fold(T::zero(), |acc, depth| {
        acc + cost_increment(model, &mut scratch, depth, permutation[depth])
    })
}

#[inline(always)]
fn two<T: SolverFloat>() -> T {
    T::one() + T::one()
}
