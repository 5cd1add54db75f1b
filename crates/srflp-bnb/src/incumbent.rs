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

//! # Shared Incumbent
//!
//! The best complete layout found so far, shared by all workers.
//!
//! ## Motivation
//!
//! Every worker prunes against the best known cost, and every worker may find
//! a better layout. Reading that cost must be cheap enough for the hot path of
//! the search, while the layout itself only changes a handful of times per
//! solve.
//!
//! ## Highlights
//!
//! - An `AtomicFloat<T>` upper bound, read lock-free by workers and lowered
//!   with a compare-exchange retry loop. It starts at `+inf` and never
//!   increases.
//! - A `Mutex`-guarded buffer holding the permutation together with the cost
//!   it belongs to. A caller that wins the compare-exchange takes the lock and
//!   overwrites the buffer only if its cost is still strictly below the
//!   buffered cost. Two winners racing for the lock therefore cannot leave a
//!   worse permutation behind a better bound: once every worker has finished,
//!   the buffered cost equals the atomic bound and the permutation realizes it.
//! - Lock poisoning is ignored; the buffer is rewritten whole under the lock.
//!
//! ## Usage
//!
//! ```rust
//! use srflp_bnb::incumbent::SharedIncumbent;
//! use srflp_model::index::FacilityIndex;
//!
//! let incumbent = SharedIncumbent::<f64>::new(3);
//! assert_eq!(incumbent.upper_bound(), f64::INFINITY);
//!
//! let layout = [2, 0, 1].map(FacilityIndex::new);
//! assert!(incumbent.try_improve(42.0, &layout));
//! // Equal or worse costs are rejected.
//! assert!(!incumbent.try_improve(42.0, &layout));
//!
//! let best = incumbent.snapshot().unwrap();
//! assert_eq!(best.objective_value(), 42.0);
//! assert_eq!(best.to_ids(), vec![2, 0, 1]);
//! ```

use srflp_core::{atomic::AtomicFloat, num::SolverFloat};
use srflp_model::{index::FacilityIndex, solution::Solution};
use std::sync::{Mutex, MutexGuard, PoisonError, atomic::Ordering};

#[derive(Debug)]
struct BestLayout<T> {
    objective: T,
    permutation: Vec<FacilityIndex>,
}

/// A concurrent holder for the best layout found during search.
pub struct SharedIncumbent<T> {
    /// Lock-free copy of the best cost. `+inf` while nothing is installed.
    upper_bound: AtomicFloat<T>,
    best: Mutex<BestLayout<T>>,
}

impl<T> SharedIncumbent<T>
where
    T: SolverFloat,
{
    /// Creates an empty incumbent for layouts of `num_facilities` facilities.
    /// The upper bound starts at `+inf`.
    #[inline]
    pub fn new(num_facilities: usize) -> Self {
        Self {
            upper_bound: AtomicFloat::new(T::infinity()),
            best: Mutex::new(BestLayout {
                objective: T::infinity(),
                permutation: Vec::with_capacity(num_facilities),
            }),
        }
    }

    /// Creates an incumbent already holding `solution`.
    #[inline]
    pub fn from_solution(solution: &Solution<T>) -> Self {
        Self {
            upper_bound: AtomicFloat::new(solution.objective_value()),
            best: Mutex::new(BestLayout {
                objective: solution.objective_value(),
                permutation: solution.permutation().to_vec(),
            }),
        }
    }

    /// Returns the current upper bound.
    #[inline(always)]
    pub fn upper_bound(&self) -> T {
        self.upper_bound.load(Ordering::Relaxed)
    }

    /// Offers a complete layout with the given cost.
    ///
    /// Returns `true` if `cost` was strictly below the bound and the bound was
    /// lowered to it. Equal or worse costs leave everything untouched.
    pub fn try_improve(&self, cost: T, permutation: &[FacilityIndex]) -> bool {
        let mut current = self.upper_bound.load(Ordering::Relaxed);
        loop {
            if cost >= current {
                return false;
            }
            match self.upper_bound.compare_exchange_weak(
                current,
                cost,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }

        let mut best = self.lock();
        // A faster winner with an even lower cost may already hold the lock.
        if cost < best.objective {
            best.objective = cost;
            best.permutation.clear();
            best.permutation.extend_from_slice(permutation);
        }
        drop(best);

        tracing::trace!("Incumbent improved to {}", cost);
        true
    }

    /// Returns a copy of the stored layout, or `None` if nothing was installed.
    pub fn snapshot(&self) -> Option<Solution<T>> {
        let best = self.lock();
        if best.permutation.is_empty() {
            return None;
        }
        Some(Solution::new(best.objective, best.permutation.clone()))
    }

    /// Poisoning is ignored. The buffer is only written while the lock is held.
    #[inline]
    fn lock(&self) -> MutexGuard<'_, BestLayout<T>> {
        self.best.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> std::fmt::Debug for SharedIncumbent<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedIncumbent")
            .field("upper_bound", &self.upper_bound())
            .finish_non_exhaustive()
    }
}

impl<T> std::fmt::Display for SharedIncumbent<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Incumbent(upper_bound: {})", self.upper_bound())
    }
}
