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

//! # SRFLP Solver
//!
//! Parallel coordinator for the exact single row facility layout search.
//!
//! `Solver::solve` seeds an upper bound with the greedy heuristic, spawns one
//! named thread per facility (each exploring the layouts that start with that
//! facility), joins them all, and reports the best layout together with the
//! summed search statistics.
//!
//! ```rust
//! use srflp_model::{index::FacilityIndex, model::ModelBuilder};
//! use srflp_solver::solver::SolverBuilder;
//!
//! let mut builder = ModelBuilder::<f64>::new(3);
//! builder
//!     .set_cost(FacilityIndex::new(0), FacilityIndex::new(1), 4.0)
//!     .set_cost(FacilityIndex::new(1), FacilityIndex::new(2), 1.0);
//! let model = builder.build().unwrap();
//!
//! let outcome = SolverBuilder::new().build().solve(&model).unwrap();
//! assert!(outcome.solution().is_permutation());
//! ```

pub mod error;
pub mod result;
pub mod solver;
pub mod stats;
