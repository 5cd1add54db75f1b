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

//! SRFLP-BnB: exact branch-and-bound for single row facility layout
//!
//! Implements the search engine that orders facilities along a line so the
//! total weighted distance cost is minimal. The pieces are kept separate so
//! the coordinator (`srflp_solver`) only wires them together.
//!
//! Core flow
//! - Provide a `srflp_model::model::Model<T>`.
//! - Seed an upper bound with `greedy::GreedyBoundSeeder`.
//! - Install it into an `incumbent::SharedIncumbent`.
//! - Run one `worker::BnbWorker` per first-placed facility, all sharing the
//!   same incumbent.
//!
//! Design highlights
//! - Incremental cost: extending a partial layout by one facility costs
//!   O(depth), never a full re-evaluation.
//! - Allocation-free recursion: each worker owns one permutation buffer that
//!   is overwritten in place; positions past the current depth are scratch.
//! - Lock-free hot path: workers keep a private bound and only read the
//!   shared one every `refresh_interval` nodes.
//!
//! Module map
//! - `cost`: distance and incremental cost functions.
//! - `greedy`: the greedy bound seeder.
//! - `incumbent`: the shared best cost and layout.
//! - `worker`: the recursive depth-first search.
//! - `stats`: per-worker counters.

pub mod cost;
pub mod greedy;
pub mod incumbent;
pub mod stats;
pub mod worker;
