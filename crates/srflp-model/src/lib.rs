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

//! # SRFLP Model
//!
//! **The domain model of the Single Row Facility Layout Problem.**
//!
//! This crate defines the data exchanged between whoever supplies an instance
//! and the search engine (`srflp_bnb`): facility widths, the symmetric
//! interaction cost matrix, and the resulting layouts.
//!
//! ## Architecture
//!
//! * **`index`**: `FacilityIndex`, a typed wrapper so facility ids and
//!   permutation positions are not confused.
//! * **`model`**: the immutable `Model` (flattened, ready for the hot loop) and
//!   the mutable `ModelBuilder`.
//! * **`solution`**: a complete layout with its total cost.
//! * **`loading`**: a text loader for the classic dataset format.
//! * **`error`**: validation failures raised while building a model.
//!
//! ## Design Philosophy
//!
//! The search trusts its input completely. Every precondition it relies on
//! (at least one facility, at most `FacilitySet::CAPACITY` facilities,
//! positive widths, a non-negative symmetric matrix) is checked here, once,
//! when the model is built.

pub mod error;
pub mod index;
pub mod loading;
pub mod model;
pub mod solution;
