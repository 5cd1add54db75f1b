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

//! # SRFLP Core
//!
//! Foundational primitives shared by the model and solver crates of the
//! Single Row Facility Layout Problem solver. Nothing in here knows about
//! facilities or layouts; it only provides the numeric and bit-level building
//! blocks the hot search loop is written against.
//!
//! ## Modules
//!
//! - `num`: the `SolverFloat` trait alias, a `num_traits::Float` with a
//!   lossless round-trip through a 64-bit pattern.
//! - `atomic`: `AtomicFloat<T>`, an atomic cell over the bit pattern of a
//!   floating point value with compare-exchange support.
//! - `set`: `FacilitySet`, a fixed-width `u64` bitmask marking placed items.

pub mod atomic;
pub mod num;
pub mod set;
