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

//! # Solver Float Trait
//!
//! Unified numeric bounds for costs and widths. `SolverFloat` collects the
//! floating point capabilities the search needs into a single alias and adds a
//! lossless conversion to and from a `u64` bit pattern, which is what lets the
//! shared best cost live inside an `AtomicU64`.
//!
//! Implemented for `f32` and `f64`. An `f32` pattern occupies the low 32 bits.

use num_traits::{Float, FromPrimitive};

/// A trait alias for floating point types usable as costs and widths.
///
/// # Note
///
/// Values are assumed to be totally ordered, i.e. never `NaN`. The search
/// compares costs with `<` and `>=` and would silently stop pruning on `NaN`.
pub trait SolverFloat:
    Float + FromPrimitive + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
    /// Returns the raw bit pattern of `self`, zero-extended to 64 bits.
    fn to_bits_u64(self) -> u64;

    /// Reconstructs a value from a pattern produced by `to_bits_u64`.
    fn from_bits_u64(bits: u64) -> Self;
}

impl SolverFloat for f64 {
    #[inline(always)]
    fn to_bits_u64(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_bits_u64(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

impl SolverFloat for f32 {
    #[inline(always)]
    fn to_bits_u64(self) -> u64 {
        self.to_bits() as u64
    }

    #[inline(always)]
    fn from_bits_u64(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }
}
