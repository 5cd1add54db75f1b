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

use thiserror::Error;

/// Reasons a set of widths and costs does not form a valid model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("a model needs at least one facility")]
    Empty,

    #[error("{found} facilities exceed the supported maximum of {max}")]
    TooManyFacilities { found: usize, max: usize },

    #[error("facility {facility} has a non-positive or non-finite width")]
    InvalidWidth { facility: usize },

    #[error("cost between facilities {a} and {b} is negative or non-finite")]
    InvalidCost { a: usize, b: usize },

    #[error("cost matrix is not symmetric at ({a}, {b})")]
    AsymmetricCost { a: usize, b: usize },

    #[error("cost matrix has {found} rows, expected {expected}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("cost matrix row {row} has {found} entries, expected {expected}")]
    DimensionMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}
