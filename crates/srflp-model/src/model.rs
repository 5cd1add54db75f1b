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

//! The immutable problem instance and its builder.
//!
//! `Model<T>` stores widths in a plain vector and the interaction costs as a
//! flattened row-major `n * n` matrix, so the search reads `cost(a, b)` with a
//! single multiply-add and no pointer chasing. Both triangles are stored; the
//! builder keeps them in sync, which lets the search read `cost(a, b)` or
//! `cost(b, a)` interchangeably.

use crate::{error::ModelError, index::FacilityIndex};
use srflp_core::{num::SolverFloat, set::FacilitySet};

/// The largest instance a model can describe, bounded by the width of the
/// placed-facility bitmask used during search.
pub const MAX_FACILITIES: usize = FacilitySet::CAPACITY;

/// A validated Single Row Facility Layout instance.
#[derive(Clone, PartialEq)]
pub struct Model<T> {
    num_facilities: usize,
    widths: Vec<T>,
    /// Row-major `num_facilities * num_facilities` matrix. The diagonal is zero.
    costs: Vec<T>,
}

impl<T> Model<T>
where
    T: SolverFloat,
{
    /// Builds a model from a width vector and a full cost matrix.
    ///
    /// The matrix must be square, match the number of widths, and already be
    /// symmetric. Diagonal entries are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use srflp_model::model::Model;
    /// let model = Model::from_parts(
    ///     vec![2.0, 3.0],
    ///     &[vec![0.0, 5.0], vec![5.0, 0.0]],
    /// ).unwrap();
    /// assert_eq!(model.num_facilities(), 2);
    /// ```
    pub fn from_parts(widths: Vec<T>, matrix: &[Vec<T>]) -> Result<Self, ModelError> {
        let n = widths.len();
        if n > MAX_FACILITIES {
            return Err(ModelError::TooManyFacilities {
                found: n,
                max: MAX_FACILITIES,
            });
        }
        if matrix.len() != n {
            return Err(ModelError::RowCountMismatch {
                expected: n,
                found: matrix.len(),
            });
        }
        for (row, entries) in matrix.iter().enumerate() {
            if entries.len() != n {
                return Err(ModelError::DimensionMismatch {
                    row,
                    expected: n,
                    found: entries.len(),
                });
            }
        }

        let mut builder = ModelBuilder::new(n);
        for (i, &w) in widths.iter().enumerate() {
            builder.set_width(FacilityIndex::new(i), w);
        }
        for a in 0..n {
            for b in (a + 1)..n {
                if matrix[a][b] != matrix[b][a] {
                    return Err(ModelError::AsymmetricCost { a, b });
                }
                builder.set_cost(FacilityIndex::new(a), FacilityIndex::new(b), matrix[a][b]);
            }
        }
        builder.build()
    }

    #[inline]
    pub fn num_facilities(&self) -> usize {
        self.num_facilities
    }

    #[inline]
    pub fn widths(&self) -> &[T] {
        &self.widths
    }

    /// Returns the flattened row-major cost matrix.
    #[inline]
    pub fn costs(&self) -> &[T] {
        &self.costs
    }

    #[inline(always)]
    pub fn width(&self, facility: FacilityIndex) -> T {
        debug_assert!(
            facility.get() < self.num_facilities,
            "called `Model::width` with facility out of bounds: the len is {} but the index is {}",
            self.num_facilities,
            facility.get()
        );
        self.widths[facility.get()]
    }

    /// Returns the interaction cost between `a` and `b`.
    #[inline(always)]
    pub fn cost(&self, a: FacilityIndex, b: FacilityIndex) -> T {
        debug_assert!(
            a.get() < self.num_facilities && b.get() < self.num_facilities,
            "called `Model::cost` with facility out of bounds: the len is {} but the indices are ({}, {})",
            self.num_facilities,
            a.get(),
            b.get()
        );
        self.costs[a.get() * self.num_facilities + b.get()]
    }

    /// Returns all costs incident to `facility`, indexed by the other facility.
    #[inline]
    pub fn cost_row(&self, facility: FacilityIndex) -> &[T] {
        let start = facility.get() * self.num_facilities;
        &self.costs[start..start + self.num_facilities]
    }

    /// Returns the total interaction cost of `facility` with every other one.
    #[inline]
    pub fn row_sum(&self, facility: FacilityIndex) -> T {
        self.cost_row(facility)
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != facility.get())
            .fold(T::zero(), |acc, (_, &c)| acc + c)
    }

    /// Iterates all facility ids in ascending order.
    #[inline]
    pub fn facilities(&self) -> impl ExactSizeIterator<Item = FacilityIndex> {
        (0..self.num_facilities).map(FacilityIndex::new)
    }
}

impl<T> std::fmt::Debug for Model<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("num_facilities", &self.num_facilities)
            .field("widths", &self.widths)
            .finish_non_exhaustive()
    }
}

impl<T> std::fmt::Display for Model<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Model(num_facilities: {})", self.num_facilities)
    }
}

/// Mutable staging area for a `Model`.
///
/// # Defaults
///
/// | Field | Default | Semantics |
/// | :--- | :--- | :--- |
/// | `widths` | `1` | Every facility occupies one unit of the line. |
/// | `costs` | `0` | No interaction until a cost is set. |
#[derive(Clone, Debug)]
pub struct ModelBuilder<T> {
    num_facilities: usize,
    widths: Vec<T>,
    costs: Vec<T>,
}

impl<T> ModelBuilder<T>
where
    T: SolverFloat,
{
    /// Creates a builder for `num_facilities` facilities.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use srflp_model::{index::FacilityIndex, model::ModelBuilder};
    /// let mut builder = ModelBuilder::<f64>::new(3);
    /// builder
    ///     .set_width(FacilityIndex::new(0), 4.0)
    ///     .set_cost(FacilityIndex::new(0), FacilityIndex::new(2), 7.0);
    /// let model = builder.build().unwrap();
    /// assert_eq!(model.cost(FacilityIndex::new(2), FacilityIndex::new(0)), 7.0);
    /// ```
    pub fn new(num_facilities: usize) -> Self {
        // An oversized builder stages nothing; `build` rejects it anyway.
        let staged = if num_facilities <= MAX_FACILITIES {
            num_facilities
        } else {
            0
        };
        Self {
            num_facilities,
            widths: vec![T::one(); staged],
            costs: vec![T::zero(); staged * staged],
        }
    }

    #[inline]
    fn is_oversized(&self) -> bool {
        self.num_facilities > MAX_FACILITIES
    }

    #[inline]
    pub fn num_facilities(&self) -> usize {
        self.num_facilities
    }

    /// Sets the width of `facility`. Ignored on a builder with more than
    /// `MAX_FACILITIES` facilities.
    ///
    /// # Panics
    ///
    /// Panics if `facility` is not in `0..num_facilities()`.
    #[inline]
    pub fn set_width(&mut self, facility: FacilityIndex, width: T) -> &mut Self {
        assert!(
            facility.get() < self.num_facilities,
            "called `ModelBuilder::set_width` with facility out of bounds: the len is {} but the index is {}",
            self.num_facilities,
            facility.get()
        );
        if !self.is_oversized() {
            self.widths[facility.get()] = width;
        }
        self
    }

    /// Sets the interaction cost between `a` and `b` in both directions.
    /// Setting a diagonal entry is a no-op, as is any call on a builder with
    /// more than `MAX_FACILITIES` facilities.
    ///
    /// # Panics
    ///
    /// Panics if either facility is not in `0..num_facilities()`.
    #[inline]
    pub fn set_cost(&mut self, a: FacilityIndex, b: FacilityIndex, cost: T) -> &mut Self {
        let n = self.num_facilities;
        assert!(
            a.get() < n && b.get() < n,
            "called `ModelBuilder::set_cost` with facility out of bounds: the len is {} but the indices are ({}, {})",
            n,
            a.get(),
            b.get()
        );
        if a != b && !self.is_oversized() {
            self.costs[a.get() * n + b.get()] = cost;
            self.costs[b.get() * n + a.get()] = cost;
        }
        self
    }

    /// Validates the staged data and freezes it into a `Model`.
    pub fn build(self) -> Result<Model<T>, ModelError> {
        let n = self.num_facilities;
        if n == 0 {
            return Err(ModelError::Empty);
        }
        if n > MAX_FACILITIES {
            return Err(ModelError::TooManyFacilities {
                found: n,
                max: MAX_FACILITIES,
            });
        }
        if let Some(facility) = self
            .widths
            .iter()
            .position(|w| !w.is_finite() || *w <= T::zero())
        {
            return Err(ModelError::InvalidWidth { facility });
        }
        for a in 0..n {
            for b in (a + 1)..n {
                let c = self.costs[a * n + b];
                if !c.is_finite() || c < T::zero() {
                    return Err(ModelError::InvalidCost { a, b });
                }
            }
        }

        Ok(Model {
            num_facilities: n,
            widths: self.widths,
            costs: self.costs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fi(i: usize) -> FacilityIndex {
        FacilityIndex::new(i)
    }

    #[test]
    fn test_builder_defaults() {
        let model = ModelBuilder::<f64>::new(3).build().unwrap();
        assert_eq!(model.num_facilities(), 3);
        assert_eq!(model.widths(), &[1.0, 1.0, 1.0]);
        assert!(model.costs().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_set_cost_is_symmetric() {
        let mut builder = ModelBuilder::<f64>::new(3);
        builder.set_cost(fi(0), fi(2), 4.5);
        let model = builder.build().unwrap();
        assert_eq!(model.cost(fi(0), fi(2)), 4.5);
        assert_eq!(model.cost(fi(2), fi(0)), 4.5);
        assert_eq!(model.cost(fi(1), fi(2)), 0.0);
    }

    #[test]
    fn test_diagonal_cost_is_ignored() {
        let mut builder = ModelBuilder::<f64>::new(2);
        builder.set_cost(fi(1), fi(1), 99.0);
        let model = builder.build().unwrap();
        assert_eq!(model.cost(fi(1), fi(1)), 0.0);
    }

    #[test]
    fn test_row_sum_excludes_diagonal() {
        let mut builder = ModelBuilder::<f64>::new(3);
        builder
            .set_cost(fi(0), fi(1), 2.0)
            .set_cost(fi(0), fi(2), 3.0)
            .set_cost(fi(1), fi(2), 10.0);
        let model = builder.build().unwrap();
        assert_eq!(model.row_sum(fi(0)), 5.0);
        assert_eq!(model.row_sum(fi(1)), 12.0);
        assert_eq!(model.row_sum(fi(2)), 13.0);
    }

    #[test]
    fn test_empty_model_is_rejected() {
        assert_eq!(ModelBuilder::<f64>::new(0).build(), Err(ModelError::Empty));
    }

    #[test]
    fn test_capacity_boundary() {
        assert!(ModelBuilder::<f64>::new(MAX_FACILITIES).build().is_ok());
        assert_eq!(
            ModelBuilder::<f64>::new(MAX_FACILITIES + 1).build(),
            Err(ModelError::TooManyFacilities {
                found: 65,
                max: 64
            })
        );
    }

    #[test]
    fn test_huge_builder_is_rejected_without_allocating() {
        let n = 1usize << 40;
        let mut b = ModelBuilder::<f64>::new(n);
        b.set_width(FacilityIndex::new(5), 2.0)
            .set_cost(FacilityIndex::new(0), FacilityIndex::new(n - 1), 3.0);
        assert_eq!(b.num_facilities(), n);
        assert_eq!(
            b.build(),
            Err(ModelError::TooManyFacilities {
                found: n,
                max: MAX_FACILITIES
            })
        );
    }

    #[test]
    fn test_from_parts_rejects_oversized_input_first() {
        let widths = vec![1.0_f64; MAX_FACILITIES + 1];
        assert_eq!(
            Model::from_parts(widths, &[]),
            Err(ModelError::TooManyFacilities {
                found: MAX_FACILITIES + 1,
                max: MAX_FACILITIES
            })
        );
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        let mut builder = ModelBuilder::<f64>::new(3);
        builder.set_width(fi(1), 0.0);
        assert_eq!(builder.build(), Err(ModelError::InvalidWidth { facility: 1 }));

        let mut builder = ModelBuilder::<f64>::new(3);
        builder.set_width(fi(2), f64::NAN);
        assert_eq!(builder.build(), Err(ModelError::InvalidWidth { facility: 2 }));
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let mut builder = ModelBuilder::<f32>::new(3);
        builder.set_cost(fi(2), fi(1), -1.0);
        assert_eq!(builder.build(), Err(ModelError::InvalidCost { a: 1, b: 2 }));
    }

    #[test]
    #[should_panic(expected = "called `ModelBuilder::set_width` with facility out of bounds")]
    fn test_set_width_out_of_bounds_panics() {
        let mut builder = ModelBuilder::<f64>::new(2);
        builder.set_width(fi(2), 1.0);
    }

    #[test]
    fn test_from_parts_round_trips_matrix() {
        let matrix = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ];
        let model = Model::from_parts(vec![1.0, 2.0, 3.0], &matrix).unwrap();
        for a in 0..3 {
            for b in 0..3 {
                assert_eq!(model.cost(fi(a), fi(b)), matrix[a][b]);
            }
        }
        assert_eq!(model.width(fi(2)), 3.0);
    }

    #[test]
    fn test_from_parts_rejects_asymmetry() {
        let matrix = vec![vec![0.0, 1.0], vec![2.0, 0.0]];
        assert_eq!(
            Model::from_parts(vec![1.0, 1.0], &matrix),
            Err(ModelError::AsymmetricCost { a: 0, b: 1 })
        );
    }

    #[test]
    fn test_from_parts_rejects_shape_errors() {
        assert_eq!(
            Model::<f64>::from_parts(vec![1.0, 1.0], &[vec![0.0, 1.0]]),
            Err(ModelError::RowCountMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Model::<f64>::from_parts(vec![1.0, 1.0], &[vec![0.0, 1.0], vec![1.0]]),
            Err(ModelError::DimensionMismatch {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_facilities_iterator() {
        let model = ModelBuilder::<f64>::new(4).build().unwrap();
        let ids = model.facilities().map(FacilityIndex::get).collect::<Vec<_>>();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }
}
