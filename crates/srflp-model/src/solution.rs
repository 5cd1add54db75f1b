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

use crate::index::FacilityIndex;
use srflp_core::{num::SolverFloat, set::FacilitySet};

/// A complete layout: an ordering of all facilities along the line together
/// with its total weighted distance cost.
///
/// `permutation()[p]` is the facility placed at position `p`.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T> {
    objective_value: T,
    permutation: Vec<FacilityIndex>,
}

impl<T> Solution<T>
where
    T: SolverFloat,
{
    /// Constructs a new `Solution`. The permutation is not validated; see
    /// `is_permutation`.
    #[inline]
    pub fn new(objective_value: T, permutation: Vec<FacilityIndex>) -> Self {
        Self {
            objective_value,
            permutation,
        }
    }

    #[inline]
    pub fn objective_value(&self) -> T {
        self.objective_value
    }

    #[inline]
    pub fn permutation(&self) -> &[FacilityIndex] {
        &self.permutation
    }

    #[inline]
    pub fn num_facilities(&self) -> usize {
        self.permutation.len()
    }

    /// Returns the facility at line position `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of bounds.
    #[inline]
    pub fn facility_at(&self, position: usize) -> FacilityIndex {
        self.permutation[position]
    }

    /// Returns `true` if the permutation is a bijection on `0..num_facilities()`.
    pub fn is_permutation(&self) -> bool {
        let n = self.permutation.len();
        if n > FacilitySet::CAPACITY {
            return false;
        }
        let mut seen = FacilitySet::empty();
        for f in &self.permutation {
            if f.get() >= n || seen.contains(f.get()) {
                return false;
            }
            seen.insert(f.get());
        }
        true
    }

    /// Returns the permutation as raw ids.
    #[inline]
    pub fn to_ids(&self) -> Vec<usize> {
        self.permutation.iter().map(|f| f.get()).collect()
    }
}

impl<T> std::fmt::Display for Solution<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Layout Summary")?;
        writeln!(f, "   Objective Value: {:.2}", self.objective_value)?;

        if self.permutation.is_empty() {
            writeln!(f, "   (No facilities placed)")?;
            return Ok(());
        }

        let zero_based = self.to_ids();
        let one_based = zero_based.iter().map(|i| i + 1).collect::<Vec<_>>();
        writeln!(f, "   Permutation:          {:?}", zero_based)?;
        writeln!(
            f,
            "   Permutation (1..={}): {:?}",
            self.permutation.len(),
            one_based
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(ids: &[usize]) -> Vec<FacilityIndex> {
        ids.iter().copied().map(FacilityIndex::new).collect()
    }

    #[test]
    fn test_new_and_basic_accessors() {
        let sol = Solution::new(42.5_f64, perm(&[2, 0, 1]));
        assert_eq!(sol.objective_value(), 42.5);
        assert_eq!(sol.num_facilities(), 3);
        assert_eq!(sol.facility_at(0).get(), 2);
        assert_eq!(sol.to_ids(), vec![2, 0, 1]);
    }

    #[test]
    fn test_is_permutation() {
        assert!(Solution::new(0.0_f64, perm(&[1, 0, 2])).is_permutation());
        assert!(Solution::new(0.0_f64, perm(&[])).is_permutation());
        assert!(!Solution::new(0.0_f64, perm(&[0, 0, 2])).is_permutation());
        assert!(!Solution::new(0.0_f64, perm(&[0, 3, 1])).is_permutation());
    }

    #[test]
    fn test_display_formatting_example() {
        let sol = Solution::new(98.0_f64, perm(&[1, 0, 2]));

        let mut expected = String::new();
        expected.push_str("Layout Summary\n");
        expected.push_str("   Objective Value: 98.00\n");
        expected.push_str("   Permutation:          [1, 0, 2]\n");
        expected.push_str("   Permutation (1..=3): [2, 1, 3]\n");

        assert_eq!(format!("{}", sol), expected);
    }

    #[test]
    fn test_display_empty_solution() {
        let sol = Solution::new(0.0_f64, Vec::new());
        assert!(format!("{}", sol).contains("(No facilities placed)"));
    }
}
