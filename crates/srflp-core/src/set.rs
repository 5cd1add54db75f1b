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

//! # Facility Set (Fixed-Width Bitmask)
//!
//! `FacilitySet` marks which items of a partial permutation are already
//! placed. It wraps a single `u64`, so membership tests and insertions are a
//! shift and a mask, and a set is `Copy` and can be passed by value down the
//! recursion without any allocation.
//!
//! The capacity is therefore fixed at 64 items. Nothing here computes
//! `(1 << n) - 1`, so a full 64-item set is representable without overflow.

/// A set of item indices in `0..FacilitySet::CAPACITY`, stored as a bitmask.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FacilitySet(u64);

impl FacilitySet {
    /// The largest number of distinct items a set can hold.
    pub const CAPACITY: usize = u64::BITS as usize;

    /// Creates an empty set.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Creates a set containing only `index`.
    #[inline(always)]
    pub const fn singleton(index: usize) -> Self {
        Self::empty().with(index)
    }

    /// Returns a copy of `self` with `index` inserted.
    #[inline(always)]
    pub const fn with(self, index: usize) -> Self {
        debug_assert!(
            index < Self::CAPACITY,
            "called `FacilitySet::with` with index out of bounds"
        );
        Self(self.0 | (1u64 << index))
    }

    /// Inserts `index` in place.
    #[inline(always)]
    pub fn insert(&mut self, index: usize) {
        *self = self.with(index);
    }

    #[inline(always)]
    pub const fn contains(self, index: usize) -> bool {
        debug_assert!(
            index < Self::CAPACITY,
            "called `FacilitySet::contains` with index out of bounds"
        );
        self.0 & (1u64 << index) != 0
    }

    /// Returns the number of items in the set.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw mask.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Iterates the contained indices in ascending order.
    #[inline]
    pub fn iter(self) -> FacilitySetIter {
        FacilitySetIter { remaining: self.0 }
    }
}

impl std::fmt::Debug for FacilitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl std::fmt::Display for FacilitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FacilitySet({:#066b})", self.0)
    }
}

impl FromIterator<usize> for FacilitySet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// Iterator over the indices of a `FacilitySet`, lowest first.
#[derive(Clone, Debug)]
pub struct FacilitySetIter {
    remaining: u64,
}

impl Iterator for FacilitySetIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.remaining &= self.remaining - 1;
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for FacilitySetIter {}

impl std::iter::FusedIterator for FacilitySetIter {}

#[cfg(test)]
mod tests {
    use super::FacilitySet;

    #[test]
    fn test_empty_set() {
        let set = FacilitySet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(0));
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_singleton_and_with() {
        let set = FacilitySet::singleton(3).with(7);
        assert!(set.contains(3));
        assert!(set.contains(7));
        assert!(!set.contains(4));
        assert_eq!(set.len(), 2);
        assert_eq!(set.bits(), (1 << 3) | (1 << 7));
    }

    #[test]
    fn test_with_does_not_mutate_original() {
        let base = FacilitySet::singleton(1);
        let extended = base.with(2);
        assert!(!base.contains(2));
        assert!(extended.contains(2));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = FacilitySet::empty();
        set.insert(5);
        set.insert(5);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_highest_bit_does_not_overflow() {
        let set = FacilitySet::singleton(FacilitySet::CAPACITY - 1);
        assert!(set.contains(63));
        assert_eq!(set.bits(), 1u64 << 63);
    }

    #[test]
    fn test_full_capacity_set() {
        let set: FacilitySet = (0..FacilitySet::CAPACITY).collect();
        assert_eq!(set.len(), 64);
        assert_eq!(set.bits(), u64::MAX);
        assert!((0..64).all(|i| set.contains(i)));
    }

    #[test]
    fn test_iter_yields_ascending_indices() {
        let set: FacilitySet = [9, 0, 63, 4].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 4, 9, 63]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_debug_lists_members() {
        let set: FacilitySet = [2, 1].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{1, 2}");
    }
}
