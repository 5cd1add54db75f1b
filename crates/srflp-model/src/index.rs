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

/// A strongly typed facility id in `0..n`.
///
/// Permutations are sequences of `FacilityIndex`, indexed by position, so the
/// wrapper keeps "which facility" apart from "which slot on the line".
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FacilityIndex(usize);

impl FacilityIndex {
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying `usize` id.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for FacilityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FacilityIndex({})", self.0)
    }
}

impl std::fmt::Display for FacilityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for FacilityIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<FacilityIndex> for usize {
    fn from(index: FacilityIndex) -> Self {
        index.0
    }
}

#[cfg(test)]
mod tests {
    use super::FacilityIndex;

    #[test]
    fn test_conversions() {
        let f: FacilityIndex = 42.into();
        assert_eq!(f.get(), 42);
        let raw: usize = f.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display() {
        let f = FacilityIndex::new(7);
        assert_eq!(format!("{}", f), "7");
        assert_eq!(format!("{:?}", f), "FacilityIndex(7)");
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        assert!(FacilityIndex::new(1) < FacilityIndex::new(2));
    }
}
