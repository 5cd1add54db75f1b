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

//! # Atomic Float Cell
//!
//! `AtomicFloat<T>` stores a `SolverFloat` as its bit pattern inside an
//! `AtomicU64`. Loads are plain atomic loads; the only update goes through
//! `compare_exchange_weak`, so callers can build their own retry loops
//! (e.g. "lower the value only if the candidate is smaller").
//!
//! The expected value of a compare-exchange is matched on bits, not on float
//! equality. Callers must therefore pass back exactly the value they loaded.

use crate::num::SolverFloat;
use std::{
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

/// An atomic cell holding a floating point value.
#[repr(transparent)]
pub struct AtomicFloat<T> {
    bits: AtomicU64,
    _marker: PhantomData<T>,
}

impl<T> AtomicFloat<T>
where
    T: SolverFloat,
{
    /// Creates a new cell holding `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits_u64()),
            _marker: PhantomData,
        }
    }

    #[inline(always)]
    pub fn load(&self, order: Ordering) -> T {
        T::from_bits_u64(self.bits.load(order))
    }

    /// Replaces the stored value with `new` if its bit pattern equals that of
    /// `current`. May fail spuriously; use it inside a loop.
    ///
    /// Returns `Ok(previous)` on success and `Err(actual)` otherwise.
    #[inline(always)]
    pub fn compare_exchange_weak(
        &self,
        current: T,
        new: T,
        success: Ordering,
        failure: Ordering,
    ) -> Result<T, T> {
        self.bits
            .compare_exchange_weak(current.to_bits_u64(), new.to_bits_u64(), success, failure)
            .map(T::from_bits_u64)
            .map_err(T::from_bits_u64)
    }
}

impl<T> std::fmt::Debug for AtomicFloat<T>
where
    T: SolverFloat,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AtomicFloat")
            .field(&self.load(Ordering::Relaxed))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::AtomicFloat;
    use std::sync::{Arc, atomic::Ordering};
    use std::thread;

    #[test]
    fn test_load_returns_initial_value() {
        let cell = AtomicFloat::new(12.5_f64);
        assert_eq!(cell.load(Ordering::Relaxed), 12.5);
    }

    #[test]
    fn test_compare_exchange_fails_on_stale_expectation() {
        let cell = AtomicFloat::new(10.0_f64);
        // A weak exchange may fail spuriously, so only the stale case is asserted.
        let res = cell.compare_exchange_weak(11.0, 5.0, Ordering::AcqRel, Ordering::Acquire);
        assert_eq!(res, Err(10.0));
        assert_eq!(cell.load(Ordering::Relaxed), 10.0);
    }

    #[test]
    fn test_compare_exchange_succeeds_in_loop() {
        let cell = AtomicFloat::new(10.0_f32);
        let mut current = cell.load(Ordering::Relaxed);
        loop {
            match cell.compare_exchange_weak(current, 4.0, Ordering::AcqRel, Ordering::Acquire) {
                Ok(prev) => {
                    assert_eq!(prev, 10.0);
                    break;
                }
                Err(actual) => current = actual,
            }
        }
        assert_eq!(cell.load(Ordering::Relaxed), 4.0);
    }

    #[test]
    fn test_concurrent_minimum_with_retry_loop() {
        let cell = Arc::new(AtomicFloat::new(f64::INFINITY));
        let values = [30.0, 7.5, 12.0, 99.0, 7.25, 50.0, 8.0, 1000.0];

        let handles = values
            .iter()
            .copied()
            .map(|candidate| {
                let cell = Arc::clone(&cell);
                thread::spawn(move || {
                    let mut current = cell.load(Ordering::Acquire);
                    while candidate < current {
                        match cell.compare_exchange_weak(
                            current,
                            candidate,
                            Ordering::AcqRel,
                            Ordering::Acquire,
                        ) {
                            Ok(_) => break,
                            Err(actual) => current = actual,
                        }
                    }
                })
            })
            .collect::<Vec<_>>();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(cell.load(Ordering::Relaxed), 7.25);
    }
}
