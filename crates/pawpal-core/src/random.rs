// SPDX-FileCopyrightText: 2026 PawPal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injectable random source for template selection.
//!
//! Production code uses [`ThreadRandom`]; tests supply [`SeededRandom`] or
//! [`FixedRandom`] so that chosen templates are reproducible.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn next_index(&self, len: usize) -> usize;
}

/// Picks one item uniformly from a non-empty slice.
///
/// Returns `None` only for an empty slice.
pub fn pick<'a, T>(rng: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = rng.next_index(items.len()).min(items.len() - 1);
    items.get(idx)
}

/// Thread-local OS-seeded generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic generator seeded once.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..len)
    }
}

/// Always returns the same index (wrapped to the slice length).
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn next_index(&self, len: usize) -> usize {
        self.0 % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_empty_is_none() {
        let items: [u8; 0] = [];
        assert!(pick(&ThreadRandom, &items).is_none());
    }

    #[test]
    fn fixed_random_wraps() {
        let items = ["a", "b", "c"];
        assert_eq!(pick(&FixedRandom(4), &items), Some(&"b"));
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let a = SeededRandom::new(7);
        let b = SeededRandom::new(7);
        let xs: Vec<usize> = (0..20).map(|_| a.next_index(10)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.next_index(10)).collect();
        assert_eq!(xs, ys);
    }

    proptest::proptest! {
        #[test]
        fn thread_random_stays_in_range(len in 1usize..500) {
            proptest::prop_assert!(ThreadRandom.next_index(len) < len);
        }
    }
}
