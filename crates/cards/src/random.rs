// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Uniform random sources used for shuffling and dealing.
use rand::{Rng, RngCore};

/// A source of uniformly distributed values in `[0, 1)`.
///
/// Any [rand] generator is a random source, tests can use a [Sequence] to get
/// reproducible shuffles and deals.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Returns a random index in `0..n`, `n` must be greater than zero.
    fn index(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        let idx = (self.uniform() * n as f64) as usize;
        idx.min(n.saturating_sub(1))
    }
}

impl<R: RngCore> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A random source that cycles through a fixed list of values.
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Vec<f64>,
    pos: usize,
}

impl Sequence {
    /// Creates a sequence with the given values.
    ///
    /// Values are clamped to `[0, 1)`, an empty list always yields 0.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, pos: 0 }
    }
}

impl RandomSource for Sequence {
    fn uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }

        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn sequence_cycles() {
        let mut seq = Sequence::new([0.1, 0.5]);
        assert_eq!(seq.uniform(), 0.1);
        assert_eq!(seq.uniform(), 0.5);
        assert_eq!(seq.uniform(), 0.1);

        let mut empty = Sequence::new([]);
        assert_eq!(empty.uniform(), 0.0);
    }

    #[test]
    fn index_in_range() {
        let mut seq = Sequence::new([0.0, 0.4, 0.999, 1.5]);
        assert_eq!(seq.index(4), 0);
        assert_eq!(seq.index(4), 1);
        assert_eq!(seq.index(4), 3);
        assert_eq!(seq.index(4), 3);

        let mut rng = StdRng::seed_from_u64(17);
        for n in 1..60 {
            assert!(rng.index(n) < n);
        }
    }
}
