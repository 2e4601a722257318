// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Random point-set generation.

use crate::RotationError;
use geometry::{Point, Real};
use rand::distributions::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default coordinate bound: points lie in `[-10000, 10000]²`.
pub const DEFAULT_BOUND: f32 = 10_000.0;

/// Produces 2-D points with coordinates drawn uniformly from `[-bound, bound]`.
pub struct PointGenerator {
    rng: StdRng,
}

impl PointGenerator {
    /// Creates a generator; the same seed always yields the same points.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generates `count` points.
    ///
    /// `bound` must be non-negative, and the width of `[-bound, bound]`
    /// must be representable in `T`.
    pub fn generate<T>(&mut self, count: usize, bound: T) -> Result<Vec<Point<T, 2>>, RotationError>
    where
        T: Real + SampleUniform,
    {
        if !bound.is_finite() || bound < T::zero() {
            return Err(RotationError::ConfigError(format!(
                "coordinate bound must be finite and non-negative, got {bound}"
            )));
        }
        // The sampler scales the range width by 1 / (1 - epsilon).
        if !((bound + bound) / (T::one() - T::epsilon())).is_finite() {
            return Err(RotationError::ConfigError(format!(
                "coordinate bound {bound} is too large: range [-bound, bound] overflows"
            )));
        }
        let points = (0..count)
            .map(|_| {
                let x = self.rng.gen_range(-bound..=bound);
                let y = self.rng.gen_range(-bound..=bound);
                Point::new([x, y])
            })
            .collect();
        Ok(points)
    }
}

impl std::fmt::Debug for PointGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_deterministic() {
        let a = PointGenerator::new(Some(42)).generate(50, DEFAULT_BOUND).unwrap();
        let b = PointGenerator::new(Some(42)).generate(50, DEFAULT_BOUND).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = PointGenerator::new(Some(1)).generate(20, 100.0f64).unwrap();
        let b = PointGenerator::new(Some(2)).generate(20, 100.0f64).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_within_bounds() {
        let points = PointGenerator::new(Some(7)).generate(1000, 3.5f64).unwrap();
        assert_eq!(points.len(), 1000);
        for p in &points {
            assert!((-3.5..=3.5).contains(&p.x()));
            assert!((-3.5..=3.5).contains(&p.y()));
        }
    }

    #[test]
    fn test_zero_bound_gives_origin() {
        let points = PointGenerator::new(Some(3)).generate(5, 0.0f32).unwrap();
        assert!(points.iter().all(|p| *p == Point::origin()));
    }

    #[test]
    fn test_rejects_bad_bound() {
        let mut generator = PointGenerator::new(None);
        assert!(generator.generate(1, -1.0f32).is_err());
        assert!(generator.generate(1, f32::NAN).is_err());
    }

    #[test]
    fn test_rejects_overflowing_range() {
        let mut generator = PointGenerator::new(Some(1));
        assert!(matches!(
            generator.generate(1, f32::MAX),
            Err(RotationError::ConfigError(_))
        ));
        assert!(generator.generate(1, 3.0e38f32).is_err());
        assert!(generator.generate(1, f64::MAX).is_err());
    }

    #[test]
    fn test_accepts_largest_representable_range() {
        let bound = f32::MAX / 4.0;
        let points = PointGenerator::new(Some(5)).generate(100, bound).unwrap();
        for p in &points {
            assert!(p.x().is_finite() && p.x().abs() <= bound);
            assert!(p.y().is_finite() && p.y().abs() <= bound);
        }
    }
}
