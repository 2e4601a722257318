// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The batch rotation engine.
//!
//! ```text
//! RotationConfig ──► Rotator::from_config ──► Rotator<T>
//!                                               │  .rotate(&points)
//!                                               ▼
//!                                         RotationOutput
//! ```
//!
//! The rotation matrix is built once per engine. Each point is transformed
//! independently, so large batches are split across a dedicated rayon pool;
//! output order always matches input order.

use crate::{RotationConfig, RotationError, RotationMetrics};
use geometry::{rotation_2x2_degrees, Point, Real, RotationMatrix};
use num_traits::{NumCast, ToPrimitive};
use rayon::prelude::*;
use std::time::Instant;

// ── Execution mode ─────────────────────────────────────────────

/// How a batch is distributed over threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ExecutionMode {
    /// Every point is rotated on the calling thread.
    Sequential,
    /// Points are rotated on a pool of `threads` workers.
    Parallel { threads: usize },
}

// ── Rotation output ────────────────────────────────────────────

/// The result of one batch rotation.
#[derive(Debug)]
pub struct RotationOutput<T: Copy> {
    /// Rotated points, in input order.
    pub points: Vec<Point<T, 2>>,
    /// Timing and throughput of the batch.
    pub metrics: RotationMetrics,
}

// ── Engine ─────────────────────────────────────────────────────

/// Applies one fixed rotation to batches of 2-D points.
pub struct Rotator<T: Real> {
    angle_degrees: T,
    matrix: RotationMatrix<T>,
    mode: ExecutionMode,
    min_parallel_len: usize,
    pool: Option<rayon::ThreadPool>,
}

impl<T: Real> Rotator<T> {
    /// Creates an engine rotating counter-clockwise by `angle_degrees`.
    ///
    /// Parallel mode builds its worker pool here; batches of any length
    /// are then eligible to run on it.
    pub fn new(angle_degrees: T, mode: ExecutionMode) -> Result<Self, RotationError> {
        if !angle_degrees.is_finite() {
            return Err(RotationError::InvalidAngle(
                angle_degrees.to_f64().unwrap_or(f64::NAN),
            ));
        }

        let pool = match mode {
            ExecutionMode::Sequential => None,
            ExecutionMode::Parallel { threads } => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("rot2d-worker-{i}"))
                    .build()
                    .map_err(|e| RotationError::ThreadPoolError(e.to_string()))?,
            ),
        };

        tracing::info!("rotator created: {angle_degrees} degrees, {mode:?}");

        Ok(Self {
            angle_degrees,
            matrix: rotation_2x2_degrees(angle_degrees),
            mode,
            min_parallel_len: 0,
            pool,
        })
    }

    /// Creates an engine from a validated configuration.
    pub fn from_config(config: &RotationConfig) -> Result<Self, RotationError> {
        config.validate()?;
        let angle = <T as NumCast>::from(config.angle_degrees)
            .ok_or(RotationError::InvalidAngle(config.angle_degrees.into()))?;
        let mut rotator = Self::new(angle, config.execution_mode())?;
        rotator.min_parallel_len = config.min_parallel_len;
        Ok(rotator)
    }

    /// Returns the rotation angle in degrees.
    pub fn angle_degrees(&self) -> T {
        self.angle_degrees
    }

    /// Returns the rotation matrix applied to every point.
    pub fn matrix(&self) -> &RotationMatrix<T> {
        &self.matrix
    }

    /// Returns the configured execution mode.
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Rotates a single point.
    pub fn rotate_point(&self, point: &Point<T, 2>) -> Point<T, 2> {
        point.transformed(&self.matrix)
    }

    /// Rotates every point of `points`, preserving order.
    pub fn rotate(&self, points: &[Point<T, 2>]) -> RotationOutput<T> {
        let start = Instant::now();
        let mode = self.effective_mode(points.len());

        let rotated: Vec<Point<T, 2>> = match (&self.pool, mode) {
            (Some(pool), ExecutionMode::Parallel { .. }) => pool.install(|| {
                points
                    .par_iter()
                    .map(|p| self.rotate_point(p))
                    .collect()
            }),
            _ => points.iter().map(|p| self.rotate_point(p)).collect(),
        };

        let metrics = RotationMetrics::new(rotated.len(), start.elapsed(), mode);
        tracing::info!("{}", metrics.summary());
        RotationOutput {
            points: rotated,
            metrics,
        }
    }

    /// Rotates `points` in place.
    pub fn rotate_in_place(&self, points: &mut [Point<T, 2>]) -> RotationMetrics {
        let start = Instant::now();
        let mode = self.effective_mode(points.len());

        match (&self.pool, mode) {
            (Some(pool), ExecutionMode::Parallel { .. }) => pool.install(|| {
                points
                    .par_iter_mut()
                    .for_each(|p| *p = self.rotate_point(p));
            }),
            _ => points.iter_mut().for_each(|p| *p = self.rotate_point(p)),
        }

        let metrics = RotationMetrics::new(points.len(), start.elapsed(), mode);
        tracing::info!("{}", metrics.summary());
        metrics
    }

    fn effective_mode(&self, len: usize) -> ExecutionMode {
        match self.mode {
            ExecutionMode::Parallel { .. } if len < self.min_parallel_len => {
                tracing::debug!(
                    "batch of {len} points below parallel threshold {}, running sequentially",
                    self.min_parallel_len
                );
                ExecutionMode::Sequential
            }
            mode => {
                tracing::debug!("batch of {len} points, {mode:?}");
                mode
            }
        }
    }
}

impl<T: Real> std::fmt::Debug for Rotator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rotator")
            .field("angle_degrees", &self.angle_degrees)
            .field("mode", &self.mode)
            .field("min_parallel_len", &self.min_parallel_len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geometry::point;

    fn assert_close(a: Point<f64, 2>, b: Point<f64, 2>) {
        assert!(
            (a.x() - b.x()).abs() < 1e-9 && (a.y() - b.y()).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_rotate_point_quarter_turn() {
        let rotator = Rotator::new(90.0f64, ExecutionMode::Sequential).unwrap();
        assert_close(rotator.rotate_point(&point![3.0, 2.0]), point![-2.0, 3.0]);
    }

    #[test]
    fn test_zero_angle_is_exact() {
        let rotator = Rotator::new(0.0f32, ExecutionMode::Sequential).unwrap();
        let p = point![1.25f32, -7.5];
        assert_eq!(rotator.rotate_point(&p), p);
    }

    #[test]
    fn test_rejects_non_finite_angle() {
        assert!(matches!(
            Rotator::new(f64::NAN, ExecutionMode::Sequential),
            Err(RotationError::InvalidAngle(_))
        ));
        assert!(matches!(
            Rotator::new(f32::NEG_INFINITY, ExecutionMode::Sequential),
            Err(RotationError::InvalidAngle(_))
        ));
    }

    #[test]
    fn test_rotate_preserves_order() {
        let points: Vec<Point<f64, 2>> = (0..100).map(|i| point![i as f64, 0.0]).collect();
        let rotator = Rotator::new(90.0f64, ExecutionMode::Parallel { threads: 3 }).unwrap();
        let output = rotator.rotate(&points);
        assert_eq!(output.points.len(), 100);
        for (i, p) in output.points.iter().enumerate() {
            assert_close(*p, point![0.0, i as f64]);
        }
        assert_eq!(output.metrics.mode, ExecutionMode::Parallel { threads: 3 });
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let points: Vec<Point<f32, 2>> = (0..500)
            .map(|i| point![i as f32 * 0.5 - 100.0, 37.0 - i as f32])
            .collect();
        let seq = Rotator::new(33.3f32, ExecutionMode::Sequential).unwrap();
        let par = Rotator::new(33.3f32, ExecutionMode::Parallel { threads: 4 }).unwrap();
        assert_eq!(seq.rotate(&points).points, par.rotate(&points).points);
    }

    #[test]
    fn test_small_batch_runs_sequentially() {
        let config = RotationConfig {
            angle_degrees: 45.0,
            num_threads: Some(2),
            min_parallel_len: 10,
            ..Default::default()
        };
        let rotator = Rotator::<f64>::from_config(&config).unwrap();
        let output = rotator.rotate(&[point![1.0, 1.0]; 3]);
        assert_eq!(output.metrics.mode, ExecutionMode::Sequential);
        assert_eq!(output.metrics.points, 3);

        let output = rotator.rotate(&[point![1.0, 1.0]; 10]);
        assert_eq!(output.metrics.mode, ExecutionMode::Parallel { threads: 2 });
    }

    #[test]
    fn test_rotate_in_place_matches_rotate() {
        let points: Vec<Point<f64, 2>> = (0..64).map(|i| point![i as f64, -(i as f64)]).collect();
        let rotator = Rotator::new(-120.0f64, ExecutionMode::Parallel { threads: 2 }).unwrap();
        let expected = rotator.rotate(&points).points;

        let mut in_place = points.clone();
        let metrics = rotator.rotate_in_place(&mut in_place);
        assert_eq!(in_place, expected);
        assert_eq!(metrics.points, 64);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = RotationConfig {
            angle_degrees: f32::NAN,
            ..Default::default()
        };
        assert!(Rotator::<f32>::from_config(&config).is_err());
    }

    #[test]
    fn test_empty_batch() {
        let rotator = Rotator::new(10.0f32, ExecutionMode::Sequential).unwrap();
        let output = rotator.rotate(&[]);
        assert!(output.points.is_empty());
        assert_eq!(output.metrics.points_per_second(), 0.0);
    }
}
