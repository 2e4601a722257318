// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Batch rotation metrics.

use crate::ExecutionMode;
use std::time::Duration;

/// Timing and throughput of one batch rotation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RotationMetrics {
    /// Number of points rotated.
    pub points: usize,
    /// Wall-clock time spent rotating.
    pub duration: Duration,
    /// How the batch was actually executed.
    pub mode: ExecutionMode,
}

impl RotationMetrics {
    pub fn new(points: usize, duration: Duration, mode: ExecutionMode) -> Self {
        Self {
            points,
            duration,
            mode,
        }
    }

    /// Returns points per second throughput.
    pub fn points_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs <= 0.0 || self.points == 0 {
            return 0.0;
        }
        self.points as f64 / secs
    }

    /// Returns a human-readable summary suitable for CLI output.
    pub fn summary(&self) -> String {
        let mode = match self.mode {
            ExecutionMode::Sequential => "sequential".to_string(),
            ExecutionMode::Parallel { threads } => format!("parallel x{threads}"),
        };
        format!(
            "Rotation: {} points in {:.3}ms ({mode}, {:.0} points/s)",
            self.points,
            self.duration.as_secs_f64() * 1000.0,
            self.points_per_second(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics() {
        let m = RotationMetrics::new(0, Duration::ZERO, ExecutionMode::Sequential);
        assert_eq!(m.points_per_second(), 0.0);
    }

    #[test]
    fn test_throughput() {
        let m = RotationMetrics::new(
            500,
            Duration::from_millis(250),
            ExecutionMode::Parallel { threads: 2 },
        );
        assert!((m.points_per_second() - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary() {
        let m = RotationMetrics::new(
            1000,
            Duration::from_millis(2),
            ExecutionMode::Parallel { threads: 4 },
        );
        let s = m.summary();
        assert!(s.contains("1000 points"));
        assert!(s.contains("parallel x4"));
        assert!(s.contains("2.000ms"));
    }
}
