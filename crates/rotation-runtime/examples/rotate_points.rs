// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: rotate a generated point set and compare execution modes.
//!
//! ```bash
//! cargo run -p rotation-runtime --example rotate_points
//! ```

use rotation_runtime::{ExecutionMode, PointGenerator, Rotator, DEFAULT_BOUND};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let points = PointGenerator::new(Some(7)).generate(200_000, DEFAULT_BOUND)?;

    println!("{:<14} {:>12} {:>16}", "Mode", "Time (ms)", "Points/s");
    println!("{}", "─".repeat(44));
    for mode in [
        ExecutionMode::Sequential,
        ExecutionMode::Parallel { threads: 2 },
        ExecutionMode::Parallel { threads: 4 },
    ] {
        let output = Rotator::new(90.0f32, mode)?.rotate(&points);
        let label = match mode {
            ExecutionMode::Sequential => "sequential".to_string(),
            ExecutionMode::Parallel { threads } => format!("parallel x{threads}"),
        };
        println!(
            "{:<14} {:>12.3} {:>16.0}",
            label,
            output.metrics.duration.as_secs_f64() * 1000.0,
            output.metrics.points_per_second()
        );
    }
    Ok(())
}
