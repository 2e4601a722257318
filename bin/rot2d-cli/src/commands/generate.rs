// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rot2d generate` command: print a random point set.

use geometry::Point;
use rotation_runtime::PointGenerator;
use std::io::{self, BufWriter, Write};

pub fn execute(count: usize, seed: Option<u64>, bound: f32) -> anyhow::Result<()> {
    anyhow::ensure!(count >= 1, "point count must be at least 1");

    let points = PointGenerator::new(seed).generate(count, bound)?;
    tracing::info!("generated {count} points in [-{bound}, {bound}]");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_single_line(&mut out, &points)?;
    out.flush()?;
    Ok(())
}

/// Writes the count on one line and all points on the next.
fn write_single_line<W: Write>(out: &mut W, points: &[Point<f32, 2>]) -> io::Result<()> {
    writeln!(out, "{}", points.len())?;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        point.write_to(out)?;
    }
    writeln!(out)
}
