// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rot2d demo` command: rotate the point (3, 2) once.

use geometry::{point, Point};
use rotation_runtime::{ExecutionMode, Rotator};

pub fn execute(degrees: f32) -> anyhow::Result<()> {
    let rotator = Rotator::new(degrees, ExecutionMode::Sequential)?;
    let original = point![3.0f32, 2.0];
    let rotated = rotator.rotate_point(&original);

    println!("original point: {}", pair(&original));
    println!("final point: {}", pair(&rotated));
    Ok(())
}

fn pair(p: &Point<f32, 2>) -> String {
    format!("({},{})", p.x(), p.y())
}
