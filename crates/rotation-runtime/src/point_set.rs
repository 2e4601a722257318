// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Point-set framing: a count followed by that many points.
//!
//! ```text
//! 3
//! 1 0
//! 0 1
//! -2.5 4
//! ```
//!
//! Tokens may be separated by any whitespace, so a whole set on one line
//! reads the same as one point per line.

use crate::RotationError;
use geometry::{Point, TokenReader};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Upper bound on the capacity reserved from an untrusted count.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Reads a point count and then exactly that many points.
pub fn read_point_set<T, const N: usize, R>(
    input: &mut TokenReader<R>,
) -> Result<Vec<Point<T, N>>, RotationError>
where
    T: Copy + Default + FromStr,
    R: BufRead,
{
    let Some(token) = input.next_token()? else {
        input.fail();
        return Err(RotationError::MissingCount);
    };
    let count: usize = match token.parse() {
        Ok(count) => count,
        Err(_) => {
            input.fail();
            return Err(RotationError::InvalidCount(token));
        }
    };

    let mut points = Vec::with_capacity(count.min(MAX_PREALLOCATED));
    for index in 0..count {
        let mut point = Point::origin();
        point
            .read_from(input)
            .map_err(|source| RotationError::PointRead { index, source })?;
        points.push(point);
    }
    Ok(points)
}

/// Writes the point count on its own line, then one point per line.
pub fn write_point_set<T, const N: usize, W>(out: &mut W, points: &[Point<T, N>]) -> io::Result<()>
where
    T: Copy + Display,
    W: Write,
{
    writeln!(out, "{}", points.len())?;
    for point in points {
        point.write_to(out)?;
        writeln!(out)?;
    }
    Ok(())
}
