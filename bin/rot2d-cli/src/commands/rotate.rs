// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rot2d rotate` command: rotate a point set read from stdin.
//!
//! ```text
//! stdin ──► read_point_set ──► Rotator::rotate ──► write_point_set ──► stdout
//! ```

use anyhow::Context;
use geometry::TokenReader;
use rotation_runtime::{read_point_set, write_point_set, RotationConfig, Rotator};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn execute(
    config_path: Option<PathBuf>,
    degrees: f32,
    sequential: bool,
    threads: Option<usize>,
) -> anyhow::Result<()> {
    let config = build_config(config_path.as_deref(), degrees, sequential, threads)?;
    tracing::debug!("effective config: {config:?}");

    let rotator = Rotator::<f32>::from_config(&config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    rotate_stream(&rotator, io::stdin().lock(), &mut out)?;
    out.flush()?;
    Ok(())
}

/// Loads the optional config file and applies command-line overrides.
fn build_config(
    path: Option<&Path>,
    degrees: f32,
    sequential: bool,
    threads: Option<usize>,
) -> anyhow::Result<RotationConfig> {
    let mut config = match path {
        Some(path) => RotationConfig::from_file(path)?,
        None => RotationConfig::default(),
    };

    config.angle_degrees = degrees;
    if sequential {
        config.parallel = false;
    }
    if let Some(threads) = threads {
        config.parallel = true;
        config.num_threads = Some(threads);
    }

    config
        .validate()
        .with_context(|| format!("cannot rotate by {degrees} degrees"))?;
    Ok(config)
}

fn rotate_stream<R: BufRead, W: Write>(
    rotator: &Rotator<f32>,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let points = read_point_set::<f32, 2, _>(&mut TokenReader::new(input))
        .context("failed to read point set")?;
    let output = rotator.rotate(&points);
    write_point_set(out, &output.points)?;
    Ok(())
}
