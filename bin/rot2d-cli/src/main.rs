// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # rot2d
//!
//! Command-line interface for rotating 2-D point sets.
//!
//! ## Usage
//! ```bash
//! # Rotate a point set read from stdin by 30 degrees
//! rot2d rotate 30 < points.txt
//!
//! # Generate 1000 random points and rotate them on 4 threads
//! rot2d generate 1000 --seed 7 | rot2d rotate -45 --threads 4
//!
//! # Rotate (3, 2) by 90 degrees
//! rot2d demo
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rot2d",
    about = "Rotate 2-D point sets about the origin",
    version,
    author
)]
struct Cli {
    /// Path to a TOML rotation configuration (CLI arguments take precedence).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rotate a point set read from stdin and print the result.
    Rotate {
        /// Counter-clockwise rotation angle in degrees.
        #[arg(allow_negative_numbers = true)]
        degrees: f32,

        /// Rotate on the calling thread only.
        #[arg(long, conflicts_with = "threads")]
        sequential: bool,

        /// Number of worker threads.
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Print a random point set: the count, then the points.
    Generate {
        /// Number of points to generate.
        count: usize,

        /// Seed for reproducible output.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Coordinates are drawn from [-bound, bound].
        #[arg(short, long, default_value_t = rotation_runtime::DEFAULT_BOUND)]
        bound: f32,
    },

    /// Rotate the point (3, 2) and print it before and after.
    Demo {
        /// Counter-clockwise rotation angle in degrees.
        #[arg(default_value_t = 90.0, allow_negative_numbers = true)]
        degrees: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Rotate {
            degrees,
            sequential,
            threads,
        } => commands::rotate::execute(cli.config, degrees, sequential, threads),
        Commands::Generate { count, seed, bound } => {
            commands::generate::execute(count, seed, bound)
        }
        Commands::Demo { degrees } => commands::demo::execute(degrees),
    }
}
