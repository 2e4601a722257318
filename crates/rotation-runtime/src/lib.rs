// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # rotation-runtime
//!
//! Applies a 2-D rotation to whole point sets.
//!
//! The runtime takes:
//! - A [`RotationConfig`] (angle, execution mode, thread count).
//! - A point set, read with [`read_point_set`] or produced by
//!   [`PointGenerator`].
//!
//! And returns the rotated set in input order together with
//! [`RotationMetrics`].
//!
//! # Parallel Execution
//! Points are independent, so batches at or above `min_parallel_len` are
//! rotated on a dedicated `rayon` pool sized by the config.

mod config;
mod engine;
mod error;
mod generator;
mod metrics;
mod point_set;

pub use config::RotationConfig;
pub use engine::{ExecutionMode, RotationOutput, Rotator};
pub use error::RotationError;
pub use generator::{PointGenerator, DEFAULT_BOUND};
pub use metrics::RotationMetrics;
pub use point_set::{read_point_set, write_point_set};
