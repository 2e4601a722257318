// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rotation configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! angle_degrees = 90.0
//! parallel = true
//! num_threads = 4
//! min_parallel_len = 1024
//! ```

use crate::{ExecutionMode, RotationError};
use std::path::Path;

/// Configuration for a batch rotation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RotationConfig {
    /// Counter-clockwise rotation angle in degrees.
    #[serde(default = "default_angle")]
    pub angle_degrees: f32,
    /// Whether to rotate large point sets on a worker pool.
    #[serde(default = "default_true")]
    pub parallel: bool,
    /// Number of worker threads (defaults to available parallelism).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_threads: Option<usize>,
    /// Point sets shorter than this are rotated on the calling thread.
    #[serde(default = "default_min_parallel_len")]
    pub min_parallel_len: usize,
}

fn default_angle() -> f32 {
    90.0
}

fn default_true() -> bool {
    true
}

fn default_min_parallel_len() -> usize {
    1024
}

impl RotationConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, RotationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RotationError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, RotationError> {
        toml::from_str(toml_str)
            .map_err(|e| RotationError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, RotationError> {
        toml::to_string_pretty(self)
            .map_err(|e| RotationError::ConfigError(format!("TOML serialise error: {e}")))
    }

    /// Checks that the angle is finite and the thread count is positive.
    pub fn validate(&self) -> Result<(), RotationError> {
        if !self.angle_degrees.is_finite() {
            return Err(RotationError::InvalidAngle(self.angle_degrees.into()));
        }
        if self.num_threads == Some(0) {
            return Err(RotationError::ConfigError(
                "num_threads must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Resolves the number of worker threads.
    pub fn resolve_threads(&self) -> usize {
        self.num_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
        })
    }

    /// Returns the execution mode selected by this config.
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel {
                threads: self.resolve_threads(),
            }
        } else {
            ExecutionMode::Sequential
        }
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            angle_degrees: default_angle(),
            parallel: true,
            num_threads: None,
            min_parallel_len: default_min_parallel_len(),
        }
    }
}
