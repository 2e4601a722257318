// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the rotation runtime.

/// Errors that can occur while configuring or running a batch rotation.
#[derive(Debug, thiserror::Error)]
pub enum RotationError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The rotation angle is NaN or infinite.
    #[error("invalid rotation angle {0}: angle must be finite")]
    InvalidAngle(f64),

    /// The point-set input ended before the point count.
    #[error("point set is missing its point count")]
    MissingCount,

    /// The point count is not a non-negative integer.
    #[error("invalid point count '{0}'")]
    InvalidCount(String),

    /// A point of the set could not be read.
    #[error("failed to read point {index}: {source}")]
    PointRead {
        index: usize,
        #[source]
        source: geometry::GeometryError,
    },

    /// The worker thread pool could not be created.
    #[error("thread pool error: {0}")]
    ThreadPoolError(String),

    /// Reading or writing a point set failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
