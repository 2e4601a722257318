// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for point text I/O.

/// Errors that can occur while reading a point from text.
///
/// Whenever one of these is returned by [`crate::Point::read_from`], the
/// target point is left untouched and the reader is marked failed.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// The input ended before all components were read.
    #[error("truncated point: expected {expected} components, input ended after {found}")]
    Truncated { expected: usize, found: usize },

    /// A token could not be parsed as a component value.
    #[error("invalid value '{token}' for component {index}")]
    InvalidComponent { index: usize, token: String },

    /// The reader was already in a failed state.
    #[error("token reader is in a failed state")]
    StreamFailed,

    /// Extra tokens followed a complete point in a standalone string.
    #[error("unexpected trailing input '{0}' after point")]
    TrailingInput(String),

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
