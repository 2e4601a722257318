// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for array construction.

use crate::Shape;

/// Errors that can occur when binding runtime data to a static shape.
///
/// Shape compatibility between arrays is checked by the type system; only
/// conversions from dynamically-sized input can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// The provided buffer length does not match the element count of the shape.
    #[error("buffer size mismatch for shape {shape}: expected {expected} elements, got {actual}")]
    BufferSizeMismatch {
        shape: Shape,
        expected: usize,
        actual: usize,
    },
}
