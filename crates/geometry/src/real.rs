// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Floating-point scalar abstraction.

use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// A floating-point scalar usable for angles, rotations and point text I/O.
///
/// Implemented for `f32` and `f64`.
pub trait Real:
    Float + FloatConst + Default + Debug + Display + FromStr + Send + Sync + 'static
{
    /// Number of degrees in a half turn, exactly representable in `Self`.
    const HALF_TURN_DEGREES: Self;
}

impl Real for f32 {
    const HALF_TURN_DEGREES: f32 = 180.0;
}

impl Real for f64 {
    const HALF_TURN_DEGREES: f64 = 180.0;
}
