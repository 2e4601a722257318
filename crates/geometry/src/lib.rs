// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # geometry
//!
//! N-dimensional points on top of [`array_core::FixedArray`], their
//! whitespace-separated text form, and 2-D rotations.
//!
//! ```
//! use geometry::{point, rotation_2x2_degrees};
//!
//! let p = point![3.0f32, 2.0];
//! let q = p.transformed(&rotation_2x2_degrees(90.0));
//! assert!((q.x() + 2.0).abs() < 1e-5);
//! assert!((q.y() - 3.0).abs() < 1e-5);
//! ```

mod angle;
mod error;
mod io;
mod point;
mod real;
mod rotation;

pub use angle::{degrees_to_radians, radians_to_degrees};
pub use error::GeometryError;
pub use io::TokenReader;
pub use point::Point;
pub use real::Real;
pub use rotation::{rotation_2x2, rotation_2x2_degrees, RotationMatrix};
