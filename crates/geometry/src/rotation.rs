// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! 2-D rotation matrices.

use crate::{degrees_to_radians, Point, Real};
use array_core::Matrix;

/// A row-major 2x2 rotation matrix.
pub type RotationMatrix<T> = Matrix<T, 2, 2>;

/// Builds the counter-clockwise rotation by `theta` radians:
///
/// ```text
/// | cos θ  -sin θ |
/// | sin θ   cos θ |
/// ```
///
/// Non-finite `theta` yields NaN entries.
pub fn rotation_2x2<T: Real>(theta: T) -> RotationMatrix<T> {
    let (sin, cos) = theta.sin_cos();
    Matrix::from_array([[cos, -sin], [sin, cos]])
}

/// Builds the counter-clockwise rotation by `degrees`.
pub fn rotation_2x2_degrees<T: Real>(degrees: T) -> RotationMatrix<T> {
    rotation_2x2(degrees_to_radians(degrees))
}

impl<T: Real> Point<T, 2> {
    /// Rotates the point counter-clockwise about the origin by `theta` radians.
    pub fn rotated(&self, theta: T) -> Self {
        self.transformed(&rotation_2x2(theta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn test_entries() {
        let theta = 0.3f64;
        let r = rotation_2x2(theta);
        assert_eq!(r[[0, 0]], theta.cos());
        assert_eq!(r[[0, 1]], -theta.sin());
        assert_eq!(r[[1, 0]], theta.sin());
        assert_eq!(r[[1, 1]], theta.cos());
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let r = rotation_2x2(0.0f32);
        assert_eq!(r.as_slice(), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_quarter_turn() {
        let q = point![3.0f32, 2.0].transformed(&rotation_2x2_degrees(90.0));
        assert!((q.x() + 2.0).abs() <= 1e-5 * 2.0);
        assert!((q.y() - 3.0).abs() <= 1e-5 * 3.0);
    }

    #[test]
    fn test_rotated_matches_matrix_form() {
        let p = point![1.25f64, -4.0];
        let theta = degrees_to_radians(37.0);
        assert_eq!(p.rotated(theta), p.transformed(&rotation_2x2(theta)));
    }

    #[test]
    fn test_nan_angle_propagates() {
        let r = rotation_2x2(f64::NAN);
        assert!(r.iter().all(|x| x.is_nan()));
        let r = rotation_2x2(f32::INFINITY);
        assert!(r.iter().all(|x| x.is_nan()));
    }
}
