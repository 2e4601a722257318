// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Angle unit conversions.

use crate::Real;

/// Converts an angle from degrees to radians: `degrees * π / 180`.
///
/// π is taken at the precision of `T`. The result is not normalised, so
/// `degrees_to_radians(450.0)` is `2.5π`, not `0.5π`. Non-finite input
/// propagates unchanged.
///
/// # Examples
/// ```
/// use geometry::degrees_to_radians;
/// assert_eq!(degrees_to_radians(180.0f64), std::f64::consts::PI);
/// ```
pub fn degrees_to_radians<T: Real>(degrees: T) -> T {
    degrees * T::PI() / T::HALF_TURN_DEGREES
}

/// Converts an angle from radians to degrees: `radians * 180 / π`.
pub fn radians_to_degrees<T: Real>(radians: T) -> T {
    radians * T::HALF_TURN_DEGREES / T::PI()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts as f32c;
    use std::f64::consts as f64c;

    #[test]
    fn test_common_angles() {
        assert_eq!(degrees_to_radians(0.0f32), 0.0);
        assert!((degrees_to_radians(90.0f32) - f32c::FRAC_PI_2).abs() < 1e-7);
        assert!((degrees_to_radians(-45.0f64) + f64c::FRAC_PI_4).abs() < 1e-15);
        assert_eq!(degrees_to_radians(180.0f32), f32c::PI);
    }

    #[test]
    fn test_no_normalisation() {
        let r = degrees_to_radians(720.0f64);
        assert!((r - 4.0 * f64c::PI).abs() < 1e-12);
        let r = degrees_to_radians(-450.0f64);
        assert!((r + 2.5 * f64c::PI).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_propagates() {
        assert!(degrees_to_radians(f32::NAN).is_nan());
        assert_eq!(degrees_to_radians(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_inverse() {
        for deg in [-270.0f64, -1.5, 0.0, 33.0, 90.0, 359.9] {
            let back = radians_to_degrees(degrees_to_radians(deg));
            assert!((back - deg).abs() < 1e-12, "{deg} -> {back}");
        }
    }
}
