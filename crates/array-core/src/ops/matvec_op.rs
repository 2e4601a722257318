// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Matrix-vector product.

use crate::{ArrayView, ArrayViewMut, Dim1, Dim2};
use num_traits::Zero;
use std::ops::Mul;

/// Computes `y = a · x` for an `R` x `C` matrix and a length-`C` vector.
///
/// Each output element is accumulated left to right starting from zero:
/// `y[i] = ((0 + a[i,0]*x[0]) + a[i,1]*x[1]) + …`. No compensated summation
/// is applied, so results are bit-reproducible only under the same order.
///
/// Dimension agreement is enforced by the const generics: a matrix whose
/// column count differs from the length of `x`, or whose row count differs
/// from the length of `y`, does not compile. `x` and `y` cannot refer to the
/// same storage because `y` is an exclusive borrow.
///
/// # Examples
/// ```
/// use array_core::{matrix_vector_product, Matrix, Vector};
/// let a = Matrix::<f32, 2, 2>::from_array([[0.0, -1.0], [1.0, 0.0]]);
/// let x = Vector::<f32, 2>::from_array([1.0, 0.0]);
/// let mut y = Vector::<f32, 2>::new();
/// matrix_vector_product(&a.view(), &x.view(), &mut y.view_mut());
/// assert_eq!(y.as_slice(), &[0.0, 1.0]);
/// ```
pub fn matrix_vector_product<T, const R: usize, const C: usize>(
    a: &ArrayView<'_, T, Dim2<R, C>>,
    x: &ArrayView<'_, T, Dim1<C>>,
    y: &mut ArrayViewMut<'_, T, Dim1<R>>,
) where
    T: Copy + Zero + Mul<Output = T>,
{
    let a = a.as_slice();
    let x = x.as_slice();
    let y = y.as_mut_slice();

    for (i, out) in y.iter_mut().enumerate() {
        let row = &a[i * C..(i + 1) * C];
        let mut acc = T::zero();
        for (&a_ij, &x_j) in row.iter().zip(x) {
            acc = acc + a_ij * x_j;
        }
        *out = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, Vector};

    #[test]
    fn test_quarter_turn_matrix() {
        let a = Matrix::<f32, 2, 2>::from_array([[0.0, -1.0], [1.0, 0.0]]);
        let mut y = Vector::<f32, 2>::new();

        let x = Vector::from_array([1.0, 0.0]);
        matrix_vector_product(&a.view(), &x.view(), &mut y.view_mut());
        assert_eq!(y.as_slice(), &[0.0, 1.0]);

        let x = Vector::from_array([0.0, 1.0]);
        matrix_vector_product(&a.view(), &x.view(), &mut y.view_mut());
        assert_eq!(y.as_slice(), &[-1.0, 0.0]);
    }

    #[test]
    fn test_rectangular_2x3() {
        // A = [[1, 2, 3], [4, 5, 6]], x = [7, 8, 9] -> [50, 122]
        let a = Matrix::<f64, 2, 3>::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let x = Vector::<f64, 3>::from_array([7.0, 8.0, 9.0]);
        let mut y = Vector::<f64, 2>::new();

        matrix_vector_product(&a.view(), &x.view(), &mut y.view_mut());

        assert!((y[0] - 50.0).abs() < 1e-12);
        assert!((y[1] - 122.0).abs() < 1e-12);
    }

    #[test]
    fn test_identity() {
        let eye = Matrix::<i64, 3, 3>::from_array([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
        let x = Vector::<i64, 3>::from_array([4, -5, 6]);
        let mut y = Vector::<i64, 3>::filled(99);

        matrix_vector_product(&eye.view(), &x.view(), &mut y.view_mut());
        assert_eq!(y, x);
    }

    #[test]
    fn test_overwrites_previous_output() {
        let a = Matrix::<i32, 1, 2>::from_array([[2, 3]]);
        let x = Vector::<i32, 2>::from_array([1, 1]);
        let mut y = Vector::<i32, 1>::filled(100);

        matrix_vector_product(&a.view(), &x.view(), &mut y.view_mut());
        assert_eq!(y[0], 5);
    }

    #[test]
    fn test_zero_columns_yields_zeros() {
        let a = Matrix::<f32, 2, 0>::new();
        let x = Vector::<f32, 0>::new();
        let mut y = Vector::<f32, 2>::filled(1.0);

        matrix_vector_product(&a.view(), &x.view(), &mut y.view_mut());
        assert_eq!(y.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_left_to_right_accumulation() {
        // 1e8 + 1 - 1e8 in f32 loses the 1 when summed left to right.
        let a = Matrix::<f32, 1, 3>::from_array([[1.0, 1.0, 1.0]]);
        let x = Vector::<f32, 3>::from_array([1.0e8, 1.0, -1.0e8]);
        let mut y = Vector::<f32, 1>::new();

        matrix_vector_product(&a.view(), &x.view(), &mut y.view_mut());
        assert_eq!(y[0], 0.0);
    }

    #[test]
    fn test_views_over_slices() {
        let a_buf = [1.0f32, 1.0, 0.0, 1.0];
        let x_buf = [2.0f32, 3.0];
        let mut y_buf = [0.0f32; 2];

        let a = ArrayView::<_, Dim2<2, 2>>::from_slice(&a_buf).unwrap();
        let x = ArrayView::<_, Dim1<2>>::from_slice(&x_buf).unwrap();
        let mut y = ArrayViewMut::<_, Dim1<2>>::from_slice(&mut y_buf).unwrap();

        matrix_vector_product(&a, &x, &mut y);
        assert_eq!(y_buf, [5.0, 3.0]);
    }
}
