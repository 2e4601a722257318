// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fixed-dimension points.

use array_core::{matrix_vector_product, ArrayView, ArrayViewMut, Dim1, FixedArray, Matrix};
use num_traits::Zero;
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

/// An `N`-dimensional point with scalar components of type `T`.
///
/// A point always holds exactly `N` components; there is no partially
/// initialised state. Points are plain values: copying one never aliases
/// the original.
///
/// # Examples
/// ```
/// use geometry::{point, Point};
///
/// let p = point![3.0f32, 2.0];
/// assert_eq!(p, Point::new([3.0, 2.0]));
/// assert_eq!(p.to_string(), "3 2");
///
/// let origin = Point::<f64, 3>::default();
/// assert_eq!(origin.components(), &[0.0, 0.0, 0.0]);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Point<T: Copy, const N: usize> {
    coords: FixedArray<T, Dim1<N>>,
}

/// Builds a [`Point`] from its components, inferring `T` and `N`.
///
/// `point![3.0f32, 2.0]` is a `Point<f32, 2>`.
#[macro_export]
macro_rules! point {
    ($($component:expr),+ $(,)?) => {
        $crate::Point::new([$($component),+])
    };
}

impl<T: Copy, const N: usize> Point<T, N> {
    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a point from its components, in index order.
    pub fn new(components: [T; N]) -> Self {
        Self {
            coords: FixedArray::from_array(components),
        }
    }

    /// Creates the point with every component set to `T::default()`.
    pub fn origin() -> Self
    where
        T: Default,
    {
        Self {
            coords: FixedArray::new(),
        }
    }

    /// Creates a point from components of any type convertible into `T`.
    ///
    /// ```
    /// use geometry::Point;
    /// let p = Point::<f64, 2>::from_components([3i32, -2]);
    /// assert_eq!(p.components(), &[3.0, -2.0]);
    /// ```
    pub fn from_components<U: Into<T>>(components: [U; N]) -> Self {
        Self::new(components.map(Into::into))
    }

    /// Returns the number of components.
    pub fn dim(&self) -> usize {
        N
    }

    /// Returns the components in index order.
    pub fn components(&self) -> &[T] {
        self.coords.as_slice()
    }

    /// Returns component `i`, or `None` if `i >= N`.
    pub fn get(&self, i: usize) -> Option<T> {
        self.coords.get(i).copied()
    }

    pub fn into_array(self) -> [T; N] {
        self.coords.into_array()
    }

    /// Returns a read-only view of shape `[N]`.
    pub fn view(&self) -> ArrayView<'_, T, Dim1<N>> {
        self.coords.view()
    }

    /// Returns a writable view of shape `[N]`.
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, Dim1<N>> {
        self.coords.view_mut()
    }

    /// Returns `matrix · self` as a new point.
    ///
    /// The product is written into a separate point, so the input
    /// components are never overwritten while still being read.
    pub fn transformed(&self, matrix: &Matrix<T, N, N>) -> Self
    where
        T: Zero + Mul<Output = T>,
    {
        let mut out = *self;
        matrix_vector_product(&matrix.view(), &self.view(), &mut out.view_mut());
        out
    }
}

impl<T: Copy> Point<T, 2> {
    pub fn x(&self) -> T {
        self.coords[0]
    }

    pub fn y(&self) -> T {
        self.coords[1]
    }
}

impl<T: Copy + Default, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(components: [T; N]) -> Self {
        Self::new(components)
    }
}

impl<T: Copy, const N: usize> From<FixedArray<T, Dim1<N>>> for Point<T, N> {
    fn from(coords: FixedArray<T, Dim1<N>>) -> Self {
        Self { coords }
    }
}

impl<T: Copy, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(point: Point<T, N>) -> Self {
        point.into_array()
    }
}

impl<T: Copy, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.coords[i]
    }
}

impl<T: Copy, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.coords[i]
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Point");
        for c in self.components() {
            tuple.field(c);
        }
        tuple.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let p = Point::<f32, 4>::default();
        assert_eq!(p.dim(), 4);
        assert!(p.components().iter().all(|&c| c == 0.0));
        assert_eq!(Point::<i32, 2>::origin(), point![0, 0]);
    }

    #[test]
    fn test_components_in_argument_order() {
        let p = point![1.0f64, 2.0, 3.0];
        assert_eq!(p[0], 1.0);
        assert_eq!(p[1], 2.0);
        assert_eq!(p[2], 3.0);
        assert_eq!(p.get(3), None);
        assert_eq!(Point::<f64, 3>::DIM, 3);
    }

    #[test]
    fn test_from_components_converts() {
        let p = Point::<f32, 2>::from_components([3u8, 200]);
        assert_eq!(p, point![3.0, 200.0]);
        let q: Point<i64, 3> = Point::from_components([1i32, -2, 3]);
        assert_eq!(q.into_array(), [1, -2, 3]);
    }

    #[test]
    fn test_value_semantics() {
        let p = point![5, 7];
        let mut q = p;
        q[0] = 0;
        assert_eq!(p, point![5, 7]);
        assert_eq!(q, point![0, 7]);
    }

    #[test]
    fn test_mutation_through_view() {
        let mut p = Point::<f32, 2>::default();
        {
            let mut v = p.view_mut();
            v[0] = 4.0;
            v[1] = -1.5;
        }
        assert_eq!(p.x(), 4.0);
        assert_eq!(p.y(), -1.5);
        assert_eq!(p.view().as_slice(), &[4.0, -1.5]);
    }

    #[test]
    fn test_transformed_by_quarter_turn() {
        let r = Matrix::<f32, 2, 2>::from_array([[0.0, -1.0], [1.0, 0.0]]);
        assert_eq!(point![1.0, 0.0].transformed(&r), point![0.0, 1.0]);
        assert_eq!(point![0.0, 1.0].transformed(&r), point![-1.0, 0.0]);
    }

    #[test]
    fn test_transformed_3d_scale() {
        let s = Matrix::<i32, 3, 3>::from_array([[2, 0, 0], [0, 3, 0], [0, 0, 4]]);
        let p = point![1, 1, 1].transformed(&s);
        assert_eq!(p, point![2, 3, 4]);
    }

    #[test]
    fn test_conversions() {
        let p: Point<u16, 2> = [1, 2].into();
        let arr: [u16; 2] = p.into();
        assert_eq!(arr, [1, 2]);
        let q = Point::from(FixedArray::<u16, Dim1<2>>::from_array([1, 2]));
        assert_eq!(p, q);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", point![1, -2]), "Point(1, -2)");
    }
}
