// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Compile-time array extents.
//!
//! An [`Extents`] type fixes the rank and every dimension of an array in the
//! type system. Arrays and views carry their extents as a type parameter, so
//! combining two arrays of different shapes is a compile error rather than a
//! runtime check.

use crate::Shape;
use std::fmt::Debug;

/// A static, row-major array shape.
///
/// Implemented by [`Dim1`], [`Dim2`] and [`Dim3`]. Each implementation picks
/// a nested array type as its backing buffer; nested Rust arrays are laid out
/// contiguously, so the buffer always flattens to exactly [`Extents::SIZE`]
/// elements in row-major order.
pub trait Extents: Copy + Default + Debug + 'static {
    /// Number of dimensions.
    const RANK: usize;

    /// Total number of elements (product of all extents).
    const SIZE: usize;

    /// The extent of every dimension, outermost first.
    const DIMS: &'static [usize];

    /// Multi-index type accepted by element access.
    type Index: Copy + Debug;

    /// Owned storage for `SIZE` elements of `T`.
    type Buffer<T: Copy>: Copy;

    /// Creates a buffer with every element set to `value`.
    fn filled<T: Copy>(value: T) -> Self::Buffer<T>;

    /// Returns the buffer as a flat row-major slice.
    fn flatten<T: Copy>(buffer: &Self::Buffer<T>) -> &[T];

    /// Returns the buffer as a flat mutable row-major slice.
    fn flatten_mut<T: Copy>(buffer: &mut Self::Buffer<T>) -> &mut [T];

    /// Maps a multi-index to its linear offset, or `None` if any component
    /// lies outside its extent.
    fn checked_offset(index: Self::Index) -> Option<usize>;

    /// Maps a multi-index to its linear offset.
    ///
    /// # Panics
    /// Panics if any component of `index` lies outside its extent.
    fn offset(index: Self::Index) -> usize {
        match Self::checked_offset(index) {
            Some(offset) => offset,
            None => panic!(
                "index {index:?} out of bounds for extents {:?}",
                Self::DIMS
            ),
        }
    }

    /// Returns the runtime descriptor for these extents.
    fn shape() -> Shape {
        Shape::from(Self::DIMS)
    }

    /// Returns the row-major strides for these extents.
    fn strides() -> Vec<usize> {
        Self::shape().strides()
    }
}

/// Rank-1 extents: a vector of `N` elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dim1<const N: usize>;

/// Rank-2 extents: an `R` x `C` matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dim2<const R: usize, const C: usize>;

/// Rank-3 extents: a `D0` x `D1` x `D2` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dim3<const D0: usize, const D1: usize, const D2: usize>;

impl<const N: usize> Extents for Dim1<N> {
    const RANK: usize = 1;
    const SIZE: usize = N;
    const DIMS: &'static [usize] = &[N];

    type Index = usize;
    type Buffer<T: Copy> = [T; N];

    fn filled<T: Copy>(value: T) -> [T; N] {
        [value; N]
    }

    fn flatten<T: Copy>(buffer: &[T; N]) -> &[T] {
        buffer
    }

    fn flatten_mut<T: Copy>(buffer: &mut [T; N]) -> &mut [T] {
        buffer
    }

    fn checked_offset(i: usize) -> Option<usize> {
        (i < N).then_some(i)
    }
}

impl<const R: usize, const C: usize> Extents for Dim2<R, C> {
    const RANK: usize = 2;
    const SIZE: usize = R * C;
    const DIMS: &'static [usize] = &[R, C];

    type Index = [usize; 2];
    type Buffer<T: Copy> = [[T; C]; R];

    fn filled<T: Copy>(value: T) -> [[T; C]; R] {
        [[value; C]; R]
    }

    fn flatten<T: Copy>(buffer: &[[T; C]; R]) -> &[T] {
        buffer.as_flattened()
    }

    fn flatten_mut<T: Copy>(buffer: &mut [[T; C]; R]) -> &mut [T] {
        buffer.as_flattened_mut()
    }

    fn checked_offset([i, j]: [usize; 2]) -> Option<usize> {
        (i < R && j < C).then(|| i * C + j)
    }
}

impl<const D0: usize, const D1: usize, const D2: usize> Extents for Dim3<D0, D1, D2> {
    const RANK: usize = 3;
    const SIZE: usize = D0 * D1 * D2;
    const DIMS: &'static [usize] = &[D0, D1, D2];

    type Index = [usize; 3];
    type Buffer<T: Copy> = [[[T; D2]; D1]; D0];

    fn filled<T: Copy>(value: T) -> [[[T; D2]; D1]; D0] {
        [[[value; D2]; D1]; D0]
    }

    fn flatten<T: Copy>(buffer: &[[[T; D2]; D1]; D0]) -> &[T] {
        buffer.as_flattened().as_flattened()
    }

    fn flatten_mut<T: Copy>(buffer: &mut [[[T; D2]; D1]; D0]) -> &mut [T] {
        buffer.as_flattened_mut().as_flattened_mut()
    }

    fn checked_offset([i, j, k]: [usize; 3]) -> Option<usize> {
        (i < D0 && j < D1 && k < D2).then(|| (i * D1 + j) * D2 + k)
    }
}
