// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Owned, fixed-shape arrays.

use crate::view::check_len;
use crate::{ArrayError, ArrayView, ArrayViewMut, Dim1, Dim2, Extents, Shape};
use std::fmt;
use std::ops::{Index, IndexMut};

/// An owned array whose shape is fixed at compile time.
///
/// `FixedArray` stores exactly `E::SIZE` elements inline, in row-major
/// order, and is never resized. It is copied by value and exposes borrowed
/// views via [`view`](FixedArray::view) and [`view_mut`](FixedArray::view_mut).
///
/// # Examples
/// ```
/// use array_core::{Dim2, FixedArray};
/// let m = FixedArray::<f32, Dim2<2, 2>>::from_array([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(m[[1, 0]], 3.0);
/// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
pub struct FixedArray<T: Copy, E: Extents> {
    data: E::Buffer<T>,
}

/// A rank-1 array of `N` elements.
pub type Vector<T, const N: usize> = FixedArray<T, Dim1<N>>;

/// A row-major `R` x `C` matrix.
pub type Matrix<T, const R: usize, const C: usize> = FixedArray<T, Dim2<R, C>>;

impl<T: Copy, E: Extents> FixedArray<T, E> {
    /// Creates an array with every element set to `T::default()`.
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::filled(T::default())
    }

    /// Creates an array with every element set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            data: E::filled(value),
        }
    }

    /// Wraps a nested array literal, e.g. `[[a, b], [c, d]]` for a 2x2 matrix.
    pub fn from_array(data: E::Buffer<T>) -> Self {
        Self { data }
    }

    /// Creates an array from a flat row-major slice.
    ///
    /// # Errors
    /// Returns [`ArrayError::BufferSizeMismatch`] if `values.len() != E::SIZE`.
    pub fn from_slice(values: &[T]) -> Result<Self, ArrayError>
    where
        T: Default,
    {
        check_len::<E>(values.len())?;
        let mut array = Self::new();
        array.as_mut_slice().copy_from_slice(values);
        Ok(array)
    }

    /// Returns the nested backing array.
    pub fn into_array(self) -> E::Buffer<T> {
        self.data
    }

    /// Returns the total number of elements.
    pub fn size(&self) -> usize {
        E::SIZE
    }

    /// Returns the runtime shape descriptor.
    pub fn shape(&self) -> Shape {
        E::shape()
    }

    /// Returns a read-only view over this array's storage.
    pub fn view(&self) -> ArrayView<'_, T, E> {
        ArrayView::from_parts(self.as_slice())
    }

    /// Returns a writable view over this array's storage.
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, E> {
        ArrayViewMut::from_parts(self.as_mut_slice())
    }

    pub fn as_slice(&self) -> &[T] {
        E::flatten(&self.data)
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        E::flatten_mut(&mut self.data)
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    pub fn get(&self, index: E::Index) -> Option<&T> {
        let offset = E::checked_offset(index)?;
        Some(&self.as_slice()[offset])
    }

    /// Returns the element at `index` mutably, or `None` if it is out of bounds.
    pub fn get_mut(&mut self, index: E::Index) -> Option<&mut T> {
        let offset = E::checked_offset(index)?;
        Some(&mut self.as_mut_slice()[offset])
    }

    /// Copies every element of `src`, in row-major order.
    ///
    /// `src` must have the same extents as this array; anything else does not
    /// type-check.
    pub fn copy_from(&mut self, src: &ArrayView<'_, T, E>) -> &mut Self {
        self.as_mut_slice().copy_from_slice(src.as_slice());
        self
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data = E::filled(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Copy, E: Extents> Clone for FixedArray<T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy, E: Extents> Copy for FixedArray<T, E> {}

impl<T: Copy + Default, E: Extents> Default for FixedArray<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialEq, E: Extents> PartialEq for FixedArray<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, E: Extents> Eq for FixedArray<T, E> {}

impl<T: Copy + fmt::Debug, E: Extents> fmt::Debug for FixedArray<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("shape", &E::shape())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: Copy, E: Extents> Index<E::Index> for FixedArray<T, E> {
    type Output = T;

    fn index(&self, index: E::Index) -> &T {
        &self.as_slice()[E::offset(index)]
    }
}

impl<T: Copy, E: Extents> IndexMut<E::Index> for FixedArray<T, E> {
    fn index_mut(&mut self, index: E::Index) -> &mut T {
        &mut self.as_mut_slice()[E::offset(index)]
    }
}

impl<'a, T: Copy, E: Extents> IntoIterator for &'a FixedArray<T, E> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
