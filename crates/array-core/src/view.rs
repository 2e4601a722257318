// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Borrowed, shape-aware views over contiguous buffers.

use crate::{ArrayError, Extents, Shape};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Validates that a runtime buffer length matches the static extents `E`.
pub(crate) fn check_len<E: Extents>(actual: usize) -> Result<(), ArrayError> {
    if actual != E::SIZE {
        return Err(ArrayError::BufferSizeMismatch {
            shape: E::shape(),
            expected: E::SIZE,
            actual,
        });
    }
    Ok(())
}

/// A borrowed, read-only view over `E::SIZE` contiguous elements.
///
/// Views are zero-copy and tied to the lifetime of the source buffer,
/// enforced by the borrow checker. Multi-indices are mapped to offsets in
/// row-major order.
pub struct ArrayView<'a, T, E: Extents> {
    data: &'a [T],
    extents: PhantomData<E>,
}

impl<'a, T, E: Extents> ArrayView<'a, T, E> {
    /// Creates a view over `data`.
    ///
    /// # Errors
    /// Returns [`ArrayError::BufferSizeMismatch`] if `data.len() != E::SIZE`.
    ///
    /// # Examples
    /// ```
    /// use array_core::{ArrayView, Dim2};
    /// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let m = ArrayView::<_, Dim2<2, 3>>::from_slice(&data).unwrap();
    /// assert_eq!(m[[1, 0]], 4.0);
    /// ```
    pub fn from_slice(data: &'a [T]) -> Result<Self, ArrayError> {
        check_len::<E>(data.len())?;
        Ok(Self::from_parts(data))
    }

    /// Creates a view from a slice already known to hold `E::SIZE` elements.
    pub(crate) fn from_parts(data: &'a [T]) -> Self {
        debug_assert_eq!(data.len(), E::SIZE);
        Self {
            data,
            extents: PhantomData,
        }
    }

    /// Returns the shape of the viewed buffer.
    pub fn shape(&self) -> Shape {
        E::shape()
    }

    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the viewed elements in row-major order.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    pub fn get(&self, index: E::Index) -> Option<&'a T> {
        E::checked_offset(index).map(|offset| &self.data[offset])
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }
}

impl<T, E: Extents> Clone for ArrayView<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E: Extents> Copy for ArrayView<'_, T, E> {}

impl<T, E: Extents> Index<E::Index> for ArrayView<'_, T, E> {
    type Output = T;

    fn index(&self, index: E::Index) -> &T {
        &self.data[E::offset(index)]
    }
}

impl<T: fmt::Debug, E: Extents> fmt::Debug for ArrayView<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayView")
            .field("shape", &E::shape())
            .field("data", &self.data)
            .finish()
    }
}

/// A borrowed, writable view over `E::SIZE` contiguous elements.
///
/// Holding an `ArrayViewMut` excludes every other view of the same storage,
/// so an operation can never read and write the same buffer through two
/// different views.
pub struct ArrayViewMut<'a, T, E: Extents> {
    data: &'a mut [T],
    extents: PhantomData<E>,
}

impl<'a, T, E: Extents> ArrayViewMut<'a, T, E> {
    /// Creates a writable view over `data`.
    ///
    /// # Errors
    /// Returns [`ArrayError::BufferSizeMismatch`] if `data.len() != E::SIZE`.
    pub fn from_slice(data: &'a mut [T]) -> Result<Self, ArrayError> {
        check_len::<E>(data.len())?;
        Ok(Self::from_parts(data))
    }

    pub(crate) fn from_parts(data: &'a mut [T]) -> Self {
        debug_assert_eq!(data.len(), E::SIZE);
        Self {
            data,
            extents: PhantomData,
        }
    }

    /// Returns the shape of the viewed buffer.
    pub fn shape(&self) -> Shape {
        E::shape()
    }

    /// Returns the number of elements in the view.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a read-only view of the same elements.
    pub fn view(&self) -> ArrayView<'_, T, E> {
        ArrayView::from_parts(self.data)
    }

    /// Reborrows this view for a shorter lifetime.
    pub fn reborrow(&mut self) -> ArrayViewMut<'_, T, E> {
        ArrayViewMut::from_parts(self.data)
    }

    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
    }

    /// Consumes the view, returning the underlying slice with its full lifetime.
    pub fn into_slice(self) -> &'a mut [T] {
        self.data
    }

    /// Returns the element at `index`, or `None` if it is out of bounds.
    pub fn get(&self, index: E::Index) -> Option<&T> {
        E::checked_offset(index).map(|offset| &self.data[offset])
    }

    /// Returns the element at `index` mutably, or `None` if it is out of bounds.
    pub fn get_mut(&mut self, index: E::Index) -> Option<&mut T> {
        let offset = E::checked_offset(index)?;
        Some(&mut self.data[offset])
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Copies every element of `src` into this view, in row-major order.
    pub fn copy_from(&mut self, src: &ArrayView<'_, T, E>)
    where
        T: Copy,
    {
        self.data.copy_from_slice(src.as_slice());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T, E: Extents> Index<E::Index> for ArrayViewMut<'_, T, E> {
    type Output = T;

    fn index(&self, index: E::Index) -> &T {
        &self.data[E::offset(index)]
    }
}

impl<T, E: Extents> IndexMut<E::Index> for ArrayViewMut<'_, T, E> {
    fn index_mut(&mut self, index: E::Index) -> &mut T {
        &mut self.data[E::offset(index)]
    }
}

impl<T: fmt::Debug, E: Extents> fmt::Debug for ArrayViewMut<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayViewMut")
            .field("shape", &E::shape())
            .field("data", &self.data)
            .finish()
    }
}
