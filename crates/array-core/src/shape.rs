// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Runtime shape descriptors.
//!
//! Array shapes are fixed at compile time through [`crate::Extents`]; a
//! [`Shape`] is the value-level mirror of those extents, used for
//! diagnostics, error reports and `Debug` output.

use std::fmt;

/// The extents of a [`crate::FixedArray`] or view, as a runtime value.
///
/// Usually obtained from [`crate::Extents::shape`] rather than built by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a shape from its extents, outermost first.
    ///
    /// # Examples
    /// ```
    /// use array_core::{Dim3, Extents, Shape};
    /// let s = Shape::new(vec![2, 3, 4]);
    /// assert_eq!(s, Dim3::<2, 3, 4>::shape());
    /// assert_eq!(s.num_elements(), 24);
    /// ```
    pub fn new(dims: Vec<usize>) -> Self {
        Self { dims }
    }

    /// Number of extents.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Product of all extents.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns extent `axis`, or `None` if `axis >= rank`.
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.dims.get(axis).copied()
    }

    /// Row-major strides: the last axis has stride 1 and each earlier axis
    /// steps over one full block of the axes after it.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1usize; self.dims.len()];
        for axis in (0..self.dims.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * self.dims[axis + 1];
        }
        strides
    }

    /// Maps a multi-index to its row-major linear offset.
    ///
    /// Returns `None` if the index has the wrong number of components or any
    /// component lies outside its extent.
    pub fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.dims.len() {
            return None;
        }
        index
            .iter()
            .zip(&self.dims)
            .zip(self.strides())
            .try_fold(0, |offset, ((&i, &extent), stride)| {
                (i < extent).then_some(offset + i * stride)
            })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims.to_vec())
    }
}
