// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # array-core
//!
//! Fixed-shape numeric arrays and the dense matrix-vector product built on
//! top of them.
//!
//! This crate provides:
//! - [`Extents`] — compile-time shapes ([`Dim1`], [`Dim2`], [`Dim3`]).
//! - [`FixedArray`] — an owned, inline, row-major array of a static shape.
//! - [`ArrayView`] / [`ArrayViewMut`] — borrowed, shape-aware views.
//! - [`Shape`] — the runtime mirror of a static shape, for diagnostics.
//! - [`matrix_vector_product`] — `y = A · x` over views.
//!
//! # Design Goals
//! - Shape agreement is checked by the compiler, not at runtime.
//! - No heap allocation: arrays live inline and operations write into
//!   caller-provided views.
//! - Out-of-range element access panics instead of reading a neighbour.

mod array;
mod error;
mod extents;
mod ops;
mod shape;
mod view;

pub use array::{FixedArray, Matrix, Vector};
pub use error::ArrayError;
pub use extents::{Dim1, Dim2, Dim3, Extents};
pub use ops::matrix_vector_product;
pub use shape::Shape;
pub use view::{ArrayView, ArrayViewMut};
