// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Dense linear-algebra operations over array views.
//!
//! Operations read from [`crate::ArrayView`]s and write into a caller-owned
//! [`crate::ArrayViewMut`], so no operation allocates.

mod matvec_op;

pub use matvec_op::matrix_vector_product;
