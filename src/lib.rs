// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `seqlib`
//!
//! A `no_std` (+ `alloc`) library of sequence containers, **with no `unsafe`**.
//!
//! | Type | Storage | Length |
//! |---|---|---|
//! | [`FixedArray<T, N>`] | inline `[T; N]` | always `N` |
//! | [`DynamicArray<T>`] | one heap buffer, capacity doubling | `0..=capacity` |
//! | [`DoublyLinkedList<T>`] | arena of linked nodes, `None` as the end | any |
//! | [`IntrusiveList<T>`] | arena of linked nodes between two inline sentinels | any |
//! | [`FixedVector<T, N>`] | a [`FixedArray`] with vector arithmetic | always `N` |
//! | [`Matrix<T, R, C>`] | a row-major [`FixedArray`] of rows | always `R * C` |
//!
//! The [`algorithm`] module holds the generic copy / move / fill / transform /
//! swap / sort helpers every container is built on, and [`math`] the vector
//! products.
//!
//! ## Checked and unchecked access
//!
//! Every container keeps two access paths:
//!
//! - Indexing (`v[i]`, and `m[(row, col)]` for a [`Matrix`]) is the fast path.
//!   It returns no `Result` and **panics** on an out-of-range index, exactly
//!   like built-in slices.
//! - `at` / `at_mut` (and [`Matrix::cell`]) are checked and return
//!   [`Error::IndexOutOfRange`].
//!
//! `front` / `back` / `pop_*` on an empty container return
//! [`Error::EmptyContainer`]. The intrusive list applies that rule to its
//! cursors as well: `begin()` and `end()` fail on an empty list.
//!
//! ## Value semantics
//!
//! Cloning always deep-copies, and the containers' `swap` methods exchange
//! contents through three whole-container copies ([`algorithm::swap`]); no
//! two containers ever share storage.
//!
//! ## Stale positions
//!
//! List positions are generation-checked indices into the list's node
//! arena. A position whose node was erased is rejected with
//! [`Error::IndexOutOfRange`], even after its slot has been reused.
//! Intrusive-list positions also record which list produced them, and any
//! other list rejects them.
//!
//! ## Example
//!
//! ```rust
//! use seqlib::{algorithm, DynamicArray, Error, FixedArray};
//!
//! let mut v: DynamicArray<i32> = [5, 3, 1].into();
//! v.push_back(4);
//! v.sort();
//! assert_eq!(v.to_string(), "(1, 3, 4, 5)");
//!
//! let mut a = FixedArray::from([0; 4]);
//! let _ = algorithm::copy(&v, &mut a);
//! assert_eq!(a.at(3), Ok(&5));
//! assert_eq!(a.at(4), Err(Error::IndexOutOfRange));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
pub mod algorithm;
mod arena;
mod display;
pub mod dynamic_array;
mod error;
mod fixed_array;
mod fixed_vector;
mod index;
pub mod intrusive;
mod iter;
pub mod list;
pub mod math;
mod matrix;

// Public exports (crate API surface)
pub use dynamic_array::DynamicArray;
pub use error::Error;
pub use fixed_array::FixedArray;
pub use fixed_vector::FixedVector;
pub use intrusive::IntrusiveList;
pub use iter::IntoIter;
pub use list::DoublyLinkedList;
pub use matrix::Matrix;
