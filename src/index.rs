// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unchecked indexing for the contiguous containers.
//!
//! `Index` / `IndexMut` are the fast path and return no `Result`: they mirror
//! slice behavior, so an out-of-range index or inverted range panics. Every
//! index form a slice accepts (`usize`, `a..b`, `..=b`, ...) works here, and
//! views are restricted to the live elements (`[0..len)` for a
//! [`DynamicArray`], all `N` for a [`FixedArray`] or [`FixedVector`]). The
//! checked path is `at`. [`Matrix`](crate::Matrix) indexes itself, since it
//! also takes `(row, col)` pairs.

// Crate imports
use crate::{dynamic_array::DynamicArray, fixed_array::FixedArray, fixed_vector::FixedVector};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for FixedArray<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}
impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for FixedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for FixedVector<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}
impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for FixedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for DynamicArray<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}
impl<T, I: SliceIndex<[T]>> IndexMut<I> for DynamicArray<T> {
    #[inline]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
