// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedArray` type and its inherent API.
//!
//! `FixedArray<T, N>` owns exactly `N` elements stored inline. Its length is a
//! compile-time constant: there is no push, pop, or resize. It is the storage
//! behind [`FixedVector`](crate::FixedVector) and [`Matrix`](crate::Matrix).

// Crate imports
use crate::{algorithm, display, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    ops::{Deref, DerefMut},
};

/// A fixed-size, inline array of exactly `N` elements.
///
/// # Access
///
/// - `a[i]` is the unchecked path: no `Result`, and an index `>= N` panics
///   like any slice index.
/// - [`at`](FixedArray::at) / [`at_mut`](FixedArray::at_mut) are the checked
///   path and return [`Error::IndexOutOfRange`].
/// - [`front`](FixedArray::front) / [`back`](FixedArray::back) only fail when
///   `N == 0`.
///
/// # Value semantics
///
/// Cloning duplicates all `N` elements; the array is `Copy` whenever `T` is.
/// There is no shared storage between instances.
///
/// # Examples
///
/// ```rust
/// use seqlib::{Error, FixedArray};
///
/// let a = FixedArray::from([6, 7, 8, 9, 0]);
/// assert_eq!(a.len(), 5);
/// assert_eq!(a.at(4), Ok(&0));
/// assert_eq!(a.at(5), Err(Error::IndexOutOfRange));
///
/// let short = FixedArray::<i32, 5>::try_from(&[1, 2, 3][..]);
/// assert_eq!(short, Err(Error::SizeMismatch));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedArray<T, const N: usize> {
    pub(crate) buf: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// The number of elements, always `N`.
    pub const LEN: usize = N;

    /// Wraps an existing array.
    #[inline]
    pub const fn from_array(buf: [T; N]) -> Self {
        Self { buf }
    }

    /// Unwraps into the underlying array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.buf
    }

    /// Returns `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `N`; a fixed array can neither grow nor shrink.
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns `true` only for `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Checked access; [`Error::IndexOutOfRange`] when `i >= N`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.buf.get(i).ok_or(Error::IndexOutOfRange)
    }

    /// Checked mutable access; [`Error::IndexOutOfRange`] when `i >= N`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.buf.get_mut(i).ok_or(Error::IndexOutOfRange)
    }

    /// Element `0`; [`Error::EmptyContainer`] when `N == 0`.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.buf.first().ok_or(Error::EmptyContainer)
    }

    /// Element `N - 1`; [`Error::EmptyContainer`] when `N == 0`.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.buf.last().ok_or(Error::EmptyContainer)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.buf.first_mut().ok_or(Error::EmptyContainer)
    }

    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        self.buf.last_mut().ok_or(Error::EmptyContainer)
    }

    /// The whole array as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Raw pointer to the first element of the contiguous storage.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    // iterators
    /// Random-access, double-ended iterator; use `.rev()` for reverse order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.buf.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }
}

impl<T: Clone, const N: usize> FixedArray<T, N> {
    /// Overwrites every element with a clone of `value`.
    #[inline]
    pub fn fill(&mut self, value: &T) {
        algorithm::fill(&mut self.buf, value);
    }

    /// Element-wise copy from `src`.
    ///
    /// Returns [`Error::SizeMismatch`] and leaves `self` unchanged unless
    /// `src.len() == N`.
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error> {
        if src.len() != N {
            return Err(Error::SizeMismatch);
        }
        let _ = algorithm::copy(src, &mut self.buf);
        Ok(())
    }

    /// Exchanges contents with `other` by value (three copies, `O(N)`).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        algorithm::swap(self, other);
    }
}

impl<T: PartialOrd + Clone, const N: usize> FixedArray<T, N> {
    /// Sorts in non-decreasing order; see [`algorithm::sort`].
    #[inline]
    pub fn sort(&mut self) {
        algorithm::sort(&mut self.buf);
    }
}

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// An array of `N` default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self {
            buf: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(buf: [T; N]) -> Self {
        Self { buf }
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = Error;

    /// Requires `src.len() == N` exactly; otherwise [`Error::SizeMismatch`].
    fn try_from(src: &[T]) -> Result<Self, Error> {
        if src.len() != N {
            return Err(Error::SizeMismatch);
        }
        Ok(Self {
            buf: core::array::from_fn(|i| src[i].clone()),
        })
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedArray<T, N> {
    /// Formats as `(e0, e1, ..., eN)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display::write_tuple(f, &self.buf, ", ")
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        &self.buf
    }
}
impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}
impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.buf
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}
impl<T, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    fn borrow(&self) -> &[T] {
        &self.buf
    }
}
impl<T, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.buf
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedArray;
    use crate::Error;
    use alloc::{string::ToString, vec::Vec};

    #[test]
    fn test_default_fills_with_default_values() {
        let a: FixedArray<i32, 4> = FixedArray::new();
        assert_eq!(a.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(a.len(), 4);
        assert_eq!(a.max_size(), 4);
        assert_eq!(FixedArray::<i32, 4>::LEN, 4);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_try_from_slice_requires_exact_length() {
        let a = FixedArray::<i32, 5>::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
        assert_eq!(
            FixedArray::<i32, 5>::try_from(&[1, 2, 3][..]),
            Err(Error::SizeMismatch)
        );
        assert_eq!(
            FixedArray::<i32, 2>::try_from(&[1, 2, 3][..]),
            Err(Error::SizeMismatch)
        );
    }

    #[test]
    fn test_checked_and_unchecked_access() {
        let mut a = FixedArray::from([6, 7, 8, 9, 0]);
        assert_eq!(a[0], 6);
        assert_eq!(a.at(0), Ok(&6));
        assert_eq!(a.at(5), Err(Error::IndexOutOfRange));
        *a.at_mut(1).unwrap() = 70;
        a[2] = 80;
        assert_eq!(a.as_slice(), &[6, 70, 80, 9, 0]);
        assert_eq!(a.front(), Ok(&6));
        assert_eq!(a.back(), Ok(&0));
        *a.back_mut().unwrap() = 1;
        *a.front_mut().unwrap() = 2;
        assert_eq!(a.as_slice(), &[2, 70, 80, 9, 1]);
    }

    #[test]
    #[should_panic]
    fn test_unchecked_index_out_of_range_panics() {
        let a = FixedArray::from([1, 2, 3]);
        let i = a.len();
        let _ = a[i];
    }

    #[test]
    fn test_zero_length_array() {
        let a: FixedArray<u8, 0> = FixedArray::default();
        assert!(a.is_empty());
        assert_eq!(a.front(), Err(Error::EmptyContainer));
        assert_eq!(a.back(), Err(Error::EmptyContainer));
        assert_eq!(a.at(0), Err(Error::IndexOutOfRange));
        assert_eq!(a.to_string(), "()");
    }

    #[test]
    fn test_data_pointer_is_first_element() {
        let a = FixedArray::from([1, 2, 3]);
        assert_eq!(a.as_ptr(), a.as_slice().as_ptr());
        assert_eq!(a.as_ptr(), &a[0] as *const i32);
    }

    #[test]
    fn test_copy_is_independent() {
        let a = FixedArray::from([1, 2, 3, 4, 5]);
        let mut b = a;
        b[0] = 100;
        assert_eq!(a[0], 1);
        assert_eq!(b[0], 100);
    }

    #[test]
    fn test_swap_fill_and_reverse_fill() {
        let mut a = FixedArray::from([6, 7, 8, 9, 0]);
        let mut b = FixedArray::from([1, 2, 3, 4, 5]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(b.as_slice(), &[6, 7, 8, 9, 0]);

        a.fill(&5);
        assert_eq!(a.as_slice(), &[5; 5]);
        crate::algorithm::fill(a.iter_mut().rev(), &10);
        assert_eq!(a.as_slice(), &[10; 5]);
    }

    #[test]
    fn test_assign_from_slice() {
        let mut a = FixedArray::from([0; 3]);
        assert_eq!(a.assign_from_slice(&[1, 2, 3]), Ok(()));
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(a.assign_from_slice(&[9, 9]), Err(Error::SizeMismatch));
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_display_and_iteration_orders() {
        let mut a = FixedArray::from([3, 1, 2]);
        assert_eq!(a.to_string(), "(3, 1, 2)");
        assert_eq!(a.iter().rev().copied().collect::<Vec<_>>(), [2, 1, 3]);
        a.sort();
        assert_eq!(a.to_string(), "(1, 2, 3)");
        let owned: Vec<i32> = a.into_iter().collect();
        assert_eq!(owned, [1, 2, 3]);
    }
}
