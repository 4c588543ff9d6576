// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynamicArray` type and its inherent API.
//!
//! `DynamicArray<T>` is a growable, heap-backed contiguous sequence. It owns a
//! boxed buffer of `capacity` slots and tracks a logical length `len`; only
//! the prefix `buf[..len]` is visible through the public API. Operations are
//! split by concern into the submodules below.

mod assign;
mod from;
mod grow;
mod insert;
mod push;

// Crate imports
use crate::{algorithm, display, error::Error};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// Capacity allocated by [`DynamicArray::new`] / [`Default::default`].
pub const DEFAULT_CAPACITY: usize = 4;

/// A growable array stored in a single heap buffer.
///
/// # Layout and invariants
///
/// - `len <= capacity` at all times.
/// - Every slot is initialized. Slots at or past `len` hold `T::default()`,
///   which is why the growing operations require `T: Default`.
/// - Reallocation happens only when an operation needs more than `capacity`
///   slots, and grows to `max(capacity * 2, required)`. Removing elements
///   never gives memory back; neither does [`reserve`](DynamicArray::reserve).
///
/// # Access
///
/// - `v[i]` is unchecked: it panics for `i >= len` like a slice index, even
///   when `i < capacity`.
/// - [`at`](DynamicArray::at) / [`at_mut`](DynamicArray::at_mut) return
///   [`Error::IndexOutOfRange`].
/// - [`front`](DynamicArray::front) / [`back`](DynamicArray::back) /
///   [`pop_back`](DynamicArray::pop_back) return [`Error::EmptyContainer`].
///
/// # Invalidation
///
/// Borrows into the buffer cannot outlive a mutation; the borrow checker
/// enforces what would otherwise be "do not hold iterators across
/// `push_back`/`insert`/`reserve`". Raw pointers from
/// [`as_ptr`](DynamicArray::as_ptr) are invalidated by any reallocation.
///
/// # Examples
///
/// ```rust
/// use seqlib::{DynamicArray, Error};
///
/// let mut v = DynamicArray::new();
/// for i in 1..=5 {
///     v.push_back(i);
/// }
/// assert_eq!(v.to_string(), "(1, 2, 3, 4, 5)");
/// assert_eq!(v.pop_back(), Ok(5));
/// assert_eq!(v.erase(0), Ok(1));
/// v.insert(0, 100).unwrap();
/// assert_eq!(v.as_slice(), &[100, 2, 3, 4]);
///
/// let mut empty: DynamicArray<i32> = DynamicArray::new();
/// assert_eq!(empty.pop_back(), Err(Error::EmptyContainer));
/// assert_eq!(empty.to_string(), "Empty vector");
/// ```
pub struct DynamicArray<T> {
    pub(crate) buf: Box<[T]>,
    pub(crate) len: usize,
}

impl<T> DynamicArray<T> {
    /// Returns the logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots (`>= len`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Upper bound on the number of elements a buffer can address.
    #[inline]
    pub const fn max_size(&self) -> usize {
        let size = core::mem::size_of::<T>();
        if size == 0 {
            usize::MAX
        } else {
            isize::MAX as usize / size
        }
    }

    /// Checked access; [`Error::IndexOutOfRange`] when `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.as_slice().get(i).ok_or(Error::IndexOutOfRange)
    }

    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.as_mut_slice().get_mut(i).ok_or(Error::IndexOutOfRange)
    }

    /// First element; [`Error::EmptyContainer`] when empty.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.as_slice().first().ok_or(Error::EmptyContainer)
    }

    /// Last element; [`Error::EmptyContainer`] when empty.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.as_slice().last().ok_or(Error::EmptyContainer)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().first_mut().ok_or(Error::EmptyContainer)
    }

    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        self.as_mut_slice().last_mut().ok_or(Error::EmptyContainer)
    }

    /// The live prefix `[0..len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    /// Raw pointer to the start of the buffer; invalidated by reallocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: PartialOrd + Clone> DynamicArray<T> {
    /// Sorts the live elements; see [`algorithm::sort`].
    #[inline]
    pub fn sort(&mut self) {
        algorithm::sort(self.as_mut_slice());
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Exchanges contents with `other` by value (three copies, `O(len)`).
    ///
    /// Capacities travel with the contents.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        algorithm::swap(self, other);
    }
}

impl<T: Clone + Default> Clone for DynamicArray<T> {
    /// Allocates an independent buffer of the same capacity and clones the
    /// live elements into it.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        let _ = algorithm::copy(self.as_slice(), out.buf.iter_mut());
        out.len = self.len;
        out
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    /// `(e0, e1, ...)`, or `Empty vector` when there are no elements.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty vector");
        }
        display::write_tuple(f, self.iter(), ", ")
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T> Borrow<[T]> for DynamicArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for DynamicArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{DynamicArray, DEFAULT_CAPACITY};
    use crate::Error;
    use alloc::{string::ToString, vec::Vec};

    #[test]
    fn test_new_allocates_default_capacity() {
        let v: DynamicArray<u8> = DynamicArray::new();
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_push_pop_erase_insert_scenario() {
        let mut v = DynamicArray::new();
        for i in 1..=5 {
            v.push_back(i);
        }
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(v.len(), 5);

        v.push_back(100);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5, 100]);
        assert_eq!(v.len(), 6);

        assert_eq!(v.pop_back(), Ok(100));
        assert_eq!(v.len(), 5);

        assert_eq!(v.erase(0), Ok(1));
        assert_eq!(v.as_slice(), &[2, 3, 4, 5]);

        v.insert(0, 100).unwrap();
        assert_eq!(v.as_slice(), &[100, 2, 3, 4, 5]);
        assert_eq!(v.to_string(), "(100, 2, 3, 4, 5)");
    }

    #[test]
    fn test_checked_access() {
        let mut v: DynamicArray<i32> = [10, 20, 30].into();
        assert_eq!(v.at(2), Ok(&30));
        assert_eq!(v.at(3), Err(Error::IndexOutOfRange));
        *v.at_mut(0).unwrap() = 11;
        assert_eq!(v.front(), Ok(&11));
        assert_eq!(v.back(), Ok(&30));
        *v.back_mut().unwrap() = 31;
        *v.front_mut().unwrap() += 1;
        assert_eq!(v.as_slice(), &[12, 20, 31]);
    }

    #[test]
    fn test_empty_contracts() {
        let mut v: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(v.pop_back(), Err(Error::EmptyContainer));
        assert_eq!(v.front(), Err(Error::EmptyContainer));
        assert_eq!(v.back(), Err(Error::EmptyContainer));
        assert_eq!(v.at(0), Err(Error::IndexOutOfRange));
        assert_eq!(v.to_string(), "Empty vector");
    }

    #[test]
    fn test_clone_is_deep_and_keeps_capacity() {
        let mut a: DynamicArray<i32> = DynamicArray::with_capacity(10);
        a.push_back(1);
        a.push_back(2);
        let mut b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.capacity(), 10);
        b[0] = 99;
        assert_eq!(a[0], 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_swap_exchanges_contents_and_capacity() {
        let mut a: DynamicArray<i32> = DynamicArray::from(&[1, 2, 3][..]);
        let mut b: DynamicArray<i32> = DynamicArray::with_capacity(16);
        b.push_back(7);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[7]);
        assert_eq!(a.capacity(), 16);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[7]);
    }

    #[test]
    fn test_sort_and_debug() {
        let mut v: DynamicArray<i32> = [5, 3, 9, -1].into();
        v.sort();
        assert_eq!(v.as_slice(), &[-1, 3, 5, 9]);
        assert_eq!(alloc::format!("{v:?}"), "[-1, 3, 5, 9]");
        assert!(v.contains(&9));
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [9, 5, 3, -1]);
    }

    #[test]
    fn test_data_pointer_and_max_size() {
        let v: DynamicArray<u64> = [1, 2].into();
        assert_eq!(v.as_ptr(), v.as_slice().as_ptr());
        assert_eq!(v.max_size(), isize::MAX as usize / 8);
        let z: DynamicArray<()> = DynamicArray::new();
        assert_eq!(z.max_size(), usize::MAX);
    }
}

#[cfg(test)]
mod proptests {
    // Imports
    use super::DynamicArray;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Pop,
        Insert(usize, i32),
        Erase(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::Push),
            Just(Op::Pop),
            (0usize..40, any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
            (0usize..40).prop_map(Op::Erase),
        ]
    }

    proptest! {
        #[test]
        fn len_tracks_successful_operations(ops in proptest::collection::vec(op(), 0..200)) {
            let mut v: DynamicArray<i32> = DynamicArray::new();
            let mut model: Vec<i32> = Vec::new();
            for op in ops {
                match op {
                    Op::Push(x) => {
                        v.push_back(x);
                        model.push(x);
                    }
                    Op::Pop => {
                        prop_assert_eq!(v.pop_back().ok(), model.pop());
                    }
                    Op::Insert(i, x) => {
                        let ok = v.insert(i, x).is_ok();
                        prop_assert_eq!(ok, i <= model.len());
                        if ok {
                            model.insert(i, x);
                        }
                    }
                    Op::Erase(i) => {
                        let got = v.erase(i).ok();
                        let expected = (i < model.len()).then(|| model.remove(i));
                        prop_assert_eq!(got, expected);
                    }
                }
                prop_assert_eq!(v.len(), model.len());
                prop_assert!(v.capacity() >= v.len());
            }
            prop_assert_eq!(v.as_slice(), model.as_slice());
        }
    }
}
