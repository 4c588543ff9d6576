// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{algorithm, dynamic_array::DynamicArray};

impl<T: Default> DynamicArray<T> {
    /// Removes every element. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Sets the length to `len`.
    ///
    /// Growing appends `T::default()` values (reallocating with the usual
    /// doubling rule if needed); shrinking drops the tail.
    pub fn resize(&mut self, len: usize) {
        if len <= self.len {
            self.truncate(len);
        } else {
            // Slots past the old `len` already hold defaults.
            self.grow_for(len);
            self.len = len;
        }
    }

    /// Replaces the contents with the items of `iter`.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        self.extend(iter);
    }
}

impl<T: Clone + Default> DynamicArray<T> {
    /// Replaces the contents with `count` clones of `value`.
    ///
    /// Reallocates only when `count` exceeds the current capacity.
    pub fn assign_fill(&mut self, count: usize, value: &T) {
        self.clear();
        self.grow_for(count);
        algorithm::fill(&mut self.buf[..count], value);
        self.len = count;
    }

    /// Replaces the contents with clones of `src`.
    ///
    /// Reallocates only when `src` is longer than the current capacity.
    pub fn assign_slice(&mut self, src: &[T]) {
        self.clear();
        self.grow_for(src.len());
        let _ = algorithm::copy(src, &mut self.buf[..]);
        self.len = src.len();
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::DynamicArray;
    use alloc::string::ToString;

    #[test]
    fn test_assign_fill_reuses_buffer_when_it_fits() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(8);
        v.push_back(1);
        v.assign_fill(3, &7);
        assert_eq!(v.as_slice(), &[7, 7, 7]);
        assert_eq!(v.capacity(), 8);
    }

    #[test]
    fn test_assign_fill_grows() {
        let mut v: DynamicArray<i32> = DynamicArray::with_capacity(2);
        v.assign_fill(5, &1);
        assert_eq!(v.len(), 5);
        assert!(v.capacity() >= 5);
    }

    #[test]
    fn test_assign_slice_and_iter_replace_contents() {
        let mut v: DynamicArray<i32> = [9, 9, 9, 9, 9].into();
        v.assign_slice(&[1, 2]);
        assert_eq!(v.as_slice(), &[1, 2]);
        v.assign_iter((0..6).map(|x| x * 10));
        assert_eq!(v.as_slice(), &[0, 10, 20, 30, 40, 50]);
        v.assign_slice(&[]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_resize_grows_with_defaults_and_shrinks() {
        let mut v: DynamicArray<i32> = [1, 2].into();
        v.resize(5);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0, 0]);
        v[4] = 4;
        v.resize(1);
        assert_eq!(v.as_slice(), &[1]);
        v.resize(5);
        assert_eq!(v.as_slice(), &[1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut v: DynamicArray<i32> = [1, 2, 3, 4, 5].into();
        let capacity = v.capacity();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), capacity);
        assert_eq!(v.to_string(), "Empty vector");
    }
}
