// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::dynamic_array::DynamicArray;

impl<T: Default> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.grow_for(self.len.saturating_add(lower));
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Default> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T: Clone + Default> From<&[T]> for DynamicArray<T> {
    /// Allocates exactly `src.len()` slots and clones `src` into them.
    fn from(src: &[T]) -> Self {
        let mut out = Self::with_capacity(src.len());
        out.assign_slice(src);
        out
    }
}

impl<T: Default, const M: usize> From<[T; M]> for DynamicArray<T> {
    /// Allocates exactly `M` slots and moves the array into them.
    fn from(src: [T; M]) -> Self {
        let mut out = Self::with_capacity(M);
        out.extend(src);
        out
    }
}
