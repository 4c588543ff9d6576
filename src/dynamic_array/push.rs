// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{dynamic_array::DynamicArray, error::Error};

impl<T: Default> DynamicArray<T> {
    /// Appends `value`, reallocating when the buffer is full.
    ///
    /// Amortized `O(1)`; `O(len)` on the push that reallocates.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        self.grow_for(len + 1);
        self.buf[len] = value;
        self.len = len + 1;
    }

    /// Removes and returns the last element.
    ///
    /// Returns [`Error::EmptyContainer`] when empty. Capacity is unchanged.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }
        self.len -= 1;
        Ok(core::mem::take(&mut self.buf[self.len]))
    }
}
