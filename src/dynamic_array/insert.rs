// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{algorithm, dynamic_array::DynamicArray, error::Error};

impl<T: Default> DynamicArray<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` right by one.
    ///
    /// - Returns [`Error::IndexOutOfRange`] if `index > len`; `index == len`
    ///   appends.
    /// - Reallocates first when the buffer is full.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(Error::IndexOutOfRange);
        }
        self.grow_for(len + 1);

        // Shift right: [index..len) -> [index+1..len+1)
        algorithm::move_backward(&mut self.buf, index..len, len + 1);
        self.buf[index] = value;

        self.len = len + 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the suffix left.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`. `O(len - index)`.
    pub fn erase(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::IndexOutOfRange);
        }
        let value = core::mem::take(&mut self.buf[index]);

        // Shift left: [index+1..len) -> [index..len-1)
        algorithm::move_within(&mut self.buf, index + 1..len, index);

        self.len = len - 1;
        Ok(value)
    }
}
