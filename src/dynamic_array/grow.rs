// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    algorithm,
    dynamic_array::{DynamicArray, DEFAULT_CAPACITY},
};

// Alloc imports
use alloc::boxed::Box;

impl<T: Default> DynamicArray<T> {
    /// An empty array with [`DEFAULT_CAPACITY`] slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: default_buffer(capacity),
            len: 0,
        }
    }

    /// Grows the buffer to at least `capacity` slots. Never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Makes room for `required` elements, doubling when growth is needed.
    pub(crate) fn grow_for(&mut self, required: usize) {
        let capacity = self.capacity();
        if required > capacity {
            self.reallocate(capacity.saturating_mul(2).max(required));
        }
    }

    /// Moves the live prefix into a fresh buffer of `capacity` slots.
    fn reallocate(&mut self, capacity: usize) {
        log::trace!(
            "dynamic array: reallocating {} -> {capacity} slots ({} live)",
            self.capacity(),
            self.len
        );
        let mut buf = default_buffer(capacity);
        let _ = algorithm::move_items(&mut self.buf[..self.len], buf.iter_mut());
        self.buf = buf;
    }

    /// Drops everything past `len` by resetting those slots to `T::default()`.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len < self.len {
            for slot in &mut self.buf[len..self.len] {
                *slot = T::default();
            }
            self.len = len;
        }
    }
}

impl<T: Default> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn default_buffer<T: Default>(capacity: usize) -> Box<[T]> {
    (0..capacity).map(|_| T::default()).collect()
}
