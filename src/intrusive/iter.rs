// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterators over an [`IntrusiveList`].
//!
//! - `Iter` yields [`NodeRef`] handles, front to back; `.rev()` walks the
//!   `previous` links from the tail sentinel.
//! - `IterMut` yields `&mut T` in chain order.
//! - `IntoIter` yields owned values.

// Crate imports
use crate::intrusive::{
    node::{Link, NodeRef},
    IntrusiveList,
};

// Alloc imports
use alloc::vec::{self, Vec};

// Core imports
use core::iter::FusedIterator;

/// Borrowing iterator returned by [`IntrusiveList::iter`].
pub struct Iter<'a, T> {
    list: &'a IntrusiveList<T>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a IntrusiveList<T>) -> Self {
        Self {
            list,
            front: list.head.next,
            back: list.tail.previous,
            remaining: list.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = NodeRef<'a, T>;
    fn next(&mut self) -> Option<NodeRef<'a, T>> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node_ref(self.front)?;
        self.front = node.node.links.next;
        self.remaining -= 1;
        Some(node)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node_ref(self.back)?;
        self.back = node.node.links.previous;
        self.remaining -= 1;
        Some(node)
    }
}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`IntrusiveList::iter_mut`].
pub struct IterMut<'a, T> {
    items: vec::IntoIter<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(items: Vec<&'a mut T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.items.next()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Owned iterator returned by `IntrusiveList::into_iter()`.
pub struct IntoIter<T> {
    list: IntrusiveList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back().ok()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a IntrusiveList<T> {
    type Item = NodeRef<'a, T>;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut IntrusiveList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T> IntoIterator for IntrusiveList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
