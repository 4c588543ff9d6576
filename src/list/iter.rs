// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterators over a [`DoublyLinkedList`].

// Crate imports
use crate::{arena::NodeId, list::DoublyLinkedList};

// Alloc imports
use alloc::vec::{self, Vec};

// Core imports
use core::iter::FusedIterator;

/// Borrowing iterator returned by [`DoublyLinkedList::iter`].
///
/// Walks `next` links from the front and `prev` links from the back; the two
/// ends meet after `len` items in total.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(list: &'a DoublyLinkedList<T>) -> Self {
        Self {
            list,
            front: list.head,
            back: list.tail,
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
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
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
        let node = self.list.nodes.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}
impl<T> FusedIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`DoublyLinkedList::iter_mut`].
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

/// Owned iterator returned by `DoublyLinkedList::into_iter()`.
pub struct IntoIter<T> {
    list: DoublyLinkedList<T>,
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

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::DoublyLinkedList;
    use alloc::{string::String, vec::Vec};

    #[test]
    fn test_iter_meets_in_the_middle() {
        let list = DoublyLinkedList::from([1, 2, 3, 4, 5]);
        let mut it = list.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next_back(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_reverse_iteration() {
        let list = DoublyLinkedList::from([1, 2, 3]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn test_for_loops_over_references() {
        let mut list = DoublyLinkedList::from([1, 2, 3]);
        for x in &mut list {
            *x += 1;
        }
        let mut sum = 0;
        for x in &list {
            sum += x;
        }
        assert_eq!(sum, 9);
    }

    #[test]
    fn test_into_iter_both_ends() {
        let list: DoublyLinkedList<String> = ["a", "b", "c"].map(String::from).into();
        let mut it = list.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next_back().as_deref(), Some("c"));
        assert_eq!(it.next().as_deref(), Some("a"));
        assert_eq!(it.collect::<Vec<_>>(), ["b"]);
    }
}
