// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DoublyLinkedList` type.
//!
//! Nodes live in an [`Arena`] owned by the list and link to each other by
//! [`NodeId`]. `head`/`tail` are plain ids into that arena, and the end of
//! the chain is the absent link (`None`): there are no sentinel nodes.
//!
//! Positions handed to callers are [`Position`]s. They stay valid until the
//! node they name is erased; after that (even once its slot is reused) every
//! operation rejects them with [`Error::IndexOutOfRange`].

mod iter;

pub use iter::{IntoIter, Iter, IterMut};

// Crate imports
use crate::{
    algorithm,
    arena::{Arena, NodeId},
    display,
    error::Error,
};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
};

#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A bidirectional cursor into a [`DoublyLinkedList`].
///
/// [`Position::END`] is one past the last element; it is the only position
/// of an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(Option<NodeId>);

impl Position {
    /// The past-the-end position.
    pub const END: Self = Self(None);

    #[inline]
    pub const fn is_end(self) -> bool {
        self.0.is_none()
    }
}

/// A doubly linked list with O(1) insertion and removal at a known position.
///
/// # Invariants
///
/// - For every node `n` with a successor, `n.next.prev == n`, and for every
///   node with a predecessor, `n.prev.next == n`.
/// - `head` has no predecessor, `tail` has no successor, and walking `next`
///   from `head` visits exactly `len()` nodes before reaching `tail`.
///
/// # Examples
///
/// ```rust
/// use seqlib::{DoublyLinkedList, Error};
///
/// let mut list: DoublyLinkedList<i32> = [2, 3].into_iter().collect();
/// list.push_front(1);
/// assert_eq!(list.to_string(), "(1, 2, 3)");
///
/// let second = list.next(list.begin())?;
/// let inserted = list.insert(second, 10)?;
/// assert_eq!(list.get(inserted), Ok(&10));
/// list.erase(inserted)?;
/// assert_eq!(list.get(inserted), Err(Error::IndexOutOfRange));
/// # Ok::<(), Error>(())
/// ```
pub struct DoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Upper bound on the number of nodes a list can hold.
    #[inline]
    pub const fn max_size(&self) -> usize {
        u32::MAX as usize
    }

    /// Position of the first element, or [`Position::END`] when empty.
    #[inline]
    pub const fn begin(&self) -> Position {
        Position(self.head)
    }

    #[inline]
    pub const fn end(&self) -> Position {
        Position::END
    }

    /// The position after `pos`.
    ///
    /// [`Error::IndexOutOfRange`] when `pos` is the end or no longer names a
    /// node of this list.
    pub fn next(&self, pos: Position) -> Result<Position, Error> {
        Ok(Position(self.node_at(pos)?.next))
    }

    /// The position before `pos`; the predecessor of the end is the last
    /// element.
    ///
    /// [`Error::IndexOutOfRange`] when `pos` is the first element, when the
    /// list is empty, or when `pos` is stale.
    pub fn prev(&self, pos: Position) -> Result<Position, Error> {
        let prev = match pos.0 {
            None => self.tail,
            Some(_) => self.node_at(pos)?.prev,
        };
        prev.map(|id| Position(Some(id))).ok_or(Error::IndexOutOfRange)
    }

    /// The element at `pos`.
    #[inline]
    pub fn get(&self, pos: Position) -> Result<&T, Error> {
        self.node_at(pos).map(|node| &node.data)
    }

    #[inline]
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T, Error> {
        self.node_at_mut(pos).map(|node| &mut node.data)
    }

    /// Checked positional access, `O(n)`; [`Error::IndexOutOfRange`] when
    /// `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.iter().nth(index).ok_or(Error::IndexOutOfRange)
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let id = self.id_at(index).ok_or(Error::IndexOutOfRange)?;
        self.get_mut(Position(Some(id)))
    }

    /// First element; [`Error::EmptyContainer`] when empty.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.edge(self.head)
    }

    /// Last element; [`Error::EmptyContainer`] when empty.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.edge(self.tail)
    }

    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        let id = self.head.ok_or(Error::EmptyContainer)?;
        self.get_mut(Position(Some(id)))
    }

    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        let id = self.tail.ok_or(Error::EmptyContainer)?;
        self.get_mut(Position(Some(id)))
    }

    /// Prepends `value`. `O(1)`.
    ///
    /// # Panics
    ///
    /// Panics if the list's node storage already spans [`max_size`]
    /// slots.
    ///
    /// [`max_size`]: DoublyLinkedList::max_size
    pub fn push_front(&mut self, value: T) -> Position {
        let id = self.nodes.insert(Node {
            data: value,
            prev: None,
            next: self.head,
        });
        match self.head.and_then(|old| self.nodes.get_mut(old)) {
            Some(old) => old.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        Position(Some(id))
    }

    /// Appends `value`. `O(1)`.
    ///
    /// # Panics
    ///
    /// Same as [`push_front`](Self::push_front).
    pub fn push_back(&mut self, value: T) -> Position {
        let id = self.nodes.insert(Node {
            data: value,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|old| self.nodes.get_mut(old)) {
            Some(old) => old.next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        Position(Some(id))
    }

    /// Removes the first element; [`Error::EmptyContainer`] when empty.
    pub fn pop_front(&mut self) -> Result<T, Error> {
        let id = self.head.ok_or(Error::EmptyContainer)?;
        self.unlink(id).map(|(data, _)| data)
    }

    /// Removes the last element; [`Error::EmptyContainer`] when empty.
    pub fn pop_back(&mut self) -> Result<T, Error> {
        let id = self.tail.ok_or(Error::EmptyContainer)?;
        self.unlink(id).map(|(data, _)| data)
    }

    /// Inserts `value` before `pos` and returns its position. `O(1)`.
    ///
    /// Inserting before [`Position::END`] appends. A stale `pos` is
    /// [`Error::IndexOutOfRange`].
    ///
    /// # Panics
    ///
    /// Same as [`push_front`](Self::push_front).
    pub fn insert(&mut self, pos: Position, value: T) -> Result<Position, Error> {
        let Some(next) = pos.0 else {
            return Ok(self.push_back(value));
        };
        let prev = self.node_at(pos)?.prev;
        if prev.is_none() {
            return Ok(self.push_front(value));
        }
        let id = self.nodes.insert(Node {
            data: value,
            prev,
            next: Some(next),
        });
        if let Some(node) = prev.and_then(|p| self.nodes.get_mut(p)) {
            node.next = Some(id);
        }
        if let Some(node) = self.nodes.get_mut(next) {
            node.prev = Some(id);
        }
        Ok(Position(Some(id)))
    }

    /// Removes the element at `pos` and returns the position after it.
    ///
    /// `O(1)`. [`Error::IndexOutOfRange`] for the end position or a stale one.
    pub fn erase(&mut self, pos: Position) -> Result<Position, Error> {
        let id = pos.0.ok_or(Error::IndexOutOfRange)?;
        self.unlink(id).map(|(_, next)| Position(next))
    }

    /// Removes and returns the element at `pos`; same checks as
    /// [`erase`](Self::erase).
    pub fn remove(&mut self, pos: Position) -> Result<T, Error> {
        let id = pos.0.ok_or(Error::IndexOutOfRange)?;
        self.unlink(id).map(|(data, _)| data)
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        log::debug!("list: clearing {} nodes", self.len());
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Replaces the contents with the items of `iter`.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        self.extend(iter);
        log::debug!("list: assigned {} nodes", self.len());
    }

    /// Front-to-back iterator; use `.rev()` for back-to-front.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Mutable front-to-back iterator.
    ///
    /// Collects the chain order up front, so creating it costs `O(n)` time
    /// and space.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let order: Vec<usize> = self.ids().map(NodeId::index).collect();
        let mut by_slot: Vec<Option<&mut T>> = Vec::new();
        by_slot.resize_with(self.nodes.slot_count(), || None);
        for (slot, node) in self.nodes.iter_mut() {
            by_slot[slot] = Some(&mut node.data);
        }
        let items = order.into_iter().filter_map(|slot| by_slot[slot].take()).collect();
        IterMut::new(items)
    }

    fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        core::iter::successors(self.head, |id| self.nodes.get(*id).and_then(|n| n.next))
    }

    fn id_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len() {
            return None;
        }
        self.ids().nth(index)
    }

    fn node_at(&self, pos: Position) -> Result<&Node<T>, Error> {
        pos.0
            .and_then(|id| self.nodes.get(id))
            .ok_or(Error::IndexOutOfRange)
    }

    fn node_at_mut(&mut self, pos: Position) -> Result<&mut Node<T>, Error> {
        pos.0
            .and_then(|id| self.nodes.get_mut(id))
            .ok_or(Error::IndexOutOfRange)
    }

    fn edge(&self, id: Option<NodeId>) -> Result<&T, Error> {
        id.and_then(|id| self.nodes.get(id))
            .map(|node| &node.data)
            .ok_or(Error::EmptyContainer)
    }

    /// Detaches `id` from the chain, returning its value and successor.
    fn unlink(&mut self, id: NodeId) -> Result<(T, Option<NodeId>), Error> {
        let node = self.nodes.remove(id).ok_or(Error::IndexOutOfRange)?;
        match node.prev.and_then(|p| self.nodes.get_mut(p)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|n| self.nodes.get_mut(n)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        Ok((node.data, node.next))
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Position of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<Position> {
        self.ids()
            .find(|id| self.nodes.get(*id).is_some_and(|n| n.data == *value))
            .map(|id| Position(Some(id)))
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl<T: Default> DoublyLinkedList<T> {
    /// Grows by appending `T::default()` or shrinks by popping from the back.
    pub fn resize(&mut self, len: usize) {
        log::debug!("list: resize {} -> {len}", self.len());
        while self.len() > len {
            let _ = self.pop_back();
        }
        while self.len() < len {
            self.push_back(T::default());
        }
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Replaces the contents with `count` clones of `value`.
    pub fn assign_fill(&mut self, count: usize, value: &T) {
        self.assign_iter(core::iter::repeat(value).take(count).cloned());
    }

    /// Replaces the contents with clones of `src`.
    pub fn assign_slice(&mut self, src: &[T]) {
        self.assign_iter(src.iter().cloned());
    }

    /// Exchanges contents with `other` by value (three copies, `O(n)`).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        algorithm::swap(self, other);
    }
}

impl<T: PartialOrd + Clone> DoublyLinkedList<T> {
    /// Sorts the values in non-decreasing order.
    ///
    /// Values are permuted between the existing nodes; positions keep naming
    /// the same node, which now holds a possibly different value.
    pub fn sort(&mut self) {
        let mut values: Vec<T> = self.iter().cloned().collect();
        algorithm::sort(&mut values);
        let _ = algorithm::copy(&values, self.iter_mut());
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    /// Deep-copies every node in traversal order.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    /// `(e0, e1, ...)`, or `Empty list` when there are no elements.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty list");
        }
        display::write_tuple(f, self.iter(), ", ")
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    /// `O(n)` walk from the head. Panics when `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(_) => panic!("index out of bounds: the len is {} but the index is {index}", self.len()),
        }
    }
}
impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.at_mut(index) {
            Ok(value) => value,
            Err(_) => panic!("index out of bounds: the len is {len} but the index is {index}"),
        }
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(src: [T; N]) -> Self {
        src.into_iter().collect()
    }
}


#[cfg(test)]
mod proptests {
    // Imports
    use super::DoublyLinkedList;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn traversal_is_symmetric(
            front in proptest::collection::vec(any::<u8>(), 0..20),
            back in proptest::collection::vec(any::<u8>(), 0..20),
            erase_every in 2usize..5,
        ) {
            let mut list = DoublyLinkedList::new();
            for x in &front {
                list.push_front(*x);
            }
            for x in &back {
                list.push_back(*x);
            }
            // Erase every `erase_every`-th node to punch holes in the arena.
            let mut pos = list.begin();
            let mut i = 0;
            while !pos.is_end() {
                pos = if i % erase_every == 0 {
                    list.erase(pos).unwrap()
                } else {
                    list.next(pos).unwrap()
                };
                i += 1;
            }

            let forward: Vec<u8> = list.iter().copied().collect();
            let mut backward: Vec<u8> = list.iter().rev().copied().collect();
            backward.reverse();
            prop_assert_eq!(forward.len(), list.len());
            prop_assert_eq!(&forward, &backward);

            // Walking `next` len times from the head reaches the end, and
            // walking `prev` len times from the end reaches the head.
            let mut pos = list.begin();
            for _ in 0..list.len() {
                pos = list.next(pos).unwrap();
            }
            prop_assert!(pos.is_end());
            let mut pos = list.end();
            for _ in 0..list.len() {
                pos = list.prev(pos).unwrap();
            }
            prop_assert_eq!(pos, list.begin());
        }

        #[test]
        fn swap_twice_restores(
            a in proptest::collection::vec(any::<i32>(), 0..30),
            b in proptest::collection::vec(any::<i32>(), 0..30),
        ) {
            let mut x: DoublyLinkedList<i32> = a.iter().copied().collect();
            let mut y: DoublyLinkedList<i32> = b.iter().copied().collect();
            x.swap(&mut y);
            x.swap(&mut y);
            prop_assert_eq!(x.iter().copied().collect::<Vec<_>>(), a);
            prop_assert_eq!(y.iter().copied().collect::<Vec<_>>(), b);
        }
    }
}
