// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `IntrusiveList` type.
//!
//! A doubly linked list with two permanent sentinels stored inline in the
//! list value. Interior nodes live in an [`Arena`] and carry their own
//! `next`/`previous` links; iterating the list yields those nodes (as
//! [`NodeRef`] handles), not bare values.
//!
//! Unlike [`DoublyLinkedList`](crate::DoublyLinkedList), the cursor accessors
//! are strict: [`begin`](IntrusiveList::begin), [`end`](IntrusiveList::end),
//! [`rbegin`](IntrusiveList::rbegin), [`rend`](IntrusiveList::rend),
//! [`front`](IntrusiveList::front), [`back`](IntrusiveList::back) and
//! [`at`](IntrusiveList::at) all fail with [`Error::EmptyContainer`] on an
//! empty list. [`iter`](IntrusiveList::iter) never fails and yields nothing.

mod iter;
mod node;

pub use iter::{IntoIter, Iter, IterMut};
pub use node::{NodeRef, Position};

// Crate imports
use crate::{
    algorithm,
    arena::{Arena, NodeId},
    display,
    error::Error,
};
use node::{Link, Links, ListId, Node};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    fmt,
    ops::{Index, IndexMut},
};

/// A sentinel-based doubly linked list exposing node identity.
///
/// # Invariants
///
/// - `head.next` is the first node, or `Tail` when empty; `tail.previous` is
///   the last node, or `Head` when empty.
/// - For every interior node `n`, the node (or sentinel) at `n.next` has
///   `previous == n`, and the one at `n.previous` has `next == n`.
/// - `len()` equals the number of interior nodes.
///
/// # Examples
///
/// ```rust
/// use seqlib::{Error, IntrusiveList};
///
/// let mut list = IntrusiveList::new();
/// assert_eq!(list.begin(), Err(Error::EmptyContainer));
///
/// list.push_back(2);
/// list.push_front(1);
/// let first = list.front()?;
/// assert_eq!(*first.value(), 1);
/// assert_eq!(first.next().map(|n| *n.value()), Some(2));
///
/// let second = first.next().map(|n| n.position());
/// list.insert(second.ok_or(Error::IndexOutOfRange)?, 3)?;
/// assert_eq!(list.to_string(), "(1, 3, 2)");
///
/// // The tail sentinel is not a node: inserting before it fails.
/// let end = list.end()?;
/// assert_eq!(list.insert(end, 4), Err(Error::IndexOutOfRange));
/// # Ok::<(), Error>(())
/// ```
pub struct IntrusiveList<T> {
    id: ListId,
    nodes: Arena<Node<T>>,
    head: Links,
    tail: Links,
}

impl<T> IntrusiveList<T> {
    pub fn new() -> Self {
        Self {
            id: ListId::fresh(),
            nodes: Arena::new(),
            head: Links::EMPTY,
            tail: Links::EMPTY,
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

    // cursors
    /// Position of the first node; [`Error::EmptyContainer`] when empty.
    pub fn begin(&self) -> Result<Position, Error> {
        self.non_empty()?;
        Ok(self.position(self.head.next))
    }

    /// The tail sentinel; [`Error::EmptyContainer`] when empty.
    pub fn end(&self) -> Result<Position, Error> {
        self.non_empty()?;
        Ok(self.position(Link::Tail))
    }

    /// Position of the last node; [`Error::EmptyContainer`] when empty.
    pub fn rbegin(&self) -> Result<Position, Error> {
        self.non_empty()?;
        Ok(self.position(self.tail.previous))
    }

    /// The head sentinel; [`Error::EmptyContainer`] when empty.
    pub fn rend(&self) -> Result<Position, Error> {
        self.non_empty()?;
        Ok(self.position(Link::Head))
    }

    /// The position after `pos`.
    ///
    /// Stepping forward from the head sentinel gives the first node (or the
    /// tail when empty); stepping forward from the tail, or from a stale
    /// position or one from another list, is [`Error::IndexOutOfRange`].
    pub fn next(&self, pos: Position) -> Result<Position, Error> {
        match self.own(pos)? {
            Link::Tail => Err(Error::IndexOutOfRange),
            link => self.links(link).map(|l| self.position(l.next)),
        }
    }

    /// The position before `pos`; mirror image of [`next`](Self::next).
    pub fn previous(&self, pos: Position) -> Result<Position, Error> {
        match self.own(pos)? {
            Link::Head => Err(Error::IndexOutOfRange),
            link => self.links(link).map(|l| self.position(l.previous)),
        }
    }

    /// The node at `pos`; [`Error::IndexOutOfRange`] for sentinels, stale
    /// positions and positions of another list.
    pub fn node(&self, pos: Position) -> Result<NodeRef<'_, T>, Error> {
        self.node_ref(self.own(pos)?).ok_or(Error::IndexOutOfRange)
    }

    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T, Error> {
        match self.own(pos)? {
            Link::Node(id) => self
                .nodes
                .get_mut(id)
                .map(|n| &mut n.data)
                .ok_or(Error::IndexOutOfRange),
            _ => Err(Error::IndexOutOfRange),
        }
    }

    /// First node; [`Error::EmptyContainer`] when empty.
    pub fn front(&self) -> Result<NodeRef<'_, T>, Error> {
        self.node_ref(self.head.next).ok_or(Error::EmptyContainer)
    }

    /// Last node; [`Error::EmptyContainer`] when empty.
    pub fn back(&self) -> Result<NodeRef<'_, T>, Error> {
        self.node_ref(self.tail.previous).ok_or(Error::EmptyContainer)
    }

    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        self.non_empty()?;
        self.get_mut(self.position(self.head.next))
    }

    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        self.non_empty()?;
        self.get_mut(self.position(self.tail.previous))
    }

    /// Node at `index`, walking from the front.
    ///
    /// [`Error::EmptyContainer`] when empty, [`Error::IndexOutOfRange`] when
    /// `index >= len`.
    pub fn at(&self, index: usize) -> Result<NodeRef<'_, T>, Error> {
        self.non_empty()?;
        self.iter().nth(index).ok_or(Error::IndexOutOfRange)
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let pos = self.at(index)?.position();
        self.get_mut(pos)
    }

    /// Validates that `pos` belongs to this list by walking the chain.
    ///
    /// Returns `pos` itself when it names one of this list's interior nodes.
    /// `O(n)`. [`Error::EmptyContainer`] when empty (there is nothing to
    /// scan), [`Error::IndexOutOfRange`] when the scan does not find it. The
    /// sentinels are not nodes, and a position handed out by another list
    /// never matches, whatever its slot.
    pub fn find(&self, pos: Position) -> Result<Position, Error> {
        self.non_empty()?;
        self.own(pos)?;
        self.iter()
            .map(|node| node.position())
            .find(|candidate| *candidate == pos)
            .ok_or(Error::IndexOutOfRange)
    }

    /// Appends `value`. `O(1)`.
    ///
    /// # Panics
    ///
    /// Panics if the list's node storage already spans [`max_size`]
    /// slots.
    ///
    /// [`max_size`]: IntrusiveList::max_size
    pub fn push_back(&mut self, value: T) -> Position {
        let id = self.link_between(self.tail.previous, Link::Tail, value);
        self.position(Link::Node(id))
    }

    /// Prepends `value`. `O(1)`.
    ///
    /// # Panics
    ///
    /// Same as [`push_back`](Self::push_back).
    pub fn push_front(&mut self, value: T) -> Position {
        let id = self.link_between(Link::Head, self.head.next, value);
        self.position(Link::Node(id))
    }

    /// Removes the last node; [`Error::EmptyContainer`] when empty.
    pub fn pop_back(&mut self) -> Result<T, Error> {
        match self.tail.previous {
            Link::Node(id) => self.unlink(id).ok_or(Error::EmptyContainer),
            _ => Err(Error::EmptyContainer),
        }
    }

    /// Removes the first node; [`Error::EmptyContainer`] when empty.
    pub fn pop_front(&mut self) -> Result<T, Error> {
        match self.head.next {
            Link::Node(id) => self.unlink(id).ok_or(Error::EmptyContainer),
            _ => Err(Error::EmptyContainer),
        }
    }

    /// Inserts `value` before `pos` and returns its position.
    ///
    /// `pos` must name a node of this list (checked by [`find`](Self::find)),
    /// so neither sentinel is accepted; append with
    /// [`push_back`](Self::push_back). Fails like `find` otherwise.
    ///
    /// # Panics
    ///
    /// Same as [`push_back`](Self::push_back).
    pub fn insert(&mut self, pos: Position, value: T) -> Result<Position, Error> {
        let next = self.find(pos)?.link;
        let previous = self.links(next)?.previous;
        let id = self.link_between(previous, next, value);
        Ok(self.position(Link::Node(id)))
    }

    /// Removes the node at `pos` and returns its value.
    ///
    /// `pos` must name a node of this list (checked by [`find`](Self::find)).
    pub fn erase(&mut self, pos: Position) -> Result<T, Error> {
        match self.find(pos)?.link {
            Link::Node(id) => self.unlink(id).ok_or(Error::IndexOutOfRange),
            _ => Err(Error::IndexOutOfRange),
        }
    }

    /// Drops every interior node; the sentinels remain.
    pub fn clear(&mut self) {
        log::debug!("intrusive list: clearing {} nodes", self.len());
        self.nodes.clear();
        self.head = Links::EMPTY;
        self.tail = Links::EMPTY;
    }

    /// Replaces the contents with the items of `iter`.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        self.extend(iter);
        log::debug!("intrusive list: assigned {} nodes", self.len());
    }

    /// Front-to-back iterator over the nodes; empty for an empty list.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Front-to-back iterator over mutable values.
    ///
    /// Collects the chain order up front, so creating it costs `O(n)` time
    /// and space.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let order: Vec<usize> = self.iter().map(|node| node.id.index()).collect();
        let mut by_slot: Vec<Option<&mut T>> = Vec::new();
        by_slot.resize_with(self.nodes.slot_count(), || None);
        for (slot, node) in self.nodes.iter_mut() {
            by_slot[slot] = Some(&mut node.data);
        }
        let items = order.into_iter().filter_map(|slot| by_slot[slot].take()).collect();
        IterMut::new(items)
    }

    #[inline]
    pub(crate) fn position(&self, link: Link) -> Position {
        Position { list: self.id, link }
    }

    /// The link named by `pos`, if `pos` was handed out by this list.
    fn own(&self, pos: Position) -> Result<Link, Error> {
        if pos.list == self.id {
            Ok(pos.link)
        } else {
            Err(Error::IndexOutOfRange)
        }
    }

    pub(crate) fn node_ref(&self, link: Link) -> Option<NodeRef<'_, T>> {
        match link {
            Link::Node(id) => self.nodes.get(id).map(|node| NodeRef { list: self, id, node }),
            Link::Head | Link::Tail => None,
        }
    }

    fn non_empty(&self) -> Result<(), Error> {
        if self.is_empty() {
            Err(Error::EmptyContainer)
        } else {
            Ok(())
        }
    }

    fn links(&self, link: Link) -> Result<&Links, Error> {
        match link {
            Link::Head => Ok(&self.head),
            Link::Tail => Ok(&self.tail),
            Link::Node(id) => self
                .nodes
                .get(id)
                .map(|n| &n.links)
                .ok_or(Error::IndexOutOfRange),
        }
    }

    fn links_mut(&mut self, link: Link) -> Option<&mut Links> {
        match link {
            Link::Head => Some(&mut self.head),
            Link::Tail => Some(&mut self.tail),
            Link::Node(id) => self.nodes.get_mut(id).map(|n| &mut n.links),
        }
    }

    /// Stores `value` in a new node between the adjacent `previous` and `next`.
    fn link_between(&mut self, previous: Link, next: Link, data: T) -> NodeId {
        let id = self.nodes.insert(Node {
            data,
            links: Links { next, previous },
        });
        if let Some(links) = self.links_mut(previous) {
            links.next = Link::Node(id);
        }
        if let Some(links) = self.links_mut(next) {
            links.previous = Link::Node(id);
        }
        id
    }

    /// Detaches and frees the node `id`, joining its neighbours.
    fn unlink(&mut self, id: NodeId) -> Option<T> {
        let node = self.nodes.remove(id)?;
        let Links { next, previous } = node.links;
        if let Some(links) = self.links_mut(previous) {
            links.next = next;
        }
        if let Some(links) = self.links_mut(next) {
            links.previous = previous;
        }
        Some(node.data)
    }
}

impl<T: PartialEq> IntrusiveList<T> {
    /// `true` if some node holds a value equal to `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|node| node.value() == value)
    }
}

impl<T: Default> IntrusiveList<T> {
    /// Grows by appending `T::default()` or shrinks by popping from the back.
    pub fn resize(&mut self, len: usize) {
        log::debug!("intrusive list: resize {} -> {len}", self.len());
        while self.len() > len {
            let _ = self.pop_back();
        }
        while self.len() < len {
            self.push_back(T::default());
        }
    }
}

impl<T: Clone> IntrusiveList<T> {
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

impl<T: PartialOrd + Clone> IntrusiveList<T> {
    /// Sorts the values in non-decreasing order, keeping node identity.
    pub fn sort(&mut self) {
        let mut values: Vec<T> = self.iter().map(|node| node.value().clone()).collect();
        algorithm::sort(&mut values);
        let _ = algorithm::copy(&values, self.iter_mut());
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for IntrusiveList<T> {
    /// Deep-copies every node in traversal order.
    fn clone(&self) -> Self {
        self.iter().map(|node| node.value().clone()).collect()
    }
}

impl<T: PartialEq> PartialEq for IntrusiveList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for IntrusiveList<T> {}

impl<T: fmt::Debug> fmt::Debug for IntrusiveList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|node| node.value())).finish()
    }
}

impl<T: fmt::Display> fmt::Display for IntrusiveList<T> {
    /// `(e0, e1, ...)`; an empty list formats as nothing at all.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        display::write_tuple(f, self.iter(), ", ")
    }
}

impl<T> Index<usize> for IntrusiveList<T> {
    type Output = T;

    /// `O(n)` walk from the front. Panics when empty or `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(node) => node.value(),
            Err(e) => panic!("intrusive list index {index}: {e}"),
        }
    }
}
impl<T> IndexMut<usize> for IntrusiveList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("intrusive list index {index}: {e}"),
        }
    }
}

impl<T> Extend<T> for IntrusiveList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for IntrusiveList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<T, const N: usize> From<[T; N]> for IntrusiveList<T> {
    fn from(src: [T; N]) -> Self {
        src.into_iter().collect()
    }
}
