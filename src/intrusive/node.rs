// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Links, nodes, and the node handle exposed by the intrusive list.

// Crate imports
use crate::{arena::NodeId, intrusive::IntrusiveList};

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    sync::atomic::{AtomicU32, Ordering as AtomicOrdering},
};

/// One end of a link: a sentinel or an interior node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Link {
    Head,
    Tail,
    Node(NodeId),
}

/// The navigation pair carried by sentinels and interior nodes alike.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Links {
    pub(crate) next: Link,
    pub(crate) previous: Link,
}

impl Links {
    /// Sentinel links of an empty list: head and tail point at each other.
    /// The outer ends (`head.previous`, `tail.next`) point back at
    /// themselves and are never followed.
    pub(crate) const EMPTY: Self = Self {
        next: Link::Tail,
        previous: Link::Head,
    };
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) links: Links,
}

/// Identity of one [`IntrusiveList`] value, unique for the life of the
/// process (modulo `u32` wrap-around).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u32);

impl ListId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        Self(NEXT.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// A cursor into an [`IntrusiveList`]: an interior node or one of the two
/// sentinels.
///
/// The tail sentinel is the position returned by
/// [`end`](IntrusiveList::end), the head sentinel the one returned by
/// [`rend`](IntrusiveList::rend). A position remembers which list produced
/// it; every other list rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) list: ListId,
    pub(crate) link: Link,
}

impl Position {
    /// `true` for the tail sentinel.
    #[inline]
    pub const fn is_end(self) -> bool {
        matches!(self.link, Link::Tail)
    }

    /// `true` for the head sentinel.
    #[inline]
    pub const fn is_rend(self) -> bool {
        matches!(self.link, Link::Head)
    }
}

/// A borrowed interior node: its value plus its place in the chain.
///
/// This is what iterating an [`IntrusiveList`] yields. Comparisons and
/// formatting look at the value only; two handles to different nodes holding
/// equal values compare equal.
pub struct NodeRef<'a, T> {
    pub(crate) list: &'a IntrusiveList<T>,
    pub(crate) id: NodeId,
    pub(crate) node: &'a Node<T>,
}

impl<'a, T> NodeRef<'a, T> {
    /// The stored value.
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.node.data
    }

    /// The position naming this node.
    #[inline]
    pub fn position(&self) -> Position {
        self.list.position(Link::Node(self.id))
    }

    /// The following node, or `None` at the tail sentinel.
    #[inline]
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        self.list.node_ref(self.node.links.next)
    }

    /// The preceding node, or `None` at the head sentinel.
    #[inline]
    pub fn previous(&self) -> Option<NodeRef<'a, T>> {
        self.list.node_ref(self.node.links.previous)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

impl<'b, T: PartialEq> PartialEq<NodeRef<'b, T>> for NodeRef<'_, T> {
    fn eq(&self, other: &NodeRef<'b, T>) -> bool {
        self.value() == other.value()
    }
}
impl<T: Eq> Eq for NodeRef<'_, T> {}

impl<'b, T: PartialOrd> PartialOrd<NodeRef<'b, T>> for NodeRef<'_, T> {
    fn partial_cmp(&self, other: &NodeRef<'b, T>) -> Option<Ordering> {
        self.value().partial_cmp(other.value())
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(self.value()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.value(), f)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::IntrusiveList;
    use alloc::string::ToString;

    #[test]
    fn test_equality_and_order_use_payload_only() {
        let list = IntrusiveList::from([1, 2, 1]);
        let first = list.front().unwrap();
        let last = list.back().unwrap();
        assert_ne!(first.position(), last.position());
        assert_eq!(first, last);
        let middle = first.next().unwrap();
        assert!(first < middle);
        assert!(middle > last);
    }

    #[test]
    fn test_navigation_stops_at_sentinels() {
        let list = IntrusiveList::from(['x', 'y']);
        let x = list.front().unwrap();
        assert!(x.previous().is_none());
        let y = x.next().unwrap();
        assert_eq!(*y.value(), 'y');
        assert!(y.next().is_none());
        assert_eq!(y.previous().map(|n| *n.value()), Some('x'));
        assert_eq!(y.to_string(), "y");
        assert_eq!(alloc::format!("{y:?}"), "NodeRef('y')");
    }
}
