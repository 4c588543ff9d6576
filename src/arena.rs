// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slot storage with stable, generation-checked indices.
//!
//! Both linked lists keep their nodes here instead of in individual heap
//! boxes. A [`NodeId`] names a slot *and* the generation the slot had when
//! the value was inserted, so an id that outlives its node (the node was
//! removed, and maybe the slot reused) is rejected by every lookup instead
//! of aliasing the new occupant.
//!
//! # Invariants
//!
//! - `len` equals the number of `Occupied` slots.
//! - Every index on the free stack refers to a `Vacant` slot, and each vacant
//!   slot appears on it exactly once.
//! - A slot's generation is bumped every time it is vacated.

// Alloc imports
use alloc::vec::Vec;

/// Stable handle to a value stored in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.index as usize
    }
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { generation: u32, value: T },
    Vacant { generation: u32 },
}

/// Growable slot storage with a LIFO free stack.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live values.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Number of slots ever allocated (live or vacant).
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Stores `value`, reusing the most recently vacated slot if there is one.
    ///
    /// # Panics
    ///
    /// Panics when no slot is free and the arena already holds `u32::MAX`
    /// slots, the most a [`NodeId`] can address.
    pub(crate) fn insert(&mut self, value: T) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            let generation = match *slot {
                Slot::Vacant { generation } | Slot::Occupied { generation, .. } => generation,
            };
            *slot = Slot::Occupied { generation, value };
            return NodeId { index, generation };
        }
        assert!(self.slots.len() < u32::MAX as usize, "arena slot count overflow");
        let index = self.slots.len() as u32;
        self.slots.push(Slot::Occupied {
            generation: 0,
            value,
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    /// Removes and returns the value named by `id`, if it is still live.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<T> {
        let slot = self.slots.get_mut(id.index())?;
        let generation = match *slot {
            Slot::Occupied { generation, .. } if generation == id.generation => generation,
            _ => return None,
        };
        let old = core::mem::replace(
            slot,
            Slot::Vacant {
                generation: generation.wrapping_add(1),
            },
        );
        self.free.push(id.index);
        self.len -= 1;
        match old {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        match self.slots.get(id.index())? {
            Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.index())? {
            Slot::Occupied { generation, value } if *generation == id.generation => Some(value),
            _ => None,
        }
    }

    /// Drops every value and vacates every slot.
    ///
    /// Slots are kept (and their generations bumped) so ids handed out before
    /// the clear stay invalid after the slots are reused.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            let generation = match *slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation } => generation,
            };
            *slot = Slot::Vacant { generation };
            self.free.push(i as u32);
        }
        self.len = 0;
    }

    /// Mutable access to every live value, in slot order.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                Slot::Occupied { value, .. } => Some((i, value)),
                Slot::Vacant { .. } => None,
            })
    }
}
