// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Index based node storage for [`super::SinglyLinkedList`].
//!
//! Nodes are never individually heap allocated. They live in slots of a single [`Vec`],
//! and link to each other by slot index. When a node is removed its slot goes onto a
//! free list (threaded through the vacant slots themselves), and the next insertion
//! reuses it before the [`Vec`] is grown. There are no raw pointers, so a removed node
//! can't be reached through a dangling reference: its index simply points at a vacant
//! slot, which [`NodeArena::get`] reports as [`None`].

use crate::{ContainerError, ContainerKind, ContainerResult, Element};

/// Slot index of a node in the [`NodeArena`].
pub type NodeIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub value: Element,
    pub next: Option<NodeIndex>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeIndex> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free_head: Option<NodeIndex>,
    occupied: usize,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Store `node` in a free slot, growing the backing storage only if the free list is
    /// empty.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if the backing storage can't grow. Nothing
    /// is modified in this case.
    pub fn try_insert(&mut self, node: Node) -> ContainerResult<NodeIndex> {
        let index = match self.free_head {
            Some(index) => {
                if let Some(Slot::Vacant { next_free }) = self.slots.get(index) {
                    self.free_head = *next_free;
                }
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.try_grow(1)?;
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };
        self.occupied += 1;
        Ok(index)
    }

    /// Make sure the next `count` insertions succeed without allocating. Vacant slots
    /// count towards `count`, only the remainder is reserved.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if the backing storage can't grow. Nothing
    /// is modified in this case.
    pub fn try_reserve_nodes(&mut self, count: usize) -> ContainerResult<()> {
        let vacant = self.slots.len() - self.occupied;
        match count.saturating_sub(vacant) {
            0 => crate::ok!(),
            additional => self.try_grow(additional),
        }
    }

    /// Reserve room for `additional` slots past the end of the backing storage.
    fn try_grow(&mut self, additional: usize) -> ContainerResult<()> {
        self.slots.try_reserve(additional).map_err(|_| {
            tracing::debug!(message = "node allocation failed", additional);
            ContainerError::allocation(ContainerKind::SinglyLinkedList, additional)
        })
    }

    /// Vacate the slot at `index` and put it on the free list. Returns the node that was
    /// stored there, or [`None`] if the slot was already vacant.
    pub fn remove(&mut self, index: NodeIndex) -> Option<Node> {
        let slot = self.slots.get_mut(index)?;
        let Slot::Occupied(node) = *slot else {
            return None;
        };
        *slot = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = Some(index);
        self.occupied -= 1;
        Some(node)
    }

    #[must_use]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        match self.slots.get(index)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        match self.slots.get_mut(index)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drop every node and release the backing storage.
    pub fn clear(&mut self) { *self = Self::new(); }

    /// Number of occupied slots.
    #[cfg(test)]
    pub fn len(&self) -> usize { self.occupied }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool { self.occupied == 0 }

    /// Number of slots, occupied or vacant.
    #[cfg(test)]
    pub fn slot_count(&self) -> usize { self.slots.len() }
}
