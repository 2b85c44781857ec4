// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::{Node, NodeArena, NodeIndex};
use crate::{Container, ContainerError, ContainerKind, ContainerResult, Element,
            Operation};

/// A singly linked list with O(1) insertion at either end and O(1) removal from the head.
///
/// The list exclusively owns its nodes, which live in an arena and are linked by slot
/// index. `tail` is kept only to make [`Self::add_to_tail`] O(1).
///
/// Invariants:
/// - `size == 0` iff `head` is [`None`] iff `tail` is [`None`].
/// - The `tail` node's `next` is always [`None`].
/// - `size` equals the number of nodes reachable from `head`.
///
/// # Examples
///
/// ```
/// use r3bl_containers::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::create();
/// list.add_to_head(1).unwrap();
/// list.add_to_head(2).unwrap();
/// list.add_to_tail(3).unwrap();
///
/// assert_eq!(list.size(), 3);
/// assert_eq!(list.to_string(), "2 -> 1 -> 3 -> NULL");
///
/// assert_eq!(list.remove_head(), Ok(2));
/// assert_eq!(list.peek_head(), Ok(1));
/// assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SinglyLinkedList {
    arena: NodeArena,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    size: usize,
}

impl Container for SinglyLinkedList {
    const KIND: ContainerKind = ContainerKind::SinglyLinkedList;
}

fn empty_list_error(operation: Operation) -> ContainerError {
    tracing::debug!(message = "operation on empty list", operation = %operation);
    ContainerError::empty(ContainerKind::SinglyLinkedList, operation)
}

impl SinglyLinkedList {
    /// An empty list. No node storage is allocated until the first insertion.
    #[must_use]
    pub fn create() -> Self { Self::default() }

    /// Link a new node before the current head.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if the node can't be allocated. The list is
    /// left unchanged.
    pub fn add_to_head(&mut self, value: Element) -> ContainerResult<()> {
        let index = self.arena.try_insert(Node {
            value,
            next: self.head,
        })?;

        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.head = Some(index);
        self.size += 1;

        tracing::trace!(message = "add_to_head", value, size = self.size);
        Ok(())
    }

    /// Link a new node after the current tail.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if the node can't be allocated. The list is
    /// left unchanged.
    pub fn add_to_tail(&mut self, value: Element) -> ContainerResult<()> {
        let index = self.arena.try_insert(Node { value, next: None })?;

        match self.tail.and_then(|tail| self.arena.get_mut(tail)) {
            Some(tail_node) => tail_node.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.size += 1;

        tracing::trace!(message = "add_to_tail", value, size = self.size);
        Ok(())
    }

    /// Append every element of `values` at the tail, in order. Room for the iterator's
    /// lower size hint is reserved up front, so a length that can never fit fails
    /// before anything is appended. Otherwise this stops at the first failure, and
    /// elements appended before it stay in the list.
    ///
    /// # Errors
    ///
    /// [`ContainerError::AllocationFailure`] if a node can't be allocated.
    pub fn try_extend_tail(
        &mut self,
        values: impl IntoIterator<Item = Element>,
    ) -> ContainerResult<()> {
        let values = values.into_iter();
        self.arena.try_reserve_nodes(values.size_hint().0)?;

        for value in values {
            self.add_to_tail(value)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// [`ContainerError::EmptyCollection`] if the list is empty.
    pub fn peek_head(&self) -> ContainerResult<Element> {
        self.value_at(self.head)
            .ok_or_else(|| empty_list_error(Operation::PeekHead))
    }

    /// # Errors
    ///
    /// [`ContainerError::EmptyCollection`] if the list is empty.
    pub fn peek_tail(&self) -> ContainerResult<Element> {
        self.value_at(self.tail)
            .ok_or_else(|| empty_list_error(Operation::PeekTail))
    }

    /// Unlink the head node and return its value. Its slot is recycled by the next
    /// insertion.
    ///
    /// # Errors
    ///
    /// [`ContainerError::EmptyCollection`] if the list is empty. The list is left
    /// unchanged.
    pub fn remove_head(&mut self) -> ContainerResult<Element> {
        let Some(node) = self.head.and_then(|head| self.arena.remove(head)) else {
            return Err(empty_list_error(Operation::RemoveHead));
        };

        self.head = node.next;
        self.size -= 1;
        // Removed the last node, don't leave `tail` pointing at a vacant slot.
        if self.head.is_none() {
            self.tail = None;
        }

        tracing::trace!(message = "remove_head", value = node.value, size = self.size);
        Ok(node.value)
    }

    /// Drop every node and reset to the empty state.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;

        tracing::trace!(message = "clear");
    }

    #[must_use]
    pub fn size(&self) -> usize { self.size }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.size == 0 }

    /// Lazily walk the list from head to tail without modifying it. Calling this again
    /// starts over from the head.
    #[must_use]
    pub fn iter(&self) -> SinglyLinkedListIterator<'_> {
        SinglyLinkedListIterator {
            list: self,
            cursor: self.head,
            remaining: self.size,
        }
    }

    fn value_at(&self, index: Option<NodeIndex>) -> Option<Element> {
        index
            .and_then(|index| self.arena.get(index))
            .map(|node| node.value)
    }
}

/// Two lists are equal when they hold the same elements in the same order, no matter
/// which arena slots the nodes occupy.
impl PartialEq for SinglyLinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl Eq for SinglyLinkedList {}

/// This implementation allows the list to be used in a for loop directly.
impl<'a> IntoIterator for &'a SinglyLinkedList {
    type Item = Element;
    type IntoIter = SinglyLinkedListIterator<'a>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

#[derive(Debug, Clone)]
pub struct SinglyLinkedListIterator<'a> {
    list: &'a SinglyLinkedList,
    cursor: Option<NodeIndex>,
    remaining: usize,
}

impl Iterator for SinglyLinkedListIterator<'_> {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.arena.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl ExactSizeIterator for SinglyLinkedListIterator<'_> {}

/// Head to tail, eg: `3 -> 2 -> 1 -> NULL`. An empty list is displayed as `NULL`.
impl Display for SinglyLinkedList {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for value in self {
            write!(f, "{value} -> ")?;
        }
        write!(f, "NULL")
    }
}
