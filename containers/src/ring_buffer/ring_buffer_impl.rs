// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::{ClearPolicy, RingBufferConfig};
use crate::{Container, ContainerError, ContainerKind, ContainerResult, Element,
            Operation};

/// A fixed capacity ring buffer with overwrite-on-full semantics.
///
/// It behaves like a FIFO queue with a fixed size ([`Self::write`] and [`Self::read`]).
/// When the buffer is full, a write discards the oldest element to make room instead of
/// failing.
///
/// # Fields
///
/// * `storage`: `capacity` slots, allocated once in [`Self::create`].
/// * `read_index`: The slot holding the oldest element (the next one to be read).
/// * `write_index`: The slot the next write goes into.
/// * `is_full`: Both indices wrap modulo `capacity`, so when they are equal the buffer is
///   either completely empty or completely full. This flag tells the two apart, which
///   allows every slot to be used (no slot is reserved to mark "full").
///
/// The element count is never stored, it is derived from the two indices and the flag
/// in [`Self::data_count`].
///
/// # Modules
///
/// * `constructor`: [`Self::create`] and [`Self::create_with_config`].
/// * `mutator`: Methods for writing, reading, and clearing.
/// * `size`: Methods for querying the occupancy and state of the buffer.
/// * `accessor`: Non consuming access to the stored elements.
/// * `iterator`: Iteration over the stored elements, oldest first.
///
/// # Examples
///
/// ```
/// use r3bl_containers::RingBuffer;
///
/// let mut ring_buffer = RingBuffer::create(3).unwrap();
///
/// ring_buffer.write(1);
/// ring_buffer.write(2);
/// ring_buffer.write(3);
///
/// assert_eq!(ring_buffer.data_count(), 3);
/// assert!(ring_buffer.is_full());
/// assert_eq!(ring_buffer.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
///
/// // Overwrite the oldest element.
/// ring_buffer.write(4);
/// assert_eq!(ring_buffer.iter().collect::<Vec<_>>(), vec![2, 3, 4]);
///
/// assert_eq!(ring_buffer.read(), Ok(2));
/// assert_eq!(ring_buffer.data_count(), 2);
/// assert_eq!(ring_buffer.free_count(), 1);
/// assert_eq!(ring_buffer.to_string(), "3 4");
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer {
    storage: Vec<Element>,
    capacity: usize,
    read_index: usize,
    write_index: usize,
    is_full: bool,
    clear_policy: ClearPolicy,
}

impl Container for RingBuffer {
    const KIND: ContainerKind = ContainerKind::RingBuffer;
}

/// Move `index` one slot forward, wrapping to 0 at `capacity`.
fn advance(index: usize, capacity: usize) -> usize {
    let next = index + 1;
    if next >= capacity { 0 } else { next }
}

mod constructor {
    use super::{ContainerError, ContainerKind, ContainerResult, RingBuffer,
                RingBufferConfig};

    impl RingBuffer {
        /// Allocates storage for `capacity` elements and initializes the buffer to the
        /// empty state.
        ///
        /// # Errors
        ///
        /// - [`ContainerError::InvalidArgument`] if `capacity` is less than 1.
        /// - [`ContainerError::AllocationFailure`] if the storage can't be allocated.
        pub fn create(capacity: usize) -> ContainerResult<Self> {
            Self::create_with_config(RingBufferConfig::new(capacity))
        }

        /// Same as [`Self::create`], with full control over the [`RingBufferConfig`].
        ///
        /// # Errors
        ///
        /// - [`ContainerError::InvalidArgument`] if the capacity is less than 1.
        /// - [`ContainerError::AllocationFailure`] if the storage can't be allocated.
        pub fn create_with_config(
            arg_config: impl Into<RingBufferConfig>,
        ) -> ContainerResult<Self> {
            let RingBufferConfig {
                capacity,
                clear_policy,
            } = arg_config.into();

            if capacity < 1 {
                tracing::debug!(message = "create rejected", capacity);
                return Err(ContainerError::InvalidArgument {
                    reason: format!("capacity must be at least 1, got {capacity}"),
                });
            }

            // Reserve up front so that an allocation failure is reported instead of
            // aborting the process.
            let mut storage = Vec::new();
            storage.try_reserve_exact(capacity).map_err(|_| {
                tracing::debug!(message = "create allocation failed", capacity);
                ContainerError::allocation(ContainerKind::RingBuffer, capacity)
            })?;
            storage.resize(capacity, 0);

            // % is Display, ? is Debug.
            tracing::trace!(message = "create", capacity, clear_policy = %clear_policy);

            Ok(Self {
                storage,
                capacity,
                read_index: 0,
                write_index: 0,
                is_full: false,
                clear_policy,
            })
        }
    }
}

mod mutator {
    use super::{ClearPolicy, ContainerError, ContainerKind, ContainerResult, Element,
                Operation, RingBuffer, advance};

    impl RingBuffer {
        /// Insert the newest element. This never fails. If the buffer is full, the
        /// oldest element is discarded first (overwrite-on-full).
        pub fn write(&mut self, value: Element) {
            if self.is_full {
                let discarded = self.storage[self.read_index];
                self.read_index = advance(self.read_index, self.capacity);
                tracing::debug!(message = "write overwrote oldest", discarded);
            }

            self.storage[self.write_index] = value;
            self.write_index = advance(self.write_index, self.capacity);

            if self.write_index == self.read_index {
                self.is_full = true;
            }

            tracing::trace!(
                message = "write",
                value,
                read_index = self.read_index,
                write_index = self.write_index,
                data_count = self.data_count()
            );
        }

        /// Remove and return the oldest element.
        ///
        /// # Errors
        ///
        /// [`ContainerError::EmptyCollection`] if there is nothing to read. The buffer is
        /// not modified in this case.
        pub fn read(&mut self) -> ContainerResult<Element> {
            if self.is_empty() {
                tracing::debug!(message = "read on empty ring buffer");
                return Err(ContainerError::empty(
                    ContainerKind::RingBuffer,
                    Operation::Read,
                ));
            }

            let value = self.storage[self.read_index];
            self.read_index = advance(self.read_index, self.capacity);

            // A read always frees a slot, so the buffer can't be full anymore. This also
            // covers the case where the indices now coincide (the buffer just emptied).
            self.is_full = false;

            tracing::trace!(
                message = "read",
                value,
                read_index = self.read_index,
                write_index = self.write_index,
                data_count = self.data_count()
            );

            Ok(value)
        }

        /// Reset to the empty state. The capacity stays the same. Depending on the
        /// [`ClearPolicy`] the storage is zeroed or left with stale data, which does not
        /// affect the behavior of the ring buffer.
        pub fn clear(&mut self) {
            if self.clear_policy == ClearPolicy::ZeroStorage {
                self.storage.iter_mut().for_each(|slot| *slot = 0);
            }
            self.read_index = 0;
            self.write_index = 0;
            self.is_full = false;

            tracing::trace!(message = "clear", clear_policy = %self.clear_policy);
        }
    }
}

mod size {
    use std::cmp::Ordering;

    use super::{ClearPolicy, RingBuffer};

    impl RingBuffer {
        /// Number of stored, unread elements. Always in `0..=capacity`.
        #[must_use]
        pub fn data_count(&self) -> usize {
            match self.write_index.cmp(&self.read_index) {
                Ordering::Equal => {
                    if self.is_full {
                        self.capacity
                    } else {
                        0
                    }
                }
                Ordering::Greater => self.write_index - self.read_index,
                // Write index has wrapped around behind the read index.
                Ordering::Less => self.capacity - (self.read_index - self.write_index),
            }
        }

        /// Number of slots that can be written before the oldest element is overwritten.
        #[must_use]
        pub fn free_count(&self) -> usize { self.capacity - self.data_count() }

        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.write_index == self.read_index && !self.is_full
        }

        #[must_use]
        pub fn is_full(&self) -> bool {
            self.write_index == self.read_index && self.is_full
        }

        #[must_use]
        pub fn capacity(&self) -> usize { self.capacity }

        #[must_use]
        pub fn clear_policy(&self) -> ClearPolicy { self.clear_policy }
    }
}

mod accessor {
    use super::{ContainerError, ContainerKind, ContainerResult, Element, Operation,
                RingBuffer};

    impl RingBuffer {
        /// The oldest element, without removing it.
        ///
        /// # Errors
        ///
        /// [`ContainerError::EmptyCollection`] if the buffer is empty.
        pub fn peek(&self) -> ContainerResult<Element> {
            self.get(0).ok_or_else(|| {
                tracing::debug!(message = "peek on empty ring buffer");
                ContainerError::empty(ContainerKind::RingBuffer, Operation::Peek)
            })
        }

        /// The element `index` positions after the oldest one. `get(0)` is the oldest,
        /// `get(data_count() - 1)` is the newest.
        #[must_use]
        pub fn get(&self, index: usize) -> Option<Element> {
            if index >= self.data_count() {
                return None;
            }

            // Avoid `read_index + index` so the sum can't overflow.
            let slots_until_wrap = self.capacity - self.read_index;
            let actual_index = if index < slots_until_wrap {
                self.read_index + index
            } else {
                index - slots_until_wrap
            };
            self.storage.get(actual_index).copied()
        }
    }
}

mod iterator {
    use super::{Element, RingBuffer};

    impl RingBuffer {
        /// Lazily walk the stored elements, oldest first, without consuming them. Calling
        /// this again starts over from the oldest element.
        #[must_use]
        pub fn iter(&self) -> RingBufferIterator<'_> {
            RingBufferIterator {
                ring_buffer: self,
                iterator_index: 0,
                count: self.data_count(),
            }
        }
    }

    /// This implementation allows the ring buffer to be used in a for loop directly.
    impl<'a> IntoIterator for &'a RingBuffer {
        type Item = Element;
        type IntoIter = RingBufferIterator<'a>;

        fn into_iter(self) -> Self::IntoIter { self.iter() }
    }

    #[derive(Debug, Clone)]
    pub struct RingBufferIterator<'a> {
        ring_buffer: &'a RingBuffer,
        iterator_index: usize,
        count: usize,
    }

    impl Iterator for RingBufferIterator<'_> {
        type Item = Element;

        fn next(&mut self) -> Option<Self::Item> {
            if self.iterator_index == self.count {
                return None;
            }

            let it = self.ring_buffer.get(self.iterator_index);
            self.iterator_index += 1;
            it
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            let remaining = self.count - self.iterator_index;
            (remaining, Some(remaining))
        }
    }

    impl ExactSizeIterator for RingBufferIterator<'_> {}
}
pub use iterator::RingBufferIterator;

/// Two ring buffers are equal when they have the same capacity and hold the same
/// elements in the same order, no matter where in the storage those elements sit.
impl PartialEq for RingBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.iter().eq(other.iter())
    }
}

impl Eq for RingBuffer {}

/// Space separated, oldest first. An empty buffer is displayed as `(none)`.
impl Display for RingBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }

        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
