// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A container is owned exclusively by whoever created it. A method call on `&self` can
//! never observe a "null" container, so the notion of an invalid handle only exists for
//! callers that keep a container in an [`Option`] and may have destroyed it already.
//!
//! [`ContainerHandle`] is implemented for `Option<C>` and gives those callers the same
//! lifecycle as the container's own API:
//! - [`ContainerHandle::handle`] and [`ContainerHandle::handle_mut`] return
//!   [`ContainerError::InvalidHandle`] instead of a default value when the handle is
//!   empty. So `is_empty()` on a destroyed handle is an error, not `false`.
//! - [`ContainerHandle::destroy`] drops the container and is a no-op on an empty handle.
//!   It never fails.
//!
//! # Example
//!
//! ```
//! use r3bl_containers::{ContainerError, ContainerHandle, RingBuffer};
//!
//! let mut handle = Some(RingBuffer::create(4).unwrap());
//! handle.handle_mut().unwrap().write(1);
//! assert_eq!(handle.handle().map(RingBuffer::data_count), Ok(1));
//!
//! handle.destroy();
//! handle.destroy(); // Safe, no-op.
//! assert!(matches!(
//!     handle.handle().map(RingBuffer::is_empty),
//!     Err(ContainerError::InvalidHandle { .. })
//! ));
//! ```

use super::{ContainerError, ContainerKind, ContainerResult};

/// Implemented by every container in this crate, so that [`ContainerHandle`] can name it
/// in errors and log events.
pub trait Container {
    const KIND: ContainerKind;
}

pub trait ContainerHandle<C: Container> {
    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidHandle`] if the handle holds no container.
    fn handle(&self) -> ContainerResult<&C>;

    /// # Errors
    ///
    /// Returns [`ContainerError::InvalidHandle`] if the handle holds no container.
    fn handle_mut(&mut self) -> ContainerResult<&mut C>;

    /// Releases the container and everything it owns. Calling this on an already empty
    /// handle does nothing.
    fn destroy(&mut self);

    fn is_valid(&self) -> bool;
}

impl<C: Container> ContainerHandle<C> for Option<C> {
    fn handle(&self) -> ContainerResult<&C> {
        self.as_ref().ok_or_else(invalid_handle::<C>)
    }

    fn handle_mut(&mut self) -> ContainerResult<&mut C> {
        self.as_mut().ok_or_else(invalid_handle::<C>)
    }

    fn destroy(&mut self) {
        if let Some(container) = self.take() {
            drop(container);
            tracing::debug!(message = "destroy", container = %C::KIND);
        }
    }

    fn is_valid(&self) -> bool { self.is_some() }
}

fn invalid_handle<C: Container>() -> ContainerError {
    tracing::debug!(message = "invalid handle", container = %C::KIND);
    ContainerError::InvalidHandle { container: C::KIND }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RingBuffer, SinglyLinkedList, assert_eq2};

    #[test]
    fn test_queries_on_destroyed_ring_buffer_are_errors() {
        let mut handle = Some(RingBuffer::create(2).unwrap());
        assert!(handle.is_valid());
        assert_eq2!(handle.handle().map(RingBuffer::is_empty), Ok(true));

        handle.destroy();
        assert!(!handle.is_valid());

        let invalid = || ContainerError::InvalidHandle {
            container: ContainerKind::RingBuffer,
        };
        assert_eq2!(handle.handle().map(RingBuffer::is_empty), Err(invalid()));
        assert_eq2!(handle.handle().map(RingBuffer::is_full), Err(invalid()));
        assert_eq2!(handle.handle().map(RingBuffer::data_count), Err(invalid()));
        assert_eq2!(handle.handle_mut().map(|it| it.write(1)), Err(invalid()));
        assert_eq2!(handle.handle_mut().and_then(RingBuffer::read), Err(invalid()));
    }

    #[test]
    fn test_destroy_twice_is_a_no_op() {
        let mut handle = Some(SinglyLinkedList::create());
        handle.handle_mut().unwrap().add_to_tail(7).unwrap();

        handle.destroy();
        handle.destroy();

        let mut never_created: Option<SinglyLinkedList> = None;
        never_created.destroy();

        assert_eq2!(
            handle.handle().map(SinglyLinkedList::size),
            Err(ContainerError::InvalidHandle {
                container: ContainerKind::SinglyLinkedList
            })
        );
        assert_eq2!(
            never_created.handle_mut().and_then(|it| it.add_to_head(1)),
            Err(ContainerError::InvalidHandle {
                container: ContainerKind::SinglyLinkedList
            })
        );
    }
}
