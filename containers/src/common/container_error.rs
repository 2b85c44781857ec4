// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types shared by [`crate::RingBuffer`] and [`crate::SinglyLinkedList`].
//!
//! Every failure in this crate is local and recoverable. Nothing panics or aborts, the
//! caller gets a [`ContainerError`] back and the container is left exactly as it was
//! before the call. The error implements [`miette::Diagnostic`] so it can be bubbled up
//! into a `miette::Result` with `?` and rendered with a code and some help text.
//!
//! | Variant               | Cause                                                    |
//! | :-------------------- | :------------------------------------------------------- |
//! | [`InvalidHandle`]     | Operation invoked on a handle that holds no container    |
//! | [`InvalidArgument`]   | Construction with a capacity less than 1                 |
//! | [`AllocationFailure`] | Backing storage or node slot could not be reserved       |
//! | [`EmptyCollection`]   | Read, peek or remove attempted with no elements present  |
//!
//! [`InvalidHandle`]: ContainerError::InvalidHandle
//! [`InvalidArgument`]: ContainerError::InvalidArgument
//! [`AllocationFailure`]: ContainerError::AllocationFailure
//! [`EmptyCollection`]: ContainerError::EmptyCollection

use strum_macros::Display;

/// Type alias to make it easy to work with [`ContainerError`].
pub type ContainerResult<T> = Result<T, ContainerError>;

/// Which container produced the error. Used in error messages and log events.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    #[strum(serialize = "ring buffer")]
    RingBuffer,
    #[strum(serialize = "singly linked list")]
    SinglyLinkedList,
}

/// The operation that was attempted when the error occurred.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Read,
    Peek,
    PeekHead,
    PeekTail,
    RemoveHead,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ContainerError {
    /// The handle does not hold a container, eg: it was never created, or it was
    /// destroyed already.
    #[error("{container} handle is invalid")]
    #[diagnostic(
        code(r3bl_containers::invalid_handle),
        help("The container was destroyed or never created. Create a new one first.")
    )]
    InvalidHandle { container: ContainerKind },

    #[error("Invalid argument: {reason}")]
    #[diagnostic(code(r3bl_containers::invalid_argument))]
    InvalidArgument { reason: String },

    /// Memory for the backing storage or for a new node could not be reserved. The
    /// container is left untouched.
    #[error("Could not allocate {requested} slot(s) for {container}")]
    #[diagnostic(
        code(r3bl_containers::allocation_failure),
        help("The system is out of memory, or the requested capacity is too large.")
    )]
    AllocationFailure {
        container: ContainerKind,
        requested: usize,
    },

    #[error("Can't {operation} on an empty {container}")]
    #[diagnostic(code(r3bl_containers::empty_collection))]
    EmptyCollection {
        container: ContainerKind,
        operation: Operation,
    },
}

impl ContainerError {
    #[must_use]
    pub fn empty(container: ContainerKind, operation: Operation) -> Self {
        Self::EmptyCollection {
            container,
            operation,
        }
    }

    #[must_use]
    pub fn allocation(container: ContainerKind, requested: usize) -> Self {
        Self::AllocationFailure {
            container,
            requested,
        }
    }
}
