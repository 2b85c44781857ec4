// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_containers
//!
//! Two small, self contained containers of fixed width integer elements ([`Element`]):
//!
//! 1. [`RingBuffer`]: A fixed capacity FIFO queue with overwrite-on-full semantics. The
//!    capacity is set once at creation. Writes never fail, a write into a full buffer
//!    discards the oldest element. Reads take the oldest element. Every slot is usable,
//!    an explicit "full" flag tells the full and empty states apart.
//! 2. [`SinglyLinkedList`]: O(1) insertion at the head and at the tail, and O(1) removal
//!    from the head. Nodes live in an index based arena with a free list, so removed
//!    nodes are recycled without a heap allocation per node.
//!
//! Fallible operations return [`ContainerResult`], and the errors are
//! [`miette::Diagnostic`]s. Queries never report a failure as a plausible value (like
//! `0` or `false`).
//!
//! ```
//! use r3bl_containers::{ContainerError, RingBuffer, SinglyLinkedList};
//!
//! let mut ring_buffer = RingBuffer::create(2).unwrap();
//! ring_buffer.write(1);
//! ring_buffer.write(2);
//! ring_buffer.write(3); // Overwrites 1.
//! assert_eq!(ring_buffer.read(), Ok(2));
//! assert_eq!(ring_buffer.read(), Ok(3));
//! assert!(matches!(ring_buffer.read(), Err(ContainerError::EmptyCollection { .. })));
//!
//! let mut list = SinglyLinkedList::create();
//! list.try_extend_tail([1, 2, 3]).unwrap();
//! assert_eq!(list.remove_head(), Ok(1));
//! assert_eq!(list.to_string(), "2 -> 3 -> NULL");
//! ```
//!
//! # Handles
//!
//! Containers are plain owned values. Callers that keep one in an [`Option`] and destroy
//! it explicitly can use [`ContainerHandle`], which reports use after destroy as
//! [`ContainerError::InvalidHandle`].
//!
//! # Logging
//!
//! Every operation emits [`tracing`] events. Nothing is printed unless a subscriber is
//! installed, eg: with [`try_initialize_logging_thread_local`] or
//! [`try_initialize_logging_global`], configured via [`TracingConfig`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod common;
pub mod log;
pub mod ring_buffer;
pub mod slist;

// Re-export.
pub use common::*;
pub use log::*;
pub use ring_buffer::*;
pub use slist::*;
