// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`SinglyLinkedList`] and the node storage behind it. The storage is an
//! implementation detail, only the list itself is public:
//!
//! ```compile_fail
//! use r3bl_containers::NodeArena;
//! ```

// Attach sources.
pub(crate) mod slist_arena;
pub mod slist_impl;

// Re-export.
pub(crate) use slist_arena::*;
pub use slist_impl::*;
