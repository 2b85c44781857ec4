// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod container_error;
pub mod container_handle;
pub mod decl_macros;

// Re-export.
pub use container_error::*;
pub use container_handle::*;

/// The fixed width element type stored by every container in this crate.
pub type Element = i32;
