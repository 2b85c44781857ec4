// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ring_buffer_config;
pub mod ring_buffer_impl;

// Re-export.
pub use ring_buffer_config::*;
pub use ring_buffer_impl::*;
