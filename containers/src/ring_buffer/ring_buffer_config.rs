// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumString};

/// What [`super::RingBuffer::clear`] does to the backing storage. Both policies reset
/// the indices and the full flag, so the observable contents are the same either way.
#[derive(Debug, Display, EnumString, Default, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ClearPolicy {
    /// Overwrite every slot with zero, so no stale data lingers in memory.
    #[default]
    ZeroStorage,
    /// Only reset the indices. Stale data stays in the slots until it is overwritten.
    ResetIndicesOnly,
}

/// Construction options for [`super::RingBuffer`]. [`super::RingBuffer::create`] only
/// takes a capacity, [`super::RingBuffer::create_with_config`] receives a type that
/// implements [`Into<RingBufferConfig>`]:
///
/// ```
/// use r3bl_containers::{ClearPolicy, RingBuffer, RingBufferConfig};
///
/// // Just a capacity, with the default clear policy.
/// let rb = RingBuffer::create_with_config(8_usize).unwrap();
/// assert_eq!(rb.capacity(), 8);
/// assert_eq!(rb.clear_policy(), ClearPolicy::ZeroStorage);
///
/// // A capacity and a clear policy.
/// let config = RingBufferConfig::new(8).with_clear_policy(ClearPolicy::ResetIndicesOnly);
/// let rb = RingBuffer::create_with_config(config).unwrap();
/// assert_eq!(rb.clear_policy(), ClearPolicy::ResetIndicesOnly);
///
/// // The policy can also be parsed from text, eg: from a settings file.
/// let config = RingBufferConfig {
///     capacity: 16,
///     clear_policy: "reset_indices_only".parse().unwrap(),
/// };
/// assert_eq!(config.clear_policy, ClearPolicy::ResetIndicesOnly);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RingBufferConfig {
    /// Number of slots. Must be at least 1. Immutable once the buffer is created.
    pub capacity: usize,
    pub clear_policy: ClearPolicy,
}

impl RingBufferConfig {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            clear_policy: ClearPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_clear_policy(mut self, clear_policy: ClearPolicy) -> Self {
        self.clear_policy = clear_policy;
        self
    }
}

impl From<usize> for RingBufferConfig {
    fn from(capacity: usize) -> Self { Self::new(capacity) }
}
