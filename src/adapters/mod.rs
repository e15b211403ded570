//! # Adapters
//!
//! Swappable implementations of port traits.
//!
//! - Storage adapters: in-memory directory, catalog, cart
//! - Randomness adapters: seeded and thread-local
//! - Python bindings (when enabled)
//!
//! Each adapter implements one port trait.
//! Adapters can be swapped without changing the engine.

pub mod random;
pub mod storage;

#[cfg(feature = "python")]
pub mod python;
