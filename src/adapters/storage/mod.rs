//! # Storage Adapters
//!
//! Implementations of the collaborator ports for different backends.
//!
//! Available adapters:
//! - `MemoryDirectory` - in-memory team assignments (fast, volatile)
//! - `MemoryCatalog` - in-memory product listing
//! - `MemoryCart` - in-memory carts

mod memory;

pub use memory::{MemoryCart, MemoryCatalog, MemoryDirectory};
