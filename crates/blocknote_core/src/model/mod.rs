//! Document domain model.
//!
//! # Responsibility
//! - Define the block and document shapes shared by engine and view layers.
//!
//! # Invariants
//! - Every block is identified by a stable `BlockId`.
//! - A document always holds at least one block.

pub mod block;
pub mod document;
