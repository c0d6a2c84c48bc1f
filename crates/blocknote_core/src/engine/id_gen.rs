//! Block id generation.
//!
//! # Responsibility
//! - Supply fresh block identities to the engine without wall-clock input.
//!
//! # Invariants
//! - A generator never yields the same id twice during its lifetime.

use crate::model::block::BlockId;
use uuid::Uuid;

/// Source of fresh block identifiers injected into the engine.
pub trait BlockIdGenerator: Send {
    /// Returns the next unused identifier.
    fn next_id(&mut self) -> BlockId;
}

/// Monotonic counter generator: `"1"`, `"2"`, `"3"`, ...
///
/// Deterministic, so tests and replay scripts can name blocks up front.
#[derive(Debug, Clone)]
pub struct SequentialBlockIdGenerator {
    next: u64,
}

impl SequentialBlockIdGenerator {
    /// Starts counting at 1, so the seed block is `"1"`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Starts counting at an arbitrary value.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialBlockIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockIdGenerator for SequentialBlockIdGenerator {
    fn next_id(&mut self) -> BlockId {
        let id = BlockId::new(self.next.to_string());
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Random v4 UUID generator for host sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidBlockIdGenerator;

impl BlockIdGenerator for UuidBlockIdGenerator {
    fn next_id(&mut self) -> BlockId {
        BlockId::new(Uuid::new_v4().to_string())
    }
}

impl<G: BlockIdGenerator + ?Sized> BlockIdGenerator for Box<G> {
    fn next_id(&mut self) -> BlockId {
        (**self).next_id()
    }
}
