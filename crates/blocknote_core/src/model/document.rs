//! Ordered block sequence.
//!
//! # Responsibility
//! - Hold the ordered list of blocks that makes up one document.
//! - Provide positional lookups used by navigation and rendering.
//!
//! # Invariants
//! - The sequence is never empty.
//! - Block ids are pairwise distinct.
//! - Vector order is the only authority for render and navigation order.

use crate::model::block::{Block, BlockId};
use serde::Serialize;

/// Ordered, never-empty sequence of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Creates a document holding exactly one empty seed block.
    pub fn seeded(seed_id: BlockId) -> Self {
        Self {
            blocks: vec![Block::empty(seed_id)],
        }
    }

    /// All blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks. Always at least one.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always `false`; kept for API symmetry with collection types.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Block ids in document order.
    pub fn ids(&self) -> Vec<&BlockId> {
        self.blocks.iter().map(Block::id).collect()
    }

    /// Position of a block, if present.
    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    /// Returns whether a block with this id is present.
    pub fn contains(&self, id: &BlockId) -> bool {
        self.index_of(id).is_some()
    }

    /// Looks up one block by id.
    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    /// Looks up one block by position.
    pub fn block_at(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub(crate) fn insert_after(&mut self, index: usize, block: Block) {
        let slot = (index + 1).min(self.blocks.len());
        self.blocks.insert(slot, block);
    }

    /// Removes the block at `index` unless it is the last one left.
    pub(crate) fn remove(&mut self, index: usize) -> Option<Block> {
        if self.blocks.len() <= 1 || index >= self.blocks.len() {
            return None;
        }
        Some(self.blocks.remove(index))
    }

    /// Moves the block at `from` so that it ends up at position `to`.
    ///
    /// Every other block keeps its relative order.
    pub(crate) fn move_to_slot(&mut self, from: usize, to: usize) {
        if from == to || from >= self.blocks.len() || to >= self.blocks.len() {
            return;
        }
        let moved = self.blocks.remove(from);
        self.blocks.insert(to, moved);
    }

    pub(crate) fn block_at_mut(&mut self, index: usize) -> Option<&mut Block> {
        self.blocks.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::Document;
    use crate::model::block::{Block, BlockId};

    fn doc_of(ids: &[&str]) -> Document {
        let mut doc = Document::seeded(BlockId::from(ids[0]));
        for (offset, id) in ids.iter().enumerate().skip(1) {
            doc.insert_after(offset - 1, Block::empty(BlockId::from(*id)));
        }
        doc
    }

    fn id_strings(doc: &Document) -> Vec<&str> {
        doc.ids().into_iter().map(BlockId::as_str).collect()
    }

    #[test]
    fn seeded_document_has_one_empty_block() {
        let doc = Document::seeded(BlockId::from("1"));
        assert_eq!(doc.len(), 1);
        assert!(doc.blocks()[0].is_empty());
    }

    #[test]
    fn remove_refuses_last_block() {
        let mut doc = Document::seeded(BlockId::from("1"));
        assert!(doc.remove(0).is_none());
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn move_to_slot_moves_up_and_down() {
        let mut doc = doc_of(&["a", "b", "c", "d"]);
        doc.move_to_slot(3, 1);
        assert_eq!(id_strings(&doc), vec!["a", "d", "b", "c"]);

        doc.move_to_slot(0, 3);
        assert_eq!(id_strings(&doc), vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn get_finds_blocks_by_id_only() {
        let doc = doc_of(&["a", "b"]);

        let found = doc.get(&BlockId::from("b")).expect("b is present");
        assert_eq!(found.id().as_str(), "b");
        assert!(doc.get(&BlockId::from("missing")).is_none());
    }

    #[test]
    fn move_to_slot_ignores_out_of_range() {
        let mut doc = doc_of(&["a", "b"]);
        doc.move_to_slot(0, 5);
        assert_eq!(id_strings(&doc), vec!["a", "b"]);
    }
}
