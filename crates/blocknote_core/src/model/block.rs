//! Block domain model.
//!
//! # Responsibility
//! - Define the atomic editable unit of a document.
//! - Keep block identity opaque to hosts and stable across reordering.
//!
//! # Invariants
//! - `id` is immutable once assigned and never reused for another block.
//! - `content` is mutated only through the engine's content-update path.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque block identifier, unique for the lifetime of one document.
///
/// Hosts should treat the inner string as an uninterpreted token; the engine
/// never derives meaning from its shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Wraps a host- or generator-provided identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrows the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One editable line/paragraph of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    content: String,
}

impl Block {
    /// Creates a block with empty content.
    ///
    /// Used for the seed block and for every block produced by a split.
    pub fn empty(id: BlockId) -> Self {
        Self::with_content(id, String::new())
    }

    pub(crate) fn with_content(id: BlockId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Stable identity of this block.
    pub fn id(&self) -> &BlockId {
        &self.id
    }

    /// Current plain-text payload.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns whether the block has no content at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Splits content at a character offset and returns the right-hand part.
    ///
    /// Offsets past the end are clamped, so the returned tail is empty.
    pub(crate) fn split_off_chars(&mut self, char_offset: usize) -> String {
        let byte_offset = self
            .content
            .char_indices()
            .nth(char_offset)
            .map(|(index, _)| index)
            .unwrap_or(self.content.len());
        self.content.split_off(byte_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, BlockId};

    #[test]
    fn char_len_counts_characters_not_bytes() {
        let block = Block::with_content(BlockId::from("1"), "héllo");
        assert_eq!(block.char_len(), 5);
        assert!(!block.is_empty());
    }

    #[test]
    fn split_off_chars_respects_multibyte_boundaries() {
        let mut block = Block::with_content(BlockId::from("1"), "añb");
        let tail = block.split_off_chars(2);
        assert_eq!(block.content(), "añ");
        assert_eq!(tail, "b");
    }

    #[test]
    fn split_off_chars_clamps_past_end() {
        let mut block = Block::with_content(BlockId::from("1"), "xy");
        let tail = block.split_off_chars(10);
        assert_eq!(block.content(), "xy");
        assert!(tail.is_empty());
    }

    #[test]
    fn block_id_serializes_as_plain_string() {
        let json = serde_json::to_value(BlockId::from("abc")).unwrap();
        assert_eq!(json, serde_json::json!("abc"));
    }
}
