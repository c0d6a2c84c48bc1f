//! Placeholder text policy.
//!
//! Derived purely from document shape and focus; the engine never stores it.

use crate::config::EditorConfig;
use crate::model::block::BlockId;
use crate::model::document::Document;

/// Placeholder the host should show for the block at `index`, if any.
///
/// - The sole, empty block of a document gets the empty-document placeholder.
/// - Otherwise an empty block holding focus gets the focused-block placeholder.
/// - Blocks with content never get a placeholder.
pub fn placeholder_for<'c>(
    document: &Document,
    focus: &BlockId,
    index: usize,
    config: &'c EditorConfig,
) -> Option<&'c str> {
    let block = document.block_at(index)?;
    if !block.is_empty() {
        return None;
    }
    if index == 0 && document.len() == 1 {
        return Some(config.empty_document_placeholder.as_str());
    }
    if block.id() == focus {
        return Some(config.focused_block_placeholder.as_str());
    }
    None
}
