//! Render-ready projection of engine state.
//!
//! # Responsibility
//! - Flatten document, focus, and drag state into one serializable value.
//! - Expose per-block flags hosts need for styling and placeholders.

use crate::engine::id_gen::BlockIdGenerator;
use crate::engine::sequence::BlockSequenceEngine;
use crate::model::block::BlockId;
use crate::view::placeholder::placeholder_for;
use serde::Serialize;

/// Per-block render data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub id: BlockId,
    pub index: usize,
    pub content: String,
    /// Content length in characters.
    pub char_len: usize,
    pub is_focused: bool,
    pub is_dragged: bool,
    pub is_drop_target: bool,
    pub placeholder: Option<String>,
}

/// Whole-editor render data, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorSnapshot {
    pub blocks: Vec<BlockView>,
    pub focused_block_id: BlockId,
    pub dragged_block_id: Option<BlockId>,
    pub drop_target_block_id: Option<BlockId>,
    pub block_count: usize,
}

impl EditorSnapshot {
    /// Block ids in document order.
    pub fn ids(&self) -> Vec<&str> {
        self.blocks.iter().map(|block| block.id.as_str()).collect()
    }
}

impl<G: BlockIdGenerator> BlockSequenceEngine<G> {
    /// Captures current state for the rendering surface.
    pub fn snapshot(&self) -> EditorSnapshot {
        let document = self.document();
        let focus = self.focused_block_id();
        let drag = self.drag_state();

        let blocks = document
            .blocks()
            .iter()
            .enumerate()
            .map(|(index, block)| BlockView {
                id: block.id().clone(),
                index,
                content: block.content().to_string(),
                char_len: block.char_len(),
                is_focused: block.id() == focus,
                is_dragged: drag.dragged() == Some(block.id()),
                is_drop_target: drag.drop_target() == Some(block.id()),
                placeholder: placeholder_for(document, focus, index, self.config())
                    .map(str::to_string),
            })
            .collect();

        EditorSnapshot {
            blocks,
            focused_block_id: focus.clone(),
            dragged_block_id: drag.dragged().cloned(),
            drop_target_block_id: drag.drop_target().cloned(),
            block_count: document.len(),
        }
    }
}
