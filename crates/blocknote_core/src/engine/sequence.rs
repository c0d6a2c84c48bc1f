//! Block-sequence editing engine.
//!
//! # Responsibility
//! - Own the document, focus, and drag state as one cohesive value.
//! - Translate editing gestures (split, delete, navigate, reorder) into
//!   state transitions plus a focus directive for the host.
//!
//! # Invariants
//! - The document is never empty and block ids are never reused.
//! - Focus always names a block that is present in the document.
//! - Referencing an unknown block id is a silent no-op.
//! - The document is mutated at most once per `drop_on` and never by
//!   `begin_drag`, `drag_over`, `drag_leave`, or `end_drag`.

use crate::config::{EditorConfig, SplitMode};
use crate::engine::directive::{CursorHint, Direction, FocusDirective};
use crate::engine::drag::DragState;
use crate::engine::id_gen::{BlockIdGenerator, UuidBlockIdGenerator};
use crate::model::block::{Block, BlockId};
use crate::model::document::Document;
use log::{debug, error, trace, warn};
use std::collections::HashSet;

const MAX_ID_ATTEMPTS: usize = 8;

/// Single owner of one editing session's block sequence.
#[derive(Debug)]
pub struct BlockSequenceEngine<G: BlockIdGenerator = UuidBlockIdGenerator> {
    config: EditorConfig,
    ids: G,
    issued: HashSet<BlockId>,
    document: Document,
    focus: BlockId,
    drag: DragState,
}

impl<G: BlockIdGenerator> BlockSequenceEngine<G> {
    /// Creates a fresh document with one empty seed block holding focus.
    pub fn new(ids: G) -> Self {
        Self::with_config(EditorConfig::default(), ids)
    }

    /// Same as [`BlockSequenceEngine::new`] with explicit behavior config.
    pub fn with_config(config: EditorConfig, mut ids: G) -> Self {
        let seed = ids.next_id();
        let mut issued = HashSet::new();
        issued.insert(seed.clone());
        debug!("event=document_create module=engine status=ok block_count=1");
        Self {
            config,
            ids,
            issued,
            document: Document::seeded(seed.clone()),
            focus: seed,
            drag: DragState::default(),
        }
    }

    /// Current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        self.document.blocks()
    }

    /// Block currently holding input focus.
    pub fn focused_block_id(&self) -> &BlockId {
        &self.focus
    }

    /// Current drag gesture state.
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Active behavior config.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Enter pressed inside `at_block_id` with the caret at `split_index`.
    ///
    /// Inserts a new block right after the source block and focuses it with
    /// the caret at its start. With [`SplitMode::AppendEmpty`] the new block is
    /// always empty; with [`SplitMode::AtCaret`] it receives the content right
    /// of the caret (offsets past the end are clamped).
    pub fn split(&mut self, at_block_id: &BlockId, split_index: usize) -> Option<FocusDirective> {
        let Some(index) = self.document.index_of(at_block_id) else {
            trace!("event=block_split module=engine status=ignored reason=unknown_block");
            return None;
        };
        let Some(new_id) = self.fresh_id() else {
            error!("event=block_split module=engine status=error reason=id_generator_exhausted");
            return None;
        };

        let tail = match self.config.split_mode {
            SplitMode::AppendEmpty => String::new(),
            SplitMode::AtCaret => self
                .document
                .block_at_mut(index)
                .map(|block| block.split_off_chars(split_index))
                .unwrap_or_default(),
        };
        self.document
            .insert_after(index, Block::with_content(new_id.clone(), tail));
        self.focus = new_id.clone();

        debug!(
            "event=block_split module=engine status=ok index={} block_count={}",
            index + 1,
            self.document.len()
        );
        Some(FocusDirective::new(new_id, CursorHint::Start))
    }

    /// Backspace pressed inside `block_id`.
    ///
    /// Removes the block only when it is empty and not the last block left.
    /// Focus then lands on the preceding block, or the following one when the
    /// removed block was first, with the caret at its end.
    pub fn delete_if_empty(&mut self, block_id: &BlockId) -> Option<FocusDirective> {
        let Some(index) = self.document.index_of(block_id) else {
            trace!("event=block_delete module=engine status=ignored reason=unknown_block");
            return None;
        };
        let is_empty = self
            .document
            .block_at(index)
            .is_some_and(Block::is_empty);
        if !is_empty || self.document.len() <= 1 {
            trace!("event=block_delete module=engine status=ignored reason=not_removable");
            return None;
        }

        let neighbor = if index > 0 { index - 1 } else { index + 1 };
        let focus_id = self.document.block_at(neighbor)?.id().clone();
        let removed = self.document.remove(index)?;
        self.drag.forget(removed.id());
        self.focus = focus_id.clone();

        debug!(
            "event=block_delete module=engine status=ok index={} block_count={}",
            index,
            self.document.len()
        );
        Some(FocusDirective::new(focus_id, CursorHint::End))
    }

    /// ArrowUp/ArrowDown pressed inside `current_block_id`.
    ///
    /// Moves focus to the adjacent block; at a boundary nothing changes.
    pub fn move_focus(
        &mut self,
        current_block_id: &BlockId,
        direction: Direction,
    ) -> Option<FocusDirective> {
        let index = self.document.index_of(current_block_id)?;
        let target = match direction {
            Direction::Previous => index.checked_sub(1),
            Direction::Next => index.checked_add(1),
        };
        let Some(target_id) = target
            .and_then(|position| self.document.block_at(position))
            .map(|block| block.id().clone())
        else {
            trace!("event=focus_move module=engine status=ignored reason=boundary");
            return None;
        };

        self.focus = target_id.clone();
        trace!("event=focus_move module=engine status=ok direction={direction:?}");
        Some(FocusDirective::new(target_id, CursorHint::Unspecified))
    }

    /// Replaces one block's content verbatim.
    ///
    /// Returns `false` when the block does not exist.
    pub fn update_content(&mut self, block_id: &BlockId, new_content: impl Into<String>) -> bool {
        let Some(block) = self
            .document
            .index_of(block_id)
            .and_then(|index| self.document.block_at_mut(index))
        else {
            trace!("event=block_update module=engine status=ignored reason=unknown_block");
            return false;
        };
        block.set_content(new_content.into());
        true
    }

    /// Host reports that a block element received input focus.
    ///
    /// Emits a directive only when focus actually changes.
    pub fn focus_block(&mut self, block_id: &BlockId) -> Option<FocusDirective> {
        if !self.document.contains(block_id) || &self.focus == block_id {
            return None;
        }
        self.focus = block_id.clone();
        Some(FocusDirective::new(
            block_id.clone(),
            CursorHint::Unspecified,
        ))
    }

    /// Starts a drag gesture on `block_id`.
    pub fn begin_drag(&mut self, block_id: &BlockId) {
        if !self.document.contains(block_id) {
            trace!("event=drag_begin module=engine status=ignored reason=unknown_block");
            return;
        }
        self.drag.dragged = Some(block_id.clone());
        self.drag.drop_target = None;
    }

    /// Records the hovered block as drop-target candidate (last write wins).
    ///
    /// Hovering the dragged block itself keeps the previous candidate.
    pub fn drag_over(&mut self, hovered_block_id: &BlockId) {
        let Some(dragged) = self.drag.dragged.as_ref() else {
            return;
        };
        if dragged == hovered_block_id || !self.document.contains(hovered_block_id) {
            return;
        }
        self.drag.drop_target = Some(hovered_block_id.clone());
    }

    /// Pointer left the hovered block; the dragged block stays recorded.
    pub fn drag_leave(&mut self) {
        self.drag.drop_target = None;
    }

    /// Completes a drag gesture by dropping onto `target_block_id`.
    ///
    /// On success the dragged block takes the target's former slot and gains
    /// focus. Without an active drag, on a self-drop, or when either block is
    /// gone, the gesture is cancelled. Drag state is cleared either way.
    pub fn drop_on(&mut self, target_block_id: &BlockId) -> Option<FocusDirective> {
        let dragged = self.drag.dragged.take();
        self.drag.clear();

        let Some(dragged) = dragged else {
            trace!("event=block_reorder module=engine status=cancelled reason=no_active_drag");
            return None;
        };
        if &dragged == target_block_id {
            trace!("event=block_reorder module=engine status=cancelled reason=self_target");
            return None;
        }
        let (Some(from), Some(to)) = (
            self.document.index_of(&dragged),
            self.document.index_of(target_block_id),
        ) else {
            warn!("event=block_reorder module=engine status=cancelled reason=unknown_block");
            return None;
        };

        self.document.move_to_slot(from, to);
        self.focus = dragged.clone();

        debug!("event=block_reorder module=engine status=ok from={from} to={to}");
        Some(FocusDirective::new(dragged, CursorHint::Unspecified))
    }

    /// Aborts any drag gesture. Idempotent.
    pub fn end_drag(&mut self) {
        self.drag.clear();
    }

    fn fresh_id(&mut self) -> Option<BlockId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if self.issued.insert(candidate.clone()) {
                return Some(candidate);
            }
            warn!("event=block_id_collision module=engine status=retry");
        }
        None
    }
}
