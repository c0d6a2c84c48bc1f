//! Host gesture → engine call translation.
//!
//! # Responsibility
//! - Route classified host events to the matching engine operation.
//! - Tell the host whether to suppress its native default behavior.
//!
//! # Invariants
//! - Enter, drag-over, and drop always suppress the native default.
//! - Backspace suppresses it only when a block was actually removed, so
//!   ordinary character deletion keeps working.
//! - Arrow keys never suppress it.

use crate::engine::directive::{Direction, FocusDirective};
use crate::engine::id_gen::BlockIdGenerator;
use crate::engine::sequence::BlockSequenceEngine;
use crate::gesture::key::EditorKey;
use crate::model::block::BlockId;

/// One classified event reported by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Editor key pressed inside a block; `caret_offset` is in characters.
    KeyDown {
        block_id: BlockId,
        key: EditorKey,
        caret_offset: usize,
    },
    /// Block text changed.
    Input { block_id: BlockId, content: String },
    /// Block element received input focus.
    Focus { block_id: BlockId },
    DragStart { block_id: BlockId },
    DragOver { block_id: BlockId },
    DragLeave,
    Drop { block_id: BlockId },
    DragEnd,
}

/// Result of one dispatched gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GestureOutcome {
    /// Host should cancel its native handling of the event.
    pub prevent_default: bool,
    /// Focus change to apply, if any.
    pub directive: Option<FocusDirective>,
}

impl GestureOutcome {
    fn pass_through() -> Self {
        Self::default()
    }

    fn handled(directive: Option<FocusDirective>) -> Self {
        Self {
            prevent_default: true,
            directive,
        }
    }

    fn observed(directive: Option<FocusDirective>) -> Self {
        Self {
            prevent_default: false,
            directive,
        }
    }
}

/// Applies one gesture to the engine.
pub fn dispatch_gesture<G: BlockIdGenerator>(
    engine: &mut BlockSequenceEngine<G>,
    gesture: Gesture,
) -> GestureOutcome {
    match gesture {
        Gesture::KeyDown {
            block_id,
            key,
            caret_offset,
        } => dispatch_key(engine, &block_id, key, caret_offset),
        Gesture::Input { block_id, content } => {
            engine.update_content(&block_id, content);
            GestureOutcome::pass_through()
        }
        Gesture::Focus { block_id } => GestureOutcome::observed(engine.focus_block(&block_id)),
        Gesture::DragStart { block_id } => {
            engine.begin_drag(&block_id);
            GestureOutcome::pass_through()
        }
        Gesture::DragOver { block_id } => {
            engine.drag_over(&block_id);
            GestureOutcome::handled(None)
        }
        Gesture::DragLeave => {
            engine.drag_leave();
            GestureOutcome::pass_through()
        }
        Gesture::Drop { block_id } => GestureOutcome::handled(engine.drop_on(&block_id)),
        Gesture::DragEnd => {
            engine.end_drag();
            GestureOutcome::pass_through()
        }
    }
}

fn dispatch_key<G: BlockIdGenerator>(
    engine: &mut BlockSequenceEngine<G>,
    block_id: &BlockId,
    key: EditorKey,
    caret_offset: usize,
) -> GestureOutcome {
    match key {
        EditorKey::Enter => GestureOutcome::handled(engine.split(block_id, caret_offset)),
        EditorKey::Backspace => match engine.delete_if_empty(block_id) {
            Some(directive) => GestureOutcome::handled(Some(directive)),
            None => GestureOutcome::pass_through(),
        },
        EditorKey::ArrowUp => {
            GestureOutcome::observed(engine.move_focus(block_id, Direction::Previous))
        }
        EditorKey::ArrowDown => {
            GestureOutcome::observed(engine.move_focus(block_id, Direction::Next))
        }
    }
}
