//! Rendering-surface seam for focus and caret placement.
//!
//! # Responsibility
//! - Translate a [`FocusDirective`] into calls on a host caret API.
//!
//! # Invariants
//! - Focus is always moved before the caret is collapsed.
//! - `CursorHint::Unspecified` never touches the caret.

use crate::engine::directive::{CursorHint, FocusDirective};
use crate::model::block::BlockId;

/// Edge of a block's content where the caret collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretEdge {
    Start,
    End,
}

/// Host-provided native focus/selection API.
pub trait CaretSurface {
    /// Moves input focus to the element rendering `block_id`.
    fn focus_block(&mut self, block_id: &BlockId);
    /// Collapses the caret to one edge of the block's content.
    fn collapse_caret(&mut self, block_id: &BlockId, edge: CaretEdge);
}

/// Applies one directive to the host surface.
pub fn apply_directive<S: CaretSurface + ?Sized>(surface: &mut S, directive: &FocusDirective) {
    surface.focus_block(&directive.focus_block_id);
    let edge = match directive.cursor_hint {
        CursorHint::Start => CaretEdge::Start,
        CursorHint::End => CaretEdge::End,
        CursorHint::Unspecified => return,
    };
    surface.collapse_caret(&directive.focus_block_id, edge);
}
