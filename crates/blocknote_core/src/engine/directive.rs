//! Focus and caret directives emitted to the rendering surface.

use crate::model::block::BlockId;
use serde::Serialize;

/// Where the host should collapse the caret inside the focused block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorHint {
    /// Offset 0 of the block content.
    Start,
    /// After the last character of the block content.
    End,
    /// Host default placement.
    Unspecified,
}

impl CursorHint {
    /// Stable lowercase label used across the host boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Unspecified => "unspecified",
        }
    }
}

/// Vertical navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Instruction to move input focus after a focus-changing operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusDirective {
    pub focus_block_id: BlockId,
    pub cursor_hint: CursorHint,
}

impl FocusDirective {
    pub(crate) fn new(focus_block_id: BlockId, cursor_hint: CursorHint) -> Self {
        Self {
            focus_block_id,
            cursor_hint,
        }
    }
}
