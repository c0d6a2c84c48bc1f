//! Transient drag-gesture state.

use crate::model::block::BlockId;
use serde::Serialize;

/// Dragged block and current drop-target candidate.
///
/// Both fields are `None` outside an active drag gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DragState {
    pub(crate) dragged: Option<BlockId>,
    pub(crate) drop_target: Option<BlockId>,
}

impl DragState {
    /// Block being dragged, if a gesture is active.
    pub fn dragged(&self) -> Option<&BlockId> {
        self.dragged.as_ref()
    }

    /// Block currently hovered as a drop target.
    pub fn drop_target(&self) -> Option<&BlockId> {
        self.drop_target.as_ref()
    }

    /// Returns whether a drag gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    pub(crate) fn clear(&mut self) {
        self.dragged = None;
        self.drop_target = None;
    }

    /// Drops any reference to a block that left the document.
    pub(crate) fn forget(&mut self, id: &BlockId) {
        if self.dragged.as_ref() == Some(id) {
            self.clear();
        } else if self.drop_target.as_ref() == Some(id) {
            self.drop_target = None;
        }
    }
}
