//! Core block-sequence editing engine for BlockNote.
//! This crate is the single source of truth for document and focus invariants.

pub mod config;
pub mod engine;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod view;

pub use config::{ConfigError, EditorConfig, SplitMode};
pub use engine::directive::{CursorHint, Direction, FocusDirective};
pub use engine::drag::DragState;
pub use engine::id_gen::{BlockIdGenerator, SequentialBlockIdGenerator, UuidBlockIdGenerator};
pub use engine::sequence::BlockSequenceEngine;
pub use gesture::dispatch::{dispatch_gesture, Gesture, GestureOutcome};
pub use gesture::key::{parse_editor_key, require_editor_key, EditorKey, UnknownKeyError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::block::{Block, BlockId};
pub use model::document::Document;
pub use view::placeholder::placeholder_for;
pub use view::snapshot::{BlockView, EditorSnapshot};
pub use view::surface::{apply_directive, CaretEdge, CaretSurface};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
