//! Block-sequence editing engine.
//!
//! # Responsibility
//! - Maintain block identity, order, focus, and drag state.
//! - Emit focus/caret directives for the rendering surface.
//!
//! # Invariants
//! - All engine operations are total; unknown ids are ignored.
//! - No engine operation performs I/O or blocks.

pub mod directive;
pub mod drag;
pub mod id_gen;
pub mod sequence;
