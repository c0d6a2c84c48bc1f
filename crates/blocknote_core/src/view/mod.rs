//! Engine-to-host presentation contract.
//!
//! # Responsibility
//! - Project engine state into render-ready snapshots.
//! - Define the caret seam a rendering surface implements.
//!
//! # Invariants
//! - Nothing in this module mutates engine state.

pub mod placeholder;
pub mod snapshot;
pub mod surface;
