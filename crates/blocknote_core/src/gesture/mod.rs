//! Thin adapter between host input events and the engine.

pub mod dispatch;
pub mod key;
