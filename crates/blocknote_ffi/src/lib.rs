//! Flutter-facing bridge crate for the BlockNote editing engine.

pub mod api;
