//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure view helpers (`podium`, `names`) stay free of state so they can be
//! tested directly; `runtime` isolates target-specific task plumbing.

pub mod names;
pub mod podium;
pub mod runtime;
