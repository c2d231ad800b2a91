//! Networking modules for the leaderboard REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls behind the `LeaderboardApi` trait, `error`
//! classifies transport failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
