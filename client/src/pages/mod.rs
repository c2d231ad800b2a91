//! Page modules for screen-level layout.
//!
//! ARCHITECTURE
//! ============
//! A page owns screen orchestration and delegates rendering details to
//! `components`.

pub mod leaderboard;
