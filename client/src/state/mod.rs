//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`players`, `selection`, `notification`,
//! `dialog`) and aggregated in `leaderboard` so the controller can publish
//! one snapshot per change.

pub mod dialog;
pub mod leaderboard;
pub mod notification;
pub mod players;
pub mod selection;
