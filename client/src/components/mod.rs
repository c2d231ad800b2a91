//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `RwSignal<LeaderboardState>` and call the
//! `Controller` from Leptos context.

pub mod actions_menu;
pub mod dialogs;
pub mod notification_toast;
pub mod player_table;
pub mod podium;
