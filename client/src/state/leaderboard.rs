//! Aggregate client state published to views after every change.

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use super::dialog::DialogState;
use super::notification::Notification;
use super::players::PlayerListState;
use super::selection::Selection;
use crate::net::error::ApiError;
use crate::net::types::Player;

/// Everything a view needs to render the leaderboard.
///
/// In the Leptos UI a clone of this lives in an `RwSignal` that the
/// controller refreshes on each change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardState {
    pub list: PlayerListState,
    pub selection: Selection,
    pub notification: Notification,
    pub dialog: DialogState,
}

impl LeaderboardState {
    /// Apply a list fetch result and keep the selection valid against it.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<Vec<Player>, &ApiError>) -> bool {
        let succeeded = result.is_ok();
        let applied = self.list.apply_fetch(seq, result);
        if applied && succeeded {
            self.selection.reconcile(&self.list.players);
        }
        applied
    }

    /// Select a player from the current list; stale ids are ignored.
    pub fn select_player(&mut self, player_id: &str) -> bool {
        self.selection.select(player_id, &self.list.players)
    }

    /// The currently selected player, if present in the list.
    #[must_use]
    pub fn selected_player(&self) -> Option<&Player> {
        self.selection.resolve(&self.list.players)
    }
}
