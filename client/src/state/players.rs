//! Player list store: the last applied fetch plus its loading/error status.
//!
//! DESIGN
//! ======
//! The list is only ever replaced wholesale by a fetch result. Each fetch is
//! tagged with a sequence number when issued; a result older than the newest
//! one already applied is dropped, so overlapping refreshes cannot roll the
//! list back to an earlier server snapshot.
//!
//! `loading()` covers two independent sources: the newest fetch not yet
//! resolved, and bulk batches still in flight. Each source clears only its
//! own part, so a fetch that resolves mid-batch leaves the batch visible.

#[cfg(test)]
#[path = "players_test.rs"]
mod players_test;

use crate::net::error::ApiError;
use crate::net::types::Player;

/// Snapshot of the remotely ranked player list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerListState {
    /// Players in the order the service ranked them.
    pub players: Vec<Player>,
    /// Standing error from the most recent failed fetch.
    pub error: Option<String>,
    issued_seq: u64,
    applied_seq: u64,
    fetch_pending: bool,
    batches_in_flight: u32,
}

impl PlayerListState {
    /// Mark a fetch as in flight and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.fetch_pending = true;
        self.issued_seq
    }

    /// Whether the latest fetch or any batch is still outstanding.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.fetch_pending || self.batches_in_flight > 0
    }

    pub fn begin_batch(&mut self) {
        self.batches_in_flight += 1;
    }

    pub fn end_batch(&mut self) {
        self.batches_in_flight = self.batches_in_flight.saturating_sub(1);
    }

    /// Apply a fetch result. Returns `false` if the result was stale and ignored.
    ///
    /// On failure the previous list is kept and only the error is replaced.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<Vec<Player>, &ApiError>) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        if seq == self.issued_seq {
            self.fetch_pending = false;
        }
        match result {
            Ok(players) => {
                self.players = players;
                self.error = None;
            }
            Err(error) => self.error = Some(list_error_message(error)),
        }
        true
    }

    /// Look up a player in the current list.
    #[must_use]
    pub fn find(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}

/// Banner text for a failed list fetch.
#[must_use]
pub fn list_error_message(error: &ApiError) -> String {
    if error.is_unreachable() {
        return "Cannot reach the leaderboard service. Check that it is running.".to_owned();
    }
    match error.detail() {
        Some(detail) => format!("Leaderboard service error: {detail}"),
        None => "Leaderboard service returned an error.".to_owned(),
    }
}
