//! Operator-facing notification texts.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::error::ApiError;

pub const SELECT_PLAYER_FIRST: &str = "Select a player before claiming points.";
pub const SCORES_RESET: &str = "All scores have been reset.";
pub const ALL_PLAYERS_DELETED: &str = "All players have been deleted.";

/// `prefix` plus a reason that tells connectivity apart from a service rejection.
#[must_use]
pub fn failure(prefix: &str, error: &ApiError) -> String {
    if error.is_unreachable() {
        return format!("{prefix}: cannot reach the leaderboard service.");
    }
    match error.detail() {
        Some(detail) => format!("{prefix}: {detail}"),
        None => format!("{prefix}."),
    }
}

#[must_use]
pub fn points_claimed(name: &str, points: u64) -> String {
    format!("{name} claimed {points} points!")
}

#[must_use]
pub fn player_added(name: &str) -> String {
    format!("Added {name} to the leaderboard.")
}

#[must_use]
pub fn player_deleted(name: &str) -> String {
    format!("Deleted {name}.")
}

#[must_use]
pub fn batch_created(created: usize, requested: usize) -> String {
    let noun = if created == 1 { "player" } else { "players" };
    if created == requested {
        format!("Generated {created} new {noun}.")
    } else {
        format!("Generated {created} new {noun} ({} names were taken or failed).", requested - created)
    }
}

#[must_use]
pub fn batch_failed(requested: usize) -> String {
    format!("No players generated: all {requested} requests failed (names may already exist).")
}
