//! Shared wire DTOs for the client/service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the leaderboard service's JSON payloads. The client
//! treats every field as server-owned: ranks and point totals are displayed,
//! never recomputed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A ranked participant as delivered by the leaderboard service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Opaque unique identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Unique display name.
    pub name: String,
    /// Current point total.
    #[serde(default)]
    pub points: u64,
    /// Dense ordinal position, 1 = highest points.
    #[serde(default)]
    pub rank: u32,
}

/// Body of a create-player request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreatePlayer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u64>,
}

impl CreatePlayer {
    /// Request for a player starting at the service's default points.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: None }
    }
}

/// The player echoed back by a claim. The service may send a partial record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClaimedPlayer {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub points: Option<u64>,
}

/// Result of a successful claim: the updated player and the awarded amount.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimOutcome {
    pub updated_user: ClaimedPlayer,
    pub points_claimed: u64,
}

/// List responses arrive either as a bare array or wrapped in `users`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PlayerListBody {
    Bare(Vec<Player>),
    Wrapped { users: Vec<Player> },
}

impl PlayerListBody {
    pub(crate) fn into_players(self) -> Vec<Player> {
        match self {
            Self::Bare(players) | Self::Wrapped { users: players } => players,
        }
    }
}
