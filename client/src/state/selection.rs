//! Which player the next point claim targets.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::net::types::Player;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    player_id: Option<String>,
}

impl Selection {
    #[must_use]
    pub fn player_id(&self) -> Option<&str> {
        self.player_id.as_deref()
    }

    /// Select `player_id` if it belongs to `players`. Returns whether it changed.
    pub fn select(&mut self, player_id: &str, players: &[Player]) -> bool {
        if !players.iter().any(|p| p.id == player_id) {
            return false;
        }
        if self.player_id.as_deref() == Some(player_id) {
            return false;
        }
        self.player_id = Some(player_id.to_owned());
        true
    }

    /// Snap to the first player when the current selection is missing from
    /// `players`; clear when `players` is empty.
    pub fn reconcile(&mut self, players: &[Player]) {
        let Some(first) = players.first() else {
            self.player_id = None;
            return;
        };
        let present = self
            .player_id
            .as_deref()
            .is_some_and(|id| players.iter().any(|p| p.id == id));
        if !present {
            self.player_id = Some(first.id.clone());
        }
    }

    /// The selected player's record in `players`, if still present.
    #[must_use]
    pub fn resolve<'a>(&self, players: &'a [Player]) -> Option<&'a Player> {
        let id = self.player_id.as_deref()?;
        players.iter().find(|p| p.id == id)
    }
}
