//! Podium ordering for the top-three display.

#[cfg(test)]
#[path = "podium_test.rs"]
mod podium_test;

use crate::net::types::Player;

/// Number of players shown on the podium.
pub const PODIUM_SIZE: usize = 3;

/// List positions (0-based) in display order: second, first, third.
const DISPLAY_ORDER: [usize; PODIUM_SIZE] = [1, 0, 2];

/// One podium step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PodiumSlot<'a> {
    /// 1-based place within the list as delivered (1 = first).
    pub place: usize,
    pub player: &'a Player,
}

/// Reorder the leading players as `[2nd, 1st, 3rd]`, skipping missing places.
#[must_use]
pub fn podium(players: &[Player]) -> Vec<PodiumSlot<'_>> {
    DISPLAY_ORDER
        .iter()
        .filter_map(|&index| players.get(index).map(|player| PodiumSlot { place: index + 1, player }))
        .collect()
}

/// Players ranked below the podium, in list order.
#[must_use]
pub fn runners_up(players: &[Player]) -> &[Player] {
    players.get(PODIUM_SIZE..).unwrap_or_default()
}
