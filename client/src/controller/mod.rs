//! Leaderboard controller: the single owner of client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call controller methods; the controller talks to the service through
//! `LeaderboardApi`, mutates `LeaderboardState`, and publishes a snapshot to
//! its change listener. Mutations never edit the player list locally: every
//! successful (or attempted) mutation is followed by a full `refresh()`.
//!
//! CONCURRENCY
//! ===========
//! The state lock is never held across an `.await`. Once `shutdown()` runs,
//! late responses are discarded without touching state.


#[cfg(test)]
pub(crate) mod mock_api;

pub mod bulk;
pub mod dialogs;
pub mod messages;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::api::LeaderboardApi;
use crate::state::leaderboard::LeaderboardState;
use crate::state::notification::NOTIFICATION_TTL;
use crate::util::runtime;

/// Callback receiving a fresh snapshot after every state change.
pub type ChangeListener = Arc<dyn Fn(&LeaderboardState) + Send + Sync>;

/// Cheaply cloneable handle; clones share state.
#[derive(Clone)]
pub struct Controller {
    api: Arc<dyn LeaderboardApi>,
    state: Arc<Mutex<LeaderboardState>>,
    listener: Option<ChangeListener>,
    alive: Arc<AtomicBool>,
}

impl Controller {
    #[must_use]
    pub fn new(api: Arc<dyn LeaderboardApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(LeaderboardState::default())),
            listener: None,
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Publish snapshots to `listener` after each change.
    #[must_use]
    pub fn with_listener(mut self, listener: impl Fn(&LeaderboardState) + Send + Sync + 'static) -> Self {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> LeaderboardState {
        self.read(LeaderboardState::clone)
    }

    /// Stop applying results. In-flight requests still complete but are ignored.
    pub fn shutdown(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    fn read<R>(&self, f: impl FnOnce(&LeaderboardState) -> R) -> R {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn update<R>(&self, f: impl FnOnce(&mut LeaderboardState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            let result = f(&mut state);
            (result, self.listener.as_ref().map(|_| state.clone()))
        };
        if let (Some(listener), Some(snapshot)) = (&self.listener, snapshot) {
            listener(&snapshot);
        }
        result
    }

    /// `update`, skipped once the controller has shut down.
    fn update_live<R>(&self, f: impl FnOnce(&mut LeaderboardState) -> R) -> Option<R> {
        if !self.is_alive() {
            return None;
        }
        Some(self.update(f))
    }

    /// Re-fetch the full player list from the service.
    pub async fn refresh(&self) {
        let Some(seq) = self.update_live(|s| s.list.begin_fetch()) else {
            return;
        };
        let result = self.api.list_players().await;
        let applied = self.update_live(|s| match result {
            Ok(players) => {
                log::info!("player list refreshed: {} players (seq={seq})", players.len());
                s.apply_fetch(seq, Ok(players))
            }
            Err(error) => {
                log::warn!("player list fetch failed (seq={seq}): {error}");
                s.apply_fetch(seq, Err(&error))
            }
        });
        if applied == Some(false) {
            log::debug!("dropped stale player list response (seq={seq})");
        }
    }

    /// Target `player_id` for the next claim. Ids not in the current list are ignored.
    pub fn select_player(&self, player_id: &str) -> bool {
        self.update(|s| s.select_player(player_id))
    }

    /// Claim points for the selected player, then refresh on success.
    /// Returns whether the service accepted the claim.
    pub async fn claim_points(&self) -> bool {
        let Some(player_id) = self.read(|s| s.selection.player_id().map(ToOwned::to_owned)) else {
            self.notify(messages::SELECT_PLAYER_FIRST);
            return false;
        };
        match self.api.claim_points(&player_id).await {
            Ok(outcome) => {
                log::info!("{} claimed {} points", outcome.updated_user.name, outcome.points_claimed);
                self.notify(messages::points_claimed(&outcome.updated_user.name, outcome.points_claimed));
                self.refresh().await;
                true
            }
            Err(error) => {
                log::warn!("claim for {player_id} failed: {error}");
                self.notify(messages::failure("Failed to claim points", &error));
                false
            }
        }
    }

    /// Show `text` for [`NOTIFICATION_TTL`], replacing any current message.
    pub fn notify(&self, text: impl Into<String>) {
        let Some(generation) = self.update_live(|s| s.notification.set(text)) else {
            return;
        };
        let this = self.clone();
        runtime::spawn(async move {
            runtime::sleep(NOTIFICATION_TTL).await;
            this.update_live(|s| s.notification.expire(generation));
        });
    }

    pub fn dismiss_notification(&self) {
        self.update(|s| s.notification.dismiss());
    }
}
