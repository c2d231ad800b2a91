//! Two-phase dialog flows: open with context, then confirm or cancel.
//!
//! A confirm issues exactly one request, then closes the dialog whatever the
//! outcome, posts a notification, and refreshes. Cancel never touches the
//! network. Submit and confirm methods return whether the request succeeded;
//! a call that issues no request returns `false`.

#[cfg(test)]
#[path = "dialogs_test.rs"]
mod dialogs_test;

use super::{Controller, messages};
use crate::state::dialog::{Dialog, PlayerDraft};

impl Controller {
    pub fn open_add_player(&self) {
        self.update(|s| s.dialog.open(Dialog::AddPlayer));
    }

    /// Ask to confirm deleting `player_id`. Returns `false` if it is not in the list.
    pub fn open_delete_player(&self, player_id: &str) -> bool {
        self.update(|s| {
            let Some(player) = s.list.find(player_id).cloned() else {
                return false;
            };
            s.dialog.open(Dialog::ConfirmDeletePlayer(player));
            true
        })
    }

    pub fn open_reset_scores(&self) {
        self.update(|s| s.dialog.open(Dialog::ConfirmResetScores));
    }

    pub fn open_delete_all_players(&self) {
        self.update(|s| s.dialog.open(Dialog::ConfirmDeleteAllPlayers));
    }

    /// Close the active dialog and drop its captured context.
    pub fn cancel_dialog(&self) {
        self.update(|s| s.dialog.close());
    }

    pub fn toggle_actions_menu(&self) {
        self.update(|s| s.dialog.toggle_actions_menu());
    }

    pub fn close_actions_menu(&self) {
        self.update(|s| s.dialog.actions_menu_open = false);
    }

    /// Submit the add-player dialog.
    ///
    /// Sends nothing when the draft is invalid or the dialog is not open.
    pub async fn submit_add_player(&self, draft: &PlayerDraft) -> bool {
        let Some(request) = draft.to_request() else {
            return false;
        };
        let Some(dialog) = self.update(|s| s.dialog.begin_submit(|d| matches!(d, Dialog::AddPlayer))) else {
            return false;
        };
        let (succeeded, message) = match self.api.create_player(&request).await {
            Ok(player) => {
                log::info!("added player {} ({})", player.name, player.id);
                (true, messages::player_added(&player.name))
            }
            Err(error) => {
                log::warn!("add player '{}' failed: {error}", request.name);
                (false, messages::failure("Failed to add player", &error))
            }
        };
        self.finish_submit(&dialog, message).await;
        succeeded
    }

    /// Delete the player captured by the open confirm-delete dialog.
    pub async fn confirm_delete_player(&self) -> bool {
        let Some(dialog) =
            self.update(|s| s.dialog.begin_submit(|d| matches!(d, Dialog::ConfirmDeletePlayer(_))))
        else {
            return false;
        };
        let Dialog::ConfirmDeletePlayer(player) = &dialog else {
            return false;
        };
        let (succeeded, message) = match self.api.delete_player(&player.id).await {
            Ok(()) => (true, messages::player_deleted(&player.name)),
            Err(error) => {
                log::warn!("delete player {} failed: {error}", player.id);
                (false, messages::failure(&format!("Failed to delete {}", player.name), &error))
            }
        };
        self.finish_submit(&dialog, message).await;
        succeeded
    }

    pub async fn confirm_reset_scores(&self) -> bool {
        let Some(dialog) = self.update(|s| s.dialog.begin_submit(|d| matches!(d, Dialog::ConfirmResetScores)))
        else {
            return false;
        };
        let (succeeded, message) = match self.api.reset_scores().await {
            Ok(()) => (true, messages::SCORES_RESET.to_owned()),
            Err(error) => {
                log::warn!("reset scores failed: {error}");
                (false, messages::failure("Failed to reset scores", &error))
            }
        };
        self.finish_submit(&dialog, message).await;
        succeeded
    }

    pub async fn confirm_delete_all_players(&self) -> bool {
        let Some(dialog) =
            self.update(|s| s.dialog.begin_submit(|d| matches!(d, Dialog::ConfirmDeleteAllPlayers)))
        else {
            return false;
        };
        let (succeeded, message) = match self.api.delete_all_players().await {
            Ok(()) => (true, messages::ALL_PLAYERS_DELETED.to_owned()),
            Err(error) => {
                log::warn!("delete all players failed: {error}");
                (false, messages::failure("Failed to delete players", &error))
            }
        };
        self.finish_submit(&dialog, message).await;
        succeeded
    }

    async fn finish_submit(&self, dialog: &Dialog, message: String) {
        if self.update_live(|s| s.dialog.finish_submit(dialog)).is_none() {
            return;
        }
        self.notify(message);
        self.refresh().await;
    }
}
