//! Modal dialog and actions-menu state.
//!
//! DESIGN
//! ======
//! Dialogs form one tagged variant, so at most one of them governs input at
//! a time. Opening a dialog replaces whatever was open and closes the actions
//! menu; the menu itself is a separate flag because it does not block input.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use crate::net::types::{CreatePlayer, Player};

/// The modal dialog currently shown, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    AddPlayer,
    /// Confirm deleting the captured player.
    ConfirmDeletePlayer(Player),
    ConfirmResetScores,
    ConfirmDeleteAllPlayers,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogState {
    pub active: Dialog,
    pub actions_menu_open: bool,
    /// A confirmed request is in flight; further confirms are ignored.
    pub submitting: bool,
}

impl DialogState {
    pub fn open(&mut self, dialog: Dialog) {
        self.active = dialog;
        self.actions_menu_open = false;
    }

    /// Close the active dialog, dropping any captured context.
    pub fn close(&mut self) {
        self.active = Dialog::Closed;
    }

    /// Close only if `dialog` is still the one shown.
    pub fn close_if(&mut self, dialog: &Dialog) {
        if &self.active == dialog {
            self.active = Dialog::Closed;
        }
    }

    /// Mark the active dialog as submitting if `accepts` it. Returns the
    /// dialog (with its captured context) the request should act on.
    pub fn begin_submit(&mut self, accepts: impl FnOnce(&Dialog) -> bool) -> Option<Dialog> {
        if self.submitting || !accepts(&self.active) {
            return None;
        }
        self.submitting = true;
        Some(self.active.clone())
    }

    /// End a submission, closing `dialog` if it is still shown.
    pub fn finish_submit(&mut self, dialog: &Dialog) {
        self.submitting = false;
        self.close_if(dialog);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.active != Dialog::Closed
    }

    pub fn toggle_actions_menu(&mut self) {
        self.actions_menu_open = !self.actions_menu_open;
    }
}

/// Raw form input for the add-player dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerDraft {
    pub name: String,
    /// Optional initial points; blank means the service default.
    pub points: String,
}

impl PlayerDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, points: impl Into<String>) -> Self {
        Self { name: name.into(), points: points.into() }
    }

    /// Validated request, or `None` when the draft cannot be submitted.
    #[must_use]
    pub fn to_request(&self) -> Option<CreatePlayer> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let points = match self.points.trim() {
            "" => None,
            raw => Some(raw.parse::<u64>().ok()?),
        };
        Some(CreatePlayer { name: name.to_owned(), points })
    }
}
