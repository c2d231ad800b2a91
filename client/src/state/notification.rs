//! Transient status message shown to the operator.
//!
//! DESIGN
//! ======
//! Each message gets a generation number. The expiry task scheduled for a
//! message only clears it if no newer message has been set since, which is
//! how a superseding message cancels the previous timer.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

use std::time::Duration;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notification {
    message: Option<String>,
    generation: u64,
}

impl Notification {
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replace the current message. Returns the generation the expiry must match.
    pub fn set(&mut self, text: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = Some(text.into());
        self.generation
    }

    /// Clear the message if `generation` is still current. Returns whether it cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    /// Dismiss immediately; pending expiries become no-ops.
    pub fn dismiss(&mut self) {
        self.generation += 1;
        self.message = None;
    }
}
