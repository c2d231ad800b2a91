//! Bulk player generation: scatter N create requests, gather every outcome.
//!
//! DESIGN
//! ======
//! All requests are issued at once and awaited together with `join_all`, so
//! one failure never cancels or delays the others. Failures are not
//! classified; only the aggregate count decides the notification and whether
//! a refresh follows.

#[cfg(test)]
#[path = "bulk_test.rs"]
mod bulk_test;

use futures::future::join_all;

use super::{Controller, messages};
use crate::net::error::ApiError;
use crate::net::types::{CreatePlayer, Player};
use crate::util::names;

/// Players created by one "generate test players" action.
pub const GENERATE_BATCH_SIZE: usize = 10;

/// One create request that did not succeed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchFailure {
    pub name: String,
    pub error: ApiError,
}

/// Aggregated outcome of a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub created: Vec<Player>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    #[must_use]
    pub fn requested(&self) -> usize {
        self.created.len() + self.failures.len()
    }

    #[must_use]
    pub fn success_count(&self) -> usize {
        self.created.len()
    }

    fn record(mut self, name: String, result: Result<Player, ApiError>) -> Self {
        match result {
            Ok(player) => self.created.push(player),
            Err(error) => {
                log::warn!("generate: create '{name}' failed: {error}");
                self.failures.push(BatchFailure { name, error });
            }
        }
        self
    }
}

impl Controller {
    /// Generate the standard batch of randomly named test players.
    pub async fn generate_test_players(&self) -> BatchReport {
        self.generate_players(GENERATE_BATCH_SIZE).await
    }

    /// Generate `count` randomly named players.
    pub async fn generate_players(&self, count: usize) -> BatchReport {
        let names = names::random_names(&mut rand::rng(), count);
        self.create_batch(names).await
    }

    /// Create one player per name concurrently and report the aggregate.
    ///
    /// Refreshes the list only when at least one player was created.
    pub async fn create_batch(&self, names: Vec<String>) -> BatchReport {
        if names.is_empty() {
            return BatchReport::default();
        }
        if self.update_live(|s| s.list.begin_batch()).is_none() {
            return BatchReport::default();
        }

        let requests: Vec<CreatePlayer> = names.into_iter().map(CreatePlayer::named).collect();
        let results = join_all(requests.iter().map(|request| self.api.create_player(request))).await;
        let report = requests
            .into_iter()
            .zip(results)
            .fold(BatchReport::default(), |report, (request, result)| report.record(request.name, result));

        log::info!("generate: {} of {} players created", report.success_count(), report.requested());
        if self.update_live(|s| s.list.end_batch()).is_none() {
            return report;
        }
        if report.created.is_empty() {
            self.notify(messages::batch_failed(report.requested()));
        } else {
            self.notify(messages::batch_created(report.success_count(), report.requested()));
            self.refresh().await;
        }
        report
    }
}
