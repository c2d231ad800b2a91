//! Scripted `LeaderboardApi` for controller tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::{Barrier, Notify};

use crate::net::api::LeaderboardApi;
use crate::net::error::ApiError;
use crate::net::types::{ClaimOutcome, CreatePlayer, Player};

pub(crate) fn player(id: &str, name: &str, points: u64, rank: u32) -> Player {
    Player { id: id.into(), name: name.into(), points, rank }
}

pub(crate) fn ann_and_bo() -> Vec<Player> {
    vec![player("a", "Ann", 50, 1), player("b", "Bo", 30, 2)]
}

pub(crate) fn rejected(detail: &str) -> ApiError {
    ApiError::Rejected { status: 400, detail: Some(detail.to_owned()) }
}

#[derive(Default)]
pub(crate) struct MockApi {
    calls: Mutex<Vec<String>>,
    lists: Mutex<VecDeque<Result<Vec<Player>, ApiError>>>,
    default_list: Mutex<Vec<Player>>,
    creates: Mutex<VecDeque<Result<(), ApiError>>>,
    claim: Mutex<Option<Result<ClaimOutcome, ApiError>>>,
    mutation_error: Mutex<Option<ApiError>>,
    create_barrier: Option<Arc<Barrier>>,
    list_gate: Option<Arc<Notify>>,
}

impl MockApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every list call returns `players` unless a scripted result is queued.
    pub(crate) fn with_players(self, players: Vec<Player>) -> Self {
        *self.default_list.lock().unwrap() = players;
        self
    }

    pub(crate) fn push_list(self, result: Result<Vec<Player>, ApiError>) -> Self {
        self.lists.lock().unwrap().push_back(result);
        self
    }

    /// Queue create outcomes in request order; unscripted creates succeed.
    pub(crate) fn with_creates(self, outcomes: Vec<Result<(), ApiError>>) -> Self {
        self.creates.lock().unwrap().extend(outcomes);
        self
    }

    pub(crate) fn with_claim(self, result: Result<ClaimOutcome, ApiError>) -> Self {
        *self.claim.lock().unwrap() = Some(result);
        self
    }

    /// Make reset/delete calls fail with `error`.
    pub(crate) fn failing_mutations(self, error: ApiError) -> Self {
        *self.mutation_error.lock().unwrap() = Some(error);
        self
    }

    /// Creates block on `barrier` until all of its parties have arrived.
    pub(crate) fn with_create_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.create_barrier = Some(barrier);
        self
    }

    /// List calls wait for `gate` to be notified before answering.
    pub(crate) fn with_list_gate(mut self, gate: Arc<Notify>) -> Self {
        self.list_gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn mutation_result(&self) -> Result<(), ApiError> {
        match self.mutation_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl LeaderboardApi for MockApi {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        self.log("list".to_owned());
        if let Some(gate) = &self.list_gate {
            gate.notified().await;
        }
        let scripted = self.lists.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| Ok(self.default_list.lock().unwrap().clone()))
    }

    async fn create_player(&self, request: &CreatePlayer) -> Result<Player, ApiError> {
        self.log(format!("create:{}", request.name));
        let outcome = self.creates.lock().unwrap().pop_front().unwrap_or(Ok(()));
        if let Some(barrier) = &self.create_barrier {
            barrier.wait().await;
        }
        outcome.map(|()| player(&format!("id-{}", request.name), &request.name, request.points.unwrap_or(0), 0))
    }

    async fn claim_points(&self, player_id: &str) -> Result<ClaimOutcome, ApiError> {
        self.log(format!("claim:{player_id}"));
        self.claim
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(ApiError::Rejected { status: 500, detail: None }))
    }

    async fn reset_scores(&self) -> Result<(), ApiError> {
        self.log("reset".to_owned());
        self.mutation_result()
    }

    async fn delete_player(&self, player_id: &str) -> Result<(), ApiError> {
        self.log(format!("delete:{player_id}"));
        self.mutation_result()
    }

    async fn delete_all_players(&self) -> Result<(), ApiError> {
        self.log("delete_all".to_owned());
        self.mutation_result()
    }
}
