//! REST client for the leaderboard service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `LeaderboardApi` is the only seam between client state and the network.
//! The controller depends on the trait; `HttpApi` implements it with
//! `reqwest`, which uses `fetch` in the browser and hyper natively.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Non-2xx responses become
//! `ApiError::Rejected` carrying whatever detail text the body offered.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::{ApiError, extract_detail};
use super::types::{ClaimOutcome, CreatePlayer, Player, PlayerListBody};
use crate::config::ClientConfig;

/// Operations exposed by the remote leaderboard service.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait LeaderboardApi: Send + Sync {
    /// Fetch all players in rank order.
    async fn list_players(&self) -> Result<Vec<Player>, ApiError>;

    /// Create a player. Duplicate names are rejected by the service.
    async fn create_player(&self, request: &CreatePlayer) -> Result<Player, ApiError>;

    /// Award points to a player; the amount is decided server-side.
    async fn claim_points(&self, player_id: &str) -> Result<ClaimOutcome, ApiError>;

    /// Reset every player's points to zero.
    async fn reset_scores(&self) -> Result<(), ApiError>;

    /// Delete one player.
    async fn delete_player(&self, player_id: &str) -> Result<(), ApiError>;

    /// Delete every player.
    async fn delete_all_players(&self) -> Result<(), ApiError>;
}

fn players_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/users")
}

fn player_endpoint(base_url: &str, player_id: &str) -> String {
    format!("{base_url}/api/users/{player_id}")
}

fn claim_endpoint(base_url: &str, player_id: &str) -> String {
    format!("{base_url}/api/users/{player_id}/claim")
}

fn reset_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/users/reset")
}

/// `reqwest`-backed implementation of [`LeaderboardApi`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build an HTTP client for the configured service.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the underlying client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));
        let client = builder
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { client, base_url: config.api_url.clone() })
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Rejected { status: status.as_u16(), detail: extract_detail(&body) })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl LeaderboardApi for HttpApi {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        let url = players_endpoint(&self.base_url);
        log::debug!("GET {url}");
        let body: PlayerListBody = self.send_json(self.client.get(&url)).await?;
        Ok(body.into_players())
    }

    async fn create_player(&self, request: &CreatePlayer) -> Result<Player, ApiError> {
        let url = players_endpoint(&self.base_url);
        log::debug!("POST {url} name={}", request.name);
        self.send_json(self.client.post(&url).json(request)).await
    }

    async fn claim_points(&self, player_id: &str) -> Result<ClaimOutcome, ApiError> {
        let url = claim_endpoint(&self.base_url, player_id);
        log::debug!("POST {url}");
        self.send_json(self.client.post(&url)).await
    }

    async fn reset_scores(&self) -> Result<(), ApiError> {
        let url = reset_endpoint(&self.base_url);
        log::debug!("POST {url}");
        self.send(self.client.post(&url)).await.map(|_| ())
    }

    async fn delete_player(&self, player_id: &str) -> Result<(), ApiError> {
        let url = player_endpoint(&self.base_url, player_id);
        log::debug!("DELETE {url}");
        self.send(self.client.delete(&url)).await.map(|_| ())
    }

    async fn delete_all_players(&self) -> Result<(), ApiError> {
        let url = players_endpoint(&self.base_url);
        log::debug!("DELETE {url}");
        self.send(self.client.delete(&url)).await.map(|_| ())
    }
}
