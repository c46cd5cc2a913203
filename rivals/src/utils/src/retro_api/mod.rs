mod types;

pub use types::*;

use consts::{USERS_I_FOLLOW_PATH, USER_GAME_LEADERBOARDS_PATH};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a single upstream call. Callers decide whether it is fatal.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to build url: {0}")]
    Url(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("api error: {0}")]
    Status(StatusCode),
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct RetroClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl RetroClient {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url, UpstreamError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| UpstreamError::Url(e.to_string()))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("y", &self.api_key);
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        log::debug!("GET {}", url.path());
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        // decoded separately so a malformed body surfaces as `Decode`
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Every leaderboard of `game_id`, with `username`'s entry where one exists.
    pub async fn fetch_user_game_leaderboards(
        &self,
        game_id: u32,
        username: &str,
    ) -> Result<UserGameLeaderboards, UpstreamError> {
        let url = self.endpoint(
            USER_GAME_LEADERBOARDS_PATH,
            &[("i", game_id.to_string()), ("u", username.to_string())],
        )?;
        self.get_json(url).await
    }

    pub async fn fetch_friends(&self) -> Result<Friends, UpstreamError> {
        let url = self.endpoint(USERS_I_FOLLOW_PATH, &[])?;
        self.get_json(url).await
    }
}
