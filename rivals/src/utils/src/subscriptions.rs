use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GameInfo {
    pub name: String,
    #[serde(default)]
    pub image_icon: String,
}

/// A game the user follows, as exported from the subscription list service.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct GameSubscription {
    pub game_id: u32,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    pub games: Option<GameInfo>,
}

impl GameSubscription {
    pub fn new(game_id: u32, name: impl Into<String>, image_icon: impl Into<String>) -> Self {
        Self {
            game_id,
            created_at: Utc::now(),
            games: Some(GameInfo {
                name: name.into(),
                image_icon: image_icon.into(),
            }),
        }
    }

    pub fn display_name(&self) -> String {
        match &self.games {
            Some(info) => info.name.clone(),
            None => self.game_id.to_string(),
        }
    }

    pub fn image_icon(&self) -> &str {
        self.games
            .as_ref()
            .map_or("", |info| info.image_icon.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("couldn't read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid subscription list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Parses a subscription list, newest subscription first.
pub fn parse_subscriptions(raw: &str) -> Result<Vec<GameSubscription>, SubscriptionError> {
    let mut subs: Vec<GameSubscription> = serde_json::from_str(raw)?;
    subs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(subs)
}

pub fn load_subscriptions(path: &Path) -> Result<Vec<GameSubscription>, SubscriptionError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SubscriptionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_subscriptions(&raw)
}
