use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UserGameLeaderboards {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total: u32,
    pub results: Vec<UserGameLeaderboard>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UserGameLeaderboard {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(default)]
    pub rank_asc: bool,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub format: String,
    // null when the user never submitted to this leaderboard
    pub user_entry: Option<UserLeaderboardEntry>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct UserLeaderboardEntry {
    pub user: String,
    #[serde(rename = "ULID", default)]
    pub ulid: Option<String>,
    pub score: i64,
    pub formatted_score: String,
    pub rank: u32,
    #[serde(default)]
    pub date_updated: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Friends {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total: u32,
    pub results: Vec<Friend>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Friend {
    pub user: String,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub points_softcore: u64,
    #[serde(default)]
    pub is_following_me: bool,
}

impl Friend {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            points: 0,
            points_softcore: 0,
            is_following_me: false,
        }
    }
}
