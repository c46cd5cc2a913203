use serde::{Deserialize, Serialize};

/// A user's placement on one leaderboard. Only exists when the user has an entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub leaderboard_id: u32,
    pub leaderboard_title: String,
    pub rank: u32,
    pub formatted_score: String,
}

/// One user's standings across the leaderboards of one game, in upstream order.
pub type UserGameStandings = Vec<Standing>;

/// A leaderboard where both users placed, on different ranks.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub leaderboard_id: u32,
    pub leaderboard_title: String,
    pub my_rank: u32,
    pub friend_rank: u32,
    pub my_score: String,
    pub friend_score: String,
}

impl Battle {
    pub fn is_win(&self) -> bool {
        self.my_rank < self.friend_rank
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RivalryFriend {
    pub username: String,
    pub wins: Vec<Battle>,
    pub losses: Vec<Battle>,
}

impl RivalryFriend {
    pub fn battle_count(&self) -> usize {
        self.wins.len() + self.losses.len()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RivalryGame {
    pub game_id: u32,
    pub game_name: String,
    pub image_icon: String,
    pub rivals: Vec<RivalryFriend>,
    /// Leaderboards the caller placed on for this game.
    pub total_leaderboards: usize,
}

impl RivalryGame {
    pub fn battle_count(&self) -> usize {
        self.rivals.iter().map(RivalryFriend::battle_count).sum()
    }

    pub fn win_count(&self) -> usize {
        self.rivals.iter().map(|r| r.wins.len()).sum()
    }

    pub fn loss_count(&self) -> usize {
        self.rivals.iter().map(|r| r.losses.len()).sum()
    }
}

/// Result of one full computation run; the unit stored in the cache.
pub type RivalrySnapshot = Vec<RivalryGame>;
