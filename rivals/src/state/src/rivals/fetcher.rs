use utils::retro_api::{RetroClient, UpstreamError, UserGameLeaderboards};

use super::models::{Standing, UserGameStandings};

/// Source of one user's standings for one game. Implementations do not retry.
#[allow(async_fn_in_trait)]
pub trait StandingsFetcher {
    async fn fetch(&self, game_id: u32, username: &str)
        -> Result<UserGameStandings, UpstreamError>;
}

/// Keeps the leaderboards the user placed on, in upstream order.
pub fn standings_from(leaderboards: UserGameLeaderboards) -> UserGameStandings {
    leaderboards
        .results
        .into_iter()
        .filter_map(|lb| {
            let entry = lb.user_entry?;
            Some(Standing {
                leaderboard_id: lb.id,
                leaderboard_title: lb.title,
                rank: entry.rank,
                formatted_score: entry.formatted_score,
            })
        })
        .collect()
}

impl StandingsFetcher for RetroClient {
    async fn fetch(
        &self,
        game_id: u32,
        username: &str,
    ) -> Result<UserGameStandings, UpstreamError> {
        let leaderboards = self.fetch_user_game_leaderboards(game_id, username).await?;
        Ok(standings_from(leaderboards))
    }
}
