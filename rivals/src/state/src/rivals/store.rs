use consts::REQUEST_DELAY;
use tokio::sync::watch;
use utils::retro_api::Friend;
use utils::subscriptions::GameSubscription;
use web_time::Duration;

use super::cache::RivalryCache;
use super::fetcher::StandingsFetcher;
use super::matcher::build_rivalry_friend;
use super::models::{RivalryGame, RivalrySnapshot};
use super::sorter::sort_rivalries;
use super::throttle::Throttle;

/// Rivalry results plus the progress of the run producing them.
///
/// Owned by the caller and passed by reference. Every field can be observed
/// through a `watch` receiver while a run is in flight. Only one run may be
/// active at a time; this is not checked.
pub struct RivalsState<C> {
    cache: C,
    request_delay: Duration,
    rivalry_games: watch::Sender<RivalrySnapshot>,
    loading: watch::Sender<bool>,
    loading_game_name: watch::Sender<Option<String>>,
}

impl<C: RivalryCache> RivalsState<C> {
    /// Starts from whatever the cache currently holds.
    pub fn init(cache: C) -> Self {
        let cached = cache.load();
        Self {
            cache,
            request_delay: REQUEST_DELAY,
            rivalry_games: watch::Sender::new(cached),
            loading: watch::Sender::new(false),
            loading_game_name: watch::Sender::new(None),
        }
    }

    pub fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn rivalry_games(&self) -> RivalrySnapshot {
        self.rivalry_games.borrow().clone()
    }

    pub fn watch_rivalry_games(&self) -> watch::Receiver<RivalrySnapshot> {
        self.rivalry_games.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn watch_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn loading_game_name(&self) -> Option<String> {
        self.loading_game_name.borrow().clone()
    }

    pub fn watch_loading_game_name(&self) -> watch::Receiver<Option<String>> {
        self.loading_game_name.subscribe()
    }

    /// Whether stale results can be shown while a fresh run is computed.
    pub fn has_cache(&self) -> bool {
        self.cache.has_cache()
    }

    /// Recomputes every rivalry of `caller` against `friends` over `subscriptions`.
    ///
    /// Never fails: a game whose caller standings can't be fetched, or a friend
    /// whose standings can't be fetched, is left out of the result. The cache is
    /// cleared up front and only written once the whole run is done.
    pub async fn load_rivalries<F: StandingsFetcher>(
        &self,
        fetcher: &F,
        caller: &str,
        friends: &[Friend],
        subscriptions: &[GameSubscription],
    ) -> RivalrySnapshot {
        self.loading.send_replace(true);
        self.rivalry_games.send_replace(Vec::new());
        self.cache.clear();

        if friends.is_empty() || subscriptions.is_empty() {
            log::info!(
                "nothing to compare: {} friends, {} subscribed games",
                friends.len(),
                subscriptions.len()
            );
            self.loading.send_replace(false);
            return Vec::new();
        }

        let throttle = Throttle::new(self.request_delay);

        for sub in subscriptions {
            let game_name = sub.display_name();
            self.loading_game_name.send_replace(Some(game_name.clone()));
            log::info!("comparing standings for {game_name}");

            if let Some(game) = self
                .build_rivalry_game(fetcher, &throttle, caller, friends, sub)
                .await
            {
                self.rivalry_games.send_modify(|games| games.push(game));
            }
        }

        self.rivalry_games
            .send_modify(|games| sort_rivalries(games.as_mut_slice()));
        let snapshot = self.rivalry_games();
        self.cache.save(&snapshot);

        self.loading_game_name.send_replace(None);
        self.loading.send_replace(false);
        log::info!("found rivalries in {} games", snapshot.len());

        snapshot
    }

    async fn build_rivalry_game<F: StandingsFetcher>(
        &self,
        fetcher: &F,
        throttle: &Throttle,
        caller: &str,
        friends: &[Friend],
        sub: &GameSubscription,
    ) -> Option<RivalryGame> {
        let my_standings = match fetcher.fetch(sub.game_id, caller).await {
            Ok(standings) => standings,
            Err(e) => {
                log::warn!("skipping game {}: {e}", sub.game_id);
                return None;
            }
        };

        if my_standings.is_empty() {
            log::debug!("no standings for {caller} in game {}", sub.game_id);
            return None;
        }

        let mut rivals = Vec::new();

        for friend in friends {
            throttle.wait().await;

            let friend_standings = match fetcher.fetch(sub.game_id, &friend.user).await {
                Ok(standings) => standings,
                Err(e) => {
                    log::warn!(
                        "skipping {} in game {}: {e}",
                        friend.user,
                        sub.game_id
                    );
                    continue;
                }
            };

            if let Some(rival) =
                build_rivalry_friend(&friend.user, &my_standings, &friend_standings)
            {
                log::debug!(
                    "{} vs {}: {} wins, {} losses",
                    caller,
                    rival.username,
                    rival.wins.len(),
                    rival.losses.len()
                );
                rivals.push(rival);
            }
        }

        if rivals.is_empty() {
            return None;
        }

        Some(RivalryGame {
            game_id: sub.game_id,
            game_name: sub.display_name(),
            image_icon: sub.image_icon().to_string(),
            rivals,
            total_leaderboards: my_standings.len(),
        })
    }
}
