use anyhow::Context;
use state::friends::FriendsState;
use state::rivals::{RivalryCache, RivalrySnapshot, RivalsState, StoredRivalryCache};
use utils::retro_api::RetroClient;
use utils::storage::RedbStore;
use utils::subscriptions::load_subscriptions;

use crate::config::AppConfig;

fn open_cache(config: &AppConfig) -> anyhow::Result<StoredRivalryCache<RedbStore>> {
    let store = RedbStore::open(&config.cache_path).with_context(|| {
        format!(
            "Couldn't open the rivals cache at {}",
            config.cache_path.display()
        )
    })?;
    Ok(StoredRivalryCache::new(store))
}

fn print_snapshot(snapshot: &RivalrySnapshot) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(snapshot)?;
    println!("{out}");
    Ok(())
}

/// Prints the last computed rivalries without touching the network.
pub fn show(config: &AppConfig) -> anyhow::Result<()> {
    let cache = open_cache(config)?;
    if !cache.has_cache() {
        log::info!("no cached rivalries, run `rivals refresh` first");
    }
    print_snapshot(&cache.load())
}

pub async fn refresh(config: &AppConfig) -> anyhow::Result<()> {
    let state = RivalsState::init(open_cache(config)?).with_request_delay(config.request_delay);

    if state.has_cache() {
        log::info!("showing cached rivalries while refreshing");
        print_snapshot(&state.rivalry_games())?;
    }

    let client = RetroClient::new(config.api_url.clone(), config.api_key.clone());
    let friends_state = FriendsState::default();
    let friends = friends_state
        .load(&client)
        .await
        .context("Couldn't load the friend list")?;
    let subscriptions = load_subscriptions(&config.subscriptions_path)
        .context("Couldn't load game subscriptions")?;

    log::info!(
        "comparing {} against {} friends in {} games",
        config.username,
        friends.len(),
        subscriptions.len()
    );

    let snapshot = state
        .load_rivalries(&client, &config.username, friends, &subscriptions)
        .await;

    for game in &snapshot {
        log::info!(
            "{}: {} rivals, {} wins / {} losses over {} leaderboards",
            game.game_name,
            game.rivals.len(),
            game.win_count(),
            game.loss_count(),
            game.total_leaderboards
        );
    }

    print_snapshot(&snapshot)
}
