mod remote;
pub use remote::*;

use web_time::Duration;

/// Minimum wait before every friend standings request.
pub const REQUEST_DELAY: Duration = Duration::from_millis(300);

pub const RIVALS_CACHE_KEY: &str = "rivals_cache";
pub const RIVALS_STORE_TABLE: &str = "rivals";

pub const DEFAULT_CACHE_PATH: &str = "rivals.redb";
pub const DEFAULT_SUBSCRIPTIONS_PATH: &str = "subscriptions.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub mod env {
    pub const API_URL: &str = "RA_API_URL";
    pub const API_KEY: &str = "RA_API_KEY";
    pub const USERNAME: &str = "RA_USERNAME";
    pub const CACHE_PATH: &str = "RIVALS_CACHE_PATH";
    pub const SUBSCRIPTIONS_PATH: &str = "RIVALS_SUBSCRIPTIONS_PATH";
    pub const REQUEST_DELAY_MS: &str = "RIVALS_REQUEST_DELAY_MS";
    pub const LOG_LEVEL: &str = "RIVALS_LOG_LEVEL";
}
