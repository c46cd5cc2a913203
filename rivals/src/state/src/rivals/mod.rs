pub mod cache;
pub mod fetcher;
pub mod matcher;
pub mod models;
pub mod sorter;
mod store;
mod throttle;

pub use cache::{MemoryRivalryCache, RivalryCache, StoredRivalryCache};
pub use fetcher::StandingsFetcher;
pub use models::*;
pub use store::RivalsState;
pub use throttle::Throttle;
