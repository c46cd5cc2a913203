pub mod retro_api;
pub mod storage;
pub mod subscriptions;
