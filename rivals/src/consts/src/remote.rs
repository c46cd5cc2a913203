use once_cell::sync::Lazy;
use reqwest::Url;

pub static RETRO_API_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://retroachievements.org").unwrap());

pub const USER_GAME_LEADERBOARDS_PATH: &str = "API/API_GetUserGameLeaderboards.php";
pub const USERS_I_FOLLOW_PATH: &str = "API/API_GetUsersIFollow.php";
