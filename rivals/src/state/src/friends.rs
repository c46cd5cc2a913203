use tokio::sync::OnceCell;
use utils::retro_api::{Friend, RetroClient, UpstreamError};

#[allow(async_fn_in_trait)]
pub trait FriendsSource {
    async fn fetch_friends(&self) -> Result<Vec<Friend>, UpstreamError>;
}

impl FriendsSource for RetroClient {
    async fn fetch_friends(&self) -> Result<Vec<Friend>, UpstreamError> {
        let friends = RetroClient::fetch_friends(self).await?;
        Ok(friends.results)
    }
}

/// The users the caller follows, fetched at most once per process.
#[derive(Default)]
pub struct FriendsState {
    friends: OnceCell<Vec<Friend>>,
}

impl FriendsState {
    pub fn friends(&self) -> Option<&[Friend]> {
        self.friends.get().map(Vec::as_slice)
    }

    /// A failed fetch leaves the state empty so the next call tries again.
    pub async fn load<S: FriendsSource>(&self, source: &S) -> Result<&[Friend], UpstreamError> {
        let friends = self
            .friends
            .get_or_try_init(|| source.fetch_friends())
            .await?;
        Ok(friends.as_slice())
    }
}
