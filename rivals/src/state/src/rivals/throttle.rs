use web_time::Duration;

/// Fixed wait issued before every upstream request it guards.
///
/// Only bounds the request rate while requests are awaited one at a time.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval: Duration,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn wait(&self) {
        tokio::time::sleep(self.interval).await;
    }
}
