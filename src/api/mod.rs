use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::models::{PriceBar, SecurityProfile};

pub mod yahoo_client;
pub use yahoo_client::YahooFinanceClient;

/// Simple rate limiter enforcing a minimum delay between requests.
///
/// The lock is held across the sleep so concurrent workers sharing one
/// limiter are paced as a group, not individually.
pub struct ApiRateLimiter {
    min_delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl ApiRateLimiter {
    pub fn new(min_delay_ms: u64) -> Self {
        Self {
            min_delay: Duration::from_millis(min_delay_ms),
            last_request: Mutex::new(None),
        }
    }

    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Common trait for market-data providers
#[async_trait::async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Trailing daily price history for a symbol, oldest sample first
    async fn price_history(&self, symbol: &str, lookback_days: u32) -> Result<Vec<PriceBar>>;

    /// Descriptive metadata for a symbol; unknown fields come back as None
    async fn profile(&self, symbol: &str) -> Result<SecurityProfile>;
}
