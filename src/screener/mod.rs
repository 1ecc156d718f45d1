//! 52-week return stock screener.
//!
//! Pulls trailing-1-year daily history plus metadata for every ticker in
//! a universe, drops tickers without usable data, applies quality
//! filters, and ranks survivors by descending 52-week return.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::api::MarketDataProvider;
use crate::models::{Config, FilterChecks, QualityCriteria, SecuritySnapshot, SkipReason};

pub mod report;
pub mod universe;
pub use universe::NSE_UNIVERSE;

/// Trailing window requested from the provider
pub const LOOKBACK_DAYS: u32 = 365;

/// Configuration for a screening run
#[derive(Debug, Clone)]
pub struct ScreenerConfig {
    /// Minimum usable sample count; guards against fresh listings
    pub min_history_samples: usize,
    pub max_concurrent_requests: usize,
    pub criteria: QualityCriteria,
}

impl Default for ScreenerConfig {
    fn default() -> Self {
        Self {
            min_history_samples: 200,
            max_concurrent_requests: 4,
            criteria: QualityCriteria::default(),
        }
    }
}

impl ScreenerConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_history_samples: config.min_history_samples,
            max_concurrent_requests: config.max_concurrent_requests.max(1),
            criteria: config.criteria.clone(),
        }
    }
}

/// Caller misuse; per-ticker failures never surface here
#[derive(Debug, Error, PartialEq)]
pub enum ScreenerError {
    #[error("ticker universe must not be empty")]
    EmptyUniverse,
    #[error("top_n must be positive, got {0}")]
    InvalidTopN(usize),
}

/// Full result of one screening run. `ranked` holds the top-N
/// survivors; the skip and rejection ledgers keep every drop cause
/// inspectable.
#[derive(Debug, Clone)]
pub struct ScreenOutcome {
    pub universe_size: usize,
    pub requested_top_n: usize,
    /// Snapshots that passed every quality filter, before truncation
    pub survivor_count: usize,
    pub ranked: Vec<SecuritySnapshot>,
    pub skipped: Vec<(String, SkipReason)>,
    pub filter_rejected: Vec<(String, FilterChecks)>,
    pub criteria: QualityCriteria,
}

impl ScreenOutcome {
    /// Render the deterministic text leaderboard
    pub fn render(&self) -> String {
        report::render(self)
    }
}

/// Stock screener over a market-data provider
pub struct StockScreener {
    provider: Arc<dyn MarketDataProvider>,
    config: ScreenerConfig,
}

impl StockScreener {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: ScreenerConfig) -> Self {
        Self { provider, config }
    }

    /// Screen a ticker universe and rank survivors by 52-week return.
    ///
    /// Tickers are evaluated independently with bounded concurrency;
    /// the shared provider rate limiter keeps the aggregate request
    /// rate at the sequential ceiling. Ranking happens only after every
    /// ticker has finished.
    pub async fn screen(
        &self,
        universe: &[String],
        top_n: usize,
    ) -> Result<ScreenOutcome, ScreenerError> {
        if universe.is_empty() {
            return Err(ScreenerError::EmptyUniverse);
        }
        if top_n == 0 {
            return Err(ScreenerError::InvalidTopN(top_n));
        }

        info!("🔍 Screening {} NSE tickers for 52-week performance", universe.len());

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_requests));

        let mut evaluations: Vec<(usize, String, Result<SecuritySnapshot, SkipReason>)> =
            stream::iter(universe.iter().cloned().enumerate())
                .map(|(index, symbol)| {
                    let provider = Arc::clone(&self.provider);
                    let semaphore = Arc::clone(&semaphore);
                    let min_samples = self.config.min_history_samples;

                    async move {
                        let _permit = semaphore.acquire().await.unwrap();
                        let result =
                            evaluate_ticker(provider.as_ref(), &symbol, min_samples).await;
                        (index, symbol, result)
                    }
                })
                .buffer_unordered(self.config.max_concurrent_requests)
                .collect()
                .await;

        // Workers complete out of order; restore universe order so the
        // stable sort breaks return ties by first-encountered position
        evaluations.sort_by_key(|(index, _, _)| *index);

        let mut survivors = Vec::new();
        let mut skipped = Vec::new();
        let mut filter_rejected = Vec::new();

        for (_, symbol, result) in evaluations {
            match result {
                Ok(snapshot) => {
                    let checks = self.config.criteria.evaluate(&snapshot);
                    if checks.all() {
                        survivors.push(snapshot);
                    } else {
                        debug!("🚫 {} rejected by quality filters", symbol);
                        filter_rejected.push((symbol, checks));
                    }
                }
                Err(reason) => {
                    debug!("⏭️  {} skipped: {}", symbol, reason);
                    skipped.push((symbol, reason));
                }
            }
        }

        let survivor_count = survivors.len();
        survivors.sort_by(|a, b| {
            b.returns_52w
                .partial_cmp(&a.returns_52w)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        survivors.truncate(top_n);

        info!(
            "✅ {} of {} tickers passed quality filters, returning top {}",
            survivor_count,
            universe.len(),
            survivors.len()
        );

        Ok(ScreenOutcome {
            universe_size: universe.len(),
            requested_top_n: top_n,
            survivor_count,
            ranked: survivors,
            skipped,
            filter_rejected,
            criteria: self.config.criteria.clone(),
        })
    }

    /// Screen and render in one call; the report-consumer contract
    pub async fn screen_report(
        &self,
        universe: &[String],
        top_n: usize,
    ) -> Result<String, ScreenerError> {
        Ok(self.screen(universe, top_n).await?.render())
    }
}

/// Evaluate one ticker into a snapshot, or the reason it was dropped.
/// Fetch errors (network, malformed payload, unknown symbol, timeout)
/// all map to `SkipReason::Fetch`.
async fn evaluate_ticker(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    min_samples: usize,
) -> Result<SecuritySnapshot, SkipReason> {
    let bars = provider
        .price_history(symbol, LOOKBACK_DAYS)
        .await
        .map_err(|e| SkipReason::Fetch(e.to_string()))?;

    if bars.len() < min_samples {
        return Err(SkipReason::InsufficientHistory {
            samples: bars.len(),
            required: min_samples,
        });
    }

    let first_close = bars[0].close;
    let last_close = bars[bars.len() - 1].close;

    if first_close == 0.0 {
        return Err(SkipReason::ZeroBaselineClose);
    }

    let returns_52w = (last_close - first_close) / first_close * 100.0;
    let avg_volume = bars.iter().map(|b| b.volume as f64).sum::<f64>() / bars.len() as f64;

    let profile = provider
        .profile(symbol)
        .await
        .map_err(|e| SkipReason::Fetch(e.to_string()))?;

    Ok(SecuritySnapshot {
        symbol: symbol.to_string(),
        name: profile
            .long_name
            .clone()
            .unwrap_or_else(|| symbol.trim_end_matches(".NS").to_string()),
        current_price: profile.current_price.unwrap_or(last_close),
        returns_52w,
        market_cap: profile.market_cap,
        pe_ratio: profile.trailing_pe,
        sector: profile.sector,
        profit_margin: profile.profit_margin,
        avg_volume,
    })
}
