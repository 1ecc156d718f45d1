//! Common test utilities and fixtures

use anyhow::anyhow;
use std::collections::HashMap;

use rust_invest::api::MarketDataProvider;
use rust_invest::models::{PriceBar, SecurityProfile, SecuritySnapshot};

/// In-memory provider serving scripted responses per symbol. Symbols
/// without a script behave like unknown tickers (fetch error).
#[derive(Default)]
pub struct ScriptedProvider {
    histories: HashMap<String, Vec<PriceBar>>,
    profiles: HashMap<String, SecurityProfile>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ticker(
        mut self,
        symbol: &str,
        bars: Vec<PriceBar>,
        profile: SecurityProfile,
    ) -> Self {
        self.histories.insert(symbol.to_string(), bars);
        self.profiles.insert(symbol.to_string(), profile);
        self
    }
}

#[async_trait::async_trait]
impl MarketDataProvider for ScriptedProvider {
    async fn price_history(
        &self,
        symbol: &str,
        _lookback_days: u32,
    ) -> anyhow::Result<Vec<PriceBar>> {
        self.histories
            .get(symbol)
            .cloned()
            .ok_or_else(|| anyhow!("unknown symbol: {}", symbol))
    }

    async fn profile(&self, symbol: &str) -> anyhow::Result<SecurityProfile> {
        self.profiles
            .get(symbol)
            .cloned()
            .ok_or_else(|| anyhow!("unknown symbol: {}", symbol))
    }
}

/// Test data builders
pub mod test_data {
    use super::*;
    use chrono::NaiveDate;

    /// A daily history running from `first_close` to `last_close` with
    /// flat closes in between
    pub fn history(first_close: f64, last_close: f64, samples: usize, volume: i64) -> Vec<PriceBar> {
        let start = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        (0..samples)
            .map(|i| PriceBar {
                date: start + chrono::Duration::days(i as i64),
                close: match i {
                    0 => first_close,
                    i if i == samples - 1 => last_close,
                    _ => first_close,
                },
                volume,
            })
            .collect()
    }

    /// A profile that clears every default quality filter
    pub fn passing_profile(name: &str) -> SecurityProfile {
        SecurityProfile {
            long_name: Some(name.to_string()),
            current_price: Some(500.0),
            trailing_pe: Some(28.5),
            market_cap: Some(120_000_000_000.0),
            sector: Some("Technology".to_string()),
            industry: Some("Software".to_string()),
            profit_margin: Some(0.18),
            fifty_two_week_high: Some(620.0),
            fifty_two_week_low: Some(340.0),
            return_on_equity: Some(0.21),
            dividend_yield: Some(0.012),
        }
    }

    /// A snapshot that clears every default quality filter
    pub fn passing_snapshot(symbol: &str, returns_52w: f64) -> SecuritySnapshot {
        SecuritySnapshot {
            symbol: symbol.to_string(),
            name: symbol.trim_end_matches(".NS").to_string(),
            current_price: 500.0,
            returns_52w,
            market_cap: Some(120_000_000_000.0),
            pe_ratio: Some(28.5),
            sector: Some("Technology".to_string()),
            profit_margin: Some(0.18),
            avg_volume: 900_000.0,
        }
    }
}
