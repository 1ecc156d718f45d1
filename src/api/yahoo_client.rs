use anyhow::{Result, anyhow};
use chrono::DateTime;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{Config, PriceBar, SecurityProfile};
use super::{ApiRateLimiter, MarketDataProvider};

const QUOTE_SUMMARY_MODULES: &str = "price,summaryDetail,assetProfile,financialData";

/// Yahoo Finance API client
pub struct YahooFinanceClient {
    client: Client,
    base_url: String,
    rate_limiter: ApiRateLimiter,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .user_agent("rust-invest/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: config.yahoo_base_url.trim_end_matches('/').to_string(),
            rate_limiter: ApiRateLimiter::new(config.rate_limit_delay_ms),
        })
    }

    /// Make a rate-limited GET request and parse the JSON body
    async fn make_request(&self, url: &str) -> Result<Value> {
        self.rate_limiter.wait().await;

        debug!("Making request to: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("API request failed with status {}: {}", status, error_text));
        }

        let json: Value = response.json().await?;
        Ok(json)
    }

    fn range_param(lookback_days: u32) -> String {
        if lookback_days % 365 == 0 {
            format!("{}y", lookback_days / 365)
        } else {
            format!("{}d", lookback_days)
        }
    }
}

/// Yahoo wraps most numeric fields as `{"raw": n, "fmt": "..."}`; older
/// endpoints return plain numbers. Accept both.
fn raw_f64(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    value
        .as_f64()
        .or_else(|| value.get("raw").and_then(|v| v.as_f64()))
}

fn module<'a>(result: &'a Value, name: &str) -> Option<&'a Value> {
    result.get(name)
}

#[async_trait::async_trait]
impl MarketDataProvider for YahooFinanceClient {
    /// Get trailing daily price history for a symbol
    async fn price_history(&self, symbol: &str, lookback_days: u32) -> Result<Vec<PriceBar>> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url,
            symbol,
            Self::range_param(lookback_days)
        );

        let data = self.make_request(&url).await?;

        let chart = data
            .get("chart")
            .ok_or_else(|| anyhow!("Malformed chart payload for {}", symbol))?;

        if let Some(error) = chart.get("error") {
            if !error.is_null() {
                return Err(anyhow!("Chart error for {}: {}", symbol, error));
            }
        }

        let result = chart
            .get("result")
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .ok_or_else(|| anyhow!("No chart result for {}", symbol))?;

        let timestamps = result
            .get("timestamp")
            .and_then(|v| v.as_array())
            .ok_or_else(|| anyhow!("No timestamps in chart result for {}", symbol))?;

        let quote = result
            .get("indicators")
            .and_then(|v| v.get("quote"))
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .ok_or_else(|| anyhow!("No quote indicators for {}", symbol))?;

        let closes = quote.get("close").and_then(|v| v.as_array());
        let volumes = quote.get("volume").and_then(|v| v.as_array());

        let mut bars = Vec::with_capacity(timestamps.len());

        for (i, ts) in timestamps.iter().enumerate() {
            let Some(ts) = ts.as_i64() else { continue };
            // Candles with a null close are non-trading gaps; drop them
            let Some(close) = closes.and_then(|c| c.get(i)).and_then(|v| v.as_f64()) else {
                continue;
            };
            let volume = volumes
                .and_then(|c| c.get(i))
                .and_then(|v| v.as_i64())
                .unwrap_or(0);

            let Some(date) = DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()) else {
                warn!("Out-of-range timestamp {} for {}", ts, symbol);
                continue;
            };

            bars.push(PriceBar { date, close, volume });
        }

        debug!("Retrieved {} price bars for {}", bars.len(), symbol);
        Ok(bars)
    }

    /// Get descriptive metadata for a symbol
    async fn profile(&self, symbol: &str) -> Result<SecurityProfile> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.base_url, symbol, QUOTE_SUMMARY_MODULES
        );

        let data = self.make_request(&url).await?;

        let summary = data
            .get("quoteSummary")
            .ok_or_else(|| anyhow!("Malformed quote summary payload for {}", symbol))?;

        if let Some(error) = summary.get("error") {
            if !error.is_null() {
                return Err(anyhow!("Quote summary error for {}: {}", symbol, error));
            }
        }

        let result = summary
            .get("result")
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .ok_or_else(|| anyhow!("No quote summary result for {}", symbol))?;

        let price = module(result, "price");
        let detail = module(result, "summaryDetail");
        let asset_profile = module(result, "assetProfile");
        let financial = module(result, "financialData");

        let profile = SecurityProfile {
            long_name: price
                .and_then(|p| p.get("longName"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            current_price: raw_f64(price.and_then(|p| p.get("regularMarketPrice"))),
            trailing_pe: raw_f64(detail.and_then(|d| d.get("trailingPE"))),
            market_cap: raw_f64(price.and_then(|p| p.get("marketCap"))),
            sector: asset_profile
                .and_then(|p| p.get("sector"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            industry: asset_profile
                .and_then(|p| p.get("industry"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
            profit_margin: raw_f64(financial.and_then(|f| f.get("profitMargins"))),
            fifty_two_week_high: raw_f64(detail.and_then(|d| d.get("fiftyTwoWeekHigh"))),
            fifty_two_week_low: raw_f64(detail.and_then(|d| d.get("fiftyTwoWeekLow"))),
            return_on_equity: raw_f64(financial.and_then(|f| f.get("returnOnEquity"))),
            dividend_yield: raw_f64(detail.and_then(|d| d.get("dividendYield"))),
        };

        Ok(profile)
    }
}
