use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::models::Config;

/// Single-coin INR quote
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoQuote {
    pub id: String,
    pub price_inr: f64,
    pub change_24h_pct: Option<f64>,
}

/// One row from the markets listing
#[derive(Debug, Clone, Deserialize)]
pub struct CryptoMarketEntry {
    pub name: String,
    pub symbol: String,
    pub current_price: f64,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: f64,
}

/// CoinGecko API client
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .user_agent("rust-invest/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: config.coingecko_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// INR price and 24h change for one coin id (e.g. "bitcoin")
    pub async fn price(&self, crypto_id: &str) -> Result<CryptoQuote> {
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies=inr&include_24hr_change=true",
            self.base_url, crypto_id
        );

        debug!("Making request to: {}", url);
        let data: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let entry = data
            .get(crypto_id)
            .ok_or_else(|| anyhow!("Cryptocurrency {} not found", crypto_id))?;

        let price_inr = entry
            .get("inr")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| anyhow!("No INR price for {}", crypto_id))?;

        Ok(CryptoQuote {
            id: crypto_id.to_string(),
            price_inr,
            change_24h_pct: entry.get("inr_24h_change").and_then(|v| v.as_f64()),
        })
    }

    /// Top coins by market cap with INR pricing
    pub async fn top_by_market_cap(&self, count: usize) -> Result<Vec<CryptoMarketEntry>> {
        let url = format!(
            "{}/coins/markets?vs_currency=inr&order=market_cap_desc&per_page={}&page=1",
            self.base_url, count
        );

        debug!("Making request to: {}", url);
        let entries: Vec<CryptoMarketEntry> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(entries)
    }
}

/// Render a single-coin quote line
pub fn render_quote(quote: &CryptoQuote) -> String {
    let name = capitalize(&quote.id);
    match quote.change_24h_pct {
        Some(change) => format!(
            "{}: ₹{:.2} INR (24h change: {:.2}%)",
            name, quote.price_inr, change
        ),
        None => format!("{}: ₹{:.2} INR (24h change: N/A)", name, quote.price_inr),
    }
}

/// Render the top-coins block
pub fn render_top(entries: &[CryptoMarketEntry]) -> String {
    let mut out = String::from("Top Cryptocurrencies (INR):\n\n");

    for coin in entries {
        out.push_str(&format!(
            "- {} ({}): ₹{:.2}",
            coin.name,
            coin.symbol.to_uppercase(),
            coin.current_price
        ));
        match coin.price_change_percentage_24h {
            Some(change) => out.push_str(&format!(" | 24h: {:.2}%", change)),
            None => out.push_str(" | 24h: N/A"),
        }
        out.push_str(&format!(" | Market Cap: ₹{:.2} Cr\n", coin.market_cap / 10_000_000.0));
    }

    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
