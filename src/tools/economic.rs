use anyhow::{Result, anyhow};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::Config;

pub const GDP_GROWTH_INDICATOR: &str = "NY.GDP.MKTP.KD.ZG";
pub const CPI_INFLATION_INDICATOR: &str = "FP.CPI.TOTL.ZG";

/// Fallback figures used when the World Bank API is unreachable.
/// Callers pass these explicitly so the estimate in use is visible at
/// the call site.
pub const FALLBACK_GDP_GROWTH_PCT: f64 = 6.5;
pub const FALLBACK_CPI_INFLATION_PCT: f64 = 5.4;

/// Most recent non-null observation for an indicator
#[derive(Debug, Clone, PartialEq)]
pub struct MacroReading {
    pub year: i32,
    pub value: f64,
}

/// World Bank indicator API client
pub struct WorldBankClient {
    client: Client,
    base_url: String,
}

impl WorldBankClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .user_agent("rust-invest/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: config.worldbank_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Latest available reading for a country/indicator pair.
    /// The World Bank returns observations newest-first with null
    /// values for years not yet published.
    pub async fn latest_indicator(&self, country: &str, indicator: &str) -> Result<MacroReading> {
        let url = format!(
            "{}/v2/country/{}/indicator/{}?format=json&per_page=10",
            self.base_url, country, indicator
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

        let observations = data
            .get(1)
            .and_then(|v| v.as_array())
            .ok_or_else(|| anyhow!("Malformed World Bank payload for {}", indicator))?;

        for observation in observations {
            let Some(value) = observation.get("value").and_then(|v| v.as_f64()) else {
                continue;
            };
            let year = observation
                .get("date")
                .and_then(|v| v.as_str())
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| anyhow!("Missing observation year for {}", indicator))?;

            return Ok(MacroReading { year, value });
        }

        Err(anyhow!("No published observations for {}", indicator))
    }
}

/// India GDP growth line; falls back to the supplied estimate when the
/// API cannot be reached
pub async fn india_gdp_growth(client: &WorldBankClient, fallback_pct: f64) -> String {
    match client.latest_indicator("IND", GDP_GROWTH_INDICATOR).await {
        Ok(reading) => format!(
            "India GDP Growth Rate ({}): {:.2}%",
            reading.year, reading.value
        ),
        Err(e) => {
            warn!("GDP indicator fetch failed: {}", e);
            format!("India GDP Growth Rate (Est.): {:.2}% (estimated)", fallback_pct)
        }
    }
}

/// India CPI inflation line with the same fallback contract
pub async fn india_cpi_inflation(client: &WorldBankClient, fallback_pct: f64) -> String {
    match client.latest_indicator("IND", CPI_INFLATION_INDICATOR).await {
        Ok(reading) => format!(
            "India CPI Inflation ({}): {:.2}%",
            reading.year, reading.value
        ),
        Err(e) => {
            warn!("CPI indicator fetch failed: {}", e);
            format!("India CPI Inflation (Est.): {:.2}% (estimated)", fallback_pct)
        }
    }
}
