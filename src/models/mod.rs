use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily sample from a ticker's trailing price history
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: i64,
}

/// Descriptive metadata for a security as returned by the market-data
/// provider. Every field can be absent; unknown fields must never be
/// coerced to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityProfile {
    pub long_name: Option<String>,
    pub current_price: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub market_cap: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    /// Fraction, e.g. 0.12 for 12%
    pub profit_margin: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub return_on_equity: Option<f64>,
    pub dividend_yield: Option<f64>,
}

/// Derived per-ticker record built from a usable price history plus
/// profile metadata. Recomputed on every screen run, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuritySnapshot {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    /// Percentage change between the earliest and latest close in the
    /// trailing window
    pub returns_52w: f64,
    pub market_cap: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub sector: Option<String>,
    /// Fraction, e.g. 0.12 for 12%
    pub profit_margin: Option<f64>,
    pub avg_volume: f64,
}

/// Why a ticker was dropped before quality filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    InsufficientHistory { samples: usize, required: usize },
    ZeroBaselineClose,
    Fetch(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::InsufficientHistory { samples, required } => {
                write!(f, "insufficient history ({} of {} samples)", samples, required)
            }
            SkipReason::ZeroBaselineClose => write!(f, "zero baseline close"),
            SkipReason::Fetch(msg) => write!(f, "fetch failed: {}", msg),
        }
    }
}

/// Quality thresholds applied to snapshots before ranking. The defaults
/// target liquid, profitable NSE names; every threshold is tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityCriteria {
    /// Minimum market capitalization in rupees (default ₹1000 Cr)
    pub min_market_cap: f64,
    /// Minimum average daily volume in shares
    pub min_avg_volume: f64,
    /// Minimum current price in rupees (penny-stock floor)
    pub min_price: f64,
    /// Require profit margin strictly above zero
    pub require_positive_margin: bool,
}

impl Default for QualityCriteria {
    fn default() -> Self {
        Self {
            min_market_cap: 10_000_000_000.0, // ₹1000 Cr
            min_avg_volume: 100_000.0,
            min_price: 10.0,
            require_positive_margin: true,
        }
    }
}

impl QualityCriteria {
    /// Evaluate every filter independently. An unknown numeric field
    /// fails its filter rather than passing or defaulting to zero.
    pub fn evaluate(&self, snapshot: &SecuritySnapshot) -> FilterChecks {
        FilterChecks {
            passes_market_cap: snapshot
                .market_cap
                .map(|cap| cap >= self.min_market_cap)
                .unwrap_or(false),
            passes_avg_volume: snapshot.avg_volume >= self.min_avg_volume,
            passes_price: snapshot.current_price > self.min_price,
            passes_profit_margin: if self.require_positive_margin {
                snapshot.profit_margin.map(|m| m > 0.0).unwrap_or(false)
            } else {
                true
            },
        }
    }
}

/// Outcome of evaluating each quality filter independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChecks {
    pub passes_market_cap: bool,
    pub passes_avg_volume: bool,
    pub passes_price: bool,
    pub passes_profit_margin: bool,
}

impl FilterChecks {
    pub fn all(&self) -> bool {
        self.passes_market_cap
            && self.passes_avg_volume
            && self.passes_price
            && self.passes_profit_margin
    }
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub yahoo_base_url: String,
    pub coingecko_base_url: String,
    pub worldbank_base_url: String,
    pub rate_limit_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub top_n: usize,
    pub max_concurrent_requests: usize,
    pub min_history_samples: usize,
    pub criteria: QualityCriteria,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let defaults = QualityCriteria::default();

        Ok(Config {
            yahoo_base_url: std::env::var("YAHOO_BASE_URL")
                .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string()),
            coingecko_base_url: std::env::var("COINGECKO_BASE_URL")
                .unwrap_or_else(|_| "https://api.coingecko.com/api/v3".to_string()),
            worldbank_base_url: std::env::var("WORLDBANK_BASE_URL")
                .unwrap_or_else(|_| "https://api.worldbank.org".to_string()),
            rate_limit_delay_ms: std::env::var("RATE_LIMIT_DELAY_MS")
                .unwrap_or_else(|_| "150".to_string())
                .parse()
                .unwrap_or(150),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            top_n: std::env::var("SCREENER_TOP_N")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .unwrap_or(15),
            max_concurrent_requests: std::env::var("MAX_CONCURRENT_REQUESTS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            min_history_samples: std::env::var("MIN_HISTORY_SAMPLES")
                .unwrap_or_else(|_| "200".to_string())
                .parse()
                .unwrap_or(200),
            criteria: QualityCriteria {
                min_market_cap: std::env::var("MIN_MARKET_CAP")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_market_cap),
                min_avg_volume: std::env::var("MIN_AVG_VOLUME")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_avg_volume),
                min_price: std::env::var("MIN_PRICE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_price),
                require_positive_margin: defaults.require_positive_margin,
            },
        })
    }
}
