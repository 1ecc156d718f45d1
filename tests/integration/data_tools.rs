//! HTTP-level tests for the CoinGecko and World Bank tool clients

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rust_invest::models::{Config, QualityCriteria};
use rust_invest::tools::economic::{
    self, FALLBACK_CPI_INFLATION_PCT, FALLBACK_GDP_GROWTH_PCT,
};
use rust_invest::tools::{crypto, CoinGeckoClient, WorldBankClient};

fn test_config(base_url: &str) -> Config {
    Config {
        yahoo_base_url: base_url.to_string(),
        coingecko_base_url: base_url.to_string(),
        worldbank_base_url: base_url.to_string(),
        rate_limit_delay_ms: 1,
        request_timeout_secs: 1,
        top_n: 15,
        max_concurrent_requests: 2,
        min_history_samples: 200,
        criteria: QualityCriteria::default(),
    }
}

#[tokio::test]
async fn test_coingecko_single_coin_price() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bitcoin": { "inr": 5_432_100.55, "inr_24h_change": -1.234 }
        })))
        .mount(&server)
        .await;

    let client = CoinGeckoClient::new(&test_config(&server.uri())).unwrap();
    let quote = client.price("bitcoin").await.unwrap();

    assert_eq!(quote.price_inr, 5_432_100.55);
    assert_eq!(quote.change_24h_pct, Some(-1.234));
    assert_eq!(
        crypto::render_quote(&quote),
        "Bitcoin: ₹5432100.55 INR (24h change: -1.23%)"
    );
}

#[tokio::test]
async fn test_coingecko_unknown_coin_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/simple/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = CoinGeckoClient::new(&test_config(&server.uri())).unwrap();
    let err = client.price("dogecoin-typo").await.unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_coingecko_top_coins() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/coins/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "Bitcoin",
                "symbol": "btc",
                "current_price": 5_400_000.0,
                "price_change_percentage_24h": 1.8,
                "market_cap": 105_000_000_000_000.0
            },
            {
                "name": "Ethereum",
                "symbol": "eth",
                "current_price": 280_000.0,
                "price_change_percentage_24h": serde_json::Value::Null,
                "market_cap": 33_000_000_000_000.0
            }
        ])))
        .mount(&server)
        .await;

    let client = CoinGeckoClient::new(&test_config(&server.uri())).unwrap();
    let entries = client.top_by_market_cap(5).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "Bitcoin");
    assert_eq!(entries[1].price_change_percentage_24h, None);

    let rendered = crypto::render_top(&entries);
    assert!(rendered.contains("- Bitcoin (BTC)"));
    assert!(rendered.contains("| 24h: N/A"));
}

#[tokio::test]
async fn test_worldbank_latest_skips_unpublished_years() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/country/IND/indicator/NY.GDP.MKTP.KD.ZG"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "page": 1, "pages": 1, "per_page": 10, "total": 3 },
            [
                { "date": "2024", "value": serde_json::Value::Null },
                { "date": "2023", "value": 7.58 },
                { "date": "2022", "value": 6.99 }
            ]
        ])))
        .mount(&server)
        .await;

    let client = WorldBankClient::new(&test_config(&server.uri())).unwrap();
    let reading = client
        .latest_indicator("IND", economic::GDP_GROWTH_INDICATOR)
        .await
        .unwrap();

    assert_eq!(reading.year, 2023);
    assert_eq!(reading.value, 7.58);

    let line = economic::india_gdp_growth(&client, FALLBACK_GDP_GROWTH_PCT).await;
    assert_eq!(line, "India GDP Growth Rate (2023): 7.58%");
}

#[tokio::test]
async fn test_worldbank_failure_uses_named_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/country/IND/indicator/FP.CPI.TOTL.ZG"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = WorldBankClient::new(&test_config(&server.uri())).unwrap();
    let line = economic::india_cpi_inflation(&client, FALLBACK_CPI_INFLATION_PCT).await;

    assert_eq!(line, "India CPI Inflation (Est.): 5.40% (estimated)");
}
