//! Screener behavior tests against scripted providers

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::Arc;

use rust_invest::api::MarketDataProvider;
use rust_invest::models::{PriceBar, QualityCriteria, SecurityProfile, SkipReason};
use rust_invest::screener::{ScreenerConfig, StockScreener};

use crate::common::{test_data, ScriptedProvider};

fn screener_over(provider: ScriptedProvider) -> StockScreener {
    StockScreener::new(Arc::new(provider), ScreenerConfig::default())
}

fn symbols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test_log::test(tokio::test)]
async fn test_insufficient_history_never_ranked() {
    let provider = ScriptedProvider::new().with_ticker(
        "FRESH.NS",
        test_data::history(100.0, 300.0, 120, 900_000),
        test_data::passing_profile("Fresh Listing"),
    );
    let screener = screener_over(provider);

    let outcome = screener.screen(&symbols(&["FRESH.NS"]), 15).await.unwrap();

    assert!(outcome.ranked.is_empty());
    assert_eq!(
        outcome.skipped,
        vec![(
            "FRESH.NS".to_string(),
            SkipReason::InsufficientHistory { samples: 120, required: 200 }
        )]
    );
}

#[test_log::test(tokio::test)]
async fn test_zero_first_close_skips_instead_of_failing() {
    let provider = ScriptedProvider::new().with_ticker(
        "ZERO.NS",
        test_data::history(0.0, 50.0, 252, 900_000),
        test_data::passing_profile("Zero Baseline"),
    );
    let screener = screener_over(provider);

    let outcome = screener.screen(&symbols(&["ZERO.NS"]), 15).await.unwrap();

    assert!(outcome.ranked.is_empty());
    assert_eq!(outcome.skipped[0].1, SkipReason::ZeroBaselineClose);
}

#[test_log::test(tokio::test)]
async fn test_return_matches_definition() {
    let provider = ScriptedProvider::new().with_ticker(
        "GAIN.NS",
        test_data::history(80.0, 100.0, 252, 900_000),
        test_data::passing_profile("Gainer"),
    );
    let screener = screener_over(provider);

    let outcome = screener.screen(&symbols(&["GAIN.NS"]), 15).await.unwrap();

    // (100 - 80) / 80 * 100 = 25%
    assert_eq!(outcome.ranked.len(), 1);
    assert!((outcome.ranked[0].returns_52w - 25.0).abs() < 1e-9);
}

#[test_log::test(tokio::test)]
async fn test_ranking_is_descending_and_bounded_by_top_n() {
    let mut provider = ScriptedProvider::new();
    // Ten tickers with returns 5%, 10%, ..., 50%
    for i in 0..10 {
        let last_close = 100.0 + 5.0 * (i + 1) as f64;
        provider = provider.with_ticker(
            &format!("S{}.NS", i),
            test_data::history(100.0, last_close, 252, 900_000),
            test_data::passing_profile(&format!("Stock {}", i)),
        );
    }
    let screener = screener_over(provider);
    let universe: Vec<String> = (0..10).map(|i| format!("S{}.NS", i)).collect();

    let outcome = screener.screen(&universe, 4).await.unwrap();

    assert_eq!(outcome.ranked.len(), 4);
    assert_eq!(outcome.survivor_count, 10);
    for pair in outcome.ranked.windows(2) {
        assert!(pair[0].returns_52w >= pair[1].returns_52w);
    }
    assert_eq!(outcome.ranked[0].symbol, "S9.NS");

    // With top_n above survivor count the result is simply smaller,
    // never padded
    let outcome = screener.screen(&universe, 25).await.unwrap();
    assert_eq!(outcome.ranked.len(), 10);
}

#[test_log::test(tokio::test)]
async fn test_every_ranked_entry_satisfies_all_filters() {
    let mut thin_volume = test_data::passing_profile("Thin Volume");
    thin_volume.market_cap = Some(120_000_000_000.0);

    let mut unprofitable = test_data::passing_profile("Unprofitable");
    unprofitable.profit_margin = Some(-0.05);

    let mut small_cap = test_data::passing_profile("Small Cap");
    small_cap.market_cap = Some(900_000_000.0);

    let provider = ScriptedProvider::new()
        .with_ticker(
            "GOOD.NS",
            test_data::history(100.0, 140.0, 252, 900_000),
            test_data::passing_profile("Good"),
        )
        .with_ticker(
            "THIN.NS",
            test_data::history(100.0, 180.0, 252, 5_000),
            thin_volume,
        )
        .with_ticker(
            "LOSS.NS",
            test_data::history(100.0, 200.0, 252, 900_000),
            unprofitable,
        )
        .with_ticker(
            "TINY.NS",
            test_data::history(100.0, 220.0, 252, 900_000),
            small_cap,
        );
    let screener = screener_over(provider);

    let outcome = screener
        .screen(&symbols(&["GOOD.NS", "THIN.NS", "LOSS.NS", "TINY.NS"]), 15)
        .await
        .unwrap();

    assert_eq!(outcome.ranked.len(), 1);
    assert_eq!(outcome.ranked[0].symbol, "GOOD.NS");
    assert_eq!(outcome.filter_rejected.len(), 3);

    let criteria = QualityCriteria::default();
    for entry in &outcome.ranked {
        assert!(criteria.evaluate(entry).all());
    }
}

#[test_log::test(tokio::test)]
async fn test_single_ticker_fetch_error_reports_zero_of_one() {
    // No scripted data: the lone ticker fails to fetch
    let screener = screener_over(ScriptedProvider::new());

    let outcome = screener.screen(&symbols(&["GHOST.NS"]), 15).await.unwrap();

    assert!(outcome.ranked.is_empty());
    assert_eq!(outcome.survivor_count, 0);
    assert!(matches!(outcome.skipped[0].1, SkipReason::Fetch(_)));
    assert!(outcome.render().contains("Analyzed 0 of 1 stocks"));
}

#[test_log::test(tokio::test)]
async fn test_tied_returns_keep_universe_order() {
    let provider = ScriptedProvider::new()
        .with_ticker(
            "ALPHA.NS",
            test_data::history(100.0, 130.0, 252, 900_000),
            test_data::passing_profile("Alpha"),
        )
        .with_ticker(
            "BETA.NS",
            test_data::history(50.0, 65.0, 252, 900_000),
            test_data::passing_profile("Beta"),
        );
    let screener = screener_over(provider);

    let outcome = screener
        .screen(&symbols(&["ALPHA.NS", "BETA.NS"]), 15)
        .await
        .unwrap();

    // Both return exactly 30%; ALPHA came first in the universe
    let ranked: Vec<&str> = outcome.ranked.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(ranked, vec!["ALPHA.NS", "BETA.NS"]);
}

#[test_log::test(tokio::test)]
async fn test_identical_inputs_render_identical_reports() {
    let build = || {
        ScriptedProvider::new()
            .with_ticker(
                "ONE.NS",
                test_data::history(100.0, 145.5, 252, 750_000),
                test_data::passing_profile("One Limited"),
            )
            .with_ticker(
                "TWO.NS",
                test_data::history(200.0, 310.0, 252, 650_000),
                test_data::passing_profile("Two Limited"),
            )
    };

    let first = screener_over(build())
        .screen_report(&symbols(&["ONE.NS", "TWO.NS"]), 15)
        .await
        .unwrap();
    let second = screener_over(build())
        .screen_report(&symbols(&["ONE.NS", "TWO.NS"]), 15)
        .await
        .unwrap();

    assert_eq!(first, second);
}

mockall::mock! {
    pub Provider {}

    #[async_trait]
    impl MarketDataProvider for Provider {
        async fn price_history(&self, symbol: &str, lookback_days: u32) -> anyhow::Result<Vec<PriceBar>>;
        async fn profile(&self, symbol: &str) -> anyhow::Result<SecurityProfile>;
    }
}

#[test_log::test(tokio::test)]
async fn test_history_fetch_error_becomes_skip() {
    let mut provider = MockProvider::new();
    provider
        .expect_price_history()
        .returning(|symbol, _| Err(anyhow::anyhow!("connection reset fetching {}", symbol)));
    provider.expect_profile().never();

    let screener = StockScreener::new(Arc::new(provider), ScreenerConfig::default());
    let outcome = screener.screen(&symbols(&["NET.NS"]), 15).await.unwrap();

    assert!(outcome.ranked.is_empty());
    match &outcome.skipped[0].1 {
        SkipReason::Fetch(msg) => assert!(msg.contains("connection reset")),
        other => panic!("expected fetch skip, got {:?}", other),
    }
}
