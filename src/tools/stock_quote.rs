use anyhow::Result;

use crate::api::MarketDataProvider;
use crate::models::SecurityProfile;

/// Fetch and render a single-symbol fundamentals snapshot
pub async fn stock_quote(provider: &dyn MarketDataProvider, symbol: &str) -> Result<String> {
    let profile = provider.profile(symbol).await?;
    Ok(render_quote(symbol, &profile))
}

/// Render the snapshot block; unknown fields show as N/A
pub fn render_quote(symbol: &str, profile: &SecurityProfile) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Stock: {}\n",
        profile.long_name.as_deref().unwrap_or(symbol)
    ));
    out.push_str(&format!("Symbol: {}\n", symbol));
    out.push_str(&format!("Current Price: {}\n", fmt_rupees(profile.current_price)));
    out.push_str(&format!(
        "Market Cap: {}\n",
        profile
            .market_cap
            .map(|cap| format!("₹{:.2} Cr", cap / 10_000_000.0))
            .unwrap_or_else(|| "N/A".to_string())
    ));
    out.push_str(&format!("PE Ratio: {}\n", fmt_plain(profile.trailing_pe)));
    out.push_str(&format!(
        "52 Week High: {}\n",
        fmt_rupees(profile.fifty_two_week_high)
    ));
    out.push_str(&format!(
        "52 Week Low: {}\n",
        fmt_rupees(profile.fifty_two_week_low)
    ));
    out.push_str(&format!(
        "Sector: {}\n",
        profile.sector.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "Industry: {}\n",
        profile.industry.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!(
        "ROE: {}\n",
        fmt_fraction_pct(profile.return_on_equity)
    ));
    out.push_str(&format!(
        "Profit Margin: {}\n",
        fmt_fraction_pct(profile.profit_margin)
    ));
    out.push_str(&format!(
        "Dividend Yield: {}\n",
        fmt_fraction_pct(profile.dividend_yield)
    ));

    out
}

fn fmt_rupees(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("₹{:.2}", v),
        None => "N/A".to_string(),
    }
}

fn fmt_plain(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}

fn fmt_fraction_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v * 100.0),
        None => "N/A".to_string(),
    }
}
