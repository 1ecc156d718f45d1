use anyhow::{Result, anyhow};

use crate::api::MarketDataProvider;

/// NSE-listed proxy used to approximate domestic gold pricing
pub const GOLD_PROXY_SYMBOL: &str = "GOLDIAM.NS";

/// Units of the proxy per gram of gold
const PROXY_UNITS_PER_GRAM: f64 = 10.0;

/// Markup from the proxy's standard purity to 24K
const PURITY_24K_MARKUP: f64 = 1.08;

/// Fetch the gold proxy quote and render the price summary
pub async fn gold_price_summary(provider: &dyn MarketDataProvider) -> Result<String> {
    let profile = provider.profile(GOLD_PROXY_SYMBOL).await?;
    let unit_price = profile
        .current_price
        .ok_or_else(|| anyhow!("No current price for gold proxy {}", GOLD_PROXY_SYMBOL))?;

    Ok(render_gold_summary(unit_price))
}

/// Render the gold block for a given proxy unit price
pub fn render_gold_summary(unit_price: f64) -> String {
    let per_gram = unit_price / PROXY_UNITS_PER_GRAM;

    let mut out = String::new();
    out.push_str("Current Gold Price:\n");
    out.push_str(&format!(
        "- Gold ETF ({}): ₹{:.2} per unit\n",
        GOLD_PROXY_SYMBOL, unit_price
    ));
    out.push_str(&format!("- Approx. Gold Price: ₹{:.2} per gram\n", per_gram));
    out.push_str(&format!(
        "- 24K Gold (approx): ₹{:.2} per gram\n",
        per_gram * PURITY_24K_MARKUP
    ));
    out.push('\n');
    out.push_str("Sovereign Gold Bonds:\n");
    out.push_str("- Current SGB series available with 2.5% p.a. interest\n");
    out.push_str("- 8-year maturity with exit option after 5 years\n");
    out.push_str("- Capital gains tax exempt if held till maturity\n");

    out
}
