//! Text rendering for screening results.
//!
//! The output is a deterministic block: identical outcomes render to
//! byte-identical strings.

use crate::models::SecuritySnapshot;
use super::ScreenOutcome;

const RULE: &str =
    "================================================================================";

/// Render the ranked leaderboard with header counts and a footer
/// listing the applied quality filters.
pub fn render(outcome: &ScreenOutcome) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!(
        "🚀 TOP {} NSE STOCKS BY 52-WEEK RETURN\n",
        outcome.ranked.len()
    ));
    out.push_str(&format!("{}\n\n", RULE));

    out.push_str(&format!(
        "Analyzed {} of {} stocks ({} shown, {} skipped, {} filtered out)\n\n",
        outcome.survivor_count,
        outcome.universe_size,
        outcome.ranked.len(),
        outcome.skipped.len(),
        outcome.filter_rejected.len(),
    ));

    for (rank, snapshot) in outcome.ranked.iter().enumerate() {
        render_entry(&mut out, rank + 1, snapshot);
    }

    out.push_str(&format!("{}\n", RULE));
    out.push_str("QUALITY FILTERS APPLIED:\n");
    out.push_str(&format!(
        "  ✓ Market Cap >= ₹{:.2} Cr\n",
        outcome.criteria.min_market_cap / 10_000_000.0
    ));
    out.push_str(&format!(
        "  ✓ Avg Daily Volume >= {:.0} shares\n",
        outcome.criteria.min_avg_volume
    ));
    out.push_str(&format!("  ✓ Price > ₹{:.2}\n", outcome.criteria.min_price));
    if outcome.criteria.require_positive_margin {
        out.push_str("  ✓ Profit Margin > 0%\n");
    }
    out.push_str(&format!("{}\n", RULE));

    out
}

fn render_entry(out: &mut String, rank: usize, snapshot: &SecuritySnapshot) {
    out.push_str(&format!("{}. {} ({})\n", rank, snapshot.name, snapshot.symbol));
    out.push_str(&format!("   52-Week Return: {:.2}%\n", snapshot.returns_52w));
    out.push_str(&format!("   Current Price: ₹{:.2}\n", snapshot.current_price));
    out.push_str(&format!("   PE Ratio: {}\n", fmt_ratio(snapshot.pe_ratio)));
    out.push_str(&format!(
        "   Sector: {}\n",
        snapshot.sector.as_deref().unwrap_or("N/A")
    ));
    out.push_str(&format!("   Market Cap: {}\n", fmt_market_cap(snapshot.market_cap)));
    out.push_str(&format!(
        "   Profit Margin: {}\n",
        fmt_percent(snapshot.profit_margin.map(|m| m * 100.0))
    ));
    out.push_str(&format!("   Avg Volume: {:.0} shares/day\n\n", snapshot.avg_volume));
}

fn fmt_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}

fn fmt_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => "N/A".to_string(),
    }
}

fn fmt_market_cap(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("₹{:.2} Cr", v / 10_000_000.0),
        None => "N/A".to_string(),
    }
}
