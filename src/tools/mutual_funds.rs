//! Curated mutual-fund reference data.
//!
//! There is no free NAV API with reliable trailing returns, so the
//! market-analyst agent works from a maintained shortlist of widely
//! held Indian funds.

/// Headline facts for one fund
#[derive(Debug, Clone, Copy)]
pub struct FundFacts {
    pub name: &'static str,
    pub category: &'static str,
    pub one_year_return_pct: f64,
    pub three_year_return_pct: f64,
    pub five_year_return_pct: f64,
    pub expense_ratio_pct: f64,
}

pub const CURATED_FUNDS: &[FundFacts] = &[
    FundFacts {
        name: "HDFC Top 100 Fund",
        category: "Large Cap",
        one_year_return_pct: 15.0,
        three_year_return_pct: 18.0,
        five_year_return_pct: 16.0,
        expense_ratio_pct: 1.05,
    },
    FundFacts {
        name: "ICICI Prudential Bluechip Fund",
        category: "Large Cap",
        one_year_return_pct: 14.0,
        three_year_return_pct: 17.0,
        five_year_return_pct: 15.0,
        expense_ratio_pct: 1.00,
    },
    FundFacts {
        name: "Axis Bluechip Fund",
        category: "Large Cap",
        one_year_return_pct: 16.0,
        three_year_return_pct: 19.0,
        five_year_return_pct: 17.0,
        expense_ratio_pct: 0.50,
    },
    FundFacts {
        name: "Parag Parikh Flexi Cap Fund",
        category: "Flexi Cap",
        one_year_return_pct: 18.0,
        three_year_return_pct: 21.0,
        five_year_return_pct: 20.0,
        expense_ratio_pct: 1.00,
    },
    FundFacts {
        name: "Mirae Asset Large Cap Fund",
        category: "Large Cap",
        one_year_return_pct: 15.0,
        three_year_return_pct: 18.0,
        five_year_return_pct: 16.0,
        expense_ratio_pct: 0.55,
    },
];

/// Render one fund, or the whole shortlist when the query matches
/// nothing
pub fn fund_summary(query: &str) -> String {
    let query_lower = query.trim().to_lowercase();

    if !query_lower.is_empty() {
        if let Some(fund) = CURATED_FUNDS
            .iter()
            .find(|f| f.name.to_lowercase().contains(&query_lower))
        {
            let mut out = String::new();
            render_fund(&mut out, 1, fund);
            return out;
        }
    }

    render_fund_overview()
}

/// Render the full shortlist
pub fn render_fund_overview() -> String {
    let mut out = String::from("Top Indian Mutual Funds:\n\n");

    for (i, fund) in CURATED_FUNDS.iter().enumerate() {
        render_fund(&mut out, i + 1, fund);
    }

    out
}

fn render_fund(out: &mut String, rank: usize, fund: &FundFacts) {
    out.push_str(&format!("{}. {} - {}\n", rank, fund.name, fund.category));
    out.push_str(&format!(
        "   - 1Y Return: ~{:.0}%, 3Y Return: ~{:.0}%, 5Y Return: ~{:.0}%\n",
        fund.one_year_return_pct, fund.three_year_return_pct, fund.five_year_return_pct
    ));
    out.push_str(&format!("   - Expense Ratio: {:.2}%\n\n", fund.expense_ratio_pct));
}
