//! Advisory pipeline configuration.
//!
//! Explicit agent and task definitions plus the preference-driven task
//! selection that decides which analyses run. Execution of the plan is
//! owned by the downstream agent runtime, not this crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum accepted investment amount in rupees
pub const MIN_INVESTMENT_AMOUNT: f64 = 10_000.0;

/// The five advisory personas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentRole {
    MarketAnalyst,
    MacroEconomist,
    AlternativeAssetsAnalyst,
    PortfolioOptimizer,
    ReportWriter,
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AgentRole::MarketAnalyst => "Market Analyst",
            AgentRole::MacroEconomist => "Macro Economist",
            AgentRole::AlternativeAssetsAnalyst => "Alternative Assets Analyst",
            AgentRole::PortfolioOptimizer => "Portfolio Optimizer",
            AgentRole::ReportWriter => "Report Writer",
        };
        write!(f, "{}", label)
    }
}

/// Data tools an agent may call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    StockQuote,
    TopStocks,
    MutualFunds,
    GoldPrice,
    CryptoPrice,
    TopCryptos,
    IndiaGdpGrowth,
    IndiaCpiInflation,
}

/// One agent persona: who it is and what it may use
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    pub role: AgentRole,
    pub goal: String,
    pub tools: Vec<ToolKind>,
    pub max_iterations: u32,
}

/// One unit of pipeline work, owned by a single agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    pub description: String,
    pub expected_output: String,
    pub agent: AgentRole,
}

/// Asset classes the investor opted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPreferences {
    pub stocks: bool,
    pub mutual_funds: bool,
    pub gold: bool,
    pub crypto: bool,
}

impl Default for AssetPreferences {
    fn default() -> Self {
        Self { stocks: true, mutual_funds: true, gold: true, crypto: true }
    }
}

/// Risk band derived from the stated risk percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn from_percentage(pct: u8) -> Self {
        match pct {
            0..=30 => RiskTolerance::Conservative,
            31..=60 => RiskTolerance::Moderate,
            _ => RiskTolerance::Aggressive,
        }
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Aggressive => "aggressive",
        };
        write!(f, "{}", label)
    }
}

/// Investor inputs gathered ahead of a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub capital_amount: f64,
    pub risk_percentage: u8,
    pub expected_annual_return_pct: f64,
    pub horizon_years: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("investment amount must be at least ₹{min:.0}, got ₹{got:.0}")]
    CapitalTooLow { min: f64, got: f64 },
    #[error("risk percentage must be between 0 and 100, got {0}")]
    RiskOutOfRange(u8),
    #[error("expected annual return must be positive")]
    NonPositiveExpectedReturn,
    #[error("investment horizon must be at least 1 year")]
    ZeroHorizon,
}

impl InvestorProfile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.capital_amount < MIN_INVESTMENT_AMOUNT {
            return Err(ProfileError::CapitalTooLow {
                min: MIN_INVESTMENT_AMOUNT,
                got: self.capital_amount,
            });
        }
        if self.risk_percentage > 100 {
            return Err(ProfileError::RiskOutOfRange(self.risk_percentage));
        }
        if self.expected_annual_return_pct <= 0.0 {
            return Err(ProfileError::NonPositiveExpectedReturn);
        }
        if self.horizon_years == 0 {
            return Err(ProfileError::ZeroHorizon);
        }
        Ok(())
    }

    pub fn risk_tolerance(&self) -> RiskTolerance {
        RiskTolerance::from_percentage(self.risk_percentage)
    }
}

/// The five personas with their tool assignments
pub fn default_agents() -> Vec<AgentSpec> {
    vec![
        AgentSpec {
            role: AgentRole::MarketAnalyst,
            goal: "Identify the strongest NSE stocks and mutual funds for the stated horizon"
                .to_string(),
            tools: vec![ToolKind::StockQuote, ToolKind::TopStocks, ToolKind::MutualFunds],
            max_iterations: 10,
        },
        AgentSpec {
            role: AgentRole::MacroEconomist,
            goal: "Assess the Indian macro backdrop from growth and inflation data".to_string(),
            tools: vec![ToolKind::IndiaGdpGrowth, ToolKind::IndiaCpiInflation],
            max_iterations: 10,
        },
        AgentSpec {
            role: AgentRole::AlternativeAssetsAnalyst,
            goal: "Evaluate gold and cryptocurrency as portfolio diversifiers".to_string(),
            tools: vec![ToolKind::GoldPrice, ToolKind::CryptoPrice, ToolKind::TopCryptos],
            max_iterations: 10,
        },
        AgentSpec {
            role: AgentRole::PortfolioOptimizer,
            goal: "Allocate capital across the selected asset classes for the risk band"
                .to_string(),
            tools: vec![],
            max_iterations: 10,
        },
        AgentSpec {
            role: AgentRole::ReportWriter,
            goal: "Assemble the analyses into a single client-ready report".to_string(),
            tools: vec![],
            max_iterations: 10,
        },
    ]
}

/// A fully wired pipeline: every persona, plus the ordered task list
/// selected from the investor's asset preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelinePlan {
    pub agents: Vec<AgentSpec>,
    pub tasks: Vec<TaskSpec>,
}

impl PipelinePlan {
    /// Human-readable task listing for the CLI
    pub fn render(&self) -> String {
        let mut out = String::from("Pipeline tasks:\n");
        for (i, task) in self.tasks.iter().enumerate() {
            out.push_str(&format!("  {}. {} ({})\n", i + 1, task.name, task.agent));
        }
        out
    }
}

/// Build the ordered task plan for the given preferences.
///
/// Economy analysis always runs (it sets the market context);
/// market and alternative-asset analyses run only when the investor
/// selected a matching asset class; optimization and report writing
/// always close the pipeline.
pub fn build_pipeline(preferences: &AssetPreferences) -> PipelinePlan {
    let mut tasks = Vec::new();

    tasks.push(TaskSpec {
        name: "Analyze Economy".to_string(),
        description: "Review India's GDP growth and CPI inflation and summarize the \
                      macro backdrop for the other analysts"
            .to_string(),
        expected_output: "Macro summary covering growth, inflation, and their portfolio \
                          implications"
            .to_string(),
        agent: AgentRole::MacroEconomist,
    });

    if preferences.stocks || preferences.mutual_funds {
        let scope = match (preferences.stocks, preferences.mutual_funds) {
            (true, true) => "stocks and mutual funds",
            (true, false) => "stocks only",
            _ => "mutual funds only",
        };
        tasks.push(TaskSpec {
            name: "Analyze Markets".to_string(),
            description: format!(
                "Screen the NSE universe for 52-week leaders and review the curated \
                 fund shortlist; scope: {}",
                scope
            ),
            expected_output: "Ranked equity picks and/or fund recommendations with \
                              supporting data"
                .to_string(),
            agent: AgentRole::MarketAnalyst,
        });
    }

    if preferences.gold || preferences.crypto {
        let scope = match (preferences.gold, preferences.crypto) {
            (true, true) => "gold and crypto",
            (true, false) => "gold only",
            _ => "crypto only",
        };
        tasks.push(TaskSpec {
            name: "Analyze Alternative Assets".to_string(),
            description: format!(
                "Price gold and the major cryptocurrencies in INR; scope: {}",
                scope
            ),
            expected_output: "Alternative-asset assessment with current INR pricing"
                .to_string(),
            agent: AgentRole::AlternativeAssetsAnalyst,
        });
    }

    tasks.push(TaskSpec {
        name: "Optimize Portfolio".to_string(),
        description: "Translate the analyses into a capital allocation that matches the \
                      investor's risk band and horizon"
            .to_string(),
        expected_output: "Percentage allocation per selected asset class with rationale"
            .to_string(),
        agent: AgentRole::PortfolioOptimizer,
    });

    tasks.push(TaskSpec {
        name: "Generate Report".to_string(),
        description: "Compose the final advisory report from every upstream output"
            .to_string(),
        expected_output: "Complete advisory report ready for the client".to_string(),
        agent: AgentRole::ReportWriter,
    });

    PipelinePlan { agents: default_agents(), tasks }
}
