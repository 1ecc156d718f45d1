use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use rust_invest::api::YahooFinanceClient;
use rust_invest::models::Config;
use rust_invest::pipeline::{build_pipeline, AssetPreferences};
use rust_invest::screener::{ScreenerConfig, StockScreener, NSE_UNIVERSE};
use rust_invest::tools::{crypto, economic, gold, mutual_funds, stock_quote};
use rust_invest::tools::{CoinGeckoClient, WorldBankClient};

/// NSE investment data toolkit
#[derive(Parser)]
#[command(name = "rust-invest")]
#[command(version = "0.1.0")]
#[command(about = "Screen NSE stocks and fetch the market data behind the advisory pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank the NSE universe by 52-week return
    Screen {
        /// How many leaders to show (defaults to SCREENER_TOP_N)
        #[arg(long, short = 'n')]
        top_n: Option<usize>,
    },
    /// Fundamentals snapshot for one NSE symbol
    Quote {
        /// NSE symbol, e.g. RELIANCE.NS
        symbol: String,
    },
    /// Current gold pricing via the NSE proxy
    Gold,
    /// Cryptocurrency prices in INR
    Crypto {
        /// CoinGecko coin id, e.g. bitcoin
        #[arg(default_value = "bitcoin")]
        id: String,
        /// Show the top five coins by market cap instead
        #[arg(long)]
        top: bool,
    },
    /// India GDP growth and CPI inflation
    Macro,
    /// Curated mutual-fund shortlist
    Funds {
        /// Narrow to funds whose name matches
        query: Option<String>,
    },
    /// Show the advisory task plan for a set of asset preferences
    Plan {
        #[arg(long)]
        no_stocks: bool,
        #[arg(long)]
        no_mutual_funds: bool,
        #[arg(long)]
        no_gold: bool,
        #[arg(long)]
        no_crypto: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rust_invest=info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Screen { top_n } => {
            let client = Arc::new(YahooFinanceClient::new(&config)?);
            let screener = StockScreener::new(client, ScreenerConfig::from_config(&config));

            let universe: Vec<String> = NSE_UNIVERSE.iter().map(|s| s.to_string()).collect();
            let report = screener
                .screen_report(&universe, top_n.unwrap_or(config.top_n))
                .await?;
            println!("{}", report);
        }
        Command::Quote { symbol } => {
            let client = YahooFinanceClient::new(&config)?;
            println!("{}", stock_quote::stock_quote(&client, &symbol).await?);
        }
        Command::Gold => {
            let client = YahooFinanceClient::new(&config)?;
            println!("{}", gold::gold_price_summary(&client).await?);
        }
        Command::Crypto { id, top } => {
            let client = CoinGeckoClient::new(&config)?;
            if top {
                let entries = client.top_by_market_cap(5).await?;
                println!("{}", crypto::render_top(&entries));
            } else {
                let quote = client.price(&id).await?;
                println!("{}", crypto::render_quote(&quote));
            }
        }
        Command::Macro => {
            let client = WorldBankClient::new(&config)?;
            println!(
                "{}",
                economic::india_gdp_growth(&client, economic::FALLBACK_GDP_GROWTH_PCT).await
            );
            println!(
                "{}",
                economic::india_cpi_inflation(&client, economic::FALLBACK_CPI_INFLATION_PCT).await
            );
        }
        Command::Funds { query } => {
            println!("{}", mutual_funds::fund_summary(query.as_deref().unwrap_or("")));
        }
        Command::Plan { no_stocks, no_mutual_funds, no_gold, no_crypto } => {
            let preferences = AssetPreferences {
                stocks: !no_stocks,
                mutual_funds: !no_mutual_funds,
                gold: !no_gold,
                crypto: !no_crypto,
            };
            let plan = build_pipeline(&preferences);
            println!("{}", plan.render());
        }
    }

    Ok(())
}
