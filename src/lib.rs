// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for make_demo_db.rs)
pub use app::{DashboardState, Selection};
pub use domain::{Coin, CoinSet, ForecastModel, Horizon, PredictionTable};

use crate::config::{DASHBOARD, PERSISTENCE};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Interface the dashboard listens on
    #[arg(long, env = "DASH_HOST", default_value = DASHBOARD.server.host)]
    pub host: String,

    #[arg(long, env = "DASH_PORT", default_value_t = DASHBOARD.server.port)]
    pub port: u16,

    /// Verbose logging
    #[arg(long, env = "DASH_DEBUG", default_value_t = false)]
    pub debug: bool,

    /// SQLite database holding the `coins` and `{coin}_preds_{L|T|D}` tables
    #[arg(long, default_value = PERSISTENCE.database.default_path)]
    pub db_path: String,

    /// Coin selected when the page first loads (defaults to the first coin in the `coins` table)
    #[arg(long)]
    pub default_coin: Option<String>,
}

/// Main application entry point - serves the dashboard until stopped.
pub async fn run_app(args: Cli) -> anyhow::Result<()> {
    app::serve(args).await
}
