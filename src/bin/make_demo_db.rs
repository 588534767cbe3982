use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use coin_forecast::config::PERSISTENCE;
use coin_forecast::data::demo::{open_writable, write_demo_database};
use coin_forecast::{Coin, CoinSet};

/// Writes a demo prediction store so the dashboard runs without the inference job.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = PERSISTENCE.database.default_path)]
    db_path: String,

    /// Coins to generate, in reference-table order
    #[arg(long, value_delimiter = ',', default_value = "BTC,ETH,SOL,DOGE")]
    coins: Vec<String>,

    /// Days of history per prediction table
    #[arg(long, default_value_t = 365)]
    days: usize,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let coins = args
        .coins
        .iter()
        .map(|c| Coin::parse(c.trim()))
        .collect::<Result<Vec<_>>>()?;
    let coins = CoinSet::new(coins)?;
    let last_date = Utc::now().date_naive();

    log::info!("🚀 Building demo prediction store: {}", args.db_path);
    log::info!("Coins: {:?}, {} days ending {}", args.coins, args.days, last_date);

    let pool = open_writable(&args.db_path).await?;
    let tables = write_demo_database(&pool, &coins, args.days, last_date)
        .await
        .context("Failed to write demo tables")?;
    pool.close().await;

    log::info!("✅ Wrote {} prediction tables to {}", tables, args.db_path);
    Ok(())
}
