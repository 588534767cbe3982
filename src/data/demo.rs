//! Writes a synthetic prediction store with the same layout the inference job
//! produces, so the dashboard can run without it.

use {
    crate::{
        config::PERSISTENCE,
        domain::{Coin, CoinSet, ForecastModel, PredictionTable},
        models::{FORECAST_DAYS, PredictionRow, day_column},
        utils::days_after,
    },
    anyhow::{Context, Result},
    chrono::NaiveDate,
    itertools::Itertools,
    sqlx::{
        QueryBuilder, Sqlite, SqlitePool,
        sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    },
    std::{str::FromStr, time::Duration},
    strum::IntoEnumIterator,
};

/// Rows per INSERT, keeps bound parameters far below SQLite's limit.
const INSERT_CHUNK_ROWS: usize = 2000;

/// Opens (creating if needed) a writable database for the demo writer.
pub async fn open_writable(db_path: &str) -> Result<SqlitePool> {
    let connection_options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(PERSISTENCE.database.busy_timeout_secs))
        .synchronous(SqliteSynchronous::Normal);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connection_options)
        .await
        .with_context(|| format!("Failed to open {} for writing", db_path))
}

/// Replaces the `coins` reference table. The `index` column mirrors the
/// surrogate key the inference job writes.
pub async fn write_coins_table(pool: &SqlitePool, coins: &[Coin]) -> Result<()> {
    let tables = &PERSISTENCE.tables;
    sqlx::query(&format!(r#"DROP TABLE IF EXISTS "{}""#, tables.coins_table))
        .execute(pool)
        .await?;
    sqlx::query(&format!(
        r#"CREATE TABLE "{}" ("index" INTEGER, "{}" TEXT)"#,
        tables.coins_table, tables.coin_column
    ))
    .execute(pool)
    .await
    .context("Failed to create coins table")?;

    if coins.is_empty() {
        return Ok(());
    }

    let mut query_builder = QueryBuilder::<Sqlite>::new(format!(
        r#"INSERT INTO "{}" ("index", "{}") "#,
        tables.coins_table, tables.coin_column
    ));
    query_builder.push_values(coins.iter().enumerate(), |mut b, (i, coin)| {
        b.push_bind(i as i64).push_bind(coin.as_str());
    });
    query_builder.build().execute(pool).await?;

    Ok(())
}

/// Replaces one prediction table with `rows`. Dates are stored as
/// `YYYY-MM-DD 00:00:00` text, as the inference job does.
pub async fn write_prediction_table(
    pool: &SqlitePool,
    table: &PredictionTable,
    rows: &[PredictionRow],
) -> Result<()> {
    let name = table.quoted_name();
    let day_columns = (1..=FORECAST_DAYS)
        .map(|k| format!(r#""{}""#, day_column(k)))
        .collect::<Vec<_>>();

    sqlx::query(&format!("DROP TABLE IF EXISTS {}", name))
        .execute(pool)
        .await?;
    sqlx::query(&format!(
        r#"CREATE TABLE {} ("index" INTEGER, "Date" TEXT, "Close" REAL, {})"#,
        name,
        day_columns.iter().map(|c| format!("{} REAL", c)).join(", ")
    ))
    .execute(pool)
    .await
    .with_context(|| format!("Failed to create {}", table))?;

    for (chunk_no, chunk) in rows.chunks(INSERT_CHUNK_ROWS).enumerate() {
        let mut query_builder = QueryBuilder::<Sqlite>::new(format!(
            r#"INSERT INTO {} ("index", "Date", "Close", {}) "#,
            name,
            day_columns.join(", ")
        ));
        let offset = chunk_no * INSERT_CHUNK_ROWS;
        query_builder.push_values(chunk.iter().enumerate(), |mut b, (i, row)| {
            b.push_bind((offset + i) as i64)
                .push_bind(format!("{} 00:00:00", row.date))
                .push_bind(row.close);
            for value in row.day_ahead {
                b.push_bind(value);
            }
        });
        query_builder
            .build()
            .execute(pool)
            .await
            .with_context(|| format!("Failed to insert rows into {}", table))?;
    }

    Ok(())
}

/// Deterministic price path: a per-coin base level with a slow trend and a wave.
fn synthetic_close(base: f64, step: usize) -> f64 {
    let t = step as f64;
    base * (1.0 + 0.002 * t + 0.05 * (t / 9.0).sin())
}

fn base_price(coin: &Coin) -> f64 {
    let seed: u32 = coin.as_str().bytes().map(u32::from).sum();
    100.0 + f64::from(seed % 97) * 25.0
}

/// Each model gets its own systematic error that grows with the horizon.
fn model_skew(model: ForecastModel) -> f64 {
    match model {
        ForecastModel::Lstm => 0.004,
        ForecastModel::Transformer => -0.003,
        ForecastModel::DLinear => 0.0015,
    }
}

/// `rows` consecutive days ending at `last_date`.
pub fn synthetic_rows(
    coin: &Coin,
    model: ForecastModel,
    rows: usize,
    last_date: NaiveDate,
) -> Result<Vec<PredictionRow>> {
    let base = base_price(coin);
    let skew = model_skew(model);
    let first_date = last_date
        .checked_sub_days(chrono::Days::new(rows.saturating_sub(1) as u64))
        .context("Demo history reaches before the calendar start")?;

    (0..rows)
        .map(|step| {
            let mut day_ahead = [None; FORECAST_DAYS];
            for (i, slot) in day_ahead.iter_mut().enumerate() {
                let k = i + 1;
                *slot = Some(synthetic_close(base, step + k) * (1.0 + skew * k as f64));
            }
            Ok(PredictionRow::new(
                days_after(first_date, step as u64)?,
                synthetic_close(base, step),
                day_ahead,
            ))
        })
        .collect()
}

/// Writes the coins table plus one table per (coin, model).
pub async fn write_demo_database(
    pool: &SqlitePool,
    coins: &CoinSet,
    rows: usize,
    last_date: NaiveDate,
) -> Result<usize> {
    let coin_list: Vec<Coin> = coins.iter().cloned().collect();
    write_coins_table(pool, &coin_list).await?;

    let mut tables_written = 0;
    for coin in coins.iter() {
        for model in ForecastModel::iter() {
            let table = PredictionTable::resolve(coins, coin.as_str(), model)?;
            let data = synthetic_rows(coin, model, rows, last_date)?;
            write_prediction_table(pool, &table, &data).await?;
            log::info!("Wrote {} rows to {}", data.len(), table);
            tables_written += 1;
        }
    }

    Ok(tables_written)
}

/// Single-connection in-memory pool; the database lives as long as the pool.
#[cfg(test)]
pub(crate) async fn memory_pool() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
        .await?;
    Ok(pool)
}
