use {
    crate::{
        config::{DF, PERSISTENCE},
        domain::{Coin, PredictionTable},
        models::{FORECAST_DAYS, PredictionRow, day_column},
        utils::parse_store_date,
    },
    anyhow::{Context, Result},
    async_trait::async_trait,
    itertools::Itertools,
    sqlx::{
        ConnectOptions, Pool, Row, Sqlite,
        sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
    },
    std::{str::FromStr, time::Duration},
};

/// Read side of the prediction store written by the inference job.
#[async_trait]
pub trait PredictionStorage: Send + Sync {
    /// Coins of the reference table, in table order.
    async fn load_coins(&self) -> Result<Vec<Coin>>;
    /// Every row of one prediction table, ascending by date.
    async fn load_predictions(&self, table: &PredictionTable) -> Result<Vec<PredictionRow>>;
}

pub struct SqliteStorage {
    pool: Pool<Sqlite>,
}

impl SqliteStorage {
    /// Opens an existing database read-only. A missing file is an error.
    pub async fn new(db_path: &str) -> Result<Self> {
        let db = &PERSISTENCE.database;
        let connection_options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path))?
            .read_only(true)
            .create_if_missing(false)
            .busy_timeout(Duration::from_secs(db.busy_timeout_secs))
            .log_slow_statements(
                log::LevelFilter::Warn,
                Duration::from_secs(db.slow_statement_secs),
            );

        let pool = SqlitePoolOptions::new()
            .max_connections(db.max_connections)
            .connect_with(connection_options)
            .await
            .with_context(|| format!("Failed to open prediction store {}", db_path))?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn predictions_query(table: &PredictionTable) -> String {
        let day_columns = (1..=FORECAST_DAYS)
            .map(|k| format!(r#"CAST("{}" AS REAL) AS day_{}"#, day_column(k), k))
            .join(", ");
        format!(
            r#"SELECT CAST("Date" AS TEXT) AS date, CAST("Close" AS REAL) AS close, {} FROM {} ORDER BY "Date" ASC"#,
            day_columns,
            table.quoted_name()
        )
    }

    fn decode_prediction_row(row: &SqliteRow) -> Result<PredictionRow> {
        let raw_date: String = row.try_get("date")?;
        let date = parse_store_date(&raw_date)?;
        let close: f64 = row
            .try_get("close")
            .with_context(|| format!("Close is missing on {}", date))?;

        let mut day_ahead = [None; FORECAST_DAYS];
        for (i, slot) in day_ahead.iter_mut().enumerate() {
            let column = format!("day_{}", i + 1);
            *slot = row.try_get::<Option<f64>, _>(column.as_str())?;
        }

        Ok(PredictionRow::new(date, close, day_ahead))
    }
}

#[async_trait]
impl PredictionStorage for SqliteStorage {
    async fn load_coins(&self) -> Result<Vec<Coin>> {
        let tables = &PERSISTENCE.tables;
        let query = format!(
            r#"SELECT CAST("{}" AS TEXT) AS coin FROM "{}" ORDER BY rowid ASC"#,
            tables.coin_column, tables.coins_table
        );

        // Connection goes back to the pool when `conn` drops, on every path.
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query(&query)
            .fetch_all(&mut *conn)
            .await
            .with_context(|| format!("Failed to read the {} table", tables.coins_table))?;

        let coins = rows
            .iter()
            .map(|row| Coin::parse(&row.try_get::<String, _>("coin")?))
            .collect::<Result<Vec<_>>>()?;

        if DF.log_startup_coins {
            log::info!(
                "Loaded {} coins: {}",
                coins.len(),
                coins.iter().map(|c| c.as_str()).join(", ")
            );
        }

        Ok(coins)
    }

    async fn load_predictions(&self, table: &PredictionTable) -> Result<Vec<PredictionRow>> {
        let query = Self::predictions_query(table);

        let mut conn = self.pool.acquire().await?;
        let rows = crate::trace_time!("Load prediction table", 50_000, {
            sqlx::query(&query)
                .fetch_all(&mut *conn)
                .await
                .with_context(|| format!("Failed to read prediction table {}", table))?
        });

        let predictions = rows
            .iter()
            .map(Self::decode_prediction_row)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("Malformed row in prediction table {}", table))?;

        if DF.log_queries {
            log::debug!("Read {} rows from {}", predictions.len(), table);
        }

        Ok(predictions)
    }
}
