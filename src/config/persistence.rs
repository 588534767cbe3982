//! Prediction store configuration

/// Connection settings for the SQLite prediction store
pub struct DatabaseConfig {
    /// Used when `--db-path` is not given
    pub default_path: &'static str,
    pub max_connections: u32,
    pub busy_timeout_secs: u64,
    /// Statements slower than this are logged at warn level
    pub slow_statement_secs: u64,
}

/// Naming conventions of the tables written by the inference job
pub struct TableNamingConfig {
    pub coins_table: &'static str,
    pub coin_column: &'static str,
    /// Joins coin and model suffix: `{coin}_preds_{suffix}`
    pub preds_infix: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub database: DatabaseConfig,
    pub tables: TableNamingConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    database: DatabaseConfig {
        default_path: "database.db",
        max_connections: 4,
        busy_timeout_secs: 10,
        slow_statement_secs: 2,
    },
    tables: TableNamingConfig {
        coins_table: "coins",
        coin_column: "coin",
        preds_infix: "_preds_",
    },
};
