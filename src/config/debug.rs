//! Debugging feature flags.

pub struct LogFlags {
    /// Log every prediction-table read (table name, row count).
    pub log_queries: bool,

    /// Log the shape of each reshaped series.
    pub log_reshaping: bool,

    /// Log each chart request as it arrives.
    pub log_requests: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    pub log_startup_coins: bool,
}

pub const DF: LogFlags = LogFlags {
    log_startup_coins: true,
    log_requests: true,

    log_queries: false,
    log_reshaping: false,
    log_performance: true,
};
