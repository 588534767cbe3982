use {crate::domain::Horizon, chrono::NaiveDate};

/// Number of `Day_k` columns per row, also the length of the warm-up window.
pub const FORECAST_DAYS: usize = 7;

/// Column name of the k-days-ahead prediction (`Day_1` ..= `Day_7`).
pub fn day_column(k: usize) -> String {
    format!("Day_{}", k)
}

// ============================================================================
// PredictionRow: one observation date of a `{coin}_preds_{suffix}` table
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRow {
    pub date: NaiveDate,
    /// Realized close on `date`
    pub close: f64,
    /// `day_ahead[k - 1]` is the price predicted for `date + k`.
    /// `None` where the store holds NULL.
    pub day_ahead: [Option<f64>; FORECAST_DAYS],
}

impl PredictionRow {
    pub fn new(date: NaiveDate, close: f64, day_ahead: [Option<f64>; FORECAST_DAYS]) -> Self {
        Self {
            date,
            close,
            day_ahead,
        }
    }

    #[inline]
    pub fn prediction(&self, horizon: Horizon) -> Option<f64> {
        self.day_ahead[horizon.days() - 1]
    }
}
