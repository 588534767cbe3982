mod prediction_row;

pub use prediction_row::{FORECAST_DAYS, PredictionRow, day_column};
