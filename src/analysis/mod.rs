// Pure reshaping of prediction tables into chartable series
mod reshaper;

pub use reshaper::{
    ComparisonPoint, CurrentPredictionSeries, ForecastPoint, HistoricalComparisonSeries,
    build_current_predictions, build_historical_comparison,
};
