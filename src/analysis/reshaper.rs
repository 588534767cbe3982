use {
    crate::{
        config::DF,
        domain::Horizon,
        models::{FORECAST_DAYS, PredictionRow},
        utils::days_after,
    },
    anyhow::{Result, bail},
    chrono::NaiveDate,
    itertools::izip,
    serde::Serialize,
};

/// One forward-looking point: the value predicted for `date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: Option<f64>,
}

/// The 7-day forecast published with the latest observation.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPredictionSeries {
    /// Date of the last row, i.e. when the forecast was made
    pub as_of: NaiveDate,
    pub points: Vec<ForecastPoint>,
}

/// Realized close next to the prediction made `horizon` days before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonPoint {
    pub date: NaiveDate,
    pub close: f64,
    pub predicted: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalComparisonSeries {
    pub horizon: Horizon,
    pub points: Vec<ComparisonPoint>,
}

impl HistoricalComparisonSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Turns the last row's `Day_1..Day_7` into dated points `as_of + 1 ..= as_of + 7`.
/// An empty table has no last row and is an error.
pub fn build_current_predictions(rows: &[PredictionRow]) -> Result<CurrentPredictionSeries> {
    let Some(last) = rows.last() else {
        bail!("Cannot build current predictions from an empty prediction table");
    };

    let points = last
        .day_ahead
        .iter()
        .enumerate()
        .map(|(i, predicted)| {
            Ok(ForecastPoint {
                date: days_after(last.date, (i + 1) as u64)?,
                predicted: *predicted,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if DF.log_reshaping {
        log::debug!(
            "Current predictions as of {}: {} points",
            last.date,
            points.len()
        );
    }

    Ok(CurrentPredictionSeries {
        as_of: last.date,
        points,
    })
}

/// Aligns each realized close (rows `7..N`) with the `Day_{horizon}` prediction
/// recorded `horizon` rows earlier (rows `7 - horizon .. N - horizon`).
///
/// The first [`FORECAST_DAYS`] rows are a warm-up window. Tables with no rows past
/// it yield an empty series.
pub fn build_historical_comparison(
    rows: &[PredictionRow],
    horizon: Horizon,
) -> HistoricalComparisonSeries {
    let warmup = FORECAST_DAYS;
    if rows.len() <= warmup {
        log::warn!(
            "Only {} prediction rows (need more than {}): historical comparison is empty",
            rows.len(),
            warmup
        );
        return HistoricalComparisonSeries {
            horizon,
            points: Vec::new(),
        };
    }

    let lag = horizon.days();
    let realized = &rows[warmup..];
    let made_earlier = &rows[warmup - lag..rows.len() - lag];

    let dates = realized.iter().map(|r| r.date);
    let closes = realized.iter().map(|r| r.close);
    let predictions = made_earlier.iter().map(|r| r.prediction(horizon));

    let points: Vec<ComparisonPoint> = izip!(dates, closes, predictions)
        .map(|(date, close, predicted)| ComparisonPoint {
            date,
            close,
            predicted,
        })
        .collect();

    if DF.log_reshaping {
        log::debug!(
            "Historical comparison ({} day horizon): {} points from {} rows",
            lag,
            points.len(),
            rows.len()
        );
    }

    HistoricalComparisonSeries { horizon, points }
}
