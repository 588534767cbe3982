use {
    crate::{
        domain::{Coin, ForecastModel, Horizon},
        utils::format_date,
    },
    chrono::NaiveDate,
    std::sync::LazyLock,
};

pub struct UiText {
    // --- PAGE ---
    pub page_title: String,
    pub page_heading: String,
    pub footer_blurb: String,

    // --- SERIES NAMES ---
    pub series_predictions: String,
    pub series_close: String,

    // --- CHART TITLES ---
    pub title_current_prefix: String,
    pub title_history_prefix: String,
    pub title_using: String,
    pub title_model: String,
    pub title_last_updated: String,
    pub title_days_prior: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    page_title: "Crypto Predictions".to_string(),
    page_heading: "Cryptocurrency Price Predictions".to_string(),
    footer_blurb: "For more information about this project, please see details here:".to_string(),

    series_predictions: "predictions".to_string(),
    series_close: "Close".to_string(),

    title_current_prefix: "Current Predictions of".to_string(),
    title_history_prefix: "Historical Predictions of".to_string(),
    title_using: "using the".to_string(),
    title_model: "model".to_string(),
    title_last_updated: "last updated:".to_string(),
    title_days_prior: "days prior".to_string(),
});

/// e.g. "Current Predictions of BTC using the LSTM model, last updated: 2024-01-10"
pub fn current_chart_title(coin: &Coin, model: ForecastModel, as_of: NaiveDate) -> String {
    format!(
        "{} {} {} {} {}, {} {}",
        UI_TEXT.title_current_prefix,
        coin,
        UI_TEXT.title_using,
        model,
        UI_TEXT.title_model,
        UI_TEXT.title_last_updated,
        format_date(as_of)
    )
}

/// e.g. "Historical Predictions of BTC using the LSTM model 3 days prior"
pub fn history_chart_title(coin: &Coin, model: ForecastModel, horizon: Horizon) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        UI_TEXT.title_history_prefix,
        coin,
        UI_TEXT.title_using,
        model,
        UI_TEXT.title_model,
        horizon.days(),
        UI_TEXT.title_days_prior
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_read_naturally() {
        let coin = Coin::parse("BTC").unwrap();
        let as_of = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(
            current_chart_title(&coin, ForecastModel::Lstm, as_of),
            "Current Predictions of BTC using the LSTM model, last updated: 2024-01-10"
        );
        assert_eq!(
            history_chart_title(&coin, ForecastModel::DLinear, Horizon::new(3).unwrap()),
            "Historical Predictions of BTC using the DLinear model 3 days prior"
        );
    }
}
