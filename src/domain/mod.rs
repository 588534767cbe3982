// Domain types and value objects
mod coin;
mod coin_set;
mod forecast_model;
mod horizon;
mod prediction_table;

pub use {
    coin::Coin,
    coin_set::CoinSet,
    forecast_model::ForecastModel,
    horizon::Horizon,
    prediction_table::PredictionTable,
};
