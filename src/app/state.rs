// src/app/state.rs

use {
    crate::{
        data::PredictionStorage,
        domain::{Coin, CoinSet, ForecastModel, Horizon},
    },
    serde::Serialize,
    std::sync::Arc,
};

/// What the three page controls start on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub coin: Coin,
    pub model: ForecastModel,
    pub horizon: Horizon,
}

impl Selection {
    /// Default model and horizon, explicit coin.
    pub fn new(coin: Coin) -> Self {
        Self {
            coin,
            model: ForecastModel::default(),
            horizon: Horizon::default(),
        }
    }
}

/// Shared, read-only state behind every request.
/// Built once before the server binds; never mutated afterwards.
#[derive(Clone)]
pub struct DashboardState {
    pub(crate) storage: Arc<dyn PredictionStorage>,
    pub(crate) coins: Arc<CoinSet>,
    pub(crate) defaults: Arc<Selection>,
}

impl DashboardState {
    pub fn new(storage: Arc<dyn PredictionStorage>, coins: CoinSet, defaults: Selection) -> Self {
        Self {
            storage,
            coins: Arc::new(coins),
            defaults: Arc::new(defaults),
        }
    }

    pub fn coins(&self) -> &CoinSet {
        &self.coins
    }

    pub fn defaults(&self) -> &Selection {
        &self.defaults
    }
}
