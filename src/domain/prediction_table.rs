use {
    super::{Coin, CoinSet, ForecastModel},
    crate::config::PERSISTENCE,
    anyhow::Result,
};

/// Typed handle for one `{coin}_preds_{suffix}` table.
///
/// Only obtainable through [`PredictionTable::resolve`], so the coin is always a
/// member of the loaded allow-list and the model one of the known variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredictionTable {
    coin: Coin,
    model: ForecastModel,
}

impl PredictionTable {
    pub fn resolve(coins: &CoinSet, coin: &str, model: ForecastModel) -> Result<Self> {
        let coin = coins.get(coin)?.clone();
        Ok(Self { coin, model })
    }

    pub fn coin(&self) -> &Coin {
        &self.coin
    }

    pub fn model(&self) -> ForecastModel {
        self.model
    }

    pub fn table_name(&self) -> String {
        format!(
            "{}{}{}",
            self.coin,
            PERSISTENCE.tables.preds_infix,
            self.model.table_suffix()
        )
    }

    /// Identifier ready to splice into SQL.
    pub(crate) fn quoted_name(&self) -> String {
        format!("\"{}\"", self.table_name())
    }
}

impl std::fmt::Display for PredictionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.table_name())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, strum::IntoEnumIterator};

    fn coins() -> CoinSet {
        CoinSet::new(vec![Coin::parse("BTC").unwrap(), Coin::parse("ETH").unwrap()]).unwrap()
    }

    #[test]
    fn every_coin_model_pair_maps_to_its_table() {
        let coins = coins();
        let mut names = Vec::new();
        for coin in coins.iter() {
            for model in ForecastModel::iter() {
                let table = PredictionTable::resolve(&coins, coin.as_str(), model).unwrap();
                names.push(table.table_name());
            }
        }
        assert_eq!(
            names,
            [
                "BTC_preds_L",
                "BTC_preds_T",
                "BTC_preds_D",
                "ETH_preds_L",
                "ETH_preds_T",
                "ETH_preds_D"
            ]
        );
    }

    #[test]
    fn unknown_coins_never_become_tables() {
        let coins = coins();
        assert!(PredictionTable::resolve(&coins, "DOGE", ForecastModel::Lstm).is_err());
        assert!(PredictionTable::resolve(&coins, "BTC_preds_L --", ForecastModel::Lstm).is_err());
    }

    #[test]
    fn quoted_name_wraps_identifier() {
        let table = PredictionTable::resolve(&coins(), "ETH", ForecastModel::DLinear).unwrap();
        assert_eq!(table.quoted_name(), "\"ETH_preds_D\"");
        assert_eq!(table.to_string(), "ETH_preds_D");
    }
}
