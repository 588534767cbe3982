use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// The models whose predictions are published to the store.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Default,
)]
pub enum ForecastModel {
    #[default]
    #[serde(rename = "LSTM")]
    #[strum(to_string = "LSTM")]
    Lstm,
    #[serde(rename = "Transformer")]
    #[strum(to_string = "Transformer")]
    Transformer,
    #[serde(rename = "DLinear")]
    #[strum(to_string = "DLinear")]
    DLinear,
}

impl ForecastModel {
    /// One-letter suffix of this model's prediction tables.
    pub const fn table_suffix(self) -> &'static str {
        match self {
            Self::Lstm => "L",
            Self::Transformer => "T",
            Self::DLinear => "D",
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::collections::HashSet, std::str::FromStr, strum::IntoEnumIterator};

    #[test]
    fn suffixes_match_the_store_convention() {
        assert_eq!(ForecastModel::Lstm.table_suffix(), "L");
        assert_eq!(ForecastModel::Transformer.table_suffix(), "T");
        assert_eq!(ForecastModel::DLinear.table_suffix(), "D");
    }

    #[test]
    fn suffixes_are_unique() {
        let suffixes: HashSet<_> = ForecastModel::iter().map(|m| m.table_suffix()).collect();
        assert_eq!(suffixes.len(), ForecastModel::iter().count());
    }

    #[test]
    fn display_and_parse_use_the_published_names() {
        for model in ForecastModel::iter() {
            assert_eq!(ForecastModel::from_str(&model.to_string()).unwrap(), model);
        }
        assert_eq!(ForecastModel::Lstm.to_string(), "LSTM");
        assert_eq!(ForecastModel::default(), ForecastModel::Lstm);
        assert!(ForecastModel::from_str("GRU").is_err());
    }

    #[test]
    fn serde_names_match_display() {
        let json = serde_json::to_string(&ForecastModel::DLinear).unwrap();
        assert_eq!(json, "\"DLinear\"");
        let back: ForecastModel = serde_json::from_str("\"Transformer\"").unwrap();
        assert_eq!(back, ForecastModel::Transformer);
    }
}
