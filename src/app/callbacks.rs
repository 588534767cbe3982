//! Reactive wiring between the page controls and the two charts.
//!
//! Each chart declares the inputs it depends on. The page script refreshes a
//! chart only when one of those inputs changes, so a horizon change never
//! touches the current-predictions chart.

use {
    super::DashboardState,
    crate::{
        analysis::{build_current_predictions, build_historical_comparison},
        config::DF,
        domain::{ForecastModel, Horizon, PredictionTable},
        ui::{
            ChartSeries, ChartSpec, build_time_series_chart, current_chart_title,
            history_chart_title,
        },
    },
    anyhow::Result,
    serde::{Serialize, ser::SerializeStruct},
    strum_macros::EnumIter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum InputId {
    Coin,
    Model,
    Horizon,
}

impl InputId {
    /// Element id of the control on the page
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Coin => "coin-selector",
            Self::Model => "model-selector",
            Self::Horizon => "days-predicted",
        }
    }

    /// Query parameter the control's value travels in
    pub const fn param(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Model => "model",
            Self::Horizon => "days",
        }
    }
}

impl Serialize for InputId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("InputId", 2)?;
        s.serialize_field("id", self.dom_id())?;
        s.serialize_field("param", self.param())?;
        s.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
pub enum OutputId {
    #[serde(rename = "current-preds")]
    CurrentPreds,
    #[serde(rename = "pred-history")]
    PredHistory,
}

#[derive(Debug, Serialize)]
pub struct Callback {
    pub output: OutputId,
    pub inputs: &'static [InputId],
    pub endpoint: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CallbackGraph {
    pub inputs: &'static [InputId],
    pub callbacks: &'static [Callback],
}

impl CallbackGraph {
    /// Charts that must be recomputed when `input` changes.
    pub fn outputs_for(&self, input: InputId) -> Vec<OutputId> {
        self.callbacks
            .iter()
            .filter(|cb| cb.inputs.contains(&input))
            .map(|cb| cb.output)
            .collect()
    }
}

pub const CURRENT_ENDPOINT: &str = "/api/current";
pub const HISTORY_ENDPOINT: &str = "/api/history";

pub const CALLBACK_GRAPH: CallbackGraph = CallbackGraph {
    inputs: &[InputId::Coin, InputId::Model, InputId::Horizon],
    callbacks: &[
        Callback {
            output: OutputId::CurrentPreds,
            inputs: &[InputId::Coin, InputId::Model],
            endpoint: CURRENT_ENDPOINT,
        },
        Callback {
            output: OutputId::PredHistory,
            inputs: &[InputId::Coin, InputId::Model, InputId::Horizon],
            endpoint: HISTORY_ENDPOINT,
        },
    ],
};

/// Chart of the 7-day forecast in the latest row of `{coin}_preds_{model}`.
pub async fn update_current_preds(
    state: &DashboardState,
    coin: &str,
    model: ForecastModel,
) -> Result<ChartSpec> {
    let table = PredictionTable::resolve(state.coins(), coin, model)?;
    if DF.log_requests {
        log::info!("Refreshing current predictions from {}", table);
    }

    let rows = state.storage.load_predictions(&table).await?;
    let series = build_current_predictions(&rows)?;
    let title = current_chart_title(table.coin(), model, series.as_of);

    Ok(build_time_series_chart(ChartSeries::Current(&series), &title))
}

/// Chart of realized closes against the predictions made `horizon` days earlier.
pub async fn update_history(
    state: &DashboardState,
    coin: &str,
    model: ForecastModel,
    horizon: Horizon,
) -> Result<ChartSpec> {
    let table = PredictionTable::resolve(state.coins(), coin, model)?;
    if DF.log_requests {
        log::info!(
            "Refreshing {} day prediction history from {}",
            horizon.days(),
            table
        );
    }

    let rows = state.storage.load_predictions(&table).await?;
    let series = build_historical_comparison(&rows, horizon);
    let title = history_chart_title(table.coin(), model, horizon);

    Ok(build_time_series_chart(ChartSeries::History(&series), &title))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            app::Selection,
            data::{SqliteStorage, demo},
            domain::{Coin, CoinSet},
            ui::ChartKind,
        },
        chrono::NaiveDate,
        std::sync::Arc,
        strum::IntoEnumIterator,
    };

    async fn demo_state(rows: usize) -> DashboardState {
        let pool = demo::memory_pool().await.unwrap();
        let coins =
            CoinSet::new(vec![Coin::parse("BTC").unwrap(), Coin::parse("ETH").unwrap()]).unwrap();
        let last = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        demo::write_demo_database(&pool, &coins, rows, last).await.unwrap();
        let defaults = Selection::new(coins.first().clone());
        DashboardState::new(Arc::new(SqliteStorage::from_pool(pool)), coins, defaults)
    }

    #[test]
    fn horizon_only_drives_the_history_chart() {
        assert_eq!(
            CALLBACK_GRAPH.outputs_for(InputId::Horizon),
            [OutputId::PredHistory]
        );
        for input in [InputId::Coin, InputId::Model] {
            assert_eq!(
                CALLBACK_GRAPH.outputs_for(input),
                [OutputId::CurrentPreds, OutputId::PredHistory]
            );
        }
    }

    #[test]
    fn every_input_and_output_is_wired() {
        for input in InputId::iter() {
            assert!(CALLBACK_GRAPH.inputs.contains(&input));
        }
        for output in OutputId::iter() {
            assert_eq!(
                CALLBACK_GRAPH
                    .callbacks
                    .iter()
                    .filter(|cb| cb.output == output)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn graph_serializes_dom_ids_and_params() {
        let json = serde_json::to_value(&CALLBACK_GRAPH).unwrap();
        assert_eq!(json["callbacks"][0]["output"], "current-preds");
        assert_eq!(json["callbacks"][0]["endpoint"], "/api/current");
        assert_eq!(json["callbacks"][1]["inputs"][2]["id"], "days-predicted");
        assert_eq!(json["callbacks"][1]["inputs"][2]["param"], "days");
    }

    #[tokio::test]
    async fn current_chart_comes_from_the_selected_table() {
        let state = demo_state(20).await;
        let chart = update_current_preds(&state, "ETH", ForecastModel::Transformer)
            .await
            .unwrap();
        assert_eq!(chart.kind(), ChartKind::Current);
        assert_eq!(
            chart.title(),
            "Current Predictions of ETH using the Transformer model, last updated: 2024-01-10"
        );
        let json = chart.to_value().unwrap();
        assert_eq!(json["data"][0]["x"][0], "2024-01-11");
        assert_eq!(json["data"][0]["x"][6], "2024-01-17");
    }

    #[tokio::test]
    async fn history_chart_has_rows_past_warmup() {
        let state = demo_state(20).await;
        let horizon = Horizon::new(4).unwrap();
        let chart = update_history(&state, "BTC", ForecastModel::DLinear, horizon)
            .await
            .unwrap();
        assert_eq!(chart.kind(), ChartKind::History);
        let json = chart.to_value().unwrap();
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"][0]["name"], "Day_4");
        assert_eq!(json["data"][0]["x"].as_array().unwrap().len(), 13);
        assert_eq!(
            chart.title(),
            "Historical Predictions of BTC using the DLinear model 4 days prior"
        );
    }

    #[tokio::test]
    async fn short_tables_give_an_empty_history_chart() {
        let state = demo_state(5).await;
        let chart = update_history(&state, "BTC", ForecastModel::Lstm, Horizon::DEFAULT)
            .await
            .unwrap();
        let json = chart.to_value().unwrap();
        let traces = json["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert!(traces.iter().all(|t| t["x"].as_array().unwrap().is_empty()));
    }

    #[tokio::test]
    async fn unknown_coin_fails() {
        let state = demo_state(10).await;
        assert!(
            update_current_preds(&state, "DOGE", ForecastModel::Lstm)
                .await
                .is_err()
        );
    }
}
