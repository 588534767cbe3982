//! Chart specifications, built as plotly figures and rendered by plotly.js on the page.

use {
    crate::{
        analysis::{CurrentPredictionSeries, HistoricalComparisonSeries},
        config::DASHBOARD,
        models::day_column,
        ui::UI_TEXT,
    },
    anyhow::{Context, Result},
    chrono::NaiveDate,
    plotly::{
        Layout, Plot, Scatter,
        common::{Anchor, Mode},
        layout::{Annotation, Axis, HAlign, Margin},
    },
    strum_macros::Display,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ChartKind {
    Current,
    History,
}

/// One finished chart: the plotly figure plus what it was built from.
pub struct ChartSpec {
    kind: ChartKind,
    title: String,
    plot: Plot,
}

impl ChartSpec {
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Figure JSON (`data`, `layout`) as handed to `Plotly.react`
    pub fn to_json(&self) -> String {
        self.plot.to_json()
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.to_json()).context("Chart figure is not valid JSON")
    }
}

/// Input to [`build_time_series_chart`]. The variant decides the chart kind.
#[derive(Debug, Clone, Copy)]
pub enum ChartSeries<'a> {
    Current(&'a CurrentPredictionSeries),
    History(&'a HistoricalComparisonSeries),
}

impl ChartSeries<'_> {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartSeries::Current(_) => ChartKind::Current,
            ChartSeries::History(_) => ChartKind::History,
        }
    }
}

pub fn build_time_series_chart(series: ChartSeries<'_>, title: &str) -> ChartSpec {
    let mut plot = Plot::new();
    match series {
        ChartSeries::Current(current) => {
            let (x, y): (Vec<NaiveDate>, Vec<Option<f64>>) =
                current.points.iter().map(|p| (p.date, p.predicted)).unzip();
            plot.add_trace(
                Scatter::new(x, y)
                    .name(&UI_TEXT.series_predictions)
                    .mode(Mode::LinesMarkers),
            );
        }
        ChartSeries::History(history) => {
            let x: Vec<NaiveDate> = history.points.iter().map(|p| p.date).collect();
            // `None` serializes as `null`, which plotly draws as a gap
            let predicted: Vec<Option<f64>> = history.points.iter().map(|p| p.predicted).collect();
            let realized: Vec<f64> = history.points.iter().map(|p| p.close).collect();
            plot.add_trace(
                Scatter::new(x.clone(), predicted)
                    .name(day_column(history.horizon.days()))
                    .mode(Mode::Lines),
            );
            plot.add_trace(
                Scatter::new(x, realized)
                    .name(&UI_TEXT.series_close)
                    .mode(Mode::Lines),
            );
        }
    }
    plot.set_layout(base_layout(title));

    ChartSpec {
        kind: series.kind(),
        title: title.to_string(),
        plot,
    }
}

fn base_layout(title: &str) -> Layout {
    let chart = &DASHBOARD.chart;
    Layout::new()
        .height(chart.height)
        .margin(
            Margin::new()
                .left(chart.margin_left)
                .bottom(chart.margin_bottom)
                .right(chart.margin_right)
                .top(chart.margin_top),
        )
        .x_axis(Axis::new().show_grid(chart.show_x_grid))
        .annotations(vec![
            Annotation::new()
                .x(chart.title_x)
                .y(chart.title_y)
                .x_ref("paper")
                .y_ref("paper")
                .x_anchor(Anchor::Left)
                .y_anchor(Anchor::Bottom)
                .show_arrow(false)
                .align(HAlign::Left)
                .text(title),
        ])
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            analysis::{ComparisonPoint, ForecastPoint},
            domain::Horizon,
        },
    };

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn current() -> CurrentPredictionSeries {
        CurrentPredictionSeries {
            as_of: date(1),
            points: (2..=8)
                .map(|d| ForecastPoint {
                    date: date(d),
                    predicted: Some(d as f64),
                })
                .collect(),
        }
    }

    fn history(days: u8) -> HistoricalComparisonSeries {
        HistoricalComparisonSeries {
            horizon: Horizon::new(days).unwrap(),
            points: vec![
                ComparisonPoint {
                    date: date(10),
                    close: 50.0,
                    predicted: Some(49.0),
                },
                ComparisonPoint {
                    date: date(11),
                    close: 51.0,
                    predicted: None,
                },
            ],
        }
    }

    #[test]
    fn current_chart_is_one_line_with_markers() {
        let series = current();
        let chart = build_time_series_chart(ChartSeries::Current(&series), "now");
        assert_eq!(chart.kind(), ChartKind::Current);
        let json = chart.to_value().unwrap();
        let traces = json["data"].as_array().unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0]["type"], "scatter");
        assert_eq!(traces[0]["mode"], "lines+markers");
        assert_eq!(traces[0]["name"], "predictions");
        assert_eq!(traces[0]["x"].as_array().unwrap().len(), 7);
        assert_eq!(traces[0]["x"][0], "2024-03-02");
        assert_eq!(traces[0]["y"][0], 2.0);
    }

    #[test]
    fn history_chart_is_two_plain_lines_prediction_first() {
        let series = history(3);
        let chart = build_time_series_chart(ChartSeries::History(&series), "then");
        assert_eq!(chart.kind(), ChartKind::History);
        let json = chart.to_value().unwrap();
        let traces = json["data"].as_array().unwrap();
        let names: Vec<_> = traces.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["Day_3", "Close"]);
        assert!(traces.iter().all(|t| t["mode"] == "lines"));
        assert_eq!(traces[0]["x"], traces[1]["x"]);
        assert_eq!(traces[0]["y"][0], 49.0);
        assert!(traces[0]["y"][1].is_null());
        assert_eq!(traces[1]["y"], serde_json::json!([50.0, 51.0]));
    }

    #[test]
    fn layout_is_compact_with_in_plot_title() {
        let series = history(1);
        let chart = build_time_series_chart(ChartSeries::History(&series), "My title");
        assert_eq!(chart.title(), "My title");
        let json = chart.to_value().unwrap();
        let layout = &json["layout"];
        assert_eq!(layout["height"], 300);
        assert_eq!(
            layout["margin"],
            serde_json::json!({"l": 20, "b": 30, "r": 10, "t": 20})
        );
        assert_eq!(layout["xaxis"]["showgrid"], false);

        let note = &layout["annotations"][0];
        assert_eq!(note["text"], "My title");
        assert_eq!((note["x"].as_f64(), note["y"].as_f64()), (Some(0.0), Some(1.0)));
        assert_eq!(note["xref"], "paper");
        assert_eq!(note["yref"], "paper");
        assert_eq!(note["xanchor"], "left");
        assert_eq!(note["yanchor"], "bottom");
        assert_eq!(note["align"], "left");
        assert_eq!(note["showarrow"], false);
    }
}
