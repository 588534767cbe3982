mod chart_builder;
mod page;
mod ui_text;

pub use chart_builder::{ChartKind, ChartSeries, ChartSpec, build_time_series_chart};
pub use page::{DASHBOARD_JS, DASHBOARD_JS_PATH, render_page};
pub use ui_text::{UI_TEXT, UiText, current_chart_title, history_chart_title};
