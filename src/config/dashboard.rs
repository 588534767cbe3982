//! Page and chart layout configuration

/// Fixed figure geometry shared by every chart on the page
pub struct ChartLayoutConfig {
    /// Figure height in plot units
    pub height: usize,
    pub margin_left: usize,
    pub margin_bottom: usize,
    pub margin_right: usize,
    pub margin_top: usize,
    pub show_x_grid: bool,
    /// Paper coordinates of the in-plot title annotation (top-left corner)
    pub title_x: f64,
    pub title_y: f64,
}

pub struct FooterConfig {
    pub link_href: &'static str,
    pub link_label: &'static str,
}

pub struct ServerDefaults {
    pub host: &'static str,
    pub port: u16,
}

/// The Master Dashboard Configuration
pub struct DashboardConfig {
    pub chart: ChartLayoutConfig,
    pub footer: FooterConfig,
    pub server: ServerDefaults,
    pub stylesheet_url: &'static str,
    pub plotly_js_url: &'static str,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    chart: ChartLayoutConfig {
        height: 300,
        margin_left: 20,
        margin_bottom: 30,
        margin_right: 10,
        margin_top: 20,
        show_x_grid: false,
        title_x: 0.0,
        title_y: 1.0,
    },
    footer: FooterConfig {
        link_href: "https://github.com/camdenhine",
        link_label: "github.com/camdenhine",
    },
    server: ServerDefaults {
        host: "127.0.0.1",
        port: 8050,
    },
    stylesheet_url: "https://codepen.io/chriddyp/pen/bWLwgP.css",
    plotly_js_url: "https://cdn.plot.ly/plotly-2.35.2.min.js",
};
