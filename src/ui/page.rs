//! Server-rendered dashboard page. The charts are filled in by `dashboard.js`.

use {
    crate::{
        app::{CALLBACK_GRAPH, CallbackGraph, Selection},
        config::DASHBOARD,
        domain::{CoinSet, ForecastModel, Horizon},
        ui::UI_TEXT,
    },
    anyhow::Result,
    itertools::Itertools,
    serde::Serialize,
    strum::IntoEnumIterator,
};

pub const DASHBOARD_JS: &str = include_str!("assets/dashboard.js");
pub const DASHBOARD_JS_PATH: &str = "/static/dashboard.js";

/// Bootstrap data handed to the page script
#[derive(Serialize)]
struct PageConfig<'a> {
    graph: &'a CallbackGraph,
}

pub fn render_page(coins: &CoinSet, defaults: &Selection) -> Result<String> {
    let config = PageConfig {
        graph: &CALLBACK_GRAPH,
    };
    // `</` would close the script element early
    let config_json = serde_json::to_string(&config)?.replace("</", "<\\/");

    let coin_options = coins
        .iter()
        .map(|coin| {
            let selected = if *coin == defaults.coin { " selected" } else { "" };
            format!(
                r#"<option value="{0}"{1}>{0}</option>"#,
                escape_html(coin.as_str()),
                selected
            )
        })
        .join("\n                ");

    let model_items = ForecastModel::iter()
        .map(|model| {
            radio_item(
                "model",
                &model.to_string(),
                &model.to_string(),
                model == defaults.model,
            )
        })
        .join("\n                ");

    let horizon_items = Horizon::all()
        .map(|h| {
            radio_item(
                "days",
                &h.days().to_string(),
                &h.to_string(),
                h == defaults.horizon,
            )
        })
        .join("\n                ");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">
    <script src="{plotly}"></script>
</head>
<body>
    <div style="padding: 10px 5px">
        <h1>{heading}</h1>
        <div style="width: 49%; display: inline-block">
            <select id="coin-selector">
                {coin_options}
            </select>
            <div id="model-selector">
                {model_items}
            </div>
            <div id="days-predicted">
                {horizon_items}
            </div>
        </div>
    </div>
    <div style="display: inline-block; width: 49%">
        <div id="current-preds" style="margin-top: 10px; margin-bottom: 10px"></div>
        <div id="pred-history"></div>
    </div>
    <footer>
        <h2 style="display: inline-block; padding: 10px">{footer_blurb}</h2>
        <a href="{footer_href}">{footer_label}</a>
    </footer>
    <script id="dashboard-config" type="application/json">{config_json}</script>
    <script src="{script}"></script>
</body>
</html>
"#,
        title = escape_html(&UI_TEXT.page_title),
        stylesheet = DASHBOARD.stylesheet_url,
        plotly = DASHBOARD.plotly_js_url,
        heading = escape_html(&UI_TEXT.page_heading),
        footer_blurb = escape_html(&UI_TEXT.footer_blurb),
        footer_href = DASHBOARD.footer.link_href,
        footer_label = escape_html(DASHBOARD.footer.link_label),
        script = DASHBOARD_JS_PATH,
    ))
}

fn radio_item(name: &str, value: &str, label: &str, checked: bool) -> String {
    let checked = if checked { " checked" } else { "" };
    format!(
        r#"<label style="display: inline-block; margin-top: 5px"><input type="radio" name="{}" value="{}"{}> {}</label>"#,
        name,
        escape_html(value),
        checked,
        escape_html(label)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
