use {
    super::{
        CALLBACK_GRAPH, CURRENT_ENDPOINT, CallbackGraph, DashboardState, HISTORY_ENDPOINT,
        Selection, update_current_preds, update_history,
    },
    crate::{
        Cli,
        data::{PredictionStorage, SqliteStorage},
        domain::{Coin, CoinSet, ForecastModel, Horizon},
        ui::{ChartSpec, DASHBOARD_JS, DASHBOARD_JS_PATH, render_page},
    },
    anyhow::{Context, Result},
    axum::{
        Json, Router,
        extract::{Query, State},
        http::{StatusCode, header},
        response::{Html, IntoResponse, Response},
        routing::get,
    },
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

/// Body of every 500. The error chain names tables and SQL, so it stays in the log.
const INTERNAL_ERROR_BODY: &str = "Failed to refresh the dashboard, see the server log";

/// Any failure inside a handler. Logged in full, answered with a short 500.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("Request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[derive(Debug, Deserialize)]
struct CurrentParams {
    coin: String,
    model: ForecastModel,
}

#[derive(Debug, Deserialize)]
struct HistoryParams {
    coin: String,
    model: ForecastModel,
    days: Horizon,
}

#[derive(Debug, Serialize)]
struct CoinsResponse<'a> {
    coins: Vec<&'a Coin>,
    defaults: &'a Selection,
}

pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route(DASHBOARD_JS_PATH, get(script_handler))
        .route("/api/coins", get(coins_handler))
        .route("/api/callbacks", get(callbacks_handler))
        .route(CURRENT_ENDPOINT, get(current_handler))
        .route(HISTORY_ENDPOINT, get(history_handler))
        .with_state(state)
}

async fn page_handler(State(state): State<DashboardState>) -> Result<Html<String>, AppError> {
    Ok(Html(render_page(state.coins(), state.defaults())?))
}

async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}

async fn coins_handler(State(state): State<DashboardState>) -> Response {
    Json(CoinsResponse {
        coins: state.coins().iter().collect(),
        defaults: state.defaults(),
    })
    .into_response()
}

async fn callbacks_handler() -> Json<&'static CallbackGraph> {
    Json(&CALLBACK_GRAPH)
}

fn figure_response(chart: ChartSpec) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        chart.to_json(),
    )
        .into_response()
}

async fn current_handler(
    State(state): State<DashboardState>,
    Query(params): Query<CurrentParams>,
) -> Result<Response, AppError> {
    let chart = update_current_preds(&state, &params.coin, params.model).await?;
    Ok(figure_response(chart))
}

async fn history_handler(
    State(state): State<DashboardState>,
    Query(params): Query<HistoryParams>,
) -> Result<Response, AppError> {
    let chart = update_history(&state, &params.coin, params.model, params.days).await?;
    Ok(figure_response(chart))
}

/// Loads the coin allow-list, resolves the default selection and serves the
/// dashboard until the process is stopped.
pub async fn serve(args: Cli) -> Result<()> {
    let storage = SqliteStorage::new(&args.db_path).await?;
    let coins = CoinSet::new(storage.load_coins().await?)?;
    let default_coin = coins
        .resolve_default(args.default_coin.as_deref())
        .context("Invalid --default-coin")?;
    log::info!("Default selection: {}", default_coin);

    let state = DashboardState::new(Arc::new(storage), coins, Selection::new(default_coin));
    let app = router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Dashboard server stopped")?;
    Ok(())
}
