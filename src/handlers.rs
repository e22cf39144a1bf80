use crate::charts::build_dashboard;
use crate::errors::AppError;
use crate::models::{DashboardResponse, UserSummary};
use crate::scoring::aggregate_at;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::NaiveDate;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = state.clock.today();
    Html(render_index(&date.to_string()))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    let (today, summaries) = load_scores(&state).await?;
    Ok(Json(build_dashboard(today, summaries)))
}

pub async fn get_scores(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, AppError> {
    let (_, summaries) = load_scores(&state).await?;
    Ok(Json(summaries))
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// Fetches the current document and ranks it. Each call works on a fresh copy.
async fn load_scores(state: &AppState) -> Result<(NaiveDate, Vec<UserSummary>), AppError> {
    let payload = state.source.fetch().await.inspect_err(|err| {
        warn!("scoring data unavailable: {err}");
    })?;

    let today = state.clock.today();
    let summaries = aggregate_at(today, &payload).inspect_err(|err| {
        warn!("rejected scoring data from {}: {err}", state.source.location());
    })?;

    info!(users = summaries.len(), %today, "aggregated scores");
    Ok((today, summaries))
}
