// HTTP request handlers - thin event-glue between the outside world and
// the dashboard controller
use crate::domain::chart::ChartSlot;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
pub struct PlaybackStatus {
    pub playing: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    pub transactions: Vec<String>,
    #[serde(default)]
    pub metric: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagTransactionRequest {
    pub transaction: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Surface id of the slot to export ("avgChart", "errorChart", "ragChart").
    pub slot: String,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current universe, reports, selection and view state
pub async fn get_comparison(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dashboard.overview())
}

/// Latest rendered chart model per visible surface
pub async fn get_charts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.backend.chart_models())
}

/// Filter-apply event: replace the selection, rebuild the metric charts
pub async fn apply_selection(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectionRequest>,
) -> impl IntoResponse {
    state
        .dashboard
        .apply_selection(request.transactions, request.metric);
    StatusCode::NO_CONTENT
}

pub async fn show_table(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.dashboard.show_table();
    StatusCode::NO_CONTENT
}

pub async fn show_graph(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.dashboard.show_graph();
    StatusCode::NO_CONTENT
}

pub async fn play_rag(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.dashboard.clone().play_rag();
    Json(PlaybackStatus {
        playing: state.dashboard.is_playing(),
    })
}

pub async fn pause_rag(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.dashboard.pause_rag();
    Json(PlaybackStatus {
        playing: state.dashboard.is_playing(),
    })
}

pub async fn set_rag_transaction(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RagTransactionRequest>,
) -> impl IntoResponse {
    if state.dashboard.set_rag_transaction(&request.transaction) {
        Json(state.dashboard.rag_transaction()).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Export request. Unknown slots and hidden surfaces both degrade to a
/// no-op, matching the chart lifecycle's missing-surface policy.
pub async fn export_chart(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExportRequest>,
) -> impl IntoResponse {
    let Some(slot) = ChartSlot::from_surface(&request.slot) else {
        tracing::warn!("export requested for unknown slot {:?}", request.slot);
        return StatusCode::NO_CONTENT;
    };
    let filename = request.filename.unwrap_or_else(|| "chart.json".to_string());
    state.dashboard.export_chart(slot, &filename);
    StatusCode::NO_CONTENT
}
