// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::{load_charts_config, load_server_config};
use crate::infrastructure::headless_backend::HeadlessBackend;
use crate::infrastructure::report_store::{JsonReportStore, ReportSource};
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    apply_selection, export_chart, get_charts, get_comparison, health_check, pause_rag, play_rag,
    set_rag_transaction, show_graph, show_table,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let server_config = load_server_config()?;
    let charts_config = load_charts_config()?;

    // Load the comparison payload once; it is fixed for this dashboard run
    let store = JsonReportStore::new(&server_config.data_path);
    let data = store
        .load()
        .await
        .with_context(|| format!("loading comparison payload from {}", server_config.data_path))?;

    // Rendering surface registry (infrastructure layer)
    let backend = Arc::new(HeadlessBackend::new(&server_config.export_dir));

    // Dashboard controller (application layer)
    let dashboard = Arc::new(DashboardService::new(data, charts_config, backend.clone()));

    // Create application state
    let state = Arc::new(AppState { dashboard, backend });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/comparison", get(get_comparison))
        .route("/charts", get(get_charts))
        .route("/selection", put(apply_selection))
        .route("/view/table", post(show_table))
        .route("/view/graph", post(show_graph))
        .route("/rag/play", post(play_rag))
        .route("/rag/pause", post(pause_rag))
        .route("/rag/transaction", put(set_rag_transaction))
        .route("/export", post(export_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = server_config
        .bind
        .parse()
        .with_context(|| format!("invalid bind address {}", server_config.bind))?;
    tracing::info!("starting perf-compare dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
