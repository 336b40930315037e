// Dashboard controller - single owner of selection, view and playback
// state, drives every chart slot through the lifecycle manager
use crate::application::chart_backend::ChartBackend;
use crate::application::chart_lifecycle::ChartLifecycle;
use crate::application::dataset_builder::datasets_for_metric;
use crate::application::playback::PlaybackController;
use crate::application::rag_series::{rag_labels, rag_series};
use crate::application::selection::SelectionState;
use crate::domain::chart::{ChartKind, ChartModel, ChartSlot, YAxis};
use crate::domain::report::ComparisonData;
use crate::infrastructure::config::ChartsConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Table,
    Graph,
}

/// Snapshot served to whoever draws the UI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub transactions: Vec<String>,
    pub reports: Vec<ReportSummary>,
    pub selected: Vec<String>,
    pub metric: String,
    pub view: View,
    pub rag_transaction: Option<String>,
    pub playing: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub name: String,
    pub generated_at: Option<DateTime<Utc>>,
}

struct DashboardState {
    selection: SelectionState,
    view: View,
    rag_cursor: usize,
    lifecycle: ChartLifecycle,
    playback: PlaybackController,
}

pub struct DashboardService {
    data: ComparisonData,
    charts: ChartsConfig,
    backend: Arc<dyn ChartBackend>,
    state: Mutex<DashboardState>,
}

impl DashboardService {
    pub fn new(data: ComparisonData, charts: ChartsConfig, backend: Arc<dyn ChartBackend>) -> Self {
        let state = DashboardState {
            selection: SelectionState::new(data.transactions.clone()),
            view: View::Table,
            rag_cursor: 0,
            lifecycle: ChartLifecycle::new(backend.clone()),
            playback: PlaybackController::new(Duration::from_millis(charts.tick_ms)),
        };
        Self {
            data,
            charts,
            backend,
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DashboardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rebuild the aggregate-metric and error-percentage slots from the
    /// current selection.
    pub fn update_charts(&self) {
        let mut state = self.lock();
        self.update_metric_charts(&mut state);
    }

    /// Apply a new filter, then rebuild the metric charts synchronously.
    pub fn apply_selection(&self, selected: Vec<String>, metric: Option<String>) {
        let mut state = self.lock();
        state.selection.apply_filter(selected, metric);
        self.update_metric_charts(&mut state);
    }

    pub fn show_table(&self) {
        let mut state = self.lock();
        state.view = View::Table;
        for slot in ChartSlot::ALL {
            self.backend.release_surface(slot.surface_id());
        }
    }

    /// Switch to the graph view and eagerly rebuild every slot: they may
    /// have gone stale while hidden.
    pub fn show_graph(&self) {
        let mut state = self.lock();
        state.view = View::Graph;
        for slot in ChartSlot::ALL {
            self.backend.register_surface(slot.surface_id());
        }
        self.update_metric_charts(&mut state);
        self.update_rag_chart(&mut state);
        tracing::debug!("graph view shown, {} slots live", state.lifecycle.live_count());
    }

    /// Point the RAG drift chart at `txn`. Unknown names are ignored.
    pub fn set_rag_transaction(&self, txn: &str) -> bool {
        let mut state = self.lock();
        let Some(index) = self.data.transactions.iter().position(|t| t == txn) else {
            tracing::warn!("ignoring unknown rag transaction {:?}", txn);
            return false;
        };
        state.rag_cursor = index;
        self.update_rag_chart(&mut state);
        true
    }

    /// Start the RAG drift animation from the current cursor. Starting
    /// while already playing restarts the timer; two never coexist.
    pub fn play_rag(self: Arc<Self>) {
        let mut state = self.lock();
        if self.data.transactions.is_empty() {
            tracing::warn!("no transactions to animate, rag playback not started");
            return;
        }
        let service = Arc::downgrade(&self);
        state.playback.start(move |epoch| {
            if let Some(service) = service.upgrade() {
                service.advance_rag(epoch);
            }
        });
    }

    pub fn pause_rag(&self) {
        self.lock().playback.stop();
    }

    pub fn is_playing(&self) -> bool {
        self.lock().playback.is_running()
    }

    /// Ask the drawing engine for a static image of one slot. Silent
    /// no-op when its surface does not exist.
    pub fn export_chart(&self, slot: ChartSlot, filename: &str) {
        self.backend.export(slot.surface_id(), filename);
    }

    pub fn overview(&self) -> DashboardOverview {
        let state = self.lock();
        DashboardOverview {
            transactions: self.data.transactions.clone(),
            reports: self
                .data
                .comparisons
                .iter()
                .map(|r| ReportSummary {
                    name: r.name.clone(),
                    generated_at: r.generated_at,
                })
                .collect(),
            selected: state.selection.selected(),
            metric: state.selection.metric().to_string(),
            view: state.view,
            rag_transaction: self.data.transactions.get(state.rag_cursor).cloned(),
            playing: state.playback.is_running(),
        }
    }

    pub fn rag_transaction(&self) -> Option<String> {
        let state = self.lock();
        self.data.transactions.get(state.rag_cursor).cloned()
    }

    /// One playback tick: advance the cursor modulo the universe and
    /// re-render the RAG slot. A tick from a stopped or superseded timer
    /// is discarded.
    fn advance_rag(&self, epoch: u64) {
        let mut state = self.lock();
        if !state.playback.is_current(epoch) {
            return;
        }
        if self.data.transactions.is_empty() {
            return;
        }
        state.rag_cursor = (state.rag_cursor + 1) % self.data.transactions.len();
        self.update_rag_chart(&mut state);
    }

    fn update_metric_charts(&self, state: &mut DashboardState) {
        let labels = state.selection.masked_labels();
        let metric = state.selection.metric().to_string();

        let avg_model = ChartModel {
            kind: ChartKind::Line,
            labels: labels.clone(),
            datasets: datasets_for_metric(
                &self.data,
                &state.selection,
                &metric,
                self.charts.average.to_seconds,
            ),
            title: self.charts.average.title.clone(),
            y_axis: YAxis::BeginAtZero,
            y_tick_labels: None,
        };
        state.lifecycle.render(ChartSlot::Average, avg_model);

        let error_model = ChartModel {
            kind: ChartKind::Line,
            labels,
            datasets: datasets_for_metric(
                &self.data,
                &state.selection,
                &self.charts.error.metric,
                self.charts.error.to_seconds,
            ),
            title: self.charts.error.title.clone(),
            y_axis: YAxis::BeginAtZero,
            y_tick_labels: None,
        };
        state.lifecycle.render(ChartSlot::ErrorRate, error_model);
    }

    fn update_rag_chart(&self, state: &mut DashboardState) {
        let Some(txn) = self.data.transactions.get(state.rag_cursor).cloned() else {
            return;
        };
        let model = ChartModel {
            kind: ChartKind::Bar,
            labels: rag_labels(&self.data),
            datasets: vec![rag_series(&self.data, &txn)],
            title: format!("{} {}", self.charts.rag.title_prefix, txn),
            y_axis: YAxis::RagOrdinal,
            y_tick_labels: Some(
                (0..=2)
                    .filter_map(|v| YAxis::rag_tick_label(v).map(str::to_string))
                    .collect(),
            ),
        };
        state.lifecycle.render(ChartSlot::RagDrift, model);
    }
}
