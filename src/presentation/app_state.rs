// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::headless_backend::HeadlessBackend;
use std::sync::Arc;

pub struct AppState {
    pub dashboard: Arc<DashboardService>,
    /// Concrete backend kept alongside the service so the charts endpoint
    /// can read the rendered models back out.
    pub backend: Arc<HeadlessBackend>,
}
