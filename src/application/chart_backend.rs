// Rendering contract - the narrow seam to the opaque chart-drawing engine
use crate::domain::chart::ChartModel;

/// Handle to one live chart instance on a surface. The empty handle marks
/// a render that found no surface; it owns nothing and is live nowhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartHandle {
    surface: String,
    instance: u64,
}

impl ChartHandle {
    pub fn new(surface: String, instance: u64) -> Self {
        Self { surface, instance }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_live(&self) -> bool {
        self.instance != 0
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn instance(&self) -> u64 {
        self.instance
    }
}

/// What the dashboard needs from a chart-drawing engine, and nothing more.
/// Surfaces are registered while their view is visible and released when it
/// is hidden; every operation against a missing surface degrades to a
/// no-op rather than an error.
pub trait ChartBackend: Send + Sync {
    fn register_surface(&self, surface: &str);

    fn release_surface(&self, surface: &str);

    /// Construct a chart on `surface`. Returns `None` when the surface
    /// does not exist.
    fn create(&self, surface: &str, model: ChartModel) -> Option<ChartHandle>;

    /// Dispose a previously created chart instance.
    fn destroy(&self, handle: &ChartHandle);

    /// Emit a static image of whatever is on `surface`. No-op when the
    /// surface does not exist.
    fn export(&self, surface: &str, filename: &str);
}
