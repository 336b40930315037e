// Headless chart backend - records the latest chart model per surface so
// an HTTP client can draw it; the actual pixel work belongs to whatever
// engine consumes these models
use crate::application::chart_backend::{ChartBackend, ChartHandle};
use crate::domain::chart::ChartModel;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

struct LiveChart {
    instance: u64,
    model: ChartModel,
}

#[derive(Default)]
struct Surface {
    live: Option<LiveChart>,
}

/// In-process rendering surface registry. Surfaces exist only while their
/// view is visible; every operation against an unregistered surface is a
/// silent no-op, matching how a hidden canvas behaves.
pub struct HeadlessBackend {
    surfaces: Mutex<HashMap<String, Surface>>,
    // Instance ids start at 1 so the empty handle (0) never collides.
    next_instance: AtomicU64,
    export_dir: PathBuf,
}

impl HeadlessBackend {
    pub fn new(export_dir: impl AsRef<Path>) -> Self {
        Self {
            surfaces: Mutex::new(HashMap::new()),
            next_instance: AtomicU64::new(1),
            export_dir: export_dir.as_ref().to_path_buf(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Surface>> {
        self.surfaces.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Latest rendered model per surface, for the charts endpoint.
    pub fn chart_models(&self) -> HashMap<String, ChartModel> {
        self.lock()
            .iter()
            .filter_map(|(id, surface)| {
                surface
                    .live
                    .as_ref()
                    .map(|chart| (id.clone(), chart.model.clone()))
            })
            .collect()
    }

    /// Number of live chart instances on a surface: 0 or 1 by construction.
    pub fn live_instances(&self, surface: &str) -> usize {
        self.lock()
            .get(surface)
            .map(|s| usize::from(s.live.is_some()))
            .unwrap_or(0)
    }
}

impl ChartBackend for HeadlessBackend {
    fn register_surface(&self, surface: &str) {
        self.lock().entry(surface.to_string()).or_default();
    }

    fn release_surface(&self, surface: &str) {
        self.lock().remove(surface);
    }

    fn create(&self, surface: &str, model: ChartModel) -> Option<ChartHandle> {
        let mut surfaces = self.lock();
        let slot = surfaces.get_mut(surface)?;
        let instance = self.next_instance.fetch_add(1, Ordering::Relaxed);
        slot.live = Some(LiveChart { instance, model });
        Some(ChartHandle::new(surface.to_string(), instance))
    }

    fn destroy(&self, handle: &ChartHandle) {
        if !handle.is_live() {
            return;
        }
        let mut surfaces = self.lock();
        if let Some(slot) = surfaces.get_mut(handle.surface()) {
            // Only the instance the handle owns; a replacement stays live.
            if slot
                .live
                .as_ref()
                .is_some_and(|chart| chart.instance == handle.instance())
            {
                slot.live = None;
            }
        }
    }

    fn export(&self, surface: &str, filename: &str) {
        let model = {
            let surfaces = self.lock();
            let Some(chart) = surfaces.get(surface).and_then(|s| s.live.as_ref()) else {
                tracing::warn!("export requested for missing surface {}", surface);
                return;
            };
            chart.model.clone()
        };

        // Keep it a plain file name so exports stay inside export_dir.
        let filename = Path::new(filename)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "chart.json".to_string());
        let path = self.export_dir.join(filename);

        let result = std::fs::create_dir_all(&self.export_dir)
            .and_then(|_| std::fs::write(&path, serde_json::to_vec_pretty(&model).unwrap_or_default()));
        match result {
            Ok(()) => tracing::info!("exported {} to {}", surface, path.display()),
            Err(e) => tracing::warn!("export of {} failed: {}", surface, e),
        }
    }
}
