// Chart lifecycle - replace-don't-mutate ownership of the three slots
use crate::application::chart_backend::{ChartBackend, ChartHandle};
use crate::domain::chart::{ChartModel, ChartSlot};
use std::collections::HashMap;
use std::sync::Arc;

/// Owns at most one live chart instance per slot. Every update disposes
/// the occupant before constructing its replacement; there is no
/// incremental diffing, which rules out stale-state rendering bugs.
pub struct ChartLifecycle {
    backend: Arc<dyn ChartBackend>,
    slots: HashMap<ChartSlot, ChartHandle>,
}

impl ChartLifecycle {
    pub fn new(backend: Arc<dyn ChartBackend>) -> Self {
        Self {
            backend,
            slots: HashMap::new(),
        }
    }

    /// Dispose whatever occupies `slot`, then build a fresh chart from
    /// `model`. Disposal happens first so a create that finds no surface
    /// can never leave a second live instance behind. When the surface
    /// does not exist (view hidden) this is a no-op returning the empty
    /// handle, which callers tolerate.
    pub fn render(&mut self, slot: ChartSlot, model: ChartModel) -> ChartHandle {
        if let Some(old) = self.slots.remove(&slot) {
            self.backend.destroy(&old);
        }
        match self.backend.create(slot.surface_id(), model) {
            Some(handle) => {
                tracing::debug!("rebuilt chart slot {:?} on {}", slot, slot.surface_id());
                self.slots.insert(slot, handle.clone());
                handle
            }
            None => {
                tracing::debug!("no surface for slot {:?}, skipping render", slot);
                ChartHandle::empty()
            }
        }
    }

    pub fn live_count(&self) -> usize {
        self.slots.len()
    }

    /// Dispose every live chart without replacement.
    pub fn teardown(&mut self) {
        for (_, handle) in self.slots.drain() {
            self.backend.destroy(&handle);
        }
    }
}

impl Drop for ChartLifecycle {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartKind, YAxis};
    use crate::infrastructure::headless_backend::HeadlessBackend;

    fn model(title: &str) -> ChartModel {
        ChartModel {
            kind: ChartKind::Line,
            labels: vec!["Login".to_string()],
            datasets: vec![],
            title: title.to_string(),
            y_axis: YAxis::BeginAtZero,
            y_tick_labels: None,
        }
    }

    #[test]
    fn test_render_replaces_instead_of_accumulating() {
        let backend = Arc::new(HeadlessBackend::new("/tmp"));
        backend.register_surface(ChartSlot::Average.surface_id());
        let mut lifecycle = ChartLifecycle::new(backend.clone());

        let first = lifecycle.render(ChartSlot::Average, model("one"));
        let second = lifecycle.render(ChartSlot::Average, model("one"));

        assert!(first.is_live());
        assert!(second.is_live());
        assert_ne!(first.instance(), second.instance());
        // Exactly one live instance on the surface, and one handle held.
        assert_eq!(backend.live_instances(ChartSlot::Average.surface_id()), 1);
        assert_eq!(lifecycle.live_count(), 1);
    }

    #[test]
    fn test_missing_surface_is_a_silent_no_op() {
        let backend = Arc::new(HeadlessBackend::new("/tmp"));
        let mut lifecycle = ChartLifecycle::new(backend.clone());

        let handle = lifecycle.render(ChartSlot::RagDrift, model("rag"));

        assert!(!handle.is_live());
        assert_eq!(lifecycle.live_count(), 0);
    }

    #[test]
    fn test_stale_handle_dropped_when_surface_disappears() {
        let backend = Arc::new(HeadlessBackend::new("/tmp"));
        backend.register_surface(ChartSlot::Average.surface_id());
        let mut lifecycle = ChartLifecycle::new(backend.clone());

        lifecycle.render(ChartSlot::Average, model("one"));
        backend.release_surface(ChartSlot::Average.surface_id());

        // Slot went stale while hidden; re-render disposes it and no-ops.
        let handle = lifecycle.render(ChartSlot::Average, model("two"));
        assert!(!handle.is_live());
        assert_eq!(lifecycle.live_count(), 0);
    }

    #[test]
    fn test_teardown_destroys_all_slots() {
        let backend = Arc::new(HeadlessBackend::new("/tmp"));
        for slot in ChartSlot::ALL {
            backend.register_surface(slot.surface_id());
        }
        let mut lifecycle = ChartLifecycle::new(backend.clone());
        for slot in ChartSlot::ALL {
            lifecycle.render(slot, model("x"));
        }
        assert_eq!(lifecycle.live_count(), 3);

        lifecycle.teardown();

        assert_eq!(lifecycle.live_count(), 0);
        for slot in ChartSlot::ALL {
            assert_eq!(backend.live_instances(slot.surface_id()), 0);
        }
    }
}
