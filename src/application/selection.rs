// Selection state - the transaction filter and active metric
use std::collections::HashSet;

pub const DEFAULT_METRIC: &str = "Avg (ms)";

/// The transaction universe, the currently selected subset and the active
/// metric. Mutated only by explicit filter-apply actions; the selected set
/// is always a subset of the universe.
#[derive(Debug, Clone)]
pub struct SelectionState {
    universe: Vec<String>,
    selected: HashSet<String>,
    metric: String,
}

impl SelectionState {
    /// Everything selected by default.
    pub fn new(universe: Vec<String>) -> Self {
        let selected = universe.iter().cloned().collect();
        Self {
            universe,
            selected,
            metric: DEFAULT_METRIC.to_string(),
        }
    }

    /// Apply a filter. Requested names outside the universe are dropped by
    /// intersection, which keeps the subset invariant without erroring.
    pub fn apply_filter(&mut self, selected: Vec<String>, metric: Option<String>) {
        let requested: HashSet<String> = selected.into_iter().collect();
        self.selected = self
            .universe
            .iter()
            .filter(|txn| requested.contains(*txn))
            .cloned()
            .collect();
        if let Some(metric) = metric {
            self.metric = metric;
        }
    }

    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    pub fn is_selected(&self, txn: &str) -> bool {
        self.selected.contains(txn)
    }

    pub fn selected(&self) -> Vec<String> {
        // Universe order, not hash order
        self.universe
            .iter()
            .filter(|txn| self.selected.contains(*txn))
            .cloned()
            .collect()
    }

    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// X-axis labels with unselected transactions masked to the empty
    /// string, so the axis keeps its full width while hiding filtered names.
    pub fn masked_labels(&self) -> Vec<String> {
        self.universe
            .iter()
            .map(|txn| {
                if self.selected.contains(txn) {
                    txn.clone()
                } else {
                    String::new()
                }
            })
            .collect()
    }
}
