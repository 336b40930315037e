// Comparison payload domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A metric cell: either a numeric series value or a status label
/// (the "RAG" column). Deserialized untagged, so `2000` and `"GREEN"`
/// both parse directly out of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Label(String),
}

impl MetricValue {
    /// Numeric view of the cell; labels carry no numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(v) => Some(*v),
            MetricValue::Label(_) => None,
        }
    }
}

/// One performance-test run: a metric row per transaction it measured.
/// Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(rename = "metricsByTxn")]
    pub metrics_by_txn: HashMap<String, HashMap<String, MetricValue>>,
}

impl Report {
    pub fn metric(&self, txn: &str, metric: &str) -> Option<&MetricValue> {
        self.metrics_by_txn.get(txn).and_then(|row| row.get(metric))
    }
}

/// The load-time payload: the transaction universe (which fixes x-axis
/// order in every chart) plus the reports being compared. The set of
/// reports is fixed for a given dashboard load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonData {
    pub transactions: Vec<String>,
    pub comparisons: Vec<Report>,
}

impl ComparisonData {
    pub fn report_names(&self) -> Vec<String> {
        self.comparisons.iter().map(|r| r.name.clone()).collect()
    }
}
