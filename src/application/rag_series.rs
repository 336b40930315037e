// RAG series builder - one ordinal status point per report for a single
// transaction
use crate::domain::chart::Dataset;
use crate::domain::rag::{RagStatus, RAG_METRIC};
use crate::domain::report::ComparisonData;

/// X-axis labels for the RAG drift chart: report names, in report order.
pub fn rag_labels(data: &ComparisonData) -> Vec<String> {
    data.report_names()
}

/// Build the single RAG drift series for `txn`: its encoded status in each
/// report, colored per point by the encoder. A report that never measured
/// the transaction contributes `Unknown` (-1), which plots below the
/// visible axis minimum instead of being clamped.
pub fn rag_series(data: &ComparisonData, txn: &str) -> Dataset {
    let statuses: Vec<RagStatus> = data
        .comparisons
        .iter()
        .map(|report| RagStatus::from_label(report.metric(txn, RAG_METRIC)))
        .collect();

    Dataset {
        label: format!("RAG for {txn}"),
        points: statuses
            .iter()
            .map(|status| Some(f64::from(status.ordinal())))
            .collect(),
        border_color: RagStatus::Unknown.color().to_string(),
        background_color: RagStatus::Unknown.color().to_string(),
        point_colors: Some(statuses.iter().map(|s| s.color().to_string()).collect()),
        span_gaps: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drift_data() -> ComparisonData {
        serde_json::from_str(
            r#"{
                "transactions": ["Login"],
                "comparisons": [
                    { "name": "R1", "metricsByTxn": { "Login": { "RAG": "GREEN" } } },
                    { "name": "R2", "metricsByTxn": { "Login": { "RAG": "AMBER" } } },
                    { "name": "R3", "metricsByTxn": {} }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_ordinal_points_in_report_order() {
        let data = drift_data();
        let series = rag_series(&data, "Login");

        assert_eq!(series.points, vec![Some(2.0), Some(1.0), Some(-1.0)]);
        assert_eq!(series.label, "RAG for Login");
    }

    #[test]
    fn test_point_colors_follow_status() {
        let data = drift_data();
        let series = rag_series(&data, "Login");

        let colors = series.point_colors.unwrap();
        assert_eq!(colors, vec!["#27ae60", "#f39c12", "#7f8c8d"]);
    }

    #[test]
    fn test_unmeasured_transaction_is_all_unknown() {
        let data = drift_data();
        let series = rag_series(&data, "Checkout");

        assert_eq!(series.points, vec![Some(-1.0), Some(-1.0), Some(-1.0)]);
    }

    #[test]
    fn test_labels_are_report_names() {
        let data = drift_data();
        assert_eq!(
            rag_labels(&data),
            vec!["R1".to_string(), "R2".to_string(), "R3".to_string()]
        );
    }
}
