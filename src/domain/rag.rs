// RAG status encoding: GREEN=2, AMBER=1, RED=0, UNKNOWN=-1
use crate::domain::report::MetricValue;
use serde::Serialize;

/// The metric name under which reports carry their status label.
pub const RAG_METRIC: &str = "RAG";

/// Qualitative run status on the ordinal display scale. `Unknown` is out
/// of band: it renders distinctly but is never compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RagStatus {
    Green,
    Amber,
    Red,
    Unknown,
}

impl RagStatus {
    /// Total over every possible cell: absent values, numeric values and
    /// unrecognized labels all land on `Unknown`. Never fails.
    pub fn from_label(value: Option<&MetricValue>) -> Self {
        match value {
            Some(MetricValue::Label(label)) => match label.as_str() {
                "GREEN" => RagStatus::Green,
                "AMBER" => RagStatus::Amber,
                "RED" => RagStatus::Red,
                _ => RagStatus::Unknown,
            },
            _ => RagStatus::Unknown,
        }
    }

    /// Ordinal scale value. Unknown plots at -1, below the visible axis
    /// minimum of the RAG chart.
    pub fn ordinal(self) -> i32 {
        match self {
            RagStatus::Green => 2,
            RagStatus::Amber => 1,
            RagStatus::Red => 0,
            RagStatus::Unknown => -1,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RagStatus::Green => "#27ae60",
            RagStatus::Amber => "#f39c12",
            RagStatus::Red => "#e74c3c",
            RagStatus::Unknown => "#7f8c8d",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        let green = MetricValue::Label("GREEN".to_string());
        let amber = MetricValue::Label("AMBER".to_string());
        let red = MetricValue::Label("RED".to_string());

        assert_eq!(RagStatus::from_label(Some(&green)), RagStatus::Green);
        assert_eq!(RagStatus::from_label(Some(&amber)), RagStatus::Amber);
        assert_eq!(RagStatus::from_label(Some(&red)), RagStatus::Red);
    }

    #[test]
    fn test_total_over_malformed_input() {
        // Absent, numeric and arbitrary-string cells all encode, none panic.
        assert_eq!(RagStatus::from_label(None), RagStatus::Unknown);
        assert_eq!(
            RagStatus::from_label(Some(&MetricValue::Number(2.0))),
            RagStatus::Unknown
        );
        assert_eq!(
            RagStatus::from_label(Some(&MetricValue::Label("turquoise".to_string()))),
            RagStatus::Unknown
        );
        assert_eq!(
            RagStatus::from_label(Some(&MetricValue::Label("green".to_string()))),
            RagStatus::Unknown
        );
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(RagStatus::Green.ordinal(), 2);
        assert_eq!(RagStatus::Amber.ordinal(), 1);
        assert_eq!(RagStatus::Red.ordinal(), 0);
        assert_eq!(RagStatus::Unknown.ordinal(), -1);
    }

    #[test]
    fn test_unknown_color_is_neutral() {
        assert_eq!(RagStatus::Unknown.color(), "#7f8c8d");
    }
}
