// Chart-ready dataset and chart description models
use serde::Serialize;

/// Series colors cycle by report position, so report N and report N+7
/// share a color. The wrap-around is intended behavior, not a defect.
pub const COLOR_PALETTE: [&str; 7] = [
    "#2a5298", "#f39c12", "#27ae60", "#8e44ad", "#e74c3c", "#16a085", "#c0392b",
];

/// The three rendering targets of the dashboard. Each addresses a stable
/// surface id; at most one live chart instance exists per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartSlot {
    Average,
    ErrorRate,
    RagDrift,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 3] = [ChartSlot::Average, ChartSlot::ErrorRate, ChartSlot::RagDrift];

    pub fn surface_id(self) -> &'static str {
        match self {
            ChartSlot::Average => "avgChart",
            ChartSlot::ErrorRate => "errorChart",
            ChartSlot::RagDrift => "ragChart",
        }
    }

    pub fn from_surface(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.surface_id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One plotted series: one point per x-axis position. `None` marks a
/// transaction excluded by the current selection (a gap); missing data is
/// never a gap, it defaults upstream. `span_gaps` is a rendering hint only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub points: Vec<Option<f64>>,
    pub border_color: String,
    pub background_color: String,
    /// Per-point colors, used by the RAG drift series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_colors: Option<Vec<String>>,
    pub span_gaps: bool,
}

impl Dataset {
    /// Deterministic styling from the report's position in the report
    /// list, cycling through the fixed palette.
    pub fn for_report(label: String, points: Vec<Option<f64>>, report_index: usize) -> Self {
        let color = COLOR_PALETTE[report_index % COLOR_PALETTE.len()];
        Self {
            label,
            points,
            border_color: color.to_string(),
            background_color: format!("{color}33"),
            point_colors: None,
            span_gaps: true,
        }
    }
}

/// Y-axis policy. The RAG ordinal axis is fixed to three steps with
/// RED/AMBER/GREEN tick labels; the -1 (unknown) value may plot below the
/// axis minimum, an accepted display quirk rather than something clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum YAxis {
    BeginAtZero,
    RagOrdinal,
}

impl YAxis {
    pub fn rag_tick_label(value: i32) -> Option<&'static str> {
        match value {
            0 => Some("RED"),
            1 => Some("AMBER"),
            2 => Some("GREEN"),
            _ => None,
        }
    }
}

/// Everything the drawing engine needs to build one chart. Derived,
/// disposable, never shared across update cycles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartModel {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub title: String,
    pub y_axis: YAxis,
    /// Tick labels for the ordinal axis, present on the RAG chart only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_tick_labels: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps_around() {
        let first = Dataset::for_report("R0".to_string(), vec![], 0);
        let eighth = Dataset::for_report("R7".to_string(), vec![], 7);
        assert_eq!(first.border_color, eighth.border_color);
        assert_eq!(first.border_color, "#2a5298");
        assert_eq!(first.background_color, "#2a529833");
    }

    #[test]
    fn test_slot_surface_round_trip() {
        for slot in ChartSlot::ALL {
            assert_eq!(ChartSlot::from_surface(slot.surface_id()), Some(slot));
        }
        assert_eq!(ChartSlot::from_surface("piechart"), None);
    }

    #[test]
    fn test_rag_tick_labels() {
        assert_eq!(YAxis::rag_tick_label(0), Some("RED"));
        assert_eq!(YAxis::rag_tick_label(1), Some("AMBER"));
        assert_eq!(YAxis::rag_tick_label(2), Some("GREEN"));
        assert_eq!(YAxis::rag_tick_label(-1), None);
        assert_eq!(YAxis::rag_tick_label(3), None);
    }
}
