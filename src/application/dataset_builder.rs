// Dataset builder - turns reports plus the current selection into
// chart-ready series, one per report
use crate::application::selection::SelectionState;
use crate::domain::chart::Dataset;
use crate::domain::report::ComparisonData;

const MS_PER_SECOND: f64 = 1000.0;

/// Build one dataset per report, in report order, for `metric`.
///
/// Point policy, per transaction in universe order:
/// - not in the selection: `None`, a gap, regardless of data presence;
/// - selected but metric absent (or non-numeric): `0.0`;
/// - `to_seconds` divides millisecond values by 1000. It is a property of
///   the chart being built, not of the metric, so the same raw value can
///   appear converted on one chart and raw on another.
pub fn datasets_for_metric(
    data: &ComparisonData,
    selection: &SelectionState,
    metric: &str,
    to_seconds: bool,
) -> Vec<Dataset> {
    data.comparisons
        .iter()
        .enumerate()
        .map(|(index, report)| {
            let points = selection
                .universe()
                .iter()
                .map(|txn| {
                    if !selection.is_selected(txn) {
                        return None;
                    }
                    let raw = report
                        .metric(txn, metric)
                        .and_then(|value| value.as_number())
                        .unwrap_or(0.0);
                    Some(if to_seconds { raw / MS_PER_SECOND } else { raw })
                })
                .collect();
            Dataset::for_report(report.name.clone(), points, index)
        })
        .collect()
}
