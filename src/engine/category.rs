use crate::types::course::AssessmentRecord;

/// Arithmetic mean of per-record fractional scores.
///
/// An empty category averages to 0 rather than producing NaN, matching the
/// behavior of the zero-total guard on individual records.
pub fn average(records: &[AssessmentRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(AssessmentRecord::fraction).sum();
    sum / records.len() as f64
}
