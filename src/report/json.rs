use crate::types::report::GradeReport;

pub fn to_json(report: &GradeReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
