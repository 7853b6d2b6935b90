use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fractional category averages in [0, 1]. Values outside the range are
/// possible when a record's obtained marks exceed its total and are carried
/// through unclamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub assignments: f64,
    pub quizzes: f64,
    pub midterm: f64,
    #[serde(rename = "final")]
    pub final_exam: f64,
}

/// The computed grade: weighted percentage, letter grade, and GPA value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub percentage: f64,
    pub grade: String,
    pub gpa: f64,
}

/// Rendering envelope around a [`GradeResult`].
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    pub course: String,
    pub credit_hours: f64,
    pub generated_at: DateTime<Utc>,
    pub categories: CategoryBreakdown,
    pub percentage: f64,
    pub grade: String,
    pub gpa: f64,
    pub message: String,
}
