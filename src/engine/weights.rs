use crate::types::report::CategoryBreakdown;

/// Fixed category weights. The four weights sum to exactly 1.0.
pub const ASSIGNMENTS_WEIGHT: f64 = 0.10;
pub const QUIZZES_WEIGHT: f64 = 0.15;
pub const MIDTERM_WEIGHT: f64 = 0.25;
pub const FINAL_WEIGHT: f64 = 0.50;

/// Combines the four category fractions into a course percentage.
///
/// No clamping: averages outside [0, 1] propagate to a percentage outside
/// [0, 100].
pub fn weighted_percentage(breakdown: &CategoryBreakdown) -> f64 {
    100.0
        * (ASSIGNMENTS_WEIGHT * breakdown.assignments
            + QUIZZES_WEIGHT * breakdown.quizzes
            + MIDTERM_WEIGHT * breakdown.midterm
            + FINAL_WEIGHT * breakdown.final_exam)
}
