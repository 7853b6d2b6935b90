use serde::{Deserialize, Serialize};

/// One graded item: points obtained against points possible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct AssessmentRecord {
    pub obtained: f64,
    pub total: f64,
}

impl AssessmentRecord {
    /// Fractional score for this record. A record with `total == 0` counts
    /// as a 0% score rather than dividing by zero.
    pub fn fraction(&self) -> f64 {
        if self.total == 0.0 {
            0.0
        } else {
            self.obtained / self.total
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseMeta {
    pub name: String,
    #[serde(default = "default_credit_hours")]
    pub credit_hours: f64,
}

fn default_credit_hours() -> f64 {
    3.0
}

/// A full course as read from a course file.
///
/// `course.name` and `course.credit_hours` are echoed into reports but do
/// not participate in the grade computation.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseInput {
    pub course: CourseMeta,
    #[serde(default)]
    pub assignments: Vec<AssessmentRecord>,
    #[serde(default)]
    pub quizzes: Vec<AssessmentRecord>,
    #[serde(default)]
    pub midterm: AssessmentRecord,
    #[serde(default, rename = "final")]
    pub final_exam: AssessmentRecord,
}
