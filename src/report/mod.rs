pub mod json;
pub mod md;
pub mod message;
pub mod text;

use crate::error::GradeError;
use crate::types::course::CourseInput;
use crate::types::report::{CategoryBreakdown, GradeReport, GradeResult};
use chrono::Utc;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

/// Wraps a computed grade in its rendering envelope: course metadata, a
/// timestamp, and the selected motivational message.
pub fn build(
    input: &CourseInput,
    categories: CategoryBreakdown,
    result: GradeResult,
) -> GradeReport {
    let message = message::message_for(&result.grade).to_string();
    GradeReport {
        course: input.course.name.clone(),
        credit_hours: input.course.credit_hours,
        generated_at: Utc::now(),
        categories,
        percentage: result.percentage,
        grade: result.grade,
        gpa: result.gpa,
        message,
    }
}

pub fn render(report: &GradeReport, format: OutputFormat) -> Result<String, GradeError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(GradeError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

#[cfg(test)]
pub(crate) fn sample_report() -> GradeReport {
    GradeReport {
        course: "Data Structures".to_string(),
        credit_hours: 3.0,
        generated_at: Utc::now(),
        categories: CategoryBreakdown {
            assignments: 0.8,
            quizzes: 0.9,
            midterm: 0.8,
            final_exam: 0.8,
        },
        percentage: 81.5,
        grade: "A-".to_string(),
        gpa: 3.67,
        message: message::message_for("A-").to_string(),
    }
}
