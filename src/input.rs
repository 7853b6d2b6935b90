use crate::error::{GradeError, Result};
use crate::types::course::CourseInput;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_COURSE_FILE: &str = "course.toml";

/// Reads and parses a course file. Parse failures carry the file path so the
/// offending document is named in the error message.
pub fn load_course(path: &Path) -> Result<CourseInput> {
    let content = std::fs::read_to_string(path)?;
    let input: CourseInput = toml::from_str(&content)
        .map_err(|e| GradeError::CourseParse(format!("{}: {}", path.display(), e)))?;
    debug!(
        course = %input.course.name,
        assignments = input.assignments.len(),
        quizzes = input.quizzes.len(),
        "loaded course file"
    );
    Ok(input)
}
