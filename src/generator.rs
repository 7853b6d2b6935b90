use crate::error::{GradeError, Result};
use crate::input::DEFAULT_COURSE_FILE;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const COURSE_TEMPLATE: &str = r#"# Course grade input for gradecalc.
#
# Weights: assignments 10%, quizzes 15%, midterm 25%, final 50%.
# Add one [[assignments]] or [[quizzes]] block per graded item.

[course]
name = "My Course"
credit_hours = 3.0

# [[assignments]]
# obtained = 8.0
# total = 10.0

# [[quizzes]]
# obtained = 9.0
# total = 10.0

[midterm]
obtained = 0.0
total = 0.0

[final]
obtained = 0.0
total = 0.0
"#;

/// Writes a starter course file into `dir`. Refuses to clobber an existing
/// file unless `force` is set.
pub fn write_template(dir: &Path, force: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let out_path = dir.join(DEFAULT_COURSE_FILE);
    if out_path.exists() && !force {
        return Err(GradeError::TemplateExists(out_path.display().to_string()));
    }
    fs::write(&out_path, COURSE_TEMPLATE)?;
    info!(path = %out_path.display(), "wrote course template");
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::load_course;
    use tempfile::TempDir;

    #[test]
    fn template_writes_and_parses() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_template(dir.path(), false).expect("template should write");
        assert!(path.exists());

        let input = load_course(&path).expect("template should parse");
        assert_eq!(input.course.name, "My Course");
        assert!(input.assignments.is_empty());
        assert_eq!(input.midterm.total, 0.0);
    }

    #[test]
    fn template_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().expect("temp dir should be created");
        write_template(dir.path(), false).expect("first write should succeed");

        let err = write_template(dir.path(), false).expect_err("second write should fail");
        assert!(matches!(err, GradeError::TemplateExists(_)));
    }

    #[test]
    fn template_overwrites_with_force() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = write_template(dir.path(), false).expect("first write should succeed");
        std::fs::write(&path, "scribbles").expect("overwrite should succeed");

        write_template(dir.path(), true).expect("forced write should succeed");
        load_course(&path).expect("template should parse again");
    }
}
