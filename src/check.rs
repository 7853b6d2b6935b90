use crate::types::course::{AssessmentRecord, CourseInput};

/// An advisory observation about a course file. Findings never block the
/// grade computation; every input still grades.
#[derive(Debug, Clone)]
pub struct Finding {
    pub id: String,
    pub message: String,
}

/// Surfaces records the engine will silently fold to 0 (empty categories,
/// zero totals) and records that will push the percentage past 100.
pub fn check_course(input: &CourseInput) -> Vec<Finding> {
    let mut findings = Vec::new();

    if input.assignments.is_empty() {
        findings.push(Finding {
            id: "assignments.empty".to_string(),
            message: "no assignment records; the category contributes 0".to_string(),
        });
    }
    if input.quizzes.is_empty() {
        findings.push(Finding {
            id: "quizzes.empty".to_string(),
            message: "no quiz records; the category contributes 0".to_string(),
        });
    }

    check_records("assignments", &input.assignments, &mut findings);
    check_records("quizzes", &input.quizzes, &mut findings);
    check_records("midterm", std::slice::from_ref(&input.midterm), &mut findings);
    check_records("final", std::slice::from_ref(&input.final_exam), &mut findings);

    findings
}

fn check_records(category: &str, records: &[AssessmentRecord], findings: &mut Vec<Finding>) {
    for (index, record) in records.iter().enumerate() {
        if record.total == 0.0 {
            findings.push(Finding {
                id: format!("{category}.zero_total"),
                message: format!(
                    "{category} record {} has total = 0 and scores as 0%",
                    index + 1
                ),
            });
        } else if record.obtained > record.total {
            findings.push(Finding {
                id: format!("{category}.over_total"),
                message: format!(
                    "{category} record {} has obtained {} above total {}; the percentage can exceed 100",
                    index + 1,
                    record.obtained,
                    record.total
                ),
            });
        }
    }
}
