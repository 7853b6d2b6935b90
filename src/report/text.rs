use crate::types::report::GradeReport;

/// Plain result card: course line, percentage to two decimals, grade, GPA,
/// and the motivational message.
pub fn to_text(report: &GradeReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Course: {} ({} credit hours)\n",
        report.course, report.credit_hours
    ));
    output.push_str(&format!("Percentage: {:.2}%\n", report.percentage));
    output.push_str(&format!("Grade: {}\n", report.grade));
    output.push_str(&format!("GPA: {:.2}\n", report.gpa));
    output.push_str(&format!("{}\n", report.message));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::sample_report;

    #[test]
    fn text_card_contains_all_result_lines() {
        let rendered = to_text(&sample_report());
        assert!(rendered.contains("Course: Data Structures (3 credit hours)"));
        assert!(rendered.contains("Percentage: 81.50%"));
        assert!(rendered.contains("Grade: A-"));
        assert!(rendered.contains("GPA: 3.67"));
        assert!(rendered.contains("Outstanding! Keep it up!"));
    }
}
