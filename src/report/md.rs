use crate::types::report::GradeReport;

pub fn to_markdown(report: &GradeReport) -> String {
    let mut output = String::new();
    output.push_str("# Grade Report\n\n");
    output.push_str(&format!(
        "Course: {} ({} credit hours)\n\n",
        report.course, report.credit_hours
    ));
    output.push_str("## Category Averages\n\n");
    output.push_str(&format!(
        "- assignments: {:.3}\n- quizzes: {:.3}\n- midterm: {:.3}\n- final: {:.3}\n\n",
        report.categories.assignments,
        report.categories.quizzes,
        report.categories.midterm,
        report.categories.final_exam
    ));
    output.push_str("## Result\n\n");
    output.push_str(&format!(
        "- percentage: {:.2}%\n- grade: {}\n- gpa: {:.2}\n\n",
        report.percentage, report.grade, report.gpa
    ));
    output.push_str(&format!("{}\n", report.message));
    output
}
