pub mod band;
pub mod category;
pub mod weights;

use crate::types::course::CourseInput;
use crate::types::report::{CategoryBreakdown, GradeResult};

/// Fractional averages for the four categories. The midterm and final are
/// single records and follow the same zero-guarded rule as the lists.
pub fn category_averages(input: &CourseInput) -> CategoryBreakdown {
    CategoryBreakdown {
        assignments: category::average(&input.assignments),
        quizzes: category::average(&input.quizzes),
        midterm: input.midterm.fraction(),
        final_exam: input.final_exam.fraction(),
    }
}

/// Maps a set of category averages onto the final percentage, letter grade,
/// and GPA value.
pub fn grade_from_averages(breakdown: &CategoryBreakdown) -> GradeResult {
    let percentage = weights::weighted_percentage(breakdown);
    let band = band::band_for(percentage);
    GradeResult {
        percentage,
        grade: band.grade.to_string(),
        gpa: band.gpa,
    }
}

/// Computes the course grade for a full set of assessment records.
///
/// Pure and total: degenerate inputs (empty categories, zero-total records)
/// contribute 0 instead of failing. `input.course` is not consulted.
pub fn compute_grade(input: &CourseInput) -> GradeResult {
    grade_from_averages(&category_averages(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::course::{AssessmentRecord, CourseMeta};

    fn record(obtained: f64, total: f64) -> AssessmentRecord {
        AssessmentRecord { obtained, total }
    }

    fn course(
        assignments: Vec<AssessmentRecord>,
        quizzes: Vec<AssessmentRecord>,
        midterm: AssessmentRecord,
        final_exam: AssessmentRecord,
    ) -> CourseInput {
        CourseInput {
            course: CourseMeta {
                name: "Sample".to_string(),
                credit_hours: 3.0,
            },
            assignments,
            quizzes,
            midterm,
            final_exam,
        }
    }

    #[test]
    fn computes_weighted_grade_end_to_end() {
        let input = course(
            vec![record(8.0, 10.0)],
            vec![record(9.0, 10.0)],
            record(40.0, 50.0),
            record(80.0, 100.0),
        );

        let breakdown = category_averages(&input);
        assert!((breakdown.assignments - 0.8).abs() < 1e-12);
        assert!((breakdown.quizzes - 0.9).abs() < 1e-12);
        assert!((breakdown.midterm - 0.8).abs() < 1e-12);
        assert!((breakdown.final_exam - 0.8).abs() < 1e-12);

        let result = compute_grade(&input);
        assert!((result.percentage - 81.5).abs() < 1e-9);
        assert_eq!(result.grade, "A-");
        assert_eq!(result.gpa, 3.67);
    }

    #[test]
    fn perfect_scores_earn_an_a() {
        let input = course(
            vec![record(10.0, 10.0), record(20.0, 20.0)],
            vec![record(5.0, 5.0)],
            record(50.0, 50.0),
            record(100.0, 100.0),
        );

        let result = compute_grade(&input);
        assert!((result.percentage - 100.0).abs() < 1e-9);
        assert_eq!(result.grade, "A");
        assert_eq!(result.gpa, 4.00);
    }

    #[test]
    fn degenerate_course_grades_as_f() {
        let input = course(vec![], vec![record(5.0, 0.0)], record(0.0, 0.0), record(0.0, 0.0));

        let result = compute_grade(&input);
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.grade, "F");
        assert_eq!(result.gpa, 0.00);
    }

    #[test]
    fn course_metadata_does_not_affect_the_grade() {
        let mut input = course(
            vec![record(8.0, 10.0)],
            vec![record(9.0, 10.0)],
            record(40.0, 50.0),
            record(80.0, 100.0),
        );
        let baseline = compute_grade(&input);

        input.course.name = "Another Course".to_string();
        input.course.credit_hours = 12.0;
        assert_eq!(compute_grade(&input), baseline);
    }
}
