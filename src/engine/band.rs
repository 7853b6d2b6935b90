/// One row of the grade table: the lowest percentage that still earns the
/// letter grade, and the GPA value awarded with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeBand {
    pub min_percentage: f64,
    pub grade: &'static str,
    pub gpa: f64,
}

/// Grade table, descending by `min_percentage`. The final entry at 0 is a
/// catch-all so every finite percentage resolves to exactly one band.
pub const GRADE_BANDS: [GradeBand; 9] = [
    GradeBand { min_percentage: 85.0, grade: "A", gpa: 4.00 },
    GradeBand { min_percentage: 80.0, grade: "A-", gpa: 3.67 },
    GradeBand { min_percentage: 75.0, grade: "B+", gpa: 3.33 },
    GradeBand { min_percentage: 70.0, grade: "B", gpa: 3.00 },
    GradeBand { min_percentage: 65.0, grade: "B-", gpa: 2.67 },
    GradeBand { min_percentage: 60.0, grade: "C+", gpa: 2.33 },
    GradeBand { min_percentage: 55.0, grade: "C", gpa: 2.00 },
    GradeBand { min_percentage: 50.0, grade: "C-", gpa: 1.67 },
    GradeBand { min_percentage: 0.0, grade: "F", gpa: 0.00 },
];

/// First band whose threshold the percentage meets, scanning from the top.
/// Percentages below 0 still land on the catch-all entry.
pub fn band_for(percentage: f64) -> &'static GradeBand {
    GRADE_BANDS
        .iter()
        .find(|band| percentage >= band.min_percentage)
        .unwrap_or(&GRADE_BANDS[GRADE_BANDS.len() - 1])
}
