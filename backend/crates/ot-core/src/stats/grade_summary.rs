use crate::Grade;

use serde::Serialize;

const GPA_SCALE: f64 = 4.0;

/// Aggregate over one student's grades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeSummary {
    pub count: usize,
    /// Mean score rounded to the nearest whole percent, 0 when there are no grades
    pub average: u32,
    pub passed: usize,
    /// Mean score mapped onto a 4.0 scale, two decimals
    pub gpa: f64,
}

impl GradeSummary {
    pub fn from_grades(grades: &[Grade]) -> Self {
        let count = grades.len();
        if count == 0 {
            return Self {
                count: 0,
                average: 0,
                passed: 0,
                gpa: 0.0,
            };
        }

        let total: u32 = grades.iter().map(|g| u32::from(g.score)).sum();
        let mean = f64::from(total) / count as f64;

        Self {
            count,
            average: mean.round() as u32,
            passed: grades.iter().filter(|g| g.passed()).count(),
            gpa: (mean / 100.0 * GPA_SCALE * 100.0).round() / 100.0,
        }
    }

    /// "passed/total", as shown next to the grade table.
    pub fn passed_ratio(&self) -> String {
        format!("{}/{}", self.passed, self.count)
    }
}
