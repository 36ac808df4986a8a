use crate::Grade;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminOverview {
    pub students: usize,
    pub facilitators: usize,
    pub modules: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacilitatorOverview {
    pub students: usize,
    pub own_modules: usize,
    pub own_tests: usize,
    pub pending_grades: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentOverview {
    pub modules: usize,
    pub visible_tests: usize,
    /// Rounded mean over scored tests, 0 when none
    pub average_grade: u32,
    pub completed_tests: usize,
}

impl StudentOverview {
    /// Only grades with a non-zero score count as completed.
    pub fn new(modules: usize, visible_tests: usize, grades: &[Grade]) -> Self {
        let scored: Vec<u32> = grades
            .iter()
            .filter(|g| g.score > 0)
            .map(|g| u32::from(g.score))
            .collect();
        let average_grade = if scored.is_empty() {
            0
        } else {
            (f64::from(scored.iter().sum::<u32>()) / scored.len() as f64).round() as u32
        };

        Self {
            modules,
            visible_tests,
            average_grade,
            completed_tests: scored.len(),
        }
    }
}
