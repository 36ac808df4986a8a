use crate::Grade;

use chrono::{DateTime, Utc};
use serde::Serialize;

const LABEL_MAX_CHARS: usize = 20;

/// One point of a score chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorePoint {
    pub label: String,
    pub score: u8,
    pub submitted_at: DateTime<Utc>,
}

impl ScorePoint {
    fn from_grade(grade: &Grade) -> Self {
        Self {
            label: grade.test_title.chars().take(LABEL_MAX_CHARS).collect(),
            score: grade.score,
            submitted_at: grade.submitted_at,
        }
    }
}

/// All grades, oldest first.
pub fn progress_series(grades: &[Grade]) -> Vec<ScorePoint> {
    let mut sorted: Vec<&Grade> = grades.iter().collect();
    sorted.sort_by_key(|g| g.submitted_at);
    sorted.into_iter().map(ScorePoint::from_grade).collect()
}

/// The `limit` most recent grades, oldest first.
pub fn recent_series(grades: &[Grade], limit: usize) -> Vec<ScorePoint> {
    let series = progress_series(grades);
    let skip = series.len().saturating_sub(limit);
    series.into_iter().skip(skip).collect()
}
