//! Figures shown on the dashboards, computed from grade documents.

pub mod grade_distribution;
pub mod grade_summary;
pub mod overview;
pub mod score_point;
