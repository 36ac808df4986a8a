pub mod error;
pub mod models;
pub mod ports;
pub mod stats;
pub mod store_error;

pub use error::{CoreError, Result};
pub use models::account_status::AccountStatus;
pub use models::external_id::ExternalId;
pub use models::facilitator_record::FacilitatorRecord;
pub use models::grade::Grade;
pub use models::grade_letter::GradeLetter;
pub use models::identity::Identity;
pub use models::module::Module;
pub use models::profile_record::ProfileRecord;
pub use models::profile_update::ProfileUpdate;
pub use models::question::Question;
pub use models::question_type::QuestionType;
pub use models::role::Role;
pub use models::student_record::StudentRecord;
pub use models::test::Test;
pub use ports::ProfileStore;
pub use stats::grade_distribution::GradeDistribution;
pub use stats::grade_summary::GradeSummary;
pub use stats::overview::{AdminOverview, FacilitatorOverview, StudentOverview};
pub use stats::score_point::{ScorePoint, progress_series, recent_series};
pub use store_error::{StoreError, StoreErrorKind, StoreResult};

/// Score at or above which a test counts as passed.
pub const PASSING_SCORE: u8 = 60;

/// Module name used for tests that are not attached to an existing module.
pub const GENERAL_MODULE_NAME: &str = "General";

#[cfg(test)]
mod tests;
