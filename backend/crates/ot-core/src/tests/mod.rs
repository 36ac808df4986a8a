mod models;

use crate::{Grade, ProfileRecord, Question, QuestionType, Role, Test};

use chrono::{DateTime, Duration, TimeZone, Utc};

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
}

pub(crate) fn profile(uid: &str, role: Role) -> ProfileRecord {
    ProfileRecord::new(uid, "Ada Lovelace", format!("{uid}@example.com"), role, fixed_now())
}

pub(crate) fn sample_test(title: &str) -> Test {
    let question = Question::new("2 + 2?", QuestionType::ShortAnswer, Vec::new(), "4", 5).unwrap();
    Test::new(
        title,
        None,
        None,
        30,
        "",
        true,
        vec![question],
        &profile("fac-1", Role::Facilitator),
        fixed_now(),
    )
    .unwrap()
}

/// Grade submitted `minutes` after the fixed clock.
pub(crate) fn grade(score: i64, minutes: i64, title: &str) -> Grade {
    Grade::new(
        &profile("stu-1", Role::Student),
        &sample_test(title),
        score,
        fixed_now() + Duration::minutes(minutes),
    )
    .unwrap()
}
