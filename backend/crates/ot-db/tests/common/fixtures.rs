use ot_core::{Grade, Module, ProfileRecord, Question, QuestionType, Role, Test};

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed reference time; millisecond precision survives a round trip.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
}

pub fn minutes_later(minutes: i64) -> DateTime<Utc> {
    base_time() + Duration::minutes(minutes)
}

pub fn create_test_profile(uid: &str, role: Role) -> ProfileRecord {
    ProfileRecord::new(
        uid,
        format!("Test {}", uid),
        format!("{}@example.com", uid),
        role,
        base_time(),
    )
}

pub fn create_test_module(author: &ProfileRecord, name: &str, minutes: i64) -> Module {
    Module::new(
        name,
        "CS101",
        "Intro course",
        "Week 1: basics",
        author,
        minutes_later(minutes),
    )
    .unwrap()
}

pub fn create_test_question() -> Question {
    Question::new(
        "2 + 2 = ?",
        QuestionType::MultipleChoice,
        vec!["3".to_string(), "4".to_string(), " ".to_string()],
        "4",
        5,
    )
    .unwrap()
}

pub fn create_test_test(author: &ProfileRecord, module: Option<&Module>, visible: bool) -> Test {
    Test::new(
        "Quiz 1",
        module.map(|m| m.id),
        module,
        30,
        "First quiz",
        visible,
        vec![create_test_question()],
        author,
        base_time(),
    )
    .unwrap()
}

pub fn create_test_grade(student: &ProfileRecord, test: &Test, score: i64, minutes: i64) -> Grade {
    Grade::new(student, test, score, minutes_later(minutes)).unwrap()
}
