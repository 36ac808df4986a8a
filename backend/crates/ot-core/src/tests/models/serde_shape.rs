use crate::tests::{fixed_now, grade, profile};
use crate::{ExternalId, Grade, ProfileRecord, Question, QuestionType, Role};

use googletest::prelude::*;
use serde_json::{Value, json};

#[test]
fn given_external_id_when_serialized_then_plain_string() {
    // Given
    let id = ExternalId::generate(Role::Student, fixed_now());

    // When
    let value = serde_json::to_value(&id).unwrap();

    // Then
    assert_that!(value, eq(&json!("STU413000")));
}

#[test]
fn given_new_profile_when_serialized_then_stored_field_shapes() {
    // Given
    let record = profile("u1", Role::Facilitator);

    // When
    let value = serde_json::to_value(&record).unwrap();

    // Then
    assert_that!(value["role"].as_str(), some(eq("facilitator")));
    assert_that!(value["external_id"].as_str(), some(eq(record.external_id.as_str())));
    assert_that!(value["status"].as_str(), some(eq("active")));
    assert_that!(value["last_login"], eq(&Value::Null));
}

#[test]
fn given_profile_json_when_deserialized_then_matches_record() {
    // Given
    let record = profile("u1", Role::Student);
    let text = serde_json::to_string(&record).unwrap();

    // When
    let parsed: ProfileRecord = serde_json::from_str(&text).unwrap();

    // Then
    assert_that!(parsed, eq(&record));
}

#[test]
fn given_question_when_serialized_then_kind_under_type_key() {
    // Given
    let question = Question::new(
        "Pick one",
        QuestionType::MultipleChoice,
        vec!["a".to_string(), "b".to_string()],
        "a",
        2,
    )
    .unwrap();

    // When
    let value = serde_json::to_value(&question).unwrap();

    // Then
    assert_that!(value["type"].as_str(), some(eq("multiple_choice")));
    assert_that!(value.get("question_type"), none());
}

#[test]
fn given_question_json_without_options_when_deserialized_then_options_empty() {
    // Given
    let text = r#"{"text":"2 + 2?","type":"short_answer","correct_answer":"4","points":5}"#;

    // When
    let question: Question = serde_json::from_str(text).unwrap();

    // Then
    assert_that!(question.question_type, eq(QuestionType::ShortAnswer));
    assert_that!(question.options, is_empty());
}

#[test]
fn given_grade_when_round_tripped_through_json_then_equal() {
    // Given
    let original = grade(88, 5, "Quiz 1");

    // When
    let text = serde_json::to_string(&original).unwrap();
    let parsed: Grade = serde_json::from_str(&text).unwrap();

    // Then
    assert_that!(parsed, eq(&original));
}
