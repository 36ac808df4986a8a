use crate::tests::{fixed_now, profile};
use crate::{CoreError, GENERAL_MODULE_NAME, Module, Question, QuestionType, Role, Test};

use googletest::prelude::*;

fn question(points: u32) -> Question {
    Question::new(
        "Pick one",
        QuestionType::MultipleChoice,
        vec!["a".to_string(), "  ".to_string(), " b ".to_string()],
        "a",
        points,
    )
    .unwrap()
}

#[test]
fn given_blank_options_when_question_built_then_dropped_and_trimmed() {
    let q = question(1);

    assert_that!(q.options, elements_are![eq("a"), eq("b")]);
}

#[test]
fn given_no_questions_when_test_created_then_validation_error() {
    let author = profile("fac-1", Role::Facilitator);

    let result = Test::new("Quiz", None, None, 10, "", true, vec![], &author, fixed_now());

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_module_when_test_created_then_module_name_copied() {
    let author = profile("fac-1", Role::Facilitator);
    let module = Module::new("Algebra", "MA101", "", "", &author, fixed_now()).unwrap();

    let test = Test::new(
        "Quiz",
        Some(module.id),
        Some(&module),
        10,
        "",
        false,
        vec![question(2), question(3)],
        &author,
        fixed_now(),
    )
    .unwrap();

    assert_that!(test.module_name.as_str(), eq("Algebra"));
    assert_that!(test.total_points(), eq(5));
    assert_that!(test.submission_count, eq(0));
}

#[test]
fn given_missing_module_when_test_created_then_general() {
    let author = profile("fac-1", Role::Facilitator);

    let test = Test::new(
        "Quiz",
        Some(uuid::Uuid::new_v4()),
        None,
        10,
        "",
        true,
        vec![question(1)],
        &author,
        fixed_now(),
    )
    .unwrap();

    assert_that!(test.module_name.as_str(), eq(GENERAL_MODULE_NAME));
}

#[test]
fn given_blank_module_code_when_module_created_then_validation_error() {
    let author = profile("fac-1", Role::Facilitator);

    let result = Module::new("Algebra", "  ", "", "", &author, fixed_now());

    assert_that!(result.as_ref().err().and_then(|e| e.field()), some(eq("code")));
}
