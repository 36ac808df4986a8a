use crate::{AccountStatus, CoreError, QuestionType, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Student.as_str(), "student");
    assert_eq!(Role::Facilitator.as_str(), "facilitator");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("student").unwrap(), Role::Student);
    assert_eq!(Role::from_str("facilitator").unwrap(), Role::Facilitator);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(matches!(
        Role::from_str("guardian"),
        Err(CoreError::InvalidRole { .. })
    ));
}

#[test]
fn test_role_is_case_sensitive() {
    assert!(Role::from_str("Student").is_err());
}

#[test]
fn test_role_id_prefix() {
    assert_eq!(Role::Student.id_prefix(), "STU");
    assert_eq!(Role::Facilitator.id_prefix(), "FAC");
    assert_eq!(Role::Admin.id_prefix(), "ADM");
}

#[test]
fn test_only_student_and_facilitator_self_register() {
    assert!(Role::Student.is_self_registrable());
    assert!(Role::Facilitator.is_self_registrable());
    assert!(!Role::Admin.is_self_registrable());
}

#[test]
fn test_account_status_round_trip_and_default() {
    assert_eq!(AccountStatus::default(), AccountStatus::Active);
    assert_eq!(
        AccountStatus::from_str("disabled").unwrap(),
        AccountStatus::Disabled
    );
    assert!(AccountStatus::from_str("banned").is_err());
}

#[test]
fn test_question_type_from_str() {
    assert_eq!(
        QuestionType::from_str("true_false").unwrap(),
        QuestionType::TrueFalse
    );
    assert!(QuestionType::from_str("essay").is_err());
}
