use crate::tests::{fixed_now, profile};
use crate::{AccountStatus, CoreError, Identity, ProfileRecord, ProfileUpdate, Role};

use googletest::prelude::*;

#[test]
fn given_new_profile_then_active_with_role_prefixed_external_id() {
    let record = profile("u1", Role::Facilitator);

    assert_that!(record.status, eq(AccountStatus::Active));
    assert_that!(record.role.as_str(), eq("facilitator"));
    assert_that!(record.external_id.as_str(), starts_with("FAC"));
    assert_that!(record.last_login, none());
}

#[test]
fn given_federated_identity_when_provisioned_then_student_with_avatar_and_login() {
    let mut identity = Identity::new("g-42", "linus@example.com");
    identity.photo_url = Some("https://img.example.com/l.png".to_string());

    let record = ProfileRecord::provisioned_student(&identity, fixed_now());

    assert_that!(record.uid.as_str(), eq("g-42"));
    assert_that!(record.name.as_str(), eq("linus"));
    assert_that!(record.parsed_role().unwrap(), eq(Role::Student));
    assert_that!(record.external_id.as_str(), starts_with("STU"));
    assert_that!(record.photo_url.as_str(), eq("https://img.example.com/l.png"));
    assert_that!(record.last_login, some(eq(fixed_now())));
}

#[test]
fn given_unrecognised_stored_role_when_parsed_then_invalid_role() {
    let mut record = profile("u1", Role::Student);
    record.role = "guardian".to_string();

    let result = record.parsed_role();

    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
    assert_that!(record.has_role(Role::Student), eq(false));
}

#[test]
fn given_partial_update_when_applied_then_only_some_fields_change() {
    let mut record = profile("u1", Role::Student);
    record.bio = "old bio".to_string();
    let update = ProfileUpdate {
        name: Some("Ada King".to_string()),
        phone: Some("555-0100".to_string()),
        ..ProfileUpdate::default()
    };

    record.apply(&update);

    assert_that!(record.name.as_str(), eq("Ada King"));
    assert_that!(record.phone.as_str(), eq("555-0100"));
    assert_that!(record.bio.as_str(), eq("old bio"));
}

#[test]
fn given_blank_name_when_normalized_then_validation_error() {
    let update = ProfileUpdate {
        name: Some("   ".to_string()),
        ..ProfileUpdate::default()
    };

    let result = update.normalized(100);

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_padded_fields_when_normalized_then_trimmed() {
    let update = ProfileUpdate {
        name: Some("  Ada  ".to_string()),
        bio: Some(" hi ".to_string()),
        ..ProfileUpdate::default()
    };

    let normalized = update.normalized(100).unwrap();

    assert_that!(normalized.name, some(eq("Ada")));
    assert_that!(normalized.bio, some(eq("hi")));
    assert_that!(normalized.phone, none());
}

#[test]
fn given_profile_when_first_name_then_first_word() {
    assert_that!(profile("u1", Role::Admin).first_name(), eq("Ada"));
}
