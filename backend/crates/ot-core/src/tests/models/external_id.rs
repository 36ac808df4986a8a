use crate::tests::fixed_now;
use crate::{ExternalId, Role};

use chrono::{Duration, TimeZone, Utc};
use googletest::prelude::*;

#[test]
fn given_student_role_when_generated_then_matches_stu_and_six_digits() {
    let id = ExternalId::generate(Role::Student, fixed_now());

    assert_that!(id.as_str(), starts_with("STU"));
    assert_that!(id.as_str().len(), eq(9));
    assert_that!(id.is_well_formed(), eq(true));
}

#[test]
fn given_millis_tail_when_generated_then_uses_last_six_digits() {
    // 1_700_000_123_456 ms -> tail 123456
    let now = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();

    let id = ExternalId::generate(Role::Facilitator, now);

    assert_that!(id.as_str(), eq("FAC123456"));
}

#[test]
fn given_small_tail_when_generated_then_zero_padded() {
    let now = Utc.timestamp_millis_opt(1_700_000_000_042).unwrap();

    let id = ExternalId::generate(Role::Admin, now);

    assert_that!(id.as_str(), eq("ADM000042"));
}

#[test]
fn given_different_instants_when_generated_then_ids_differ() {
    let a = ExternalId::generate(Role::Student, fixed_now());
    let b = ExternalId::generate(Role::Student, fixed_now() + Duration::milliseconds(1));

    assert_ne!(a, b);
}

#[test]
fn given_malformed_values_when_checked_then_not_well_formed() {
    for value in ["", "STU", "STU12345", "STU1234567", "XYZ123456", "STU12a456"] {
        assert_that!(ExternalId::from_stored(value).is_well_formed(), eq(false));
    }
}
