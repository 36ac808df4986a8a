use crate::Identity;

use googletest::prelude::*;

#[test]
fn given_display_name_when_fallback_name_then_uses_display_name() {
    let mut identity = Identity::new("u1", "grace@example.com");
    identity.display_name = Some("Grace Hopper".to_string());

    assert_that!(identity.fallback_name(), eq("Grace Hopper"));
}

#[test]
fn given_no_display_name_when_fallback_name_then_uses_email_local_part() {
    let identity = Identity::new("u1", "grace@example.com");

    assert_that!(identity.fallback_name(), eq("grace"));
}

#[test]
fn given_blank_display_name_when_fallback_name_then_uses_email_local_part() {
    let mut identity = Identity::new("u1", "grace@example.com");
    identity.display_name = Some("   ".to_string());

    assert_that!(identity.fallback_name(), eq("grace"));
}
