use crate::tests::{FakeClock, FakeProvider, FakeStore, fixed_now, service};
use crate::{AddUserRequest, AuthError, AuthSession, LandingView, RegistrationRequest};

use ot_core::{Role, StoreErrorKind};

use googletest::prelude::*;

fn request(role: Role) -> RegistrationRequest {
    RegistrationRequest {
        name: "  Ada Lovelace ".to_string(),
        email: " ada@example.com ".to_string(),
        password: "analytical".to_string(),
        role,
    }
}

#[tokio::test]
async fn given_valid_student_registration_when_registered_then_profile_and_student_record() {
    // Given
    let provider = FakeProvider::new();
    let store = FakeStore::new();
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);

    // When
    let outcome = auth
        .register(&AuthSession::new(), &request(Role::Student))
        .await
        .unwrap();

    // Then
    assert_that!(outcome.landing, eq(LandingView::StudentDashboard));
    assert_that!(outcome.profile.name.as_str(), eq("Ada Lovelace"));
    assert_that!(outcome.profile.email.as_str(), eq("ada@example.com"));
    assert_that!(outcome.profile.external_id.as_str(), starts_with("STU"));
    assert_that!(store.snapshot(|s| s.student_records.len()), eq(1));
    assert_that!(store.snapshot(|s| s.facilitator_records.len()), eq(0));
    assert_that!(
        provider.snapshot(|p| p.display_names.clone()),
        eq(&vec![("new-1".to_string(), "Ada Lovelace".to_string())])
    );
}

#[tokio::test]
async fn given_new_registration_when_registered_then_stored_profile_has_last_login() {
    // Given
    let store = FakeStore::new();
    let auth = service(&FakeProvider::new(), &store, &FakeClock::new());

    // When
    auth.register(&AuthSession::new(), &request(Role::Student))
        .await
        .unwrap();

    // Then: the account signed in at creation time
    let created = store.snapshot(|s| s.created_profiles.clone());
    assert_that!(created.len(), eq(1));
    assert_that!(created[0].last_login, some(eq(fixed_now())));
}

#[tokio::test]
async fn given_facilitator_registration_when_registered_then_facilitator_record_and_fac_id() {
    let provider = FakeProvider::new();
    let store = FakeStore::new();
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);

    let outcome = auth
        .register(&AuthSession::new(), &request(Role::Facilitator))
        .await
        .unwrap();

    assert_that!(outcome.landing, eq(LandingView::FacilitatorDashboard));
    assert_that!(outcome.profile.external_id.as_str(), starts_with("FAC"));
    assert_that!(store.snapshot(|s| s.facilitator_records.len()), eq(1));
}

#[tokio::test]
async fn given_admin_role_when_registering_then_validation_error_before_provider_call() {
    // Given
    let provider = FakeProvider::new();
    let store = FakeStore::new();
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);

    // When
    let err = auth
        .register(&AuthSession::new(), &request(Role::Admin))
        .await
        .unwrap_err();

    // Then
    assert_that!(err.field(), some(eq("role")));
    assert_that!(provider.snapshot(|p| p.create_calls), eq(0));
}

#[tokio::test]
async fn given_short_password_when_registering_then_validation_error() {
    let provider = FakeProvider::new();
    let store = FakeStore::new();
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);
    let mut short = request(Role::Student);
    short.password = "12345".to_string();

    let err = auth
        .register(&AuthSession::new(), &short)
        .await
        .unwrap_err();

    assert_that!(err.field(), some(eq("password")));
    assert_that!(
        err.user_message().as_str(),
        eq("Password must be at least 6 characters")
    );
}

#[tokio::test]
async fn given_blank_name_when_registering_then_validation_error() {
    let provider = FakeProvider::new();
    let store = FakeStore::new();
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);
    let mut blank = request(Role::Student);
    blank.name = "   ".to_string();

    let err = auth
        .register(&AuthSession::new(), &blank)
        .await
        .unwrap_err();

    assert_that!(err.field(), some(eq("name")));
}

#[tokio::test]
async fn given_email_in_use_when_registering_then_provider_error_without_cleanup() {
    // Given
    let provider = FakeProvider::new();
    provider.update(|p| p.fail_create = Some(crate::ProviderErrorKind::EmailAlreadyInUse));
    let store = FakeStore::new();
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);

    // When
    let err = auth
        .register(&AuthSession::new(), &request(Role::Student))
        .await
        .unwrap_err();

    // Then
    assert_that!(
        err.user_message().as_str(),
        contains_substring("already registered")
    );
    assert_that!(provider.snapshot(|p| p.deleted.len()), eq(0));
}

#[tokio::test]
async fn given_profile_write_failure_when_registering_then_identity_deleted() {
    // Given
    let provider = FakeProvider::new();
    let store = FakeStore::new();
    store.update(|s| s.fail_create_profile = Some(StoreErrorKind::PermissionDenied));
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);

    // When
    let err = auth
        .register(&AuthSession::new(), &request(Role::Student))
        .await
        .unwrap_err();

    // Then
    assert!(matches!(err, AuthError::ProvisioningFailed { .. }));
    assert_that!(
        err.user_message().as_str(),
        eq("Permission denied. Please check database rules.")
    );
    assert_that!(
        provider.snapshot(|p| p.deleted.clone()),
        eq(&vec!["new-1".to_string()])
    );
}

#[tokio::test]
async fn given_companion_record_failure_when_registering_then_identity_deleted() {
    let provider = FakeProvider::new();
    let store = FakeStore::new();
    store.update(|s| s.fail_companion = Some(StoreErrorKind::Unavailable));
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);

    let err = auth
        .register(&AuthSession::new(), &request(Role::Facilitator))
        .await
        .unwrap_err();

    assert_that!(err.error_code(), eq("PROVISIONING_FAILED"));
    assert_that!(provider.snapshot(|p| p.deleted.len()), eq(1));
}

#[tokio::test]
async fn given_display_name_failure_when_registering_then_registration_still_succeeds() {
    let provider = FakeProvider::new();
    provider.update(|p| p.fail_display_name = true);
    let store = FakeStore::new();
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);

    let result = auth
        .register(&AuthSession::new(), &request(Role::Student))
        .await;

    assert_that!(result, ok(anything()));
}

#[tokio::test]
async fn given_admin_request_when_adding_user_then_adm_profile_without_companion() {
    // Given
    let provider = FakeProvider::new();
    let store = FakeStore::new();
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);
    let request = AddUserRequest {
        name: "Root".to_string(),
        email: "root@example.com".to_string(),
        password: "rootroot".to_string(),
        role: Role::Admin,
    };

    // When
    let profile = auth.add_user(&request).await.unwrap();

    // Then
    assert_that!(profile.role.as_str(), eq("admin"));
    assert_that!(profile.external_id.as_str(), starts_with("ADM"));
    assert_that!(profile.last_login, some(eq(fixed_now())));
    assert_that!(
        store.snapshot(|s| s.created_profiles[0].last_login),
        some(eq(fixed_now()))
    );
    assert_that!(store.snapshot(|s| s.student_records.len()), eq(0));
    assert_that!(store.snapshot(|s| s.facilitator_records.len()), eq(0));
    // No read-back check on this path
    assert_that!(store.reads(), eq(0));
}

#[tokio::test]
async fn given_store_failure_when_adding_user_then_identity_deleted() {
    let provider = FakeProvider::new();
    let store = FakeStore::new();
    store.update(|s| s.fail_create_profile = Some(StoreErrorKind::Other));
    let clock = FakeClock::new();
    let auth = service(&provider, &store, &clock);
    let request = AddUserRequest {
        name: "Bob".to_string(),
        email: "bob@example.com".to_string(),
        password: "bobbobbob".to_string(),
        role: Role::Student,
    };

    let result = auth.add_user(&request).await;

    assert!(matches!(result, Err(AuthError::ProvisioningFailed { .. })));
    assert_that!(provider.snapshot(|p| p.deleted.len()), eq(1));
}

#[test]
fn given_request_when_debug_formatted_then_password_redacted() {
    let formatted = format!("{:?}", request(Role::Student));

    assert_that!(formatted, not(contains_substring("analytical")));
    assert_that!(formatted, contains_substring("<redacted>"));
}
