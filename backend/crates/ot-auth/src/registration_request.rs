use crate::{AuthError, Result as AuthErrorResult};

use ot_config::ValidationConfig;
use ot_core::Role;

/// Public sign-up form.
#[derive(Clone)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Account created by an admin; any role is allowed.
#[derive(Clone)]
pub struct AddUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl RegistrationRequest {
    /// Trimmed copy, or the first validation failure.
    #[track_caller]
    pub fn validated(&self, limits: &ValidationConfig) -> AuthErrorResult<Self> {
        let (name, email) = validate_account(&self.name, &self.email, &self.password, limits)?;

        if !self.role.is_self_registrable() {
            return Err(AuthError::validation(
                "role",
                "Please select a valid role (student or facilitator)",
            ));
        }

        Ok(Self {
            name,
            email,
            password: self.password.clone(),
            role: self.role,
        })
    }
}

impl AddUserRequest {
    #[track_caller]
    pub fn validated(&self, limits: &ValidationConfig) -> AuthErrorResult<Self> {
        let (name, email) = validate_account(&self.name, &self.email, &self.password, limits)?;

        Ok(Self {
            name,
            email,
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[track_caller]
fn validate_account(
    name: &str,
    email: &str,
    password: &str,
    limits: &ValidationConfig,
) -> AuthErrorResult<(String, String)> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() {
        return Err(AuthError::validation("name", "Please enter your full name"));
    }
    if name.chars().count() > limits.max_name_length {
        return Err(AuthError::validation(
            "name",
            format!("Name must be at most {} characters", limits.max_name_length),
        ));
    }
    if email.is_empty() {
        return Err(AuthError::validation("email", "Please enter your email"));
    }
    if password.trim().is_empty() {
        return Err(AuthError::validation("password", "Please enter a password"));
    }
    if password.chars().count() < limits.min_password_length {
        return Err(AuthError::validation(
            "password",
            format!(
                "Password must be at least {} characters",
                limits.min_password_length
            ),
        ));
    }

    Ok((name.to_string(), email.to_string()))
}

// Passwords stay out of logs and panic messages.
impl std::fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

impl std::fmt::Debug for AddUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddUserRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}
