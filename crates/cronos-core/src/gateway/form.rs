use crate::models::RegisterRequest;

use super::{AuthFailure, AuthOutcome};

/// Minimum password length the server accepts
const MIN_PASSWORD_LENGTH: usize = 6;

/// Raw registration input, before any request is made.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Check the form and turn it into a request.
    ///
    /// The password confirmation is checked first so a mismatch never
    /// reaches the server.
    pub fn validate(&self) -> AuthOutcome<RegisterRequest> {
        if self.password != self.confirm_password {
            return Err(AuthFailure::validation("Passwords don't match"));
        }

        let first_name = required(&self.first_name, "First name is required")?;
        let last_name = required(&self.last_name, "Last name is required")?;
        let email = required(&self.email, "Email is required")?;
        if !is_plausible_email(&email) {
            return Err(AuthFailure::validation("Invalid email format"));
        }
        if self.password.trim().is_empty() {
            return Err(AuthFailure::validation("Password is required"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthFailure::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(RegisterRequest {
            first_name,
            last_name,
            email,
            password: self.password.clone(),
            tenant_id: None,
        })
    }
}

fn required(value: &str, message: &str) -> AuthOutcome<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AuthFailure::validation(message))
    } else {
        Ok(trimmed.to_string())
    }
}

/// One `@`, something on each side, a dot in the domain, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}
