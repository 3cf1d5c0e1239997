//! Credential validation helpers.
//!
//! # Design
//! - Messages are fixed strings so views and tests agree on them.
//! - Validation is synchronous and never touches the network.

use once_cell::sync::Lazy;
use regex::Regex;
use transdesk_api_models::Role;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

pub(crate) const EMAIL_REQUIRED: &str = "Email is required";
pub(crate) const EMAIL_INVALID: &str = "Invalid email address";
pub(crate) const PASSWORD_REQUIRED: &str = "Password is required";
pub(crate) const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub(crate) const NAME_REQUIRED: &str = "Name is required";
pub(crate) const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub(crate) const PASSWORDS_MISMATCH: &str = "Passwords must match";
pub(crate) const EMAIL_TAKEN_FIELD: &str = "Email is already registered";
pub(crate) const EMAIL_TAKEN_TOAST: &str = "Email already in use";

static EMAIL_SHAPE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Whether `value` looks like an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value.trim()))
}

pub(crate) fn check_email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(value) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

pub(crate) fn check_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if value.chars().count() < MIN_PASSWORD_LEN {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

pub(crate) fn check_name(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some(NAME_REQUIRED)
}

pub(crate) fn check_confirmation(password: &str, confirmation: &str) -> Option<&'static str> {
    if confirmation.is_empty() {
        Some(CONFIRM_REQUIRED)
    } else if confirmation != password {
        Some(PASSWORDS_MISMATCH)
    } else {
        None
    }
}

/// Whether a signup error message reports a duplicate email.
#[must_use]
pub fn is_email_in_use(message: &str) -> bool {
    message.to_lowercase().contains("email already in use")
}

/// Confirmation toast after a successful signup.
#[must_use]
pub const fn signup_success_message(role: Role) -> &'static str {
    match role {
        Role::Client => "Account created successfully!",
        Role::Admin => "Admin created successfully!",
    }
}

/// What the signup form shows for a failed signup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupFeedback {
    /// Error pinned to the email field.
    pub email_error: Option<&'static str>,
    /// Global notification text.
    pub toast: String,
}

/// Map a signup failure message to field and toast feedback.
#[must_use]
pub fn signup_failure_feedback(message: &str) -> SignupFeedback {
    if is_email_in_use(message) {
        SignupFeedback {
            email_error: Some(EMAIL_TAKEN_FIELD),
            toast: EMAIL_TAKEN_TOAST.to_string(),
        }
    } else {
        SignupFeedback {
            email_error: None,
            toast: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email(" ada@example.co.uk "));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada example@x.io"));
        assert!(!is_valid_email("@x.io"));
        assert_eq!(check_email(""), Some(EMAIL_REQUIRED));
        assert_eq!(check_email("nope"), Some(EMAIL_INVALID));
        assert_eq!(check_email("a@b.cd"), None);
    }

    #[test]
    fn password_rules() {
        assert_eq!(check_password(""), Some(PASSWORD_REQUIRED));
        assert_eq!(check_password("12345"), Some(PASSWORD_TOO_SHORT));
        assert_eq!(check_password("123456"), None);
        assert_eq!(check_confirmation("123456", ""), Some(CONFIRM_REQUIRED));
        assert_eq!(check_confirmation("123456", "123457"), Some(PASSWORDS_MISMATCH));
        assert_eq!(check_confirmation("123456", "123456"), None);
        assert_eq!(check_name("  "), Some(NAME_REQUIRED));
    }

    #[test]
    fn email_in_use_is_case_insensitive() {
        for message in [
            "Email already in use",
            "EMAIL ALREADY IN USE",
            "signup failed: email Already In Use by another account",
        ] {
            let feedback = signup_failure_feedback(message);
            assert_eq!(feedback.email_error, Some(EMAIL_TAKEN_FIELD));
            assert_eq!(feedback.toast, EMAIL_TAKEN_TOAST);
        }
        let other = signup_failure_feedback("Server exploded");
        assert_eq!(other.email_error, None);
        assert_eq!(other.toast, "Server exploded");
    }

    #[test]
    fn signup_confirmation_depends_on_role() {
        assert_eq!(
            signup_success_message(Role::Client),
            "Account created successfully!"
        );
        assert_eq!(
            signup_success_message(Role::Admin),
            "Admin created successfully!"
        );
    }
}
