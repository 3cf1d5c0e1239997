//! Auth form state.
//!
//! # Design
//! - Keep inputs as raw strings; build API payloads only when validation passes.
//! - Errors show once a field was touched or a submit was attempted.
//! - Server-side field errors live until the field is edited again.

use crate::features::auth::logic::{check_confirmation, check_email, check_name, check_password};
use std::collections::{BTreeMap, BTreeSet};
use transdesk_api_models::{LoginRequest, SignupRequest};

/// Form inputs across the login and signup screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Display name (signup only).
    Name,
    /// Account email.
    Email,
    /// Password.
    Password,
    /// Password confirmation (signup only).
    ConfirmPassword,
}

/// Validation messages keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    /// Message for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn record(&mut self, field: Field, message: Option<&'static str>) {
        if let Some(message) = message {
            self.0.insert(field, message);
        }
    }

    fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

/// Credentials a form collects and the payload it submits.
pub trait CredentialForm: Clone + Default + PartialEq {
    /// Payload sent to the API.
    type Request;

    /// Fields rendered by the form, in display order.
    const FIELDS: &'static [Field];

    /// Validate every field.
    fn validate(&self) -> FieldErrors;

    /// Build the payload. Only called once validation passed.
    fn to_request(&self) -> Self::Request;

    /// Current raw value of `field`.
    fn value(&self, field: Field) -> &str;

    /// Replace the raw value of `field`.
    fn set(&mut self, field: Field, value: String);
}

/// Login inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
}

impl CredentialForm for LoginForm {
    type Request = LoginRequest;

    const FIELDS: &'static [Field] = &[Field::Email, Field::Password];

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.record(Field::Email, check_email(&self.email));
        errors.record(Field::Password, check_password(&self.password));
        errors
    }

    fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Name | Field::ConfirmPassword => "",
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Name | Field::ConfirmPassword => {}
        }
    }
}

/// Signup inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Name input.
    pub name: String,
    /// Email input.
    pub email: String,
    /// Password input.
    pub password: String,
    /// Confirmation input; never sent.
    pub confirm_password: String,
}

impl CredentialForm for SignupForm {
    type Request = SignupRequest;

    const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.record(Field::Name, check_name(&self.name));
        errors.record(Field::Email, check_email(&self.email));
        errors.record(Field::Password, check_password(&self.password));
        errors.record(
            Field::ConfirmPassword,
            check_confirmation(&self.password, &self.confirm_password),
        );
        errors
    }

    fn to_request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }
}

/// Values plus touch/submit bookkeeping for one form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<F: CredentialForm> {
    /// Raw inputs.
    pub values: F,
    touched: BTreeSet<Field>,
    submitted: bool,
    server_errors: FieldErrors,
    busy: bool,
}

impl<F: CredentialForm> FormState<F> {
    /// Update a field; drops any server error pinned to it.
    pub fn edit(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.server_errors.clear(field);
    }

    /// Mark a field as visited.
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Attempt a submit. Returns the payload when the form is valid and idle;
    /// otherwise `None` and no request must be issued.
    pub fn begin_submit(&mut self) -> Option<F::Request> {
        self.submitted = true;
        if self.busy || !self.values.validate().is_empty() {
            return None;
        }
        self.busy = true;
        Some(self.values.to_request())
    }

    /// Request finished, successfully or not.
    pub fn finish_submit(&mut self) {
        self.busy = false;
    }

    /// Pin a server-reported error to a field.
    pub fn reject_field(&mut self, field: Field, message: &'static str) {
        self.server_errors.record(field, Some(message));
        self.touched.insert(field);
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Error to render under `field`.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if let Some(message) = self.server_errors.get(field) {
            return Some(message);
        }
        if self.submitted || self.touched.contains(&field) {
            self.values.validate().get(field)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::logic::{
        EMAIL_INVALID, EMAIL_REQUIRED, EMAIL_TAKEN_FIELD, NAME_REQUIRED, PASSWORD_TOO_SHORT,
        PASSWORDS_MISMATCH,
    };

    #[test]
    fn invalid_login_blocks_submission() {
        let mut form = FormState::<LoginForm>::default();
        form.edit(Field::Email, "not-an-email".into());
        form.edit(Field::Password, "123".into());
        assert_eq!(form.visible_error(Field::Email), None);
        assert!(form.begin_submit().is_none());
        assert!(!form.is_busy());
        assert_eq!(form.visible_error(Field::Email), Some(EMAIL_INVALID));
        assert_eq!(form.visible_error(Field::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn valid_login_builds_request_once() {
        let mut form = FormState::<LoginForm>::default();
        form.edit(Field::Email, " ada@example.com ".into());
        form.edit(Field::Password, "secret1".into());
        let request = form.begin_submit().unwrap();
        assert_eq!(request.email, "ada@example.com");
        assert!(form.is_busy());
        assert!(form.begin_submit().is_none());
        form.finish_submit();
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn touched_field_shows_error_before_submit() {
        let mut form = FormState::<LoginForm>::default();
        form.touch(Field::Email);
        assert_eq!(form.visible_error(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(form.visible_error(Field::Password), None);
    }

    #[test]
    fn signup_checks_every_rule_and_drops_confirmation() {
        let mut form = FormState::<SignupForm>::default();
        form.edit(Field::Email, "ada@example.com".into());
        form.edit(Field::Password, "secret1".into());
        form.edit(Field::ConfirmPassword, "secret2".into());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.visible_error(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(
            form.visible_error(Field::ConfirmPassword),
            Some(PASSWORDS_MISMATCH)
        );

        form.edit(Field::Name, "Ada".into());
        form.edit(Field::ConfirmPassword, "secret1".into());
        let request = form.begin_submit().unwrap();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.password, "secret1");
    }

    #[test]
    fn server_email_error_clears_on_edit() {
        let mut form = FormState::<SignupForm>::default();
        form.reject_field(Field::Email, EMAIL_TAKEN_FIELD);
        assert_eq!(form.visible_error(Field::Email), Some(EMAIL_TAKEN_FIELD));
        form.edit(Field::Email, "other@example.com".into());
        assert_eq!(form.visible_error(Field::Email), None);
    }

    #[test]
    fn field_lists_match_forms() {
        assert_eq!(LoginForm::FIELDS.len(), 2);
        assert_eq!(SignupForm::FIELDS.len(), 4);
        let mut login = LoginForm::default();
        login.set(Field::Name, "ignored".into());
        assert_eq!(login.value(Field::Name), "");
    }
}
