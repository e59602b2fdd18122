//! Form-local state for the login screen.
//!
//! Field errors never go through the store: they come either from the form's
//! own validation or from a rejected login, and live only as long as the form.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use taskdeck_config::MIN_PASSWORD_LEN;
use taskdeck_core::{FieldError, LoginParams};

use crate::errors::Rejected;

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$").expect("email pattern")
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    errors: BTreeMap<String, String>,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember_me: bool) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me,
            errors: BTreeMap::new(),
        }
    }

    /// First failing rule, email rules before password rules.
    pub fn first_violation(&self) -> Option<FieldError> {
        if self.email.is_empty() {
            return Some(FieldError::new(EMAIL_FIELD, "Email is required"));
        }
        if !email_pattern().is_match(&self.email) {
            return Some(FieldError::new(EMAIL_FIELD, "Invalid email address"));
        }
        if self.password.is_empty() {
            return Some(FieldError::new(PASSWORD_FIELD, "Password is required"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Some(FieldError::new(
                PASSWORD_FIELD,
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        }
        None
    }

    /// Replaces the current errors with the validation result.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        match self.first_violation() {
            Some(violation) => {
                self.set_field_error(violation.field, violation.error);
                false
            }
            None => true,
        }
    }

    pub fn params(&self) -> LoginParams {
        LoginParams {
            email: self.email.clone(),
            password: self.password.clone(),
            remember_me: self.remember_me,
            captcha: None,
        }
    }

    /// Routes the server's field errors of a rejected login onto the form.
    /// Returns false when there were none, i.e. the banner already reported
    /// the failure.
    pub fn apply_rejection(&mut self, rejection: &Rejected) -> bool {
        let field_errors = rejection.field_errors();
        for FieldError { field, error } in field_errors {
            self.set_field_error(field.clone(), error.clone());
        }
        !field_errors.is_empty()
    }

    pub fn set_field_error(&mut self, field: impl Into<String>, error: impl Into<String>) {
        self.errors.insert(field.into(), error.into());
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(f, e)| (f.as_str(), e.as_str()))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
