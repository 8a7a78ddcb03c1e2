//! Pure form validators
//!
//! Each validator maps a form to an `ErrorMap`; an empty map means the form
//! is valid. Validators never mutate the form and have no side effects.

use crate::state::{ForgotPasswordForm, LoginForm, ResetPasswordForm, SignupForm};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Per-field validation failure messages; absence of a key means the field
/// is valid. Recomputed wholesale on every submit attempt.
pub type ErrorMap = HashMap<&'static str, &'static str>;

/// Loose email shape check: non-whitespace, `@`, non-whitespace, `.`,
/// non-whitespace, anywhere in the string. Not an RFC validation.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

fn check_email(errors: &mut ErrorMap, email: &str) {
    if email.is_empty() {
        errors.insert("email", "Email address is required.");
    } else if !EMAIL_RE.is_match(email) {
        errors.insert("email", "Email address is invalid.");
    }
}

pub fn signup(form: &SignupForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    if form.first_name.as_text().is_empty() {
        errors.insert("first_name", "First name is required.");
    }
    if form.last_name.as_text().is_empty() {
        errors.insert("last_name", "Last name is required.");
    }
    check_email(&mut errors, form.email.as_text());
    if form.password.as_text().is_empty() {
        errors.insert("password", "Password is required.");
    }
    errors
}

pub fn login(form: &LoginForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check_email(&mut errors, form.email.as_text());
    if form.password.as_text().is_empty() {
        errors.insert("password", "Password is required.");
    }
    errors
}

pub fn forgot_password(form: &ForgotPasswordForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check_email(&mut errors, form.email.as_text());
    errors
}

pub fn reset_password(form: &ResetPasswordForm) -> ErrorMap {
    let mut errors = ErrorMap::new();
    let new_password = form.new_password.as_text();
    if new_password.is_empty() {
        errors.insert("new_password", "New password is required.");
    } else if new_password.chars().count() < 6 {
        errors.insert(
            "new_password",
            "New password must be at least 6 characters long.",
        );
    }
    // The mismatch check runs even when new_password has its own error
    if new_password != form.confirm_password.as_text() {
        errors.insert("confirm_password", "Passwords do not match.");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn login_form(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::new();
        form.email.value = email.to_string();
        form.password.value = password.to_string();
        form
    }

    fn reset_form(new_password: &str, confirm_password: &str) -> ResetPasswordForm {
        let mut form = ResetPasswordForm::new();
        form.new_password.value = new_password.to_string();
        form.confirm_password.value = confirm_password.to_string();
        form
    }

    #[test]
    fn test_validator_is_pure() {
        let form = login_form("abc", "");
        let first = login(&form);
        let second = login(&form);
        assert_eq!(first, second);
        assert_eq!(form.email.as_text(), "abc");
    }

    #[test]
    fn test_email_accepts_and_rejects() {
        assert!(login(&login_form("a@b.co", "x")).is_empty());
        assert_eq!(
            login(&login_form("", "x")).get("email"),
            Some(&"Email address is required.")
        );
        assert_eq!(
            login(&login_form("abc", "x")).get("email"),
            Some(&"Email address is invalid.")
        );
        assert_eq!(
            login(&login_form("a@b", "x")).get("email"),
            Some(&"Email address is invalid.")
        );
    }

    #[test]
    fn test_email_shape_is_unanchored() {
        // Anything containing the shape passes, even with surrounding text
        assert!(login(&login_form("see a@b.co here", "x")).is_empty());
    }

    #[test]
    fn test_login_requires_password() {
        let errors = login(&login_form("a@b.co", ""));
        assert_eq!(errors.get("password"), Some(&"Password is required."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_signup_requires_all_fields() {
        let errors = signup(&SignupForm::new());
        assert_eq!(errors.get("first_name"), Some(&"First name is required."));
        assert_eq!(errors.get("last_name"), Some(&"Last name is required."));
        assert_eq!(errors.get("email"), Some(&"Email address is required."));
        assert_eq!(errors.get("password"), Some(&"Password is required."));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_signup_valid_form_has_no_errors() {
        let mut form = SignupForm::new();
        form.first_name.value = "Ada".to_string();
        form.last_name.value = "Lovelace".to_string();
        form.email.value = "ada@example.com".to_string();
        form.password.value = "secret".to_string();
        assert!(signup(&form).is_empty());
    }

    #[test]
    fn test_forgot_password_checks_email_only() {
        let mut form = ForgotPasswordForm::new();
        assert_eq!(
            forgot_password(&form).get("email"),
            Some(&"Email address is required.")
        );
        form.email.value = "a@b.co".to_string();
        assert!(forgot_password(&form).is_empty());
    }

    #[test]
    fn test_reset_password_length_rule() {
        assert_eq!(
            reset_password(&reset_form("12345", "12345")).get("new_password"),
            Some(&"New password must be at least 6 characters long.")
        );
        // Exactly 6 characters is accepted
        assert!(reset_password(&reset_form("123456", "123456")).is_empty());
        assert_eq!(
            reset_password(&reset_form("", "")).get("new_password"),
            Some(&"New password is required.")
        );
    }

    #[test]
    fn test_reset_password_mismatch_with_valid_new_password() {
        let errors = reset_password(&reset_form("123456", "654321"));
        assert!(errors.get("new_password").is_none());
        assert_eq!(
            errors.get("confirm_password"),
            Some(&"Passwords do not match.")
        );
    }

    #[test]
    fn test_reset_password_errors_can_co_occur() {
        // Too short AND mismatched: both fields report
        let errors = reset_password(&reset_form("123", "1234"));
        assert_eq!(
            errors.get("new_password"),
            Some(&"New password must be at least 6 characters long.")
        );
        assert_eq!(
            errors.get("confirm_password"),
            Some(&"Passwords do not match.")
        );
    }

    #[test]
    fn test_reset_password_empty_confirm_matches_empty() {
        // Both empty: required error only, no mismatch
        let errors = reset_password(&reset_form("", ""));
        assert!(errors.get("confirm_password").is_none());
    }
}
