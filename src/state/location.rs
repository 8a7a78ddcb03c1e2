//! Launch location parsing
//!
//! The binary accepts an optional path argument selecting the initial screen,
//! e.g. `auth-tui "/resetPassword?token=abc"`. The `token` query parameter is
//! extracted once here; the reset screen never re-reads it.

use crate::state::View;

/// A parsed launch location: initial view plus the reset token, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub view: View,
    pub token: Option<String>,
}

impl Location {
    /// Parse a path-and-query string into a location.
    ///
    /// Unknown paths land on the signup screen.
    pub fn parse(input: &str) -> Self {
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };

        let view = match path {
            "/login" => View::Login,
            "/forgotPassword" => View::ForgotPassword,
            "/resetPassword" => View::ResetPassword,
            _ => View::Signup,
        };

        let token = query.and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "token")
                .map(|(_, value)| value.into_owned())
        });

        Self { view, token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_signup_without_token() {
        let location = Location::default();
        assert_eq!(location.view, View::Signup);
        assert!(location.token.is_none());
    }

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Location::parse("/").view, View::Signup);
        assert_eq!(Location::parse("/login").view, View::Login);
        assert_eq!(Location::parse("/forgotPassword").view, View::ForgotPassword);
        assert_eq!(Location::parse("/resetPassword").view, View::ResetPassword);
    }

    #[test]
    fn test_parse_unknown_path_defaults_to_signup() {
        assert_eq!(Location::parse("/nope").view, View::Signup);
        assert_eq!(Location::parse("").view, View::Signup);
    }

    #[test]
    fn test_parse_extracts_token() {
        let location = Location::parse("/resetPassword?token=abc123");
        assert_eq!(location.view, View::ResetPassword);
        assert_eq!(location.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_parse_token_among_other_params() {
        let location = Location::parse("/resetPassword?utm=x&token=abc&lang=en");
        assert_eq!(location.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_parse_percent_decodes_token() {
        let location = Location::parse("/resetPassword?token=a%2Bb%20c");
        assert_eq!(location.token.as_deref(), Some("a+b c"));
    }

    #[test]
    fn test_parse_missing_token_is_none() {
        let location = Location::parse("/resetPassword");
        assert_eq!(location.view, View::ResetPassword);
        assert!(location.token.is_none());

        let location = Location::parse("/resetPassword?other=1");
        assert!(location.token.is_none());
    }
}
