//! Application state definitions

use crate::state::FormState;
use crate::validate::ErrorMap;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Signup,
    Login,
    ForgotPassword,
    ResetPassword,
}

impl View {
    /// The screen path this view is reachable under
    pub fn path(&self) -> &'static str {
        match self {
            Self::Signup => "/",
            Self::Login => "/login",
            Self::ForgotPassword => "/forgotPassword",
            Self::ResetPassword => "/resetPassword",
        }
    }
}

/// Polarity of a status message, used for display styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

/// Single user-visible outcome message shown after a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: &'static str,
}

impl StatusMessage {
    pub fn success(text: &'static str) -> Self {
        Self {
            kind: StatusKind::Success,
            text,
        }
    }

    pub fn failure(text: &'static str) -> Self {
        Self {
            kind: StatusKind::Failure,
            text,
        }
    }
}

/// A one-shot navigation scheduled after a successful submit.
///
/// Held in app state rather than a detached timer so that navigating away
/// from the screen drops it before it can fire.
#[derive(Debug, Clone)]
pub struct PendingRedirect {
    pub target: View,
    pub delay: Duration,
    pub due: Instant,
}

impl PendingRedirect {
    pub fn after(target: View, delay: Duration) -> Self {
        Self {
            target,
            delay,
            due: Instant::now() + delay,
        }
    }

    pub fn is_due(&self) -> bool {
        Instant::now() >= self.due
    }

    /// Time left before the redirect fires, for the status bar
    pub fn remaining(&self) -> Duration {
        self.due.saturating_duration_since(Instant::now())
    }
}

/// Per-screen state owned by the current view.
///
/// Everything here is discarded and rebuilt on navigation.
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: FormState,
    pub errors: ErrorMap,
    pub status_message: Option<StatusMessage>,
    /// True while a submission is awaiting the API response
    pub in_flight: bool,
    pub pending_redirect: Option<PendingRedirect>,
    /// Token captured once from the launch location's query string
    pub reset_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_signup() {
        assert_eq!(View::default(), View::Signup);
    }

    #[test]
    fn test_view_paths() {
        assert_eq!(View::Signup.path(), "/");
        assert_eq!(View::Login.path(), "/login");
        assert_eq!(View::ForgotPassword.path(), "/forgotPassword");
        assert_eq!(View::ResetPassword.path(), "/resetPassword");
    }

    #[test]
    fn test_status_message_constructors() {
        let ok = StatusMessage::success("done");
        assert_eq!(ok.kind, StatusKind::Success);
        assert_eq!(ok.text, "done");

        let err = StatusMessage::failure("nope");
        assert_eq!(err.kind, StatusKind::Failure);
    }

    #[test]
    fn test_pending_redirect_not_due_immediately() {
        let redirect = PendingRedirect::after(View::Login, Duration::from_secs(2));
        assert_eq!(redirect.target, View::Login);
        assert_eq!(redirect.delay, Duration::from_secs(2));
        assert!(!redirect.is_due());
        assert!(redirect.remaining() <= Duration::from_secs(2));
    }

    #[test]
    fn test_pending_redirect_due_after_zero_delay() {
        let redirect = PendingRedirect::after(View::Login, Duration::ZERO);
        assert!(redirect.is_due());
        assert_eq!(redirect.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Signup);
        assert!(state.errors.is_empty());
        assert!(state.status_message.is_none());
        assert!(!state.in_flight);
        assert!(state.pending_redirect.is_none());
        assert_eq!(state.reset_token, "");
    }
}
