//! Application state and core logic

use crate::api::{ApiError, AuthApi, AuthClient};
use crate::config::TuiConfig;
use crate::state::{
    AppState, FormState, ForgotPasswordForm, Location, LoginForm, PendingRedirect,
    ResetPasswordForm, SignupForm, StatusMessage, View,
};
use crate::validate;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long a successful submit waits before redirecting
const REDIRECT_DELAY: Duration = Duration::from_millis(2000);
/// The forgot-password screen leaves its message up longer
const FORGOT_REDIRECT_DELAY: Duration = Duration::from_millis(4000);

const SIGNUP_SUCCESS: &str = "Registration successful. Redirecting to login page...";
const SIGNUP_FAILURE: &str = "An error occurred during registration. Please try again.";
const LOGIN_SUCCESS: &str = "Login successful. Redirecting to signup page...";
const LOGIN_FAILURE: &str = "An error occurred during login. Please try again.";
const FORGOT_SUCCESS: &str = "A reset link has been sent to your email address.";
const FORGOT_FAILURE: &str = "An error occurred. Please try again.";
const RESET_SUCCESS: &str = "Password reset successful. Redirecting to login page...";
const RESET_FAILURE: &str = "An error occurred during password reset. Please try again.";

/// Result of a spawned API call, delivered back to the event loop
#[derive(Debug)]
struct SubmitOutcome {
    /// The view the submission originated from
    view: View,
    result: Result<(), ApiError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Shared auth API client, constructed once and injected by reference
    api: Arc<dyn AuthApi>,
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
}

impl App {
    /// Create a new App instance against the configured auth API
    pub fn new(config: &TuiConfig, location: Location) -> Result<Self> {
        let api = AuthClient::new(&config.resolve_base_url())?;
        Ok(Self::with_api(Arc::new(api), location))
    }

    /// Create an App with an explicit API client
    pub fn with_api(api: Arc<dyn AuthApi>, location: Location) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let state = AppState {
            current_view: location.view,
            form: form_for(location.view),
            reset_token: location.token.unwrap_or_default(),
            ..AppState::default()
        };
        Self {
            state,
            api,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Navigate to a view, discarding the current screen's state
    pub fn navigate(&mut self, view: View) {
        tracing::debug!(from = self.state.current_view.path(), to = view.path(), "navigate");
        self.state.current_view = view;
        self.state.form = form_for(view);
        self.state.errors.clear();
        self.state.status_message = None;
        self.state.in_flight = false;
        self.state.pending_redirect = None;
    }

    /// Advance time-driven state; called once per event-loop iteration.
    ///
    /// Drains finished submissions and fires a due redirect.
    pub fn tick(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }

        if let Some(redirect) = self.state.pending_redirect.take() {
            if redirect.is_due() {
                self.navigate(redirect.target);
            } else {
                self.state.pending_redirect = Some(redirect);
            }
        }
    }

    /// Handle a key event for the current view
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Signup => self.handle_signup_key(key),
            View::Login => self.handle_login_key(key),
            View::ForgotPassword => self.handle_forgot_password_key(key),
            View::ResetPassword => self.handle_reset_password_key(key),
        }
    }

    fn handle_signup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.navigate(View::Login);
            }
            _ => self.handle_form_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.navigate(View::Signup);
            }
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.navigate(View::ForgotPassword);
            }
            _ => self.handle_form_key(key),
        }
    }

    fn handle_forgot_password_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.navigate(View::Login),
            _ => self.handle_form_key(key),
        }
    }

    fn handle_reset_password_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.navigate(View::Login),
            _ => self.handle_form_key(key),
        }
    }

    /// Keys shared by every form screen
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.state.form.get_active_field_mut().pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.get_active_field_mut().push_char(c);
            }
            _ => {}
        }
    }

    /// Run the submission workflow for the current screen
    pub fn submit(&mut self) {
        if self.state.in_flight {
            // One submission at a time
            return;
        }

        let errors = match &self.state.form {
            FormState::Signup(form) => validate::signup(form),
            FormState::Login(form) => validate::login(form),
            FormState::ForgotPassword(form) => validate::forgot_password(form),
            FormState::ResetPassword(form) => validate::reset_password(form),
        };
        if !errors.is_empty() {
            // Invalid input never reaches the API; a prior status message
            // stays on screen.
            self.state.errors = errors;
            return;
        }

        self.state.errors.clear();
        self.state.in_flight = true;

        let api = Arc::clone(&self.api);
        let tx = self.outcome_tx.clone();
        let view = self.state.current_view;

        match &self.state.form {
            FormState::Signup(form) => {
                let first_name = form.first_name.as_text().to_string();
                let last_name = form.last_name.as_text().to_string();
                let email = form.email.as_text().to_string();
                let password = form.password.as_text().to_string();
                tokio::spawn(async move {
                    let result = api
                        .register(&first_name, &last_name, &email, &password)
                        .await;
                    let _ = tx.send(SubmitOutcome { view, result });
                });
            }
            FormState::Login(form) => {
                let email = form.email.as_text().to_string();
                let password = form.password.as_text().to_string();
                tokio::spawn(async move {
                    let result = api.login(&email, &password).await;
                    let _ = tx.send(SubmitOutcome { view, result });
                });
            }
            FormState::ForgotPassword(form) => {
                let email = form.email.as_text().to_string();
                tokio::spawn(async move {
                    let result = api.request_reset(&email).await;
                    let _ = tx.send(SubmitOutcome { view, result });
                });
            }
            FormState::ResetPassword(form) => {
                // The token may be empty; the server rejects it, not us
                let token = self.state.reset_token.clone();
                let new_password = form.new_password.as_text().to_string();
                tokio::spawn(async move {
                    let result = api.confirm_reset(&token, &new_password).await;
                    let _ = tx.send(SubmitOutcome { view, result });
                });
            }
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        if outcome.view != self.state.current_view {
            // The screen this belongs to was torn down
            tracing::debug!(screen = outcome.view.path(), "dropping stale submit outcome");
            return;
        }

        self.state.in_flight = false;
        match outcome.result {
            Ok(()) => self.on_submit_success(outcome.view),
            Err(error) => self.on_submit_failure(outcome.view, &error),
        }
    }

    fn on_submit_success(&mut self, view: View) {
        match view {
            View::Signup => {
                self.state.status_message = Some(StatusMessage::success(SIGNUP_SUCCESS));
                self.schedule_redirect(View::Login, REDIRECT_DELAY);
            }
            View::Login => {
                self.state.status_message = Some(StatusMessage::success(LOGIN_SUCCESS));
                if let FormState::Login(form) = &mut self.state.form {
                    form.clear();
                }
                self.schedule_redirect(View::Signup, REDIRECT_DELAY);
            }
            View::ForgotPassword => {
                self.state.status_message = Some(StatusMessage::success(FORGOT_SUCCESS));
                self.schedule_redirect(View::Login, FORGOT_REDIRECT_DELAY);
            }
            View::ResetPassword => {
                self.state.status_message = Some(StatusMessage::success(RESET_SUCCESS));
                self.schedule_redirect(View::Login, REDIRECT_DELAY);
            }
        }
    }

    fn on_submit_failure(&mut self, view: View, error: &ApiError) {
        tracing::warn!(screen = view.path(), %error, "auth request failed");
        let text = match view {
            View::Signup => SIGNUP_FAILURE,
            View::Login => LOGIN_FAILURE,
            View::ForgotPassword => FORGOT_FAILURE,
            View::ResetPassword => RESET_FAILURE,
        };
        self.state.status_message = Some(StatusMessage::failure(text));
    }

    fn schedule_redirect(&mut self, target: View, delay: Duration) {
        tracing::debug!(
            to = target.path(),
            delay_ms = delay.as_millis() as u64,
            "redirect scheduled"
        );
        self.state.pending_redirect = Some(PendingRedirect::after(target, delay));
    }
}

fn form_for(view: View) -> FormState {
    match view {
        View::Signup => FormState::Signup(SignupForm::new()),
        View::Login => FormState::Login(LoginForm::new()),
        View::ForgotPassword => FormState::ForgotPassword(ForgotPasswordForm::new()),
        View::ResetPassword => FormState::ResetPassword(ResetPasswordForm::new()),
    }
}
