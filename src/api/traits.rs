//! Trait abstraction for the auth API client to enable mocking in tests

use super::client::ApiError;
use async_trait::async_trait;

/// The four remote auth operations.
///
/// Every call resolves `Ok(())` on any 2xx response and `Err` otherwise;
/// callers treat all error variants identically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Register a new account
    async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError>;

    /// Authenticate an existing account
    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError>;

    /// Ask the server to mail a password-reset link
    async fn request_reset(&self, email: &str) -> Result<(), ApiError>;

    /// Set a new password using a reset token from the mailed link
    async fn confirm_reset(&self, token: &str, new_password: &str) -> Result<(), ApiError>;
}
