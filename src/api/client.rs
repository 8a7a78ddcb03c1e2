//! HTTP client for communicating with the auth API
//!
//! All requests carry JSON bodies, include cookies, and are subject to a
//! 5-second timeout.

use super::traits::AuthApi;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Why an auth API call failed. The submission workflow collapses every
/// variant into one generic user-facing message; the split exists so the
/// log records what actually happened.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure, timeout, or other transport-level problem
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-2xx status
    #[error("server returned {status}")]
    Status { status: StatusCode },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    new_password: &'a str,
}

/// Client for communicating with the auth API
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new auth API client against the given base URL
    pub fn new(base_url: &str) -> Result<Self> {
        url::Url::parse(base_url).with_context(|| format!("invalid auth API URL: {base_url}"))?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .cookie_store(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status { status })
        }
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let body = RegisterRequest {
            first_name,
            last_name,
            email,
            password,
        };
        self.send(self.http.post(self.endpoint("/auth/register")).json(&body))
            .await
    }

    async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = LoginRequest { email, password };
        self.send(self.http.put(self.endpoint("/auth/login")).json(&body))
            .await
    }

    async fn request_reset(&self, email: &str) -> Result<(), ApiError> {
        let body = ForgotPasswordRequest { email };
        self.send(self.http.put(self.endpoint("/auth/forgot")).json(&body))
            .await
    }

    async fn confirm_reset(&self, token: &str, new_password: &str) -> Result<(), ApiError> {
        let body = ResetPasswordRequest { new_password };
        self.send(
            self.http
                .put(self.endpoint(&format!("/auth/reset/{token}")))
                .json(&body),
        )
        .await
    }
}
