//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.
//! These are shared utilities, not ports.

use std::time::Duration;

use quack_domain::error::{Error, Result};
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::constants::RETRY_BASE_DELAY;

/// Format error message for an LLM provider
fn provider_error(provider: &str, context: &str, details: &str) -> Error {
    Error::provider(provider, format!("{context}: {details}"))
}

/// Utilities for processing HTTP responses
///
/// Provides common response handling patterns used by LLM providers.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    ///
    /// # Returns
    /// Parsed JSON value on success, or an appropriate error
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => Error::authentication(format!(
                    "{provider_name} rejected the API key: {error_text}"
                )),
                429 => provider_error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => provider_error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => provider_error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| provider_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Send a request, retrying transient failures up to `retry_count` times
    ///
    /// Transport errors, 429 and 5xx responses are retried with exponential
    /// backoff starting at [`RETRY_BASE_DELAY`]. `build` is called once per
    /// attempt because a sent request cannot be reused.
    pub async fn send_with_retry<F>(
        build: F,
        provider_name: &str,
        timeout: Duration,
        retry_count: u32,
    ) -> Result<serde_json::Value>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            let outcome = build().send().await;
            let transient = match &outcome {
                Ok(response) => Self::is_retryable_status(response.status()),
                Err(_) => true,
            };
            if transient && attempt < retry_count {
                attempt += 1;
                let delay = RETRY_BASE_DELAY * 2u32.saturating_pow(attempt - 1);
                debug!(provider = %provider_name, attempt, ?delay, "Retrying request");
                tokio::time::sleep(delay).await;
                continue;
            }

            let response = outcome.map_err(|e| Self::request_error(provider_name, timeout, e))?;
            return Self::check_and_parse(response, provider_name).await;
        }
    }

    /// Whether a response status is worth retrying
    pub fn is_retryable_status(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
    }

    /// Map a transport failure to a domain error
    pub fn request_error(provider_name: &str, timeout: Duration, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            provider_error(
                provider_name,
                crate::constants::ERROR_MSG_REQUEST_TIMEOUT,
                &format!("{timeout:?}"),
            )
        } else {
            Error::network_with_source(format!("{provider_name} HTTP request failed"), e)
        }
    }
}
