//! HTTP client for the Stripe Checkout Sessions API.
//!
//! Wraps `reqwest` with Stripe-specific error handling, bearer-key auth, and
//! typed response deserialization. Session creation is a single
//! form-encoded POST with no retries; a failed request surfaces a terminal
//! error and the customer resubmits.

use std::time::Duration;

use reqwest::{header, Client, Url};

use crate::error::StripeError;
use crate::form::session_form;
use crate::types::{CheckoutSession, SessionRequest};

const DEFAULT_BASE_URL: &str = "https://api.stripe.com/";

/// Client for the Stripe REST API.
///
/// Use [`StripeClient::new`] for production or
/// [`StripeClient::with_base_url`] to point at a mock server in tests.
pub struct StripeClient {
    client: Client,
    secret_key: String,
    base_url: Url,
}

impl StripeClient {
    /// Creates a new client pointed at the production Stripe API.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(secret_key: &str, timeout_secs: u64) -> Result<Self, StripeError> {
        Self::with_base_url(secret_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for wiremock tests).
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StripeError::BaseUrl`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        secret_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, StripeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sakage/0.1 (direct-ordering)")
            .build()?;

        // Normalise: keep exactly one trailing slash so join() appends the
        // API path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|_| StripeError::BaseUrl(normalised.clone()))?;

        Ok(Self {
            client,
            secret_key: secret_key.to_owned(),
            base_url,
        })
    }

    /// Creates a hosted Checkout Session and returns its handle.
    ///
    /// When `request.idempotency_key` is set it is forwarded as Stripe's
    /// `Idempotency-Key` header, so a double-submitted order resolves to the
    /// same session.
    ///
    /// # Errors
    ///
    /// - [`StripeError::Api`] when Stripe rejects the request.
    /// - [`StripeError::Http`] on network failure.
    /// - [`StripeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn create_checkout_session(
        &self,
        request: &SessionRequest,
    ) -> Result<CheckoutSession, StripeError> {
        let url = self
            .base_url
            .join("v1/checkout/sessions")
            .map_err(|_| StripeError::BaseUrl(self.base_url.to_string()))?;

        let mut http_request = self
            .client
            .post(url.clone())
            .header(header::AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .form(&session_form(request));
        if let Some(key) = &request.idempotency_key {
            http_request = http_request.header("Idempotency-Key", key);
        }

        let response = http_request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StripeError::Api {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| StripeError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Pulls the human-readable message out of a Stripe error envelope,
    /// falling back to the raw body.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(serde_json::Value::as_str)
                    .map(ToOwned::to_owned)
            })
            .unwrap_or_else(|| body.to_string())
    }
}
