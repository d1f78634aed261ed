use sakage_core::{MenuError, MoneyError};
use thiserror::Error;

/// Errors returned by the Stripe API client.
#[derive(Debug, Error)]
pub enum StripeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe answered with a non-2xx status and an error message.
    #[error("Stripe API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{0}'")]
    BaseUrl(String),
}

/// Errors from assembling a checkout session out of an order request.
///
/// Validation failures (`Menu`, `NegativeAmount`) are user-facing and keep
/// their specific messages; provider failures are wrapped as `Stripe` and
/// reported generically by the server.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },

    #[error("an order needs at least one item")]
    EmptyOrder,

    #[error(transparent)]
    Stripe(#[from] StripeError),
}

impl CheckoutError {
    /// Whether the error is the caller's fault (reject with a specific
    /// message) rather than a provider failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, CheckoutError::Stripe(_))
    }
}
