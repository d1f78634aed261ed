use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use sakage_stripe::{build_line_items, CheckoutError, CustomerDetails, SessionRequest};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{suggestions::parse_amount, AppState};

/// What the storefront posts when the customer submits the order form.
///
/// `tip` arrives as a string or number depending on whether a preset or the
/// custom field was used; `deliveryFee` is a number. Both are parsed, never
/// trusted as-is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CheckoutRequest {
    items: Vec<u32>,
    #[serde(default)]
    tip: Option<serde_json::Value>,
    delivery_fee: serde_json::Value,
    customer_details: CustomerInput,
    /// Client-generated token forwarded to Stripe as the idempotency key,
    /// so a double-click cannot create two sessions.
    #[serde(default)]
    request_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CustomerInput {
    name: String,
    email: String,
    phone: String,
    address: String,
    #[serde(default)]
    instructions: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SessionCreated {
    id: String,
}

/// Checkout failures keep the flat `{ "error": ... }` body the storefront
/// expects, distinct from the enveloped errors elsewhere in the API.
pub(super) struct CheckoutFailure {
    status: StatusCode,
    message: String,
}

impl CheckoutFailure {
    fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn provider() -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: "checkout failed, please try again or contact support".to_string(),
        }
    }
}

impl IntoResponse for CheckoutFailure {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

/// Builds a priced session from the authoritative catalog and hands off to
/// Stripe. Any unresolvable item id or malformed amount fails the whole
/// request before Stripe is contacted; no session is partially created.
pub(super) async fn create_checkout_session(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<SessionCreated>, CheckoutFailure> {
    let delivery_fee = parse_amount(&request.delivery_fee, "delivery fee")
        .map_err(CheckoutFailure::validation)?;
    let tip = match &request.tip {
        None | Some(serde_json::Value::Null) => None,
        Some(raw) => Some(parse_amount(raw, "tip").map_err(CheckoutFailure::validation)?),
    };

    let line_items = build_line_items(&state.catalog, &request.items, delivery_fee, tip)
        .map_err(CheckoutFailure::from)?;

    let session_request = SessionRequest {
        line_items,
        success_url: state.checkout.success_url.clone(),
        cancel_url: state.checkout.cancel_url.clone(),
        allowed_countries: state.checkout.allowed_countries.clone(),
        customer: CustomerDetails {
            name: request.customer_details.name,
            email: request.customer_details.email,
            phone: request.customer_details.phone,
            address: request.customer_details.address,
            instructions: request.customer_details.instructions,
        },
        idempotency_key: request.request_token,
    };

    let session = state
        .stripe
        .create_checkout_session(&session_request)
        .await
        .map_err(|err| {
            // The customer sees a generic message; the operator gets details.
            tracing::error!(request_id = %req_id.0, error = %err, "stripe session creation failed");
            CheckoutFailure::from(CheckoutError::Stripe(err))
        })?;

    tracing::info!(
        request_id = %req_id.0,
        session_id = %session.id,
        lines = session_request.line_items.len(),
        "checkout session created"
    );
    Ok(Json(SessionCreated { id: session.id }))
}

impl From<CheckoutError> for CheckoutFailure {
    fn from(err: CheckoutError) -> Self {
        if err.is_validation() {
            CheckoutFailure::validation(err.to_string())
        } else {
            CheckoutFailure::provider()
        }
    }
}
