mod checkout;
mod menu;
mod suggestions;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use sakage_core::MenuCatalog;
use sakage_stripe::StripeClient;
use serde::Serialize;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

/// Deploy-time checkout settings: where Stripe sends the customer afterward
/// and which countries the hosted page may ship to.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub success_url: String,
    pub cancel_url: String,
    pub allowed_countries: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MenuCatalog>,
    pub stripe: Arc<StripeClient>,
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    menu_items: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "provider_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/menu", get(menu::get_menu))
        .route("/api/v1/suggestions", post(suggestions::create_suggestions))
        .route(
            "/api/v1/checkout-session",
            post(checkout::create_checkout_session),
        )
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id))
                .layer(axum::middleware::from_fn_with_state(
                    rate_limit,
                    enforce_rate_limit,
                )),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    (
        StatusCode::OK,
        Json(ApiResponse {
            data: HealthData {
                status: "ok",
                menu_items: state.catalog.len(),
            },
            meta,
        }),
    )
}

pub fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(120, Duration::from_secs(60))
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use sakage_core::{MenuCategory, MenuItem, Money};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn item(id: u32, name: &str, price: &str, description: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            price: Money::parse(price).expect("price"),
            description: description.to_string(),
            image: format!("/{id}.jpg"),
            promo: None,
        }
    }

    /// Catalog used across route tests; ids and prices match the worked
    /// totals the checkout tests assert.
    pub(crate) fn test_catalog() -> MenuCatalog {
        MenuCatalog::from_categories(vec![
            MenuCategory {
                id: "breakfast_sandwiches".to_string(),
                title: "Breakfast Sandwiches".to_string(),
                items: vec![
                    item(
                        2,
                        "Steak & Egg White Power Stack",
                        "$12.99",
                        "Tender premium steak, fluffy egg whites, melted cheese.",
                    ),
                ],
            },
            MenuCategory {
                id: "lunch_specials".to_string(),
                title: "Lunch Specials".to_string(),
                items: vec![item(
                    5,
                    "BBQ Pork Sandwich",
                    "$14.99",
                    "Slow-braised pulled pork in tangy BBQ sauce.",
                )],
            },
            MenuCategory {
                id: "sides_and_sweets".to_string(),
                title: "Sides & Sweets".to_string(),
                items: vec![item(
                    18,
                    "Hash Browns",
                    "$5.99",
                    "Golden, crispy potato bites.",
                )],
            },
        ])
        .expect("catalog")
    }

    pub(crate) fn test_app(stripe_base_url: &str) -> Router {
        let stripe = StripeClient::with_base_url("sk_test_key", 5, stripe_base_url)
            .expect("stripe client");
        let state = AppState {
            catalog: Arc::new(test_catalog()),
            stripe: Arc::new(stripe),
            checkout: CheckoutConfig {
                success_url: "https://sakage.online/success".to_string(),
                cancel_url: "https://sakage.online/order".to_string(),
                allowed_countries: vec!["US".to_string()],
            },
        };
        build_app(state, default_rate_limit_state())
    }

    pub(crate) async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        serde_json::from_slice(&bytes).expect("json parse")
    }

    #[tokio::test]
    async fn health_reports_catalog_size() {
        let app = test_app("http://127.0.0.1:9");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["status"].as_str(), Some("ok"));
        assert_eq!(json["data"]["menu_items"].as_u64(), Some(3));
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn request_id_header_round_trips() {
        let app = test_app("http://127.0.0.1:9");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "req-override")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .map(|v| v.to_str().map_err(|_| ())),
            Some(Ok("req-override"))
        );
        let json = body_json(response).await;
        assert_eq!(json["meta"]["request_id"].as_str(), Some("req-override"));
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = test_app("http://127.0.0.1:9");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/orders")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_error_validation_error_maps_to_bad_request() {
        let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_provider_error_maps_to_bad_gateway() {
        let response = ApiError::new("req-1", "provider_error", "checkout failed").into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    // Shared by the checkout tests: a Stripe mock that always succeeds.
    pub(crate) async fn mock_stripe_ok(server: &MockServer, session_id: &str, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": session_id
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }
}
