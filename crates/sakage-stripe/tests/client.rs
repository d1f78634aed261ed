//! Integration tests for `StripeClient` using wiremock HTTP mocks.

use sakage_stripe::{CheckoutSession, CustomerDetails, LineItem, SessionRequest, StripeClient, StripeError};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> StripeClient {
    StripeClient::with_base_url("sk_test_key", 30, base_url)
        .expect("client construction should not fail")
}

fn session_request() -> SessionRequest {
    SessionRequest {
        line_items: vec![
            LineItem {
                name: "BBQ Pork Sandwich".to_string(),
                unit_amount: 1499,
                quantity: 1,
            },
            LineItem {
                name: "Delivery Fee".to_string(),
                unit_amount: 799,
                quantity: 1,
            },
            LineItem {
                name: "Tip".to_string(),
                unit_amount: 300,
                quantity: 1,
            },
        ],
        success_url: "https://sakage.online/success".to_string(),
        cancel_url: "https://sakage.online/order".to_string(),
        allowed_countries: vec!["US".to_string()],
        customer: CustomerDetails {
            name: "Robert A".to_string(),
            email: "robert@example.com".to_string(),
            phone: "555-0101".to_string(),
            address: "4 Elm St, Columbia".to_string(),
            instructions: Some("leave at door".to_string()),
        },
        idempotency_key: None,
    }
}

#[tokio::test]
async fn create_checkout_session_returns_session_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .and(header("authorization", "Bearer sk_test_key"))
        .and(body_string_contains("mode=payment"))
        .and(body_string_contains(
            "customer_email=robert%40example.com",
        ))
        // line_items[0][price_data][unit_amount]=1499, form-encoded
        .and(body_string_contains(
            "line_items%5B0%5D%5Bprice_data%5D%5Bunit_amount%5D=1499",
        ))
        .and(body_string_contains(
            "line_items%5B2%5D%5Bprice_data%5D%5Bunit_amount%5D=300",
        ))
        .and(body_string_contains(
            "shipping_address_collection%5Ballowed_countries%5D%5B0%5D=US",
        ))
        .and(body_string_contains(
            "metadata%5Bdelivery_instructions%5D=leave+at+door",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cs_test_a1b2c3",
            "url": "https://checkout.stripe.com/c/pay/cs_test_a1b2c3"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let session: CheckoutSession = client
        .create_checkout_session(&session_request())
        .await
        .expect("session should be created");

    assert_eq!(session.id, "cs_test_a1b2c3");
    assert!(session.url.is_some());
}

#[tokio::test]
async fn idempotency_key_is_forwarded_as_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .and(header("idempotency-key", "order-token-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "cs_test_idem"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = session_request();
    request.idempotency_key = Some("order-token-42".to_string());

    let client = test_client(&server.uri());
    let session = client
        .create_checkout_session(&request)
        .await
        .expect("session should be created");
    assert_eq!(session.id, "cs_test_idem");
}

#[tokio::test]
async fn stripe_rejection_surfaces_api_error_with_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
            "error": {
                "type": "card_error",
                "message": "Your card was declined."
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .create_checkout_session(&session_request())
        .await
        .expect_err("402 should map to an API error");

    match err {
        StripeError::Api { status, message } => {
            assert_eq!(status, 402);
            assert_eq!(message, "Your card was declined.");
        }
        other => panic!("expected StripeError::Api, got: {other}"),
    }
}

#[tokio::test]
async fn malformed_success_body_surfaces_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .create_checkout_session(&session_request())
        .await
        .expect_err("garbage body should fail to parse");
    assert!(matches!(err, StripeError::Deserialize { .. }), "got: {err}");
}
