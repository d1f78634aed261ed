use axum::{extract::State, Extension, Json};
use sakage_core::MenuCategory;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

/// Returns the full catalog, categories in menu order.
///
/// This is the same catalog checkout prices against, so the storefront can
/// never display a price the session builder disagrees with.
pub(super) async fn get_menu(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<MenuCategory>>> {
    Json(ApiResponse {
        data: state.catalog.categories().to_vec(),
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::tests::{body_json, test_app};

    #[tokio::test]
    async fn menu_lists_categories_with_formatted_prices() {
        let app = test_app("http://127.0.0.1:9");
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/menu")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let categories = json["data"].as_array().expect("data array");
        assert_eq!(categories.len(), 3);
        assert_eq!(
            categories[1]["items"][0]["name"].as_str(),
            Some("BBQ Pork Sandwich")
        );
        // Prices stay formatted strings on the wire; parsing happens
        // server-side only.
        assert_eq!(categories[1]["items"][0]["price"].as_str(), Some("$14.99"));
    }
}
