use axum::{extract::State, Extension, Json};
use sakage_core::{MenuItem, Money};
use sakage_suggest::SuggestError;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SuggestionRequest {
    /// Free-text craving, e.g. "juicy steak sandwich".
    craving: String,
    #[serde(default)]
    dietary: Option<String>,
    /// Optional spending cap; accepts `15`, `15.00`, or `"$15.00"`.
    #[serde(default)]
    budget: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub(super) struct SuggestionData {
    items: Vec<SuggestedItem>,
    /// Soft no-match note ("nothing fits within $10.00 ...") when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct SuggestedItem {
    #[serde(flatten)]
    item: MenuItem,
    score: u32,
}

/// Ranks the catalog against a craving; an empty result is a soft state,
/// not an error, unless the budget itself was invalid.
pub(super) async fn create_suggestions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<ApiResponse<SuggestionData>>, ApiError> {
    let budget = match &request.budget {
        None => None,
        Some(raw) => Some(parse_amount(raw, "budget").map_err(|message| {
            ApiError::new(req_id.0.clone(), "validation_error", message)
        })?),
    };

    let meta = ResponseMeta::new(req_id.0.clone());
    match sakage_suggest::suggest(
        &request.craving,
        budget,
        request.dietary.as_deref(),
        &state.catalog,
    ) {
        Ok(suggestions) => Ok(Json(ApiResponse {
            data: SuggestionData {
                items: suggestions
                    .into_iter()
                    .map(|s| SuggestedItem {
                        item: s.item,
                        score: s.score,
                    })
                    .collect(),
                note: None,
            },
            meta,
        })),
        // No affordable match: prompt the customer to loosen constraints.
        Err(err @ SuggestError::BudgetShortfall(_)) => Ok(Json(ApiResponse {
            data: SuggestionData {
                items: Vec::new(),
                note: Some(err.to_string()),
            },
            meta,
        })),
        Err(err @ SuggestError::BudgetBelowMinimum { .. }) => Err(ApiError::new(
            req_id.0,
            "validation_error",
            err.to_string(),
        )),
    }
}

/// Parses a JSON string-or-number into [`Money`], with a field-specific
/// message on failure. Amounts are never coerced silently.
pub(super) fn parse_amount(value: &serde_json::Value, field: &str) -> Result<Money, String> {
    match value {
        serde_json::Value::Number(n) => Money::parse(&n.to_string()),
        serde_json::Value::String(s) => Money::parse(s),
        other => return Err(format!("invalid {field}: {other}")),
    }
    .map_err(|e| format!("invalid {field}: {e}"))
}
