//! Title suggestion route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use moviechain_core::MovieSummary;
use moviechain_graph::DEFAULT_SUGGESTION_LIMIT;

use crate::routes::error_response;
use crate::state::AppState;

const MIN_FRAGMENT_LEN: usize = 2;

#[derive(Deserialize)]
pub struct SuggestionParams {
    pub query: String,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<MovieSummary>,
}

/// `GET /api/suggestions?query=<fragment>&limit=<n>`
///
/// Case-insensitive substring match over titles; no match is `200`
/// with an empty list.
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> Result<Json<SuggestionsResponse>, (StatusCode, String)> {
    let fragment = params.query.trim();
    if fragment.chars().count() < MIN_FRAGMENT_LEN {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("query must be at least {MIN_FRAGMENT_LEN} characters"),
        ));
    }

    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT);
    let suggestions = moviechain_graph::suggest_titles(&state.graph, fragment, limit)
        .await
        .map_err(error_response)?;

    Ok(Json(SuggestionsResponse { suggestions }))
}
