//! Path traversal route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use moviechain_core::{PathRecord, DEFAULT_MAX_HOPS};

use crate::routes::error_response;
use crate::state::AppState;

const DEFAULT_RESULT_LIMIT: usize = 25;

#[derive(Deserialize)]
pub struct MoviePathsParams {
    pub start_name: String,
    pub path_size: Option<i64>,
    pub limit: Option<usize>,
}

/// `GET /api/movies?start_name=<title>&path_size=<hops>&limit=<n>`
///
/// Returns an array of paths, each an ordered array of entity objects;
/// movies carry a `title`, actors a `name`. A title with no matching
/// movie yields `200 []`.
pub async fn get_movie_paths(
    State(state): State<AppState>,
    Query(params): Query<MoviePathsParams>,
) -> Result<Json<Vec<PathRecord>>, (StatusCode, String)> {
    if params.start_name.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "start_name must not be empty".to_string(),
        ));
    }

    let path_size = params.path_size.unwrap_or(DEFAULT_MAX_HOPS);
    let limit = params.limit.unwrap_or(DEFAULT_RESULT_LIMIT);

    let paths = moviechain_graph::find_paths(&state.graph, &params.start_name, path_size, Some(limit))
        .await
        .map_err(error_response)?;

    Ok(Json(paths))
}
