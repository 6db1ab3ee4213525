//! Route handlers.

pub mod movies;
pub mod suggestions;

use axum::http::StatusCode;

use moviechain_core::ChainError;

/// Map the error taxonomy onto HTTP statuses.
///
/// An unknown title never reaches here — it is an empty 200, not a
/// failure. Unreachable-store errors get 502 so clients can tell a
/// down backend apart from a rejected request.
pub(crate) fn error_response(err: ChainError) -> (StatusCode, String) {
    let status = match &err {
        ChainError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        ChainError::Connection(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_distinct_statuses() {
        let (status, _) = error_response(ChainError::InvalidArgument("path_size".into()));
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = error_response(ChainError::Connection("refused".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = error_response(ChainError::Query("rejected".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
