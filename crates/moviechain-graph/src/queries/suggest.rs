//! Title suggestion lookup for autocomplete.

use neo4rs::Query;

use moviechain_core::{ChainError, ChainResult, MovieSummary};

use crate::GraphClient;

/// Default number of suggestions returned to the client.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 15;

/// Case-insensitive substring lookup over movie titles.
///
/// Most popular titles first, ties broken alphabetically. No match is
/// an empty collection, not an error.
pub async fn suggest_titles(
    client: &GraphClient,
    fragment: &str,
    limit: usize,
) -> ChainResult<Vec<MovieSummary>> {
    let query = Query::new(
        "MATCH (m:Movie)
         WHERE toLower(m.title) CONTAINS toLower($fragment)
         RETURN m.id AS id, m.title AS title,
                m.overview AS overview, m.release_date AS release_date
         ORDER BY m.popularity DESC, m.title ASC
         LIMIT $limit"
            .to_string(),
    )
    .param("fragment", fragment)
    .param("limit", limit as i64);

    let rows = client.query_with_retry(query).await?;

    let mut suggestions = Vec::with_capacity(rows.len());
    for row in rows {
        let id: i64 = row
            .get("id")
            .map_err(|e| ChainError::Query(format!("movie row without id: {e:?}")))?;
        let title: String = row
            .get("title")
            .map_err(|e| ChainError::Query(format!("movie row without title: {e:?}")))?;
        suggestions.push(MovieSummary {
            id,
            title,
            overview: row.get("overview").ok(),
            release_date: row.get("release_date").ok(),
        });
    }

    Ok(suggestions)
}
