//! Bounded path traversal from an anchor movie.
//!
//! Delegates the graph walk to the store's variable-length match and
//! shapes the returned paths into entity records. Every movie whose
//! title matches the anchor exactly contributes its own path set; the
//! union is deduplicated before returning.

use neo4rs::Query;

use moviechain_core::{
    dedup_paths, validate_max_hops, ChainError, ChainResult, PathEntity, PathRecord,
};

use crate::GraphClient;

/// Query text for a validated hop bound.
///
/// Cypher does not accept the bounds of a variable-length pattern as a
/// parameter, so the validated integer is written into the pattern.
/// The title is always bound as `$title` — caller input never reaches
/// the query text itself.
fn paths_query_text(hops: u32) -> String {
    format!(
        "MATCH path = (start:Movie {{title: $title}})-[:ACTED_IN*1..{hops}]-()
         RETURN DISTINCT path"
    )
}

/// Find all distinct paths of 1..=`max_hops` relationship hops from
/// every movie titled exactly `title`.
///
/// Title matching is case-sensitive. An unknown title yields an empty
/// collection; store failures propagate as connection/query errors and
/// are never folded into an empty result. The store's variable-length
/// match already refuses to walk a relationship twice within one path,
/// which is exactly the edge-level cycle rule the path records promise.
pub async fn find_paths(
    client: &GraphClient,
    title: &str,
    max_hops: i64,
    limit: Option<usize>,
) -> ChainResult<Vec<PathRecord>> {
    let hops = validate_max_hops(max_hops)?;

    let query = Query::new(paths_query_text(hops)).param("title", title);
    let rows = client.query_with_retry(query).await?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let path: neo4rs::Path = row
            .get("path")
            .map_err(|e| ChainError::Query(format!("malformed path row: {e:?}")))?;
        records.push(shape_path(&path)?);
    }

    let mut paths = dedup_paths(records);
    if let Some(cap) = limit {
        paths.truncate(cap);
    }
    Ok(paths)
}

/// Project a store path into an ordered entity sequence.
///
/// Relationship objects carry nothing the client needs and are dropped;
/// only the alternating node sequence survives.
fn shape_path(path: &neo4rs::Path) -> ChainResult<PathRecord> {
    let mut entities = Vec::new();

    for node in path.nodes() {
        let labels = node.labels();
        if labels.iter().any(|l| *l == "Movie") {
            let id: i64 = node
                .get("id")
                .map_err(|e| ChainError::Query(format!("movie node without id: {e:?}")))?;
            let title: String = node
                .get("title")
                .map_err(|e| ChainError::Query(format!("movie node without title: {e:?}")))?;
            entities.push(PathEntity::Movie {
                id,
                title,
                overview: node.get("overview").ok(),
                release_date: node.get("release_date").ok(),
            });
        } else if labels.iter().any(|l| *l == "Actor") {
            let name: String = node
                .get("name")
                .map_err(|e| ChainError::Query(format!("actor node without name: {e:?}")))?;
            entities.push(PathEntity::Actor {
                id: name.clone(),
                name,
            });
        } else {
            return Err(ChainError::Query(format!(
                "unexpected node labels in path: {labels:?}"
            )));
        }
    }

    Ok(PathRecord::new(entities))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hop_bound_is_written_into_the_pattern() {
        let text = paths_query_text(3);
        assert!(text.contains("[:ACTED_IN*1..3]"));

        let text = paths_query_text(1);
        assert!(text.contains("[:ACTED_IN*1..1]"));
    }

    #[test]
    fn title_stays_a_parameter() {
        // The anchor title must never be spliced into the query text.
        let text = paths_query_text(3);
        assert!(text.contains("{title: $title}"));
    }
}
