//! Path records produced by a traversal query.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One entity along a traversal path.
///
/// Serialized untagged: clients tell the two kinds apart by the
/// presence of a `title` (movie) vs a `name` (actor) field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathEntity {
    Movie {
        id: i64,
        title: String,
        overview: Option<String>,
        release_date: Option<String>,
    },
    Actor {
        id: String,
        name: String,
    },
}

impl PathEntity {
    pub fn is_movie(&self) -> bool {
        matches!(self, Self::Movie { .. })
    }

    /// Stable identifier used for path deduplication. Movie ids and
    /// actor keys live in separate namespaces, hence the prefix.
    pub fn key(&self) -> String {
        match self {
            Self::Movie { id, .. } => format!("m:{id}"),
            Self::Actor { id, .. } => format!("a:{id}"),
        }
    }
}

/// An ordered, alternating movie/actor sequence anchored on a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathRecord {
    pub entities: Vec<PathEntity>,
}

impl PathRecord {
    pub fn new(entities: Vec<PathEntity>) -> Self {
        Self { entities }
    }

    /// Number of relationship hops, i.e. edges traversed.
    pub fn hops(&self) -> usize {
        self.entities.len().saturating_sub(1)
    }

    /// True when the path starts with a movie and strictly alternates
    /// between movies and actors.
    pub fn alternates(&self) -> bool {
        self.entities
            .iter()
            .enumerate()
            .all(|(i, e)| e.is_movie() == (i % 2 == 0))
    }

    fn key(&self) -> Vec<String> {
        self.entities.iter().map(PathEntity::key).collect()
    }
}

/// Drop paths whose full ordered identifier sequence was already seen.
///
/// The store may hand back the same logical path more than once (one
/// row per matching anchor pattern); order of first appearance wins.
pub fn dedup_paths(paths: Vec<PathRecord>) -> Vec<PathRecord> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|p| seen.insert(p.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str) -> PathEntity {
        PathEntity::Movie {
            id,
            title: title.to_string(),
            overview: None,
            release_date: None,
        }
    }

    fn actor(name: &str) -> PathEntity {
        PathEntity::Actor {
            id: name.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn hop_count_is_edges_not_entities() {
        let path = PathRecord::new(vec![movie(1, "A"), actor("X"), movie(2, "B")]);
        assert_eq!(path.hops(), 2);
        assert_eq!(PathRecord::new(vec![movie(1, "A")]).hops(), 0);
    }

    #[test]
    fn alternation_requires_movie_first() {
        let good = PathRecord::new(vec![movie(1, "A"), actor("X"), movie(2, "B"), actor("Y")]);
        assert!(good.alternates());

        let actor_first = PathRecord::new(vec![actor("X"), movie(1, "A")]);
        assert!(!actor_first.alternates());

        let doubled = PathRecord::new(vec![movie(1, "A"), movie(2, "B")]);
        assert!(!doubled.alternates());
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let a = PathRecord::new(vec![movie(1, "A"), actor("X")]);
        let b = PathRecord::new(vec![movie(1, "A"), actor("X")]);
        let c = PathRecord::new(vec![movie(1, "A"), actor("Y")]);

        let deduped = dedup_paths(vec![a.clone(), b, c.clone()]);
        assert_eq!(deduped, vec![a, c]);
    }

    #[test]
    fn entities_serialize_by_discriminating_field() {
        let json = serde_json::to_value(movie(7, "Inception")).unwrap();
        assert_eq!(json["title"], "Inception");
        assert!(json.get("name").is_none());

        let json = serde_json::to_value(actor("Elliot Page")).unwrap();
        assert_eq!(json["name"], "Elliot Page");
        assert!(json.get("title").is_none());
    }
}
