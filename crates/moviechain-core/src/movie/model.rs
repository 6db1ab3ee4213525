//! Graph entity models.
//!
//! Movies and actors are created by the ingestion pipeline and never
//! mutated by the traversal side; these structs mirror the node
//! properties stored in the graph.

use serde::{Deserialize, Serialize};

/// A movie node. `id` is the stable dataset identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// An actor node.
///
/// The whitespace-trimmed name doubles as the node key, so two distinct
/// people with identical credited names collapse into one node. The
/// source dataset carries no separate person identifier to disambiguate
/// them; this is a known limitation, not a bug to paper over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
}

impl Actor {
    /// Normalize a credited name into the node key.
    pub fn key(name: &str) -> String {
        name.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// The projection returned by the title suggestion lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
}
