//! # MovieChain Graph
//!
//! Neo4j access layer for MovieChain.
//!
//! Provides the connection client, schema constraints, the bounded
//! path traversal engine and the title suggestion lookup.

pub mod client;
pub mod queries;
pub mod schema;

pub use client::{classify_store_error, GraphClient, GraphConfig, GraphCounts};
pub use queries::paths::find_paths;
pub use queries::suggest::{suggest_titles, DEFAULT_SUGGESTION_LIMIT};
