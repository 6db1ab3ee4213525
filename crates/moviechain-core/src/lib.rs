//! # MovieChain Core
//!
//! Domain types shared by every MovieChain crate: movie and actor
//! models, traversal path records, the central error taxonomy, and an
//! in-memory bounded traversal engine that works without a graph store.

pub mod error;
pub mod movie;
pub mod path;

pub use error::{ChainError, ChainResult};
pub use movie::model::{Actor, Movie, MovieSummary};
pub use path::model::{dedup_paths, PathEntity, PathRecord};
pub use path::{local::LocalGraph, validate_max_hops, DEFAULT_MAX_HOPS, MAX_HOPS_CEILING};
