//! Movie and actor domain models.

pub mod model;

pub use model::{Actor, Movie, MovieSummary};
