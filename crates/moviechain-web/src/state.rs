//! Application state.

use moviechain_graph::GraphClient;

/// Application state shared across handlers.
///
/// Only the store client lives here; traversal keeps no state between
/// requests, so concurrent handlers share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub graph: GraphClient,
}

impl AppState {
    pub fn new(graph: GraphClient) -> Self {
        Self { graph }
    }
}
