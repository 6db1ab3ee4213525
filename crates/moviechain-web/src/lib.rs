//! # MovieChain Web
//!
//! Axum-based API surface over the path traversal engine and the title
//! suggestion lookup.

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use moviechain_graph::GraphClient;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/movies", get(routes::movies::get_movie_paths))
        .route("/suggestions", get(routes::suggestions::get_suggestions))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the web server.
pub async fn run_server(graph: GraphClient, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(graph);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("API server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
