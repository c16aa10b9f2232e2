// API module - HTTP endpoints

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod cards;
pub mod health;
pub mod middleware;

use middleware::state::AppState;

/// Builds the full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(cards::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
