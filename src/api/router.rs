use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::SharedState;

/// Build the Axum router with all routes and middleware.
pub fn create_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check (outside /api prefix)
        .route("/health", get(handlers::health))
        // The one shared game
        .route("/api/game", get(handlers::get_game))
        .route("/api/game/new", post(handlers::new_game))
        // Query endpoints
        .route("/api/game/moveable", get(handlers::moveable))
        // Moves: GET lists one square's options, POST plays a move
        .route(
            "/api/game/moves",
            get(handlers::moves).post(handlers::make_move),
        )
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
