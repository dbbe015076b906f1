use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, state::ApiState};

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))

        // Todo endpoints
        .route("/todos", get(handlers::todo::list_todos))
        .route(
            "/todos/:todo_id",
            get(handlers::todo::get_todo)
                .post(handlers::todo::create_todo)
                .put(handlers::todo::update_todo)
                .delete(handlers::todo::delete_todo),
        )

        // Add state
        .with_state(state)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
