//! API Routes
//!
//! Configures the Axum router with the posts endpoints and documentation.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::docs::swagger_ui;
use super::handlers::{
    create_post, delete_post, get_post, list_posts, update_post, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api` - List posts, optionally limited
/// - `POST /api` - Create a post
/// - `GET /api/:id` - Retrieve a post
/// - `PUT /api/:id` - Update a post's title
/// - `DELETE /api/:id` - Delete a post
/// - `GET /api-docs` - Swagger UI
/// - `GET /api-docs.json` - OpenAPI document
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(list_posts).post(create_post))
        .route(
            "/api/:id",
            get(get_post).put(update_post).delete(delete_post),
        )
        .merge(swagger_ui())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
