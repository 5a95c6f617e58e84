//! API Module
//!
//! HTTP handlers, routing and documentation for the posts REST API.
//!
//! # Endpoints
//! - `GET /api` - List posts (`?limit=N` keeps the first N)
//! - `POST /api` - Create a post
//! - `GET /api/:id` - Retrieve a post by id
//! - `PUT /api/:id` - Update a post's title
//! - `DELETE /api/:id` - Delete a post
//! - `GET /api-docs` - Interactive documentation

pub mod docs;
pub mod extract;
pub mod handlers;
pub mod routes;

pub use docs::ApiDoc;
pub use handlers::*;
pub use routes::create_router;
