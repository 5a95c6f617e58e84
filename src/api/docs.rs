//! API Documentation
//!
//! Builds the OpenAPI document from the handler annotations and mounts
//! Swagger UI on top of it.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers;
use crate::models::{MessageResponse, TitleRequest};
use crate::store::Post;

/// Path of the interactive documentation.
pub const DOCS_PATH: &str = "/api-docs";

/// Path of the raw OpenAPI JSON document.
pub const OPENAPI_PATH: &str = "/api-docs.json";

/// OpenAPI description of every posts endpoint.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Posts API",
        version = "1.0.0",
        description = "API for managing posts"
    ),
    paths(
        handlers::list_posts,
        handlers::get_post,
        handlers::create_post,
        handlers::update_post,
        handlers::delete_post,
    ),
    components(schemas(Post, TitleRequest, MessageResponse)),
    tags((name = "posts", description = "Post management"))
)]
pub struct ApiDoc;

/// Swagger UI at `DOCS_PATH`, backed by the document at `OPENAPI_PATH`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}
