//! API Handlers
//!
//! HTTP request handlers for each posts endpoint. The `#[utoipa::path]`
//! annotations feed the generated OpenAPI document.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use super::extract::TitleBody;
use crate::error::{ApiError, Result};
use crate::models::{parse_leading_int, ListQuery, MessageResponse, TitleRequest};
use crate::store::{Post, PostStore};

/// Application state shared across all handlers.
///
/// Contains the post store wrapped in Arc<RwLock<>> for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe post store
    pub store: Arc<RwLock<PostStore>>,
}

impl AppState {
    /// Creates a new AppState with the given post store.
    pub fn new(store: PostStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// The store starts with the three seed posts.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(PostStore::seeded(config.id_strategy))
    }
}

/// Retrieve all posts
///
/// Handler for GET /api. Lists posts in insertion order, optionally
/// truncated to `limit`.
#[utoipa::path(
    get,
    path = "/api",
    tag = "posts",
    params(ListQuery),
    responses(
        (status = 200, description = "A list of posts", body = Vec<Post>)
    )
)]
pub async fn list_posts(
    State(state): State<AppState>,
    query: Option<Query<ListQuery>>,
) -> Json<Vec<Post>> {
    let limit = query.and_then(|Query(q)| q.effective_limit());

    let store = state.store.read().await;
    Json(store.list(limit).to_vec())
}

/// Retrieve a single post by ID
///
/// Handler for GET /api/:id. A miss answers 400.
#[utoipa::path(
    get,
    path = "/api/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "The ID of the post to retrieve")
    ),
    responses(
        (status = 200, description = "A single post", body = Post),
        (status = 400, description = "Post not found", body = MessageResponse)
    )
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Post>> {
    let store = state.store.read().await;
    parse_leading_int(&raw_id)
        .and_then(|id| store.get(id))
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            debug!("Lookup miss for post {}", raw_id);
            ApiError::lookup_miss(&raw_id)
        })
}

/// Create a new post
///
/// Handler for POST /api. Responds with the whole updated sequence.
#[utoipa::path(
    post,
    path = "/api",
    tag = "posts",
    request_body = TitleRequest,
    responses(
        (status = 201, description = "Post created successfully", body = Vec<Post>),
        (status = 400, description = "Invalid input", body = MessageResponse)
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    TitleBody(req): TitleBody,
) -> Result<(StatusCode, Json<Vec<Post>>)> {
    let mut store = state.store.write().await;
    let post = store.create(req.into_title())?;
    info!("Created post {}", post.id);

    Ok((StatusCode::CREATED, Json(store.posts().to_vec())))
}

/// Update an existing post
///
/// Handler for PUT /api/:id. The title is not checked, so a body without
/// one blanks it.
#[utoipa::path(
    put,
    path = "/api/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "The ID of the post to update")
    ),
    request_body = TitleRequest,
    responses(
        (status = 200, description = "Post updated successfully", body = Vec<Post>),
        (status = 404, description = "Post not found", body = MessageResponse)
    )
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    TitleBody(req): TitleBody,
) -> Result<Json<Vec<Post>>> {
    let id = parse_leading_int(&raw_id).ok_or_else(ApiError::mutation_miss)?;

    let mut store = state.store.write().await;
    store.update(id, req.into_title())?;
    info!("Updated post {}", id);

    Ok(Json(store.posts().to_vec()))
}

/// Delete a post
///
/// Handler for DELETE /api/:id. Responds with what is left.
#[utoipa::path(
    delete,
    path = "/api/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "The ID of the post to delete")
    ),
    responses(
        (status = 200, description = "Post deleted successfully", body = Vec<Post>),
        (status = 404, description = "Post not found", body = MessageResponse)
    )
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<Post>>> {
    let id = parse_leading_int(&raw_id).ok_or_else(ApiError::mutation_miss)?;

    let mut store = state.store.write().await;
    let removed = store.delete(id)?;
    info!("Deleted post {} ({} record(s))", id, removed);

    Ok(Json(store.posts().to_vec()))
}
