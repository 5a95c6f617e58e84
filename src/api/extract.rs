//! Body Extraction
//!
//! Reads a `TitleRequest` from either a JSON or an URL-encoded form body.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::models::TitleRequest;

/// Body of create and update requests.
///
/// A body without a recognised content type, or an empty JSON body, is read
/// as a request with no title. Malformed bodies are reported as
/// `ApiError::InvalidRequest` so the client gets the usual `{message}` shape.
#[derive(Debug, Clone, Default)]
pub struct TitleBody(pub TitleRequest);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let mime = content_type.split(';').next().unwrap_or_default().trim();

    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

/// Only a JSON object can carry a title; arrays and scalars read as empty.
fn title_from_json(value: Value) -> Result<TitleBody, ApiError> {
    if !value.is_object() {
        return Ok(TitleBody::default());
    }
    serde_json::from_value(value).map(TitleBody).map_err(|e| {
        debug!("Rejected JSON body: {}", e);
        ApiError::InvalidRequest(format!("invalid JSON body: {}", e))
    })
}

#[async_trait]
impl<S> FromRequest<S> for TitleBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(TitleBody::default());
                }
                let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
                    debug!("Rejected JSON body: {}", e);
                    ApiError::InvalidRequest(format!("invalid JSON body: {}", e))
                })?;
                title_from_json(value)
            }
            BodyKind::Form => Form::<TitleRequest>::from_request(req, state)
                .await
                .map(|Form(body)| TitleBody(body))
                .map_err(|e| {
                    debug!("Rejected form body: {}", e);
                    ApiError::InvalidRequest(e.body_text())
                }),
            BodyKind::Other => Ok(TitleBody::default()),
        }
    }
}
