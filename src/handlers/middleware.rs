use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures_util::StreamExt;
use thiserror::Error;

use crate::deep::Container;
use crate::error::DeepFormError;
use crate::models::{AppState, DeepFormData};
use crate::utils::parse_urlencoded_entries;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Find the deep form field in an urlencoded body and decode its nested object.
///
/// Returns `Ok(None)` when the field is absent. If the field is repeated the
/// first occurrence wins.
pub fn parse_deep_form_body(body: &[u8], field_name: &str) -> Result<Option<Container>, DeepFormError> {
    let entries = parse_urlencoded_entries(body);
    match entries.into_iter().find(|e| e.key == field_name) {
        Some(entry) => Ok(Some(serde_json::from_str(&entry.value)?)),
        None => Ok(None),
    }
}

fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
        .unwrap_or(false)
}

#[derive(Debug, Error)]
enum BodyReadError {
    #[error("Request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Failed to read request body: {0}")]
    Read(#[from] axum::Error),
}

impl IntoResponse for BodyReadError {
    fn into_response(self) -> Response {
        match &self {
            BodyReadError::TooLarge { limit } => {
                tracing::warn!(limit, "Rejecting oversized form body");
                (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response()
            }
            BodyReadError::Read(e) => {
                tracing::warn!(%e, "Failed to read form body");
                (StatusCode::BAD_REQUEST, "Failed to read request body").into_response()
            }
        }
    }
}

fn declared_length(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Buffer at most `limit` bytes of `body`.
///
/// A body that grows past the limit is a [`BodyReadError::TooLarge`], while a
/// stream that fails midway is a [`BodyReadError::Read`].
async fn read_body(headers: &HeaderMap, body: Body, limit: usize) -> Result<Bytes, BodyReadError> {
    if declared_length(headers).is_some_and(|len| len > limit) {
        return Err(BodyReadError::TooLarge { limit });
    }
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > limit {
            return Err(BodyReadError::TooLarge { limit });
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(Bytes::from(buf))
}

/// Decodes the deep form field of urlencoded requests into [`DeepFormData`].
///
/// Requests without the field, or with another content type, pass through
/// untouched. The body is buffered and handed on unchanged.
pub async fn deep_form_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !is_urlencoded(request.headers()) {
        return next.run(request).await;
    }
    let (parts, body) = request.into_parts();
    let bytes = match read_body(&parts.headers, body, state.settings.body_limit).await {
        Ok(b) => b,
        Err(e) => return e.into_response(),
    };
    let parsed = parse_deep_form_body(&bytes, state.field_name());
    let mut request = Request::from_parts(parts, Body::from(bytes));
    match parsed {
        Ok(Some(obj)) => {
            tracing::debug!(fields = obj.len(), "Attached deep form data");
            request.extensions_mut().insert(DeepFormData(obj));
            next.run(request).await
        }
        Ok(None) => next.run(request).await,
        Err(e) => {
            tracing::warn!(%e, "Rejecting malformed deep form payload");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
