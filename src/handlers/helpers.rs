use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::DeepFormError;
use crate::templates::MessageTemplate;

pub fn plain_html<S: AsRef<str>>(status: StatusCode, s: S) -> Response {
    let page = MessageTemplate { message: s.as_ref() };
    match askama::Template::render(&page) {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub fn error_response(e: &DeepFormError) -> Response {
    match e {
        DeepFormError::Validation(_) | DeepFormError::Parse(_) => {
            tracing::warn!(%e, "Rejected form submission");
            plain_html(StatusCode::BAD_REQUEST, e.to_string())
        }
        _ => {
            tracing::error!(%e, "Form handling failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
