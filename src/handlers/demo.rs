use axum::{
    body::Bytes,
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::models::AppState;
use crate::submission::{FormSnapshot, RelayForm};
use crate::templates::DemoFormTemplate;
use crate::utils::parse_urlencoded_entries;

use super::extract::DeepForm;
use super::helpers::{error_response, render_template};

pub const RELAY_PATH: &str = "/relay";
pub const RECEIVE_PATH: &str = "/receive";

pub async fn demo_form_get(State(state): State<AppState>) -> Response {
    render_template(DemoFormTemplate {
        action: RELAY_PATH,
        field_name: state.field_name(),
    })
}

/// Capture a plain form post and answer with a page that re-submits it as a deep form
pub async fn relay_post(State(state): State<AppState>, body: Bytes) -> Response {
    let snapshot = FormSnapshot {
        attributes: vec![
            ("action".to_string(), RECEIVE_PATH.to_string()),
            ("method".to_string(), "post".to_string()),
        ],
        entries: parse_urlencoded_entries(&body),
    };
    let fields = snapshot.entries.len();
    let page = RelayForm::from_snapshot(snapshot, &state.settings).and_then(|relay| relay.render());
    match page {
        Ok(html) => {
            tracing::info!(fields, "Relaying form as deep form");
            Html(html).into_response()
        }
        Err(e) => error_response(&e),
    }
}

pub async fn receive_post(DeepForm(data): DeepForm) -> impl IntoResponse {
    match &data {
        Some(obj) => tracing::info!(fields = obj.len(), "Received deep form"),
        None => tracing::info!("Received request without deep form data"),
    }
    Json(data)
}
