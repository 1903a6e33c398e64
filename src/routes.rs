use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::handlers::demo::{RECEIVE_PATH, RELAY_PATH};
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    let receiving_routes = Router::new()
        .route(RECEIVE_PATH, post(handlers::demo::receive_post))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            handlers::deep_form_middleware,
        ));

    Router::new()
        .route("/", get(handlers::demo::demo_form_get))
        .route(RELAY_PATH, post(handlers::demo::relay_post))
        .merge(receiving_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
