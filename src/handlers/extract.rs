use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::deep::Container;
use crate::models::DeepFormData;

/// Extractor for the nested object decoded by
/// [`deep_form_middleware`](super::middleware::deep_form_middleware).
///
/// Holds `None` when the request carried no deep form field.
#[derive(Debug, Clone)]
pub struct DeepForm(pub Option<Container>);

#[async_trait]
impl<S> FromRequestParts<S> for DeepForm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(DeepForm(
            parts.extensions.get::<DeepFormData>().map(|data| data.0.clone()),
        ))
    }
}
