use crate::deep::Container;

/// Nested object decoded from an inbound deep form, stored in request extensions
#[derive(Clone, Debug, PartialEq)]
pub struct DeepFormData(pub Container);
