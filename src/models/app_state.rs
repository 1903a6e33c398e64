use std::sync::Arc;

use crate::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        AppState {
            settings: Arc::new(settings),
        }
    }

    pub fn field_name(&self) -> &str {
        &self.settings.field_name
    }
}
