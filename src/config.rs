use std::env;
use std::path::Path;

use crate::deep::DEFAULT_MAX_DEPTH;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_FIELD_NAME: &str = "deepFormData";
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;
pub const DEFAULT_TARGET_URL: &str = "";
pub const DEFAULT_KEY_DEPTH: usize = DEFAULT_MAX_DEPTH;

/// Settings shared by the server and the submission client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub field_name: String,
    pub body_limit: usize,
    pub target_url: String,
    /// Maximum number of '.'-separated segments accepted in one field name
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            field_name: DEFAULT_FIELD_NAME.to_string(),
            body_limit: DEFAULT_BODY_LIMIT,
            target_url: DEFAULT_TARGET_URL.to_string(),
            max_depth: DEFAULT_KEY_DEPTH,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            field_name: get_field_name(),
            body_limit: get_body_limit(),
            target_url: get_target_url(),
            max_depth: get_max_depth(),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Failed to load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_host() -> String {
    env::var("DEEPFORM_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
}

pub fn get_port() -> u16 {
    env::var("DEEPFORM_PORT")
        .ok()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn get_field_name() -> String {
    sanitize_field_name(&env::var("DEEPFORM_FIELD_NAME").unwrap_or_default())
}

pub fn get_body_limit() -> usize {
    env::var("DEEPFORM_BODY_LIMIT")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_BODY_LIMIT)
}

pub fn get_max_depth() -> usize {
    env::var("DEEPFORM_MAX_DEPTH")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|depth| *depth > 0)
        .unwrap_or(DEFAULT_KEY_DEPTH)
}

pub fn get_target_url() -> String {
    env::var("DEEPFORM_TARGET_URL")
        .map(|u| u.trim().to_string())
        .unwrap_or_else(|_| DEFAULT_TARGET_URL.to_string())
}

pub fn sanitize_field_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_FIELD_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
