use crate::config::Settings;
use crate::deep::Entry;
use crate::error::DeepFormError;
use crate::templates::RelayTemplate;

use super::serialize_deep_form;

/// A form as captured from the page: its attributes and its fields in order
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub attributes: Vec<(String, String)>,
    pub entries: Vec<Entry>,
}

/// Replacement form carrying the whole nested object in one hidden field
#[derive(Debug, Clone)]
pub struct RelayForm {
    pub attributes: Vec<(String, String)>,
    pub field_name: String,
    pub payload: String,
}

/// Attributes that identify or style the original form are not carried over
const SKIPPED_ATTRIBUTES: &[&str] = &["id", "class"];

pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}

impl RelayForm {
    /// Fold the snapshot's fields into the payload and keep the attributes worth carrying over
    pub fn from_snapshot(snapshot: FormSnapshot, settings: &Settings) -> Result<Self, DeepFormError> {
        let payload = serialize_deep_form(snapshot.entries, settings.max_depth)?;
        let attributes = snapshot
            .attributes
            .into_iter()
            .filter(|(name, _)| {
                !SKIPPED_ATTRIBUTES
                    .iter()
                    .any(|skipped| name.eq_ignore_ascii_case(skipped))
            })
            .filter(|(name, _)| {
                let valid = is_valid_attribute_name(name);
                if !valid {
                    tracing::warn!(attribute = %name, "Dropping form attribute with invalid name");
                }
                valid
            })
            .collect();
        Ok(RelayForm {
            attributes,
            field_name: settings.field_name.clone(),
            payload,
        })
    }

    /// Render a page that submits the relay form as soon as it loads
    pub fn render(&self) -> Result<String, DeepFormError> {
        let page = RelayTemplate {
            attributes: &self.attributes,
            field_name: &self.field_name,
            payload: &self.payload,
        };
        Ok(askama::Template::render(&page)?)
    }
}
