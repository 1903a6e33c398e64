use crate::config::Settings;
use crate::deep::Entry;
use crate::error::DeepFormError;

use super::serialize_deep_form;

/// Posts deep forms straight to a receiving server
#[derive(Clone)]
pub struct DeepFormClient {
    client: reqwest::Client,
    field_name: String,
    max_depth: usize,
}

impl DeepFormClient {
    pub fn new(client: reqwest::Client, settings: &Settings) -> Self {
        DeepFormClient {
            client,
            field_name: settings.field_name.clone(),
            max_depth: settings.max_depth,
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Build the POST carrying `entries` as one urlencoded deep form field
    pub fn request<I>(&self, url: &str, entries: I) -> Result<reqwest::Request, DeepFormError>
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        let payload = serialize_deep_form(entries, self.max_depth)?;
        Ok(self
            .client
            .post(url)
            .form(&[(self.field_name.as_str(), payload.as_str())])
            .build()?)
    }

    /// Submit `entries` to `url` and return the response body
    pub async fn submit<I>(&self, url: &str, entries: I) -> Result<String, DeepFormError>
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        let req = self.request(url, entries)?;
        tracing::info!(url, field = %self.field_name, "Submitting deep form");
        let resp = self.client.execute(req).await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::error!(url, status = status.as_u16(), "Deep form submission rejected");
            return Err(DeepFormError::Status(status.as_u16()));
        }
        Ok(resp.text().await?)
    }
}
