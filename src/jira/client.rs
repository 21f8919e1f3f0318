//! JIRA REST client built on reqwest with basic auth.
use async_trait::async_trait;
use base64::{Engine, prelude::BASE64_STANDARD};
use reqwest::{
    Client, StatusCode, Url,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    config::JiraConfig,
    error::{JiraPluginError, Result},
    jira::{traits::IssueTracker, types::CommentRequest},
};

/// Client for the JIRA v3 REST API using reqwest with basic auth derived
/// from the configured email and token.
pub struct JiraClient {
    base_url: Url,
    client: Client,
}

impl JiraClient {
    /// Create a client rooted at `https://{host}/rest/api/3/`. The auth
    /// header and JSON content headers are built once and applied to every
    /// request.
    pub fn new(config: &JiraConfig) -> Result<Self> {
        let base_url =
            Url::parse(&format!("https://{}/rest/api/3/", config.host))?;
        Self::with_base_url(config, base_url)
    }

    /// Create a client against an explicit base URL. Used by tests to point
    /// at a local mock server.
    pub(crate) fn with_base_url(
        config: &JiraConfig,
        base_url: Url,
    ) -> Result<Self> {
        let credentials = BASE64_STANDARD.encode(format!(
            "{}:{}",
            config.email,
            config.token.expose_secret()
        ));

        let mut auth = HeaderValue::from_str(&format!("Basic {credentials}"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { base_url, client })
    }
}

/// Status line in the form "404 Not Found", matching what the tracker's
/// HTTP layer reports.
fn status_line(status: StatusCode) -> String {
    format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
}

#[async_trait]
impl IssueTracker for JiraClient {
    async fn get_server_info(&self) -> Result<serde_json::Value> {
        let url = self.base_url.join("serverInfo")?;
        let request = self.client.get(url).build()?;
        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            return Err(JiraPluginError::request(format!(
                "Failed to get server info: {}",
                status_line(response.status())
            )));
        }

        Ok(response.json().await?)
    }

    async fn get_issue(&self, issue_key: &str) -> Result<serde_json::Value> {
        let url = self.base_url.join(&format!("issue/{issue_key}"))?;
        let request = self.client.get(url).build()?;
        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            return Err(JiraPluginError::request(format!(
                "Failed to get issue {issue_key}: {}",
                status_line(response.status())
            )));
        }

        Ok(response.json().await?)
    }

    async fn add_comment(&self, issue_key: &str, comment: &str) -> Result<()> {
        let url = self.base_url.join(&format!("issue/{issue_key}/comment"))?;
        let request = self
            .client
            .post(url)
            .json(&CommentRequest::from_text(comment))
            .build()?;
        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            return Err(JiraPluginError::request(format!(
                "Failed to add comment to {issue_key}: {}",
                status_line(response.status())
            )));
        }

        Ok(())
    }
}
