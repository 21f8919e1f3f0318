//! Error types for the JIRA release plugin.

use thiserror::Error;

/// Main error type for plugin operations.
#[derive(Error, Debug)]
pub enum JiraPluginError {
    /// One or more required credentials are missing. The message enumerates
    /// every missing environment variable.
    #[error("{0}")]
    InvalidConfig(String),

    /// The credential probe against the tracker failed during verification.
    #[error("Failed to authenticate with JIRA: {0}")]
    Authentication(String),

    /// A tracker API call returned an HTTP error response.
    #[error("{0}")]
    Request(String),

    /// The caller-supplied issue pattern failed to compile.
    #[error("Invalid issue pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Transport-level failure with no HTTP response attached. Carries the
    /// underlying error's own message unmodified.
    #[error("{0}")]
    Network(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using JiraPluginError
pub type Result<T> = std::result::Result<T, JiraPluginError>;

impl JiraPluginError {
    /// Create a request error with a pre-formatted message
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Display text for log lines, falling back to "Unknown error" when the
    /// failure carries no message.
    pub fn message(&self) -> String {
        let msg = self.to_string();
        if msg.is_empty() {
            "Unknown error".to_string()
        } else {
            msg
        }
    }
}

// Transport failures without a response keep their own message so timeouts
// and DNS errors surface verbatim in log output.
impl From<reqwest::Error> for JiraPluginError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
