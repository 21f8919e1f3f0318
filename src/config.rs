//! Environment-backed tracker credentials and plugin options.
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::env;

/// Environment variable holding the tracker host, e.g. "myorg.atlassian.net".
pub const JIRA_HOST_VAR: &str = "JIRA_HOST";
/// Environment variable holding the account email for basic auth.
pub const JIRA_EMAIL_VAR: &str = "JIRA_EMAIL";
/// Environment variable holding the API token for basic auth.
pub const JIRA_TOKEN_VAR: &str = "JIRA_TOKEN";
/// Optional environment variable overriding the package display name.
pub const PACKAGE_NAME_VAR: &str = "SEMANTIC_RELEASE_PACKAGE";
/// Display name used in comments when no override is set.
pub const DEFAULT_PACKAGE_NAME: &str = "Package";

/// Tracker connection configuration resolved from the process environment
/// once per entry-point invocation and threaded as a parameter from there.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    /// Tracker host, without scheme.
    pub host: String,
    /// Account email paired with the API token.
    pub email: String,
    /// API token for basic auth.
    pub token: SecretString,
}

impl JiraConfig {
    /// Read tracker credentials from the process environment. Values are
    /// read at call time so the host can rotate them between invocations.
    /// Missing variables become empty strings and are caught by
    /// [`JiraConfig::validate`].
    pub fn from_env() -> Self {
        Self {
            host: env::var(JIRA_HOST_VAR).unwrap_or_default(),
            email: env::var(JIRA_EMAIL_VAR).unwrap_or_default(),
            token: SecretString::from(
                env::var(JIRA_TOKEN_VAR).unwrap_or_default(),
            ),
        }
    }

    /// Returns one message per missing credential, in fixed order: host,
    /// then email, then token. An empty vec means the config is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = vec![];

        if self.host.is_empty() {
            errors.push(format!(
                "{JIRA_HOST_VAR} environment variable is required"
            ));
        }

        if self.email.is_empty() {
            errors.push(format!(
                "{JIRA_EMAIL_VAR} environment variable is required"
            ));
        }

        if self.token.expose_secret().is_empty() {
            errors.push(format!(
                "{JIRA_TOKEN_VAR} environment variable is required"
            ));
        }

        errors
    }
}

/// Plugin options supplied by the release pipeline configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfig {
    /// Comment template with `{{token}}` placeholders. Defaults to
    /// [`crate::template::DEFAULT_COMMENT_TEMPLATE`].
    pub comment_template: Option<String>,
    /// Custom issue key pattern, used verbatim as a regular expression.
    pub issue_pattern: Option<String>,
}

/// Resolve the package display name used in rendered comments. Unset or
/// empty values fall back to "Package".
pub fn package_name_from_env() -> String {
    env::var(PACKAGE_NAME_VAR)
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PACKAGE_NAME.to_string())
}
