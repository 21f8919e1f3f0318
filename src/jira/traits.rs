//! Trait abstracting tracker operations.
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::error::Result;

/// Operations the plugin performs against the issue tracker.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Credential and reachability probe used during verification.
    async fn get_server_info(&self) -> Result<serde_json::Value>;

    /// Fetch an issue. The body is opaque to the plugin; callers use this
    /// as an existence check.
    async fn get_issue(&self, issue_key: &str) -> Result<serde_json::Value>;

    /// Post a plain-text comment to an issue.
    async fn add_comment(&self, issue_key: &str, comment: &str) -> Result<()>;
}
