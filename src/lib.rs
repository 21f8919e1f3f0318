//! semantic-release plugin that scans release commits for JIRA issue keys
//! and posts a comment to each referenced issue.
//!
//! The release host invokes [`verify_conditions`] before the release to
//! confirm credentials, and [`success`] after a successful release to fan
//! out one comment per referenced issue. Credentials come from the
//! `JIRA_HOST`, `JIRA_EMAIL`, and `JIRA_TOKEN` environment variables.
mod config;
mod context;
mod error;
mod extractor;
mod jira;
mod plugin;
mod template;

pub use config::{JiraConfig, PluginConfig, package_name_from_env};
pub use context::{Commit, Context, HostLogger, Logger, NextRelease};
pub use error::{JiraPluginError, Result};
pub use extractor::{DEFAULT_ISSUE_PATTERN, IssueExtractor};
pub use jira::{client::JiraClient, traits::IssueTracker};
pub use plugin::{success, verify_conditions};
pub use template::{CommentValues, DEFAULT_COMMENT_TEMPLATE, render};

#[cfg(test)]
pub mod test_helpers;
