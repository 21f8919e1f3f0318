//! Release context supplied by the pipeline host.
use log::{error, info};
use serde::Deserialize;
use std::sync::Arc;

/// Commit included in the release. Only `message` is scanned for issue
/// keys; the remaining fields are carried for the host contract.
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    pub subject: String,
}

/// Version information for the release being published.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRelease {
    pub version: String,
    pub git_tag: String,
    pub git_head: String,
}

/// Log sink provided through the release context. The host surfaces these
/// lines in its own pipeline output.
pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default logger forwarding plugin output to the `log` facade.
#[derive(Debug, Default)]
pub struct HostLogger;

impl Logger for HostLogger {
    fn log(&self, message: &str) {
        info!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}

/// Per-invocation release context. Constructed by the host for each
/// lifecycle call; nothing here is shared across invocations.
pub struct Context {
    pub next_release: NextRelease,
    pub commits: Vec<Commit>,
    pub logger: Arc<dyn Logger>,
}
