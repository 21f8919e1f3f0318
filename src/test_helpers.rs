//! Shared helpers for plugin tests.
use std::sync::{Arc, Mutex};

use crate::context::{Commit, Context, Logger, NextRelease};

/// Logger capturing lines in memory so tests can assert on output.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Build a commit whose subject is the first line of the message.
pub fn commit(message: &str) -> Commit {
    Commit {
        hash: "abc123".to_string(),
        message: message.to_string(),
        subject: message.lines().next().unwrap_or_default().to_string(),
    }
}

/// Build a release context for version 1.0.0 with the given commit messages.
pub fn test_context(logger: Arc<MemoryLogger>, messages: &[&str]) -> Context {
    Context {
        next_release: NextRelease {
            version: "1.0.0".to_string(),
            git_tag: "v1.0.0".to_string(),
            git_head: "deadbeef".to_string(),
        },
        commits: messages.iter().map(|message| commit(message)).collect(),
        logger,
    }
}
