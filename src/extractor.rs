//! Issue key extraction from commit messages.
use regex::Regex;
use std::collections::HashSet;

use crate::{context::Commit, error::Result};

/// Default pattern matching common JIRA issue keys like ABC-123 or PROJ2-7.
pub const DEFAULT_ISSUE_PATTERN: &str = r"\b[A-Z][A-Z0-9]*-\d+\b";

/// Scans text for issue keys using a compiled pattern.
#[derive(Debug)]
pub struct IssueExtractor {
    pattern: Regex,
}

impl IssueExtractor {
    /// Compile an extractor from a caller-supplied pattern, falling back to
    /// the default JIRA key pattern. The pattern is used verbatim as the
    /// regex body; no flags are layered on beyond matching every
    /// occurrence. An invalid pattern fails here, not at extraction time.
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let pattern = Regex::new(pattern.unwrap_or(DEFAULT_ISSUE_PATTERN))?;
        Ok(Self { pattern })
    }

    /// Collect every distinct key across all commit messages. Keys are
    /// returned in first-seen order, so repeated calls over the same input
    /// produce the same output. Commits with no matches contribute nothing.
    pub fn extract_issue_keys(&self, commits: &[Commit]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keys = vec![];

        for commit in commits {
            for found in self.pattern.find_iter(&commit.message) {
                let key = found.as_str();
                if seen.insert(key.to_string()) {
                    keys.push(key.to_string());
                }
            }
        }

        keys
    }

    /// Same matching logic applied to a single string, deduplicated.
    pub fn extract_from_text(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keys = vec![];

        for found in self.pattern.find_iter(text) {
            let key = found.as_str();
            if seen.insert(key.to_string()) {
                keys.push(key.to_string());
            }
        }

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JiraPluginError;

    fn commit(message: &str) -> Commit {
        Commit {
            hash: "abc123".to_string(),
            message: message.to_string(),
            subject: message.lines().next().unwrap_or_default().to_string(),
        }
    }

    #[test]
    fn test_extracts_distinct_keys_in_first_seen_order() {
        let extractor = IssueExtractor::new(None).unwrap();
        let commits = vec![
            commit("feat: add feature ABC-123 and DEF-9"),
            commit("fix: regression ABC-123\n\nrefs DEF-9, GHI-42"),
        ];
        let keys = extractor.extract_issue_keys(&commits);
        assert_eq!(keys, vec!["ABC-123", "DEF-9", "GHI-42"]);
    }

    #[test]
    fn test_empty_commit_list_yields_no_keys() {
        let extractor = IssueExtractor::new(None).unwrap();
        assert!(extractor.extract_issue_keys(&[]).is_empty());
    }

    #[test]
    fn test_commits_without_matches_yield_no_keys() {
        let extractor = IssueExtractor::new(None).unwrap();
        let commits = vec![commit("chore: bump deps"), commit("docs: readme")];
        assert!(extractor.extract_issue_keys(&commits).is_empty());
    }

    #[test]
    fn test_lowercase_keys_are_not_matched_by_default() {
        let extractor = IssueExtractor::new(None).unwrap();
        let keys = extractor.extract_from_text("fixes abc-123 but not ABC-5");
        assert_eq!(keys, vec!["ABC-5"]);
    }

    #[test]
    fn test_custom_pattern_restricts_matches() {
        let extractor = IssueExtractor::new(Some(r"PROJ-\d+")).unwrap();
        let commits = vec![commit("PROJ-1 and ABC-2 were both touched")];
        let keys = extractor.extract_issue_keys(&commits);
        assert_eq!(keys, vec!["PROJ-1"]);
    }

    #[test]
    fn test_custom_pattern_matching_nothing_yields_empty() {
        let extractor = IssueExtractor::new(Some(r"NOPE-\d{5}")).unwrap();
        assert!(extractor.extract_from_text("ABC-123 DEF-9").is_empty());
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        let result = IssueExtractor::new(Some("[unclosed"));
        assert!(matches!(
            result.unwrap_err(),
            JiraPluginError::InvalidPattern(_)
        ));
    }

    #[test]
    fn test_extract_from_text_deduplicates() {
        let extractor = IssueExtractor::new(None).unwrap();
        let keys =
            extractor.extract_from_text("ABC-1 then ABC-1 again, then ABC-2");
        assert_eq!(keys, vec!["ABC-1", "ABC-2"]);
    }
}
