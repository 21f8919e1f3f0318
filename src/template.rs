//! Comment templating with literal placeholder substitution.

/// Comment posted to each issue when the caller supplies no template.
pub const DEFAULT_COMMENT_TEMPLATE: &str = "The issue ({{issueKey}}) was included in version {{version}} of {{packageName}} 🎉";

/// Substitution values for a single issue comment.
#[derive(Debug, Clone)]
pub struct CommentValues<'a> {
    pub issue_key: &'a str,
    pub package_name: &'a str,
    pub version: &'a str,
    pub git_tag: &'a str,
    pub git_head: &'a str,
}

/// Replace every occurrence of each known placeholder with its value.
/// Substitution is literal string replacement: unknown tokens pass through
/// untouched and no escaping is applied.
pub fn render(template: &str, values: &CommentValues) -> String {
    template
        .replace("{{issueKey}}", values.issue_key)
        .replace("{{packageName}}", values.package_name)
        .replace("{{version}}", values.version)
        .replace("{{gitTag}}", values.git_tag)
        .replace("{{gitHead}}", values.git_head)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>() -> CommentValues<'a> {
        CommentValues {
            issue_key: "ABC-123",
            package_name: "Package",
            version: "1.0.0",
            git_tag: "v1.0.0",
            git_head: "deadbeef",
        }
    }

    #[test]
    fn test_renders_default_template() {
        let comment = render(DEFAULT_COMMENT_TEMPLATE, &values());
        assert_eq!(
            comment,
            "The issue (ABC-123) was included in version 1.0.0 of Package 🎉"
        );
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let comment = render("{{issueKey}} {{issueKey}}", &values());
        assert_eq!(comment, "ABC-123 ABC-123");
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        let comment = render("{{foo}} {{version}}", &values());
        assert_eq!(comment, "{{foo}} 1.0.0");
    }

    #[test]
    fn test_render_is_idempotent_without_remaining_placeholders() {
        let once = render("released {{gitTag}} at {{gitHead}}", &values());
        let twice = render(&once, &values());
        assert_eq!(once, "released v1.0.0 at deadbeef");
        assert_eq!(once, twice);
    }
}
