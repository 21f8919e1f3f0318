//! Release lifecycle entry points invoked by the pipeline host.
use futures::future::join_all;

use crate::{
    config::{JiraConfig, PluginConfig, package_name_from_env},
    context::{Context, Logger, NextRelease},
    error::{JiraPluginError, Result},
    extractor::IssueExtractor,
    jira::{client::JiraClient, traits::IssueTracker},
    template::{self, CommentValues, DEFAULT_COMMENT_TEMPLATE},
};

/// Verify tracker credentials before the release runs. Invoked by the host
/// during its "verify conditions" phase; a failure here halts the pipeline.
pub async fn verify_conditions(
    _plugin_config: &PluginConfig,
    context: &Context,
) -> Result<()> {
    let logger = context.logger.as_ref();

    logger.log("Verifying JIRA plugin conditions...");

    let config = JiraConfig::from_env();
    let errors = config.validate();

    if !errors.is_empty() {
        let message = invalid_config_message(&errors);
        logger.error(&message);
        return Err(JiraPluginError::invalid_config(message));
    }

    let client = match JiraClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            let err = JiraPluginError::Authentication(err.message());
            logger.error(&err.to_string());
            return Err(err);
        }
    };

    verify_credentials(&client, logger).await
}

/// Comment on every issue referenced by the release commits. Invoked by the
/// host after a successful release; per-issue failures are logged and never
/// fail the release.
pub async fn success(
    plugin_config: &PluginConfig,
    context: &Context,
) -> Result<()> {
    let logger = context.logger.as_ref();

    let config = JiraConfig::from_env();
    if !config.validate().is_empty() {
        logger.error(
            "JIRA configuration is missing. Please set JIRA_HOST, \
             JIRA_EMAIL, and JIRA_TOKEN environment variables.",
        );
        return Ok(());
    }

    let result = run_success(plugin_config, &config, context).await;

    // Failures outside the per-key isolation boundary still abort the step,
    // but get a distinguishing prefix in the log first.
    if let Err(err) = &result {
        logger.error(&format!("Plugin error: {}", err.message()));
    }

    result
}

/// Probe the server info endpoint to confirm the configured credentials.
async fn verify_credentials(
    tracker: &dyn IssueTracker,
    logger: &dyn Logger,
) -> Result<()> {
    match tracker.get_server_info().await {
        Ok(_) => {
            logger.log("JIRA credentials verified successfully");
            Ok(())
        }
        Err(err) => {
            let err = JiraPluginError::Authentication(err.message());
            logger.error(&err.to_string());
            Err(err)
        }
    }
}

fn invalid_config_message(errors: &[String]) -> String {
    let bullets = errors
        .iter()
        .map(|error| format!("  - {error}"))
        .collect::<Vec<String>>()
        .join("\n");
    format!("JIRA plugin configuration is invalid:\n{bullets}")
}

async fn run_success(
    plugin_config: &PluginConfig,
    config: &JiraConfig,
    context: &Context,
) -> Result<()> {
    let client = JiraClient::new(config)?;
    let extractor =
        IssueExtractor::new(plugin_config.issue_pattern.as_deref())?;
    let template = plugin_config
        .comment_template
        .as_deref()
        .unwrap_or(DEFAULT_COMMENT_TEMPLATE);

    comment_on_issues(
        &client,
        &extractor,
        template,
        &package_name_from_env(),
        context,
    )
    .await;

    Ok(())
}

/// Fan out one comment workflow per extracted key. Each key's failures are
/// absorbed and logged locally, so the join waits for every key to settle
/// and never short-circuits.
async fn comment_on_issues(
    tracker: &dyn IssueTracker,
    extractor: &IssueExtractor,
    template: &str,
    package_name: &str,
    context: &Context,
) {
    let logger = context.logger.as_ref();
    let keys = extractor.extract_issue_keys(&context.commits);

    if keys.is_empty() {
        logger.log("No JIRA issues found in commits.");
        return;
    }

    logger.log(&format!(
        "Found {} JIRA issue(s): {}",
        keys.len(),
        keys.join(", ")
    ));

    let tasks = keys.iter().map(|key| async move {
        let result = comment_on_issue(
            tracker,
            key,
            template,
            package_name,
            &context.next_release,
        )
        .await;

        match result {
            Ok(()) => {
                logger.log(&format!("Successfully added comment to {key}"))
            }
            Err(err) => logger.error(&format!(
                "Failed to add comment to {key}: {}",
                err.message()
            )),
        }
    });

    join_all(tasks).await;

    logger.log("Finished processing JIRA comments.");
}

/// Single-key workflow: existence probe, render, post.
async fn comment_on_issue(
    tracker: &dyn IssueTracker,
    issue_key: &str,
    template: &str,
    package_name: &str,
    release: &NextRelease,
) -> Result<()> {
    tracker.get_issue(issue_key).await?;

    let comment = template::render(
        template,
        &CommentValues {
            issue_key,
            package_name,
            version: &release.version,
            git_tag: &release.git_tag,
            git_head: &release.git_head,
        },
    );

    tracker.add_comment(issue_key, &comment).await
}
