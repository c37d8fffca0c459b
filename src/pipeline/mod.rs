//! Pipeline orchestration
//!
//! Wires the stages together in their required order: extract links from
//! the pasted text, resolve identifiers, clear stale artifacts, dispatch
//! the platform agents one at a time, then aggregate whatever they wrote.
//!
//! Classification and resolution failures abort the run before any state
//! is touched: a batch containing even one bad link never deletes old
//! artifacts and never reaches an agent.

use crate::agent::{dispatch, reset_artifacts, JobBatch};
use crate::config::Config;
use crate::extract::extract_share_links;
use crate::resolve::{build_resolver_client, resolve_identifier};
use crate::{Result, SweepError};
use reqwest::Client;
use std::path::Path;

pub use crate::report::{ReportOutcome, ReportSummary};

/// The share-sweep pipeline
///
/// Holds the configuration and the resolver HTTP client; one instance can
/// serve any number of sequential runs.
pub struct Pipeline {
    config: Config,
    client: Client,
}

impl Pipeline {
    /// Creates a pipeline from a loaded configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = build_resolver_client(&config.resolver)?;
        Ok(Self { config, client })
    }

    /// Runs the full pipeline over pasted text
    ///
    /// # Arguments
    ///
    /// * `text` - Raw pasted share-snippet text
    /// * `report_path` - Where the aggregated report should be written
    ///
    /// # Returns
    ///
    /// * `Ok(ReportOutcome::Written)` - Report produced at `report_path`
    /// * `Ok(ReportOutcome::NoData)` - The agents produced no records
    /// * `Err(SweepError)` - A fail-fast stage failed; see the error kinds
    ///   on [`SweepError`]
    pub async fn run(&self, text: &str, report_path: &Path) -> Result<ReportOutcome> {
        // Extraction classifies every URL up front, so an unsupported link
        // aborts here, before any artifact is deleted.
        let records = extract_share_links(text)?;
        tracing::info!("Extracted {} link(s) from input text", records.len());

        let batch = self.resolve_batch(&records).await?;

        reset_artifacts(&self.config.artifacts);

        dispatch(&batch, &self.config).await?;

        let outcome = crate::report::aggregate_report(&self.config.artifacts, report_path)?;
        Ok(outcome)
    }

    /// Resolves every extracted link to its platform identifier
    async fn resolve_batch(&self, records: &[crate::LinkRecord]) -> Result<JobBatch> {
        let mut batch = JobBatch::new();

        for record in records {
            let identifier = resolve_identifier(
                &self.client,
                &self.config.resolver,
                record.platform,
                &record.url,
            )
            .await?;
            batch.push(record.platform, identifier);
        }

        Ok(batch)
    }
}

/// Runs the pipeline once with the given configuration
///
/// Convenience wrapper for callers that do not keep a [`Pipeline`] around.
pub async fn run_pipeline(
    config: Config,
    text: &str,
    report_path: &Path,
) -> std::result::Result<ReportOutcome, SweepError> {
    let pipeline = Pipeline::new(config)?;
    pipeline.run(text, report_path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AgentCommand, AgentsConfig, ArtifactConfig, ResolverConfig};
    use tempfile::TempDir;

    fn test_config(xhs_dir: &TempDir, dy_dir: &TempDir) -> Config {
        Config {
            resolver: ResolverConfig::default(),
            artifacts: ArtifactConfig {
                xiaohongshu_dir: xhs_dir.path().to_string_lossy().into_owned(),
                douyin_dir: dy_dir.path().to_string_lossy().into_owned(),
            },
            agents: AgentsConfig {
                xiaohongshu: AgentCommand {
                    command: "true".to_string(),
                    args: vec![],
                },
                douyin: AgentCommand {
                    command: "true".to_string(),
                    args: vec![],
                },
            },
        }
    }

    #[tokio::test]
    async fn test_unsupported_platform_aborts_before_reset() {
        let xhs_dir = TempDir::new().unwrap();
        let dy_dir = TempDir::new().unwrap();

        // A stale artifact from a previous run
        let stale = xhs_dir.path().join("stale.json");
        std::fs::write(&stale, "[]").unwrap();

        let pipeline = Pipeline::new(test_config(&xhs_dir, &dy_dir)).unwrap();
        let out = TempDir::new().unwrap();
        let result = pipeline
            .run(
                "某人分享 https://weibo.com/status/42",
                &out.path().join("report.csv"),
            )
            .await;

        assert!(matches!(
            result,
            Err(SweepError::UnsupportedPlatform { .. })
        ));
        // The reset stage never ran
        assert!(stale.exists());
    }

    #[tokio::test]
    async fn test_unresolvable_identifier_aborts_before_reset() {
        let xhs_dir = TempDir::new().unwrap();
        let dy_dir = TempDir::new().unwrap();

        let stale = dy_dir.path().join("stale.json");
        std::fs::write(&stale, "[]").unwrap();

        let pipeline = Pipeline::new(test_config(&xhs_dir, &dy_dir)).unwrap();
        let out = TempDir::new().unwrap();
        // Long-form Douyin URL with no note id: fails resolution without
        // touching the network
        let result = pipeline
            .run(
                "看看 https://www.douyin.com/video/abc",
                &out.path().join("report.csv"),
            )
            .await;

        assert!(matches!(
            result,
            Err(SweepError::UnresolvableIdentifier { .. })
        ));
        assert!(stale.exists());
    }

    #[tokio::test]
    async fn test_empty_input_yields_no_data() {
        let xhs_dir = TempDir::new().unwrap();
        let dy_dir = TempDir::new().unwrap();

        let pipeline = Pipeline::new(test_config(&xhs_dir, &dy_dir)).unwrap();
        let out = TempDir::new().unwrap();
        let outcome = pipeline
            .run("没有链接的一行\n\n", &out.path().join("report.csv"))
            .await
            .unwrap();

        assert!(matches!(outcome, ReportOutcome::NoData));
    }

    #[tokio::test]
    async fn test_stale_artifacts_cleared_before_dispatch() {
        let xhs_dir = TempDir::new().unwrap();
        let dy_dir = TempDir::new().unwrap();

        // Stale artifacts in both directories; agents are no-ops, so the
        // aggregation sees only what survives the reset
        std::fs::write(
            xhs_dir.path().join("stale.json"),
            r#"[{"nickname": "老数据", "note_url": "x"}]"#,
        )
        .unwrap();

        let pipeline = Pipeline::new(test_config(&xhs_dir, &dy_dir)).unwrap();
        let out = TempDir::new().unwrap();
        let outcome = pipeline
            .run(
                "甲发布了笔记 http://xhslink.com/a/abc",
                &out.path().join("report.csv"),
            )
            .await
            .unwrap();

        // The stale artifact was deleted and the no-op agent wrote nothing
        assert!(matches!(outcome, ReportOutcome::NoData));
        assert!(!xhs_dir.path().join("stale.json").exists());
    }
}
