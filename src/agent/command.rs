//! Subprocess bridge to the external crawling agents
//!
//! Each platform's agent is an external program with its own authentication,
//! pagination, and anti-bot concerns. This crate only owns the boundary: it
//! spawns the configured command, hands it the run context, and waits for it
//! to finish. The agent is expected to write its JSON artifacts into its
//! platform's artifact directory before exiting.

use crate::agent::{CrawlAgent, RunContext};
use crate::config::AgentCommand;
use crate::platform::Platform;
use crate::AgentError;
use async_trait::async_trait;
use tokio::process::Command;

/// Environment variable the serialized [`RunContext`] is passed in
pub const RUN_CONTEXT_ENV: &str = "SHARE_SWEEP_RUN_CONTEXT";

/// A crawling agent invoked as an external command
#[derive(Debug, Clone)]
pub struct CommandAgent {
    platform: Platform,
    command: String,
    args: Vec<String>,
}

impl CommandAgent {
    /// Creates an agent from its configured command
    pub fn new(platform: Platform, config: &AgentCommand) -> Self {
        Self {
            platform,
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }
}

#[async_trait]
impl CrawlAgent for CommandAgent {
    async fn run(&self, ctx: &RunContext) -> Result<(), AgentError> {
        let payload = serde_json::to_string(ctx)?;

        tracing::info!(
            "Starting {} agent: {} {}",
            self.platform,
            self.command,
            self.args.join(" ")
        );

        let status = Command::new(&self.command)
            .args(&self.args)
            .env(RUN_CONTEXT_ENV, payload)
            .status()
            .await
            .map_err(|e| AgentError::Spawn {
                command: self.command.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(AgentError::Failed {
                command: self.command.clone(),
                status: status.to_string(),
            });
        }

        tracing::info!("{} agent finished", self.platform);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::JobBatch;

    fn detail_context() -> RunContext {
        let mut batch = JobBatch::new();
        batch.push(Platform::Douyin, "12345".to_string());
        RunContext::from_batch(&batch)
    }

    fn agent(command: &str, args: &[&str]) -> CommandAgent {
        CommandAgent::new(
            Platform::Douyin,
            &AgentCommand {
                command: command.to_string(),
                args: args.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    #[tokio::test]
    async fn test_successful_command() {
        let result = agent("true", &[]).run(&detail_context()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_failing_command() {
        let result = agent("false", &[]).run(&detail_context()).await;
        assert!(matches!(result, Err(AgentError::Failed { .. })));
    }

    #[tokio::test]
    async fn test_missing_command() {
        let result = agent("/nonexistent/share-sweep-agent", &[])
            .run(&detail_context())
            .await;
        assert!(matches!(result, Err(AgentError::Spawn { .. })));
    }

    #[tokio::test]
    async fn test_context_reaches_the_agent_environment() {
        // The spawned process must see the serialized run context
        let script = format!(r#"test -n "${}""#, RUN_CONTEXT_ENV);
        let result = agent("sh", &["-c", &script]).run(&detail_context()).await;
        assert!(result.is_ok());
    }
}
