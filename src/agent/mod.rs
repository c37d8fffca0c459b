//! Crawling-agent orchestration
//!
//! This module owns everything between identifier resolution and
//! aggregation: the per-run context handed to agents, the pre-run artifact
//! reset, the agent abstraction with its subprocess implementation, and the
//! sequential dispatcher.

mod command;
mod context;
mod dispatcher;
mod reset;

pub use command::{CommandAgent, RUN_CONTEXT_ENV};
pub use context::{CrawlMode, JobBatch, RunContext};
pub use dispatcher::{dispatch, dispatch_with};
pub use reset::{clear_artifact_dir, reset_artifacts};

use crate::config::Config;
use crate::platform::Platform;
use crate::AgentError;
use async_trait::async_trait;

/// One platform's crawling agent
///
/// Implementations read their targets from the run context and write JSON
/// artifact files under their platform's artifact directory. `run` resolves
/// when the agent has finished; there is no partial-progress reporting and
/// no cancellation.
#[async_trait]
pub trait CrawlAgent: Send + Sync {
    async fn run(&self, ctx: &RunContext) -> Result<(), AgentError>;
}

/// Constructs the production agent for a platform
///
/// The match is exhaustive over [`Platform`], so a new platform variant
/// cannot be forgotten here without a compile error.
pub fn agent_for(platform: Platform, config: &Config) -> Box<dyn CrawlAgent> {
    match platform {
        Platform::Xiaohongshu | Platform::Douyin => Box::new(CommandAgent::new(
            platform,
            config.agents.command_for(platform),
        )),
    }
}
