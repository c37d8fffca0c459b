//! Sequential agent dispatch
//!
//! Platforms are crawled strictly one at a time, each agent awaited to
//! completion before the next starts. A failed agent aborts the run:
//! later platforms are skipped and the error propagates to the caller, so
//! aggregation never runs over a half-crawled batch.

use crate::agent::{agent_for, CrawlAgent, JobBatch, RunContext};
use crate::config::Config;
use crate::platform::Platform;
use crate::AgentError;

/// Dispatches the batch to the production agents configured for each platform
pub async fn dispatch(batch: &JobBatch, config: &Config) -> Result<(), AgentError> {
    dispatch_with(batch, |platform| agent_for(platform, config)).await
}

/// Dispatches the batch using a caller-supplied agent factory
///
/// Each platform with at least one identifier gets one agent invocation, in
/// [`Platform::ALL`] order. Platforms with no identifiers are skipped
/// without constructing an agent.
pub async fn dispatch_with<F>(batch: &JobBatch, make_agent: F) -> Result<(), AgentError>
where
    F: Fn(Platform) -> Box<dyn CrawlAgent>,
{
    let ctx = RunContext::from_batch(batch);

    for platform in Platform::ALL {
        let identifiers = batch.identifiers(platform);
        if identifiers.is_empty() {
            tracing::debug!("No identifiers for {}, skipping agent", platform);
            continue;
        }

        tracing::info!(
            "Dispatching {} agent for {} identifier(s)",
            platform,
            identifiers.len()
        );

        let agent = make_agent(platform);
        agent.run(&ctx).await?;
    }

    Ok(())
}
