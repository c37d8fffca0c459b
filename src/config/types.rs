use crate::platform::Platform;
use serde::Deserialize;

/// Main configuration structure for Share-Sweep
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,
    pub artifacts: ArtifactConfig,
    pub agents: AgentsConfig,
}

/// Short-link resolution configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Bound on each redirect-resolution request (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Host whose URLs are short links that must be expanded via redirect
    #[serde(rename = "short-link-host", default = "default_short_link_host")]
    pub short_link_host: String,
}

fn default_request_timeout() -> u64 {
    10
}

fn default_short_link_host() -> String {
    "v.douyin.com".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout(),
            short_link_host: default_short_link_host(),
        }
    }
}

/// Per-platform artifact directory configuration
///
/// Each crawling agent writes its JSON result files into its platform's
/// directory; the reset and aggregation stages read the same paths.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactConfig {
    /// Directory the Xiaohongshu agent writes artifacts into
    #[serde(rename = "xiaohongshu-dir")]
    pub xiaohongshu_dir: String,

    /// Directory the Douyin agent writes artifacts into
    #[serde(rename = "douyin-dir")]
    pub douyin_dir: String,
}

impl ArtifactConfig {
    /// Returns the artifact directory configured for a platform
    pub fn dir_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::Xiaohongshu => &self.xiaohongshu_dir,
            Platform::Douyin => &self.douyin_dir,
        }
    }
}

/// Per-platform crawling-agent commands
#[derive(Debug, Clone, Deserialize)]
pub struct AgentsConfig {
    pub xiaohongshu: AgentCommand,
    pub douyin: AgentCommand,
}

impl AgentsConfig {
    /// Returns the agent command configured for a platform
    pub fn command_for(&self, platform: Platform) -> &AgentCommand {
        match platform {
            Platform::Xiaohongshu => &self.xiaohongshu,
            Platform::Douyin => &self.douyin,
        }
    }
}

/// An external agent invocation: executable plus fixed arguments
#[derive(Debug, Clone, Deserialize)]
pub struct AgentCommand {
    /// Executable to spawn
    pub command: String,

    /// Fixed arguments passed on every invocation
    #[serde(default)]
    pub args: Vec<String>,
}
