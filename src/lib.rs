//! Share-Sweep: a batch engagement collector for pasted share snippets
//!
//! This crate ingests noisy, human-pasted text containing Xiaohongshu and
//! Douyin share links, resolves the content identifiers behind them, drives
//! the per-platform crawling agents, and merges the agents' JSON artifacts
//! into a single tabular report.

pub mod agent;
pub mod config;
pub mod extract;
pub mod pipeline;
pub mod platform;
pub mod report;
pub mod resolve;

use thiserror::Error;

/// Main error type for Share-Sweep operations
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unsupported platform for URL: {url}")]
    UnsupportedPlatform { url: String },

    #[error("Unable to extract a content identifier from {url}")]
    UnresolvableIdentifier { url: String },

    #[error("Crawl agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while invoking a platform crawling agent
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Failed to spawn agent command `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("Agent `{command}` exited with {status}")]
    Failed { command: String, status: String },

    #[error("Failed to serialize run context: {0}")]
    Context(#[from] serde_json::Error),
}

/// Errors raised while writing the aggregated report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Share-Sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::LinkRecord;
pub use pipeline::{Pipeline, ReportOutcome};
pub use platform::Platform;
