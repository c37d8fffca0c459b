//! Configuration module for Share-Sweep
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use share_sweep::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Xiaohongshu artifacts: {}", config.artifacts.xiaohongshu_dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AgentCommand, AgentsConfig, ArtifactConfig, Config, ResolverConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
