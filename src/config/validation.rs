use crate::config::types::{AgentsConfig, ArtifactConfig, Config, ResolverConfig};
use crate::platform::Platform;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_resolver_config(&config.resolver)?;
    validate_artifact_config(&config.artifacts)?;
    validate_agents_config(&config.agents)?;
    Ok(())
}

/// Validates resolver configuration
fn validate_resolver_config(config: &ResolverConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs < 1 || config.request_timeout_secs > 120 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be between 1 and 120, got {}",
            config.request_timeout_secs
        )));
    }

    if config.short_link_host.is_empty() {
        return Err(ConfigError::Validation(
            "short_link_host cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates artifact directory configuration
fn validate_artifact_config(config: &ArtifactConfig) -> Result<(), ConfigError> {
    for platform in Platform::ALL {
        if config.dir_for(platform).is_empty() {
            return Err(ConfigError::Validation(format!(
                "Artifact directory for {} cannot be empty",
                platform
            )));
        }
    }

    // A shared directory would mix one platform's artifacts into the other's
    // aggregation pass
    if config.xiaohongshu_dir == config.douyin_dir {
        return Err(ConfigError::Validation(format!(
            "Platforms cannot share an artifact directory: '{}'",
            config.xiaohongshu_dir
        )));
    }

    Ok(())
}

/// Validates agent command configuration
fn validate_agents_config(config: &AgentsConfig) -> Result<(), ConfigError> {
    for platform in Platform::ALL {
        if config.command_for(platform).command.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Agent command for {} cannot be empty",
                platform
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::AgentCommand;

    fn create_test_config() -> Config {
        Config {
            resolver: ResolverConfig::default(),
            artifacts: ArtifactConfig {
                xiaohongshu_dir: "./data/xhs/json".to_string(),
                douyin_dir: "./data/douyin/json".to_string(),
            },
            agents: AgentsConfig {
                xiaohongshu: AgentCommand {
                    command: "media-agent".to_string(),
                    args: vec!["--platform".to_string(), "xhs".to_string()],
                },
                douyin: AgentCommand {
                    command: "media-agent".to_string(),
                    args: vec!["--platform".to_string(), "dy".to_string()],
                },
            },
        }
    }

    #[test]
    fn test_valid_config() {
        let config = create_test_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = create_test_config();
        config.resolver.request_timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_short_link_host_rejected() {
        let mut config = create_test_config();
        config.resolver.short_link_host = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_artifact_dir_rejected() {
        let mut config = create_test_config();
        config.artifacts.douyin_dir = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_shared_artifact_dir_rejected() {
        let mut config = create_test_config();
        config.artifacts.douyin_dir = config.artifacts.xiaohongshu_dir.clone();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_agent_command_rejected() {
        let mut config = create_test_config();
        config.agents.xiaohongshu.command = String::new();
        assert!(validate(&config).is_err());
    }
}
