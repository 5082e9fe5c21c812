//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.newsdesk/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewsdeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Query suggestions shown on the idle screen.
    pub examples: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AgentConfig {
    pub endpoint: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_AGENT_ENDPOINT: &str = "https://dawn-news-ai-agent.onrender.com/invoke";

const DEFAULT_EXAMPLES: [&str; 6] = [
    "Give me articles from last week",
    "Summarize the editorials from June 10",
    "I just want the URLs from yesterday",
    "What are the main topics discussed recently?",
    "Show me headlines from this month",
    "Find articles about economic policy",
];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub examples: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.newsdesk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".newsdesk").join("config.toml"))
}

/// Load config from `~/.newsdesk/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NewsdeskConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NewsdeskConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NewsdeskConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NewsdeskConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: NewsdeskConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Newsdesk Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [agent]
# endpoint = "https://dawn-news-ai-agent.onrender.com/invoke"

# [general]
# examples = [
#     "Give me articles from last week",
#     "Summarize the editorials from June 10",
# ]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_endpoint` is from the `--endpoint` flag (None = not specified).
pub fn resolve(config: &NewsdeskConfig, cli_endpoint: Option<&str>) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("NEWSDESK_ENDPOINT").ok())
        .or_else(|| config.agent.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_AGENT_ENDPOINT.to_string());

    // Examples: config → default
    let examples = config
        .general
        .examples
        .clone()
        .unwrap_or_else(|| DEFAULT_EXAMPLES.iter().map(|s| s.to_string()).collect());

    ResolvedConfig { endpoint, examples }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = NewsdeskConfig::default();
        assert!(config.agent.endpoint.is_none());
        assert!(config.general.examples.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = NewsdeskConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.endpoint, DEFAULT_AGENT_ENDPOINT);
        assert_eq!(resolved.examples.len(), DEFAULT_EXAMPLES.len());
        assert_eq!(resolved.examples[0], "Give me articles from last week");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = NewsdeskConfig {
            agent: AgentConfig {
                endpoint: Some("http://localhost:8000/invoke".to_string()),
            },
            general: GeneralConfig {
                examples: Some(vec!["Only this one".to_string()]),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.endpoint, "http://localhost:8000/invoke");
        assert_eq!(resolved.examples, vec!["Only this one".to_string()]);
    }

    #[test]
    fn test_resolve_cli_endpoint_wins() {
        let config = NewsdeskConfig {
            agent: AgentConfig {
                endpoint: Some("http://from-config/invoke".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://from-cli/invoke"));
        assert_eq!(resolved.endpoint, "http://from-cli/invoke");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[agent]
endpoint = "http://192.168.1.100:8000/invoke"

[general]
examples = [
    "Summarize today's editorial",
    "List yesterday's headlines",
]
"#;
        let config: NewsdeskConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.agent.endpoint.as_deref(),
            Some("http://192.168.1.100:8000/invoke")
        );
        let examples = config.general.examples.as_ref().unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[1], "List yesterday's headlines");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[agent]
endpoint = "http://localhost:9999/invoke"
"#;
        let config: NewsdeskConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.agent.endpoint.as_deref(),
            Some("http://localhost:9999/invoke")
        );
        assert!(config.general.examples.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: NewsdeskConfig = toml::from_str("").unwrap();
        assert!(config.agent.endpoint.is_none());
    }
}
