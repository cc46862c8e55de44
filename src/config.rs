use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Default per-message size limit (1 MiB).
const DEFAULT_MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Default tracing filter directive.
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("MCP_GUIDE_MAX_MESSAGE_BYTES must be a positive integer, got {0:?}")]
    InvalidMessageLimit(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub max_message_bytes: usize,
    pub log_filter: String,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `MCP_GUIDE_MAX_MESSAGE_BYTES` (optional, default 1 MiB): max bytes per JSON-RPC line
    /// - `MCP_GUIDE_LOG` (optional, default `info`): tracing filter for stderr logs
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_message_bytes = match lookup("MCP_GUIDE_MAX_MESSAGE_BYTES") {
            Some(val) => match val.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidMessageLimit(val)),
            },
            None => DEFAULT_MAX_MESSAGE_BYTES,
        };

        let log_filter = lookup("MCP_GUIDE_LOG")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            max_message_bytes,
            log_filter,
        })
    }
}

impl ServerConfig {
    /// Parse `log_filter` into a tracing filter.
    pub fn tracing_filter(&self) -> Result<EnvFilter, ParseError> {
        EnvFilter::try_new(&self.log_filter)
    }

    /// Filter used when `log_filter` does not parse.
    pub fn fallback_filter() -> EnvFilter {
        EnvFilter::new(DEFAULT_LOG_FILTER)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        assert_eq!(load(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn reads_message_limit_and_log_filter() {
        let config = load(&[
            ("MCP_GUIDE_MAX_MESSAGE_BYTES", "4096"),
            ("MCP_GUIDE_LOG", "mcp_guide=debug"),
        ])
        .unwrap();
        assert_eq!(config.max_message_bytes, 4096);
        assert_eq!(config.log_filter, "mcp_guide=debug");
    }

    #[test]
    fn rejects_zero_and_garbage_limits() {
        for bad in ["0", "-1", "lots"] {
            assert_eq!(
                load(&[("MCP_GUIDE_MAX_MESSAGE_BYTES", bad)]),
                Err(ConfigError::InvalidMessageLimit(bad.to_string()))
            );
        }
    }

    #[test]
    fn blank_log_filter_falls_back_to_default() {
        assert_eq!(load(&[("MCP_GUIDE_LOG", "  ")]).unwrap().log_filter, "info");
    }

    #[test]
    fn tracing_filter_rejects_malformed_directives() {
        assert!(ServerConfig::default().tracing_filter().is_ok());

        let config = load(&[("MCP_GUIDE_LOG", "mcp_guide=loud")]).unwrap();
        assert_eq!(config.log_filter, "mcp_guide=loud");
        assert!(config.tracing_filter().is_err());
    }
}
