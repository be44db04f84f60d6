use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{FailurePolicy, ResolverConfig};
use crate::server_pool::{root_servers, NameServer};

const LOCAL_CONFIG: &str = "rootwalk.toml";
const SYSTEM_CONFIG: &str = "/etc/rootwalk/config.toml";

/// Main configuration structure for rootwalk
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Timeouts, limits and candidate selection
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Bootstrap servers every walk starts from
    #[serde(default = "root_servers")]
    pub root_servers: Vec<NameServer>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            logging: LoggingConfig::default(),
            root_servers: root_servers(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rootwalk.toml in current directory
    /// 3. /etc/rootwalk/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(seed) = overrides.seed {
            self.resolver.seed = Some(seed);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.strict {
            self.resolver.failure_policy = FailurePolicy::Abort;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolver = &self.resolver;

        if resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_ms cannot be 0".to_string(),
            ));
        }
        if resolver.port == 0 {
            return Err(ConfigError::Validation("port cannot be 0".to_string()));
        }
        if resolver.max_delegation_depth == 0 || resolver.max_cname_depth == 0 {
            return Err(ConfigError::Validation(
                "depth limits must be at least 1".to_string(),
            ));
        }
        if resolver.max_queries == 0 {
            return Err(ConfigError::Validation("max_queries cannot be 0".to_string()));
        }
        // header plus a root question
        if resolver.receive_buffer_size < 17 {
            return Err(ConfigError::Validation(format!(
                "receive_buffer_size {} cannot hold a DNS response",
                resolver.receive_buffer_size
            )));
        }
        if self.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub query_timeout_ms: Option<u64>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
    pub strict: bool,
}
