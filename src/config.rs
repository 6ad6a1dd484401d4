use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{BanError, BanResult};

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub bans: Bans,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Bans {
    /// Name recorded as the banning party on every issued record
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Reason pre-seeded into builders handed out by the service
    #[serde(default)]
    pub default_reason: Option<String>,
}

fn default_issuer() -> String {
    "Server".to_string()
}

impl Default for Bans {
    fn default() -> Self {
        Self {
            issuer: default_issuer(),
            default_reason: None,
        }
    }
}

impl ServiceConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> BanResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> BanResult<Self> {
        toml::from_str(contents).map_err(|e| BanError::Config(e.to_string()))
    }
}

pub fn generate_example_config() -> String {
    r#"# banfacade example configuration

[bans]
issuer = "Server"                 # Recorded as the banning party on issued bans
default_reason = "Banned by an operator" # Optional reason seeded into new builders
"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ServiceConfig::from_toml("").unwrap();
        assert_eq!(config.bans.issuer, "Server");
        assert!(config.bans.default_reason.is_none());
    }

    #[test]
    fn test_example_config_parses() {
        let config = ServiceConfig::from_toml(&generate_example_config()).unwrap();
        assert_eq!(config.bans.issuer, "Server");
        assert_eq!(config.bans.default_reason.as_deref(), Some("Banned by an operator"));
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let result = ServiceConfig::from_toml("[bans]\nissuer = 42\n");
        assert!(matches!(result, Err(BanError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ServiceConfig::load("/nonexistent/banfacade.toml");
        assert!(matches!(result, Err(BanError::Io(_))));
    }
}
