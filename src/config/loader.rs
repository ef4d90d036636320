//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ServerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("bundlesink-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_minimal_config_with_defaults() {
        let path = write_temp_config(
            "minimal.toml",
            "[listener]\nbind_address = \"127.0.0.1:6000\"\n",
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:6000");
        assert_eq!(config.assets.mount, "/assets");
        assert_eq!(config.timeouts.request_secs, 30);

        fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_malformed_toml() {
        let path = write_temp_config("broken.toml", "listener = [");
        assert!(matches!(load_config(&path), Err(ConfigError::Parse(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_semantically_invalid_config() {
        let path = write_temp_config(
            "invalid.toml",
            "[listener]\nbind_address = \"nope\"\n",
        );
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = Path::new("/definitely/not/a/config.toml");
        assert!(matches!(load_config(path), Err(ConfigError::Io(_))));
    }
}
