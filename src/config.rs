//! Configuration management for the Solace gateway
//!
//! Layered sources, highest priority first: environment variables, the TOML
//! config file at `~/.config/solace/config.toml`, then built-in defaults.
//! All file fields are optional; the file is a partial overlay.

use std::path::PathBuf;

use serde::Deserialize;

use crate::Result;

/// Default API server port
pub const DEFAULT_PORT: u16 = 18820;

/// Solace gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to data directory (database lives here)
    pub data_dir: PathBuf,

    /// HTTP API server configuration
    pub api_server: ApiServerConfig,
}

/// HTTP API server configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    /// Port to listen on
    pub port: u16,
}

/// Top-level TOML configuration file schema
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: ServerFileConfig,
}

/// Server/runtime section of the config file
#[derive(Debug, Default, Deserialize)]
struct ServerFileConfig {
    /// API server port
    port: Option<u16>,

    /// Data directory override
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment, config file, and defaults
    ///
    /// # Errors
    ///
    /// Returns error if the data directory cannot be created
    pub fn load() -> Result<Self> {
        let file = load_config_file();

        let port = std::env::var("SOLACE_API_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|s| s.parse().ok())
            .or(file.server.port)
            .unwrap_or(DEFAULT_PORT);

        let data_dir = std::env::var("SOLACE_DATA_DIR")
            .ok()
            .map(PathBuf::from)
            .or(file.server.data_dir)
            .unwrap_or_else(default_data_dir);

        std::fs::create_dir_all(&data_dir)?;

        Ok(Self {
            data_dir,
            api_server: ApiServerConfig { port },
        })
    }

    /// Path to the diary database file
    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("diary.db")
    }
}

/// Default data directory (`~/.local/share/solace` on Linux)
fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("dev", "solace", "solace")
        .map_or_else(|| PathBuf::from("."), |d| d.data_dir().to_path_buf())
}

/// Load the TOML config file from the standard path
///
/// Returns defaults if the file doesn't exist or can't be parsed.
fn load_config_file() -> ConfigFile {
    let Some(path) = config_file_path() else {
        return ConfigFile::default();
    };
    if !path.exists() {
        return ConfigFile::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config file, using defaults"
                );
                ConfigFile::default()
            }
        },
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to read config file"
            );
            ConfigFile::default()
        }
    }
}

/// Standard config file path (`~/.config/solace/config.toml` on Linux)
fn config_file_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "solace", "solace")
        .map(|d| d.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_fields_are_optional() {
        let parsed: ConfigFile = toml::from_str("").unwrap();
        assert!(parsed.server.port.is_none());
        assert!(parsed.server.data_dir.is_none());

        let parsed: ConfigFile = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(parsed.server.port, Some(9000));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let parsed: ConfigFile =
            toml::from_str("[server]\nport = 9000\n\n[future]\nfeature = true\n").unwrap();
        assert_eq!(parsed.server.port, Some(9000));
    }
}
