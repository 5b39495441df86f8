use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".bookshelf.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub seed: SeedSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// IP address to bind
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve GraphiQL on `GET /graphql` when no query is given
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    /// Apply command-line flags on top of these settings.
    pub fn with_overrides(&self, host: Option<String>, port: Option<u16>, no_graphiql: bool) -> Self {
        Self {
            host: host.unwrap_or_else(|| self.host.clone()),
            port: port.unwrap_or(self.port),
            graphiql: self.graphiql && !no_graphiql,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                BookshelfError::Config(format!(
                    "Invalid listen address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedSettings {
    /// Seed file, relative to the directory holding the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl BookshelfConfig {
    /// Load the nearest config file at or above `start_path`.
    ///
    /// Returns the defaults and `start_path` as root when none exists.
    pub fn load_or_default(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load(&config_path),
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok((Self::default(), start_path.to_path_buf()))
            }
        }
    }

    pub fn load(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path)?;
        let config: BookshelfConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| {
                BookshelfError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn seed_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.seed.path.as_ref().map(|p| project_root.join(p))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = BookshelfConfig::default();
        assert_eq!(config.server.port, 3000);
        assert!(config.server.graphiql);
        assert!(config.seed.path.is_none());
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:3000".parse().unwrap()
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: BookshelfConfig = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.server.graphiql);
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let settings = ServerSettings {
            host: "not a host".to_string(),
            ..ServerSettings::default()
        };
        assert!(matches!(
            settings.socket_addr(),
            Err(BookshelfError::Config(_))
        ));
    }

    #[test]
    fn test_find_config_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let mut config = BookshelfConfig::default();
        config.seed.path = Some("seed.json".to_string());
        config
            .save(&temp_dir.path().join(CONFIG_FILE_NAME))
            .unwrap();

        let (loaded, root) = BookshelfConfig::load_or_default(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
        assert_eq!(
            loaded.seed_path(&root),
            Some(temp_dir.path().join("seed.json"))
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = BookshelfConfig::load(&temp_dir.path().join(CONFIG_FILE_NAME));
        assert!(matches!(result, Err(BookshelfError::Io(_))));
    }

    #[test]
    fn test_with_overrides() {
        let base = ServerSettings::default();

        let unchanged = base.with_overrides(None, None, false);
        assert_eq!(unchanged.port, 3000);
        assert!(unchanged.graphiql);

        let overridden = base.with_overrides(Some("0.0.0.0".to_string()), Some(8080), true);
        assert_eq!(overridden.host, "0.0.0.0");
        assert_eq!(overridden.port, 8080);
        assert!(!overridden.graphiql);
    }
}
