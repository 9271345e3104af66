use raven_api::{RavenClient, RavenClientBuilder, DEFAULT_CONNECT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Persistent configuration saved to disk
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Raven Tools API key (optional, can also be set via RAVEN_API_KEY env var)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Endpoint override, mostly for staging or a local mock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            connect_timeout_secs: default_connect_timeout(),
            accept_invalid_certs: false,
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/raven/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("raven").join("config.json"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory")
        })?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Pick the API key: explicit value (flag or RAVEN_API_KEY), then config file
    pub fn resolve_api_key(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.is_empty()))
    }

    /// Client builder seeded from the file settings
    pub fn client_builder(&self, api_key: String) -> RavenClientBuilder {
        let mut builder = RavenClient::builder(api_key)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .accept_invalid_certs(self.accept_invalid_certs);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.clone());
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json"));
        assert_eq!(config, Config::default());
        assert_eq!(config.connect_timeout_secs, 30);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"api_key": "abc"}"#).unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.connect_timeout_secs, 30);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn garbage_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_key: Some("abc".into()),
            base_url: Some("http://localhost:8080/api".into()),
            connect_timeout_secs: 5,
            accept_invalid_certs: true,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn explicit_key_wins() {
        let config = Config {
            api_key: Some("from-file".into()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_key(Some("from-flag".into())).as_deref(),
            Some("from-flag")
        );
        assert_eq!(
            config.resolve_api_key(Some(String::new())).as_deref(),
            Some("from-file")
        );
        assert_eq!(config.resolve_api_key(None).as_deref(), Some("from-file"));
        assert_eq!(Config::default().resolve_api_key(None), None);
    }

    #[test]
    fn builder_uses_base_url_override() {
        let config = Config {
            base_url: Some("http://localhost:8080/api".into()),
            ..Default::default()
        };
        let client = config.client_builder("abc".into()).build().unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api");
    }
}
