use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured backend address.
pub const SERVER_URL_ENV: &str = "MATCHA_SERVER_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5002".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the platform config dir. On first run the
    /// defaults are written out so there is a file to edit; a malformed
    /// file is ignored in favor of the defaults. The `MATCHA_SERVER_URL`
    /// environment variable wins over both.
    pub fn load() -> Self {
        let path = Self::config_path();
        Self::load_from(path.as_deref(), std::env::var(SERVER_URL_ENV).ok())
    }

    fn load_from(path: Option<&Path>, env_url: Option<String>) -> Self {
        let mut config = match path {
            Some(path) if path.exists() => {
                Self::read_file(path).unwrap_or_default()
            }
            Some(path) => {
                let config = Self::default();
                if let Err(err) = config.save_to(path) {
                    log::warn!("Failed to write default config: {err}");
                }
                config
            }
            None => Self::default(),
        };

        if let Some(url) = env_url.filter(|url| !url.is_empty()) {
            config.server_url = url;
        }
        config
    }

    fn read_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                log::warn!("Ignoring malformed config file: {err}");
                None
            }
        }
    }

    fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("matcha-viewer").join("config.json"))
    }
}
