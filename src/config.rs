use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::favorites::DEFAULT_PAGE_SIZE;
use crate::omdb::DEFAULT_BASE_URL;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OmdbConfig {
    #[serde(default)]
    pub apikey: Option<String>,
    #[serde(default = "default_baseurl")]
    pub baseurl: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            apikey: None,
            baseurl: default_baseurl(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FavoritesConfig {
    #[serde(default = "default_favorites_file")]
    pub file: String,
    #[serde(default = "default_page_size")]
    pub pagesize: u32,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            file: default_favorites_file(),
            pagesize: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default = "default_cors_origin")]
    pub origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: default_cors_origin(),
        }
    }
}

fn default_port() -> String {
    "3001".to_string()
}

fn default_baseurl() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_favorites_file() -> String {
    "data/favorites.json".to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_cors_origin() -> String {
    "http://localhost:3000".to_string()
}

impl Config {
    /// Load `path` if it exists, fall back to defaults if it does not, then
    /// apply environment overrides and check required settings.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            Config::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;
        Self::from_yaml(path, &content)
    }

    pub fn from_yaml(path: &str, content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }

    /// Environment variables win over the config file.
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var("OMDB_API_KEY") {
            self.omdb.apikey = Some(key);
        }
        if let Some(port) = var("PORT") {
            self.listen.port = port;
        }
        if let Some(origin) = var("CORS_ORIGIN") {
            self.cors.origin = origin;
        }
        if let Some(file) = var("FAVORITES_FILE") {
            self.favorites.file = file;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.omdb.apikey.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {}
            _ => return Err(ConfigError::MissingApiKey),
        }
        if !(1..=crate::favorites::MAX_PAGE_SIZE).contains(&self.favorites.pagesize) {
            return Err(ConfigError::Invalid(format!(
                "favorites.pagesize must be between 1 and {}",
                crate::favorites::MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }

    pub fn favorites_path(&self) -> PathBuf {
        PathBuf::from(&self.favorites.file)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("OMDB_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
