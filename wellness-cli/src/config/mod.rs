use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "WELLNESS_API_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    /// File this configuration was loaded from; `None` means the default location
    #[serde(skip)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Saved login session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub token: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.wellness/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".wellness"))
    }

    /// Get default config file path (~/.wellness/config.toml)
    pub fn default_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path this configuration reads from and saves to
    pub fn file(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Self::default_file(),
        }
    }

    /// Load configuration from `path`, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_file()?,
        };

        let mut config = if file.exists() {
            let contents = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read config file {}", file.display()))?;
            toml::from_str::<Config>(&contents).context("Failed to parse config file")?
        } else {
            tracing::info!("Config file not found, using defaults");
            Self::default()
        };

        config.path = path.map(Path::to_path_buf);
        Ok(config)
    }

    /// Default settings that save to `path`
    pub fn defaults_at(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            ..Self::default()
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let file = self.file()?;

        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&file, contents).context("Failed to write config file")?;

        tracing::debug!("Saved configuration to {}", file.display());
        Ok(())
    }

    /// Apply the base URL override, flag first then environment
    pub fn override_base_url(&mut self, flag: Option<String>, env: Option<String>) {
        if let Some(url) = flag.or(env).filter(|u| !u.trim().is_empty()) {
            tracing::debug!("Using API base URL {}", url);
            self.api.base_url = url;
        }
    }

    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        !self.auth.token.is_empty()
    }

    pub fn session_token(&self) -> Option<&str> {
        if self.is_authenticated() {
            Some(&self.auth.token)
        } else {
            None
        }
    }

    pub fn set_token(&mut self, token: String) {
        self.auth.token = token;
    }

    pub fn clear_token(&mut self) {
        self.auth.token.clear();
    }
}
