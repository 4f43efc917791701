//! # Console Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --api-url http://host:8000   --light                               │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     BEAUTYDATA_API_URL=http://host:8000                                │
//! │     BEAUTYDATA_TIMEOUT_SECS=5                                          │
//! │     BEAUTYDATA_THEME=light                                             │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/beautydata/console.toml (Linux)                          │
//! │     ~/Library/Application Support/com.beautydata.console/... (macOS)   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     http://127.0.0.1:8000, 10s timeout, dark theme                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # console.toml
//! [api]
//! base_url = "http://127.0.0.1:8000"
//! timeout_secs = 10
//!
//! [ui]
//! theme = "dark"      # dark | light
//! tick_rate_ms = 250
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use beauty_api::client::DEFAULT_BASE_URL;
use beauty_api::ApiConfig;

use crate::error::{ConfigError, ConfigResult};
use crate::state::Theme;

pub const ENV_API_URL: &str = "BEAUTYDATA_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "BEAUTYDATA_TIMEOUT_SECS";
pub const ENV_THEME: &str = "BEAUTYDATA_THEME";

// =============================================================================
// Sections
// =============================================================================

/// `[api]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Backend root URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[ui]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default)]
    pub theme: Theme,

    /// Redraw interval of the event loop (milliseconds).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            theme: Theme::default(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

// =============================================================================
// ConsoleConfig
// =============================================================================

/// Complete console configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl ConsoleConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (console.toml); a missing file is not an error
    /// 3. Environment variables
    ///
    /// Command-line flags are applied by the caller afterwards, followed by
    /// [`validate`](Self::validate).
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parses a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading console config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `BEAUTYDATA_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides read through `lookup` (the environment in production).
    ///
    /// Unparseable values are logged and ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            match secs.trim().parse::<u64>() {
                Ok(s) => self.api.timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric {}", ENV_TIMEOUT_SECS),
            }
        }

        if let Some(theme) = lookup(ENV_THEME) {
            match theme.parse() {
                Ok(parsed) => self.ui.theme = parsed,
                Err(e) => warn!(error = %e, "Ignoring {}", ENV_THEME),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = Url::parse(self.api.base_url.trim())
            .map_err(|e| ConfigError::InvalidUrl(format!("'{}': {}", self.api.base_url, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_rate_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Client settings derived from the `[api]` section.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api.base_url.trim()).timeout(Duration::from_secs(self.api.timeout_secs))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("console.toml"))
    }
}

/// Platform directories for config and logs.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "beautydata", "console")
}
