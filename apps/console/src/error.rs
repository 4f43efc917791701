//! # Console Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Startup / headless commands          TUI actions                      │
//! │  ───────────────────────────          ───────────                      │
//! │                                                                         │
//! │  ConfigError ──┐                      ApiError / ValidationError       │
//! │  ApiError ─────┼──► AppError ──► main       │                          │
//! │  io::Error ────┘    (anyhow at the edge)    ▼                          │
//! │                                        StatusMessage::Error            │
//! │                                        (never leaves the event loop)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

use beauty_api::ApiError;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_shows_backend_detail() {
        let err = AppError::from(ApiError::NotFound {
            cod: 3,
            detail: Some("Producto con ID 3 no encontrado".into()),
        });
        assert_eq!(err.to_string(), "Producto con ID 3 no encontrado");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err = AppError::from(ConfigError::InvalidUrl("ftp://x".into()));
        assert_eq!(err.to_string(), "Invalid API URL: ftp://x");
    }
}
