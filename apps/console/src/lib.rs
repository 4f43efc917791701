//! # BeautyData Console
//!
//! Inventory console for the BeautyData `/productos` API: a ratatui TUI with
//! inventory, create and edit tabs, plus headless subcommands for scripts.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        beauty-console                                   │
//! │                                                                         │
//! │  main.rs (clap) ──► config ──► logging ──► ApiClient                    │
//! │        │                                                                │
//! │        ├── no subcommand ──► tui::run ──► App (event loop)              │
//! │        │                                   │                            │
//! │        │                                   ▼                            │
//! │        │                      Controller { ProductStore, UiState }      │
//! │        │                                   │                            │
//! │        └── list/get/stats/ping ──► commands ──► ProductBackend          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod state;
pub mod tui;

#[cfg(test)]
mod testing;

pub use config::ConsoleConfig;
pub use controller::{Controller, Operation};
pub use error::{AppError, AppResult, ConfigError};

/// Console version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
