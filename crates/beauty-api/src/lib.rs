//! # beauty-api: REST Client for BeautyData
//!
//! Typed access to the backend's `/productos` endpoints.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      BeautyData Data Flow                               │
//! │                                                                         │
//! │  Controller (create / update / delete / load / search)                 │
//! │       │                                                                 │
//! │       ▼  ProductBackend (trait)                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   beauty-api (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐    ┌────────────┐  │   │
//! │  │   │   ApiClient   │    │ ProductRepository│    │  ApiError  │  │   │
//! │  │   │  (client.rs)  │◄───│  list / get      │    │  detail    │  │   │
//! │  │   │ reqwest + URL │    │  create / update │    │  extraction│  │   │
//! │  │   │   timeout     │    │  delete          │    │            │  │   │
//! │  │   └───────────────┘    └──────────────────┘    └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  FastAPI backend (external) ── http://127.0.0.1:8000/productos         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use beauty_api::{ApiClient, ApiConfig};
//!
//! let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:8000"))?;
//! let products = client.products().list().await?;
//! let one = client.products().get(1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod backend;
pub mod client;
pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use backend::ProductBackend;
pub use client::{ApiClient, ApiConfig};
pub use error::{ApiError, ApiResult};
pub use repository::product::ProductRepository;
