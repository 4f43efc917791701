//! # beauty-core: Pure Domain Logic for BeautyData
//!
//! Everything the console knows about products that does not touch the
//! network or the terminal lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      BeautyData Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Console (ratatui TUI / CLI)                    │   │
//! │  │   Inventory tab ──► New Product tab ──► Edit Product tab        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Controller                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ beauty-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐    ┌─────────────┐    ┌───────────┐             │   │
//! │  │   │   types   │    │ validation  │    │   stats   │             │   │
//! │  │   │  Product  │    │  drafts ──► │    │ count     │             │   │
//! │  │   │  Draft    │    │  payloads   │    │ stock     │             │   │
//! │  │   │  Status   │    │             │    │ margin    │             │   │
//! │  │   └───────────┘    └─────────────┘    └───────────┘             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 beauty-api (REST client)                        │   │
//! │  │              GET/POST/PUT/DELETE /productos                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductPayload, ProductDraft, ProductStatus
//! - [`validation`] - Draft normalization (trim, strict numeric parsing)
//! - [`stats`] - Inventory statistics over a product list
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use beauty_core::{compute_stats, ProductDraft};
//!
//! let mut draft = ProductDraft::default();
//! draft.name = "  Labial rojo ".to_string();
//! draft.category = "labios".to_string();
//! draft.supplier = "Proveedor XYZ".to_string();
//! draft.purchase_price = "2.50".to_string();
//! draft.sale_price = "3.50".to_string();
//! draft.stock = "100".to_string();
//!
//! let payload = draft.normalize().unwrap();
//! assert_eq!(payload.name, "Labial rojo");
//! assert_eq!(payload.stock, 100);
//!
//! let stats = compute_stats(&[]);
//! assert_eq!(stats.total, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod stats;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use stats::{compute_stats, format_price, truncate, InventoryStats};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Status assigned when the draft leaves `estado` blank.
pub const DEFAULT_STATUS: &str = "Activo";
