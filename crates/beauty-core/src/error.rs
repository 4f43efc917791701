//! # Error Types
//!
//! Domain-specific error types for beauty-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  beauty-core errors (this file)                                        │
//! │  ├── CoreError        - Domain errors                                  │
//! │  └── ValidationError  - Draft field failures                           │
//! │                                                                         │
//! │  beauty-api errors (separate crate)                                    │
//! │  └── ApiError         - Transport / HTTP status / decode failures      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError ──┐                                 │
//! │        ApiError ─────────────────────┴──► status banner message        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are in Spanish: they are shown verbatim in the console's status
//! banner, next to the backend's own (Spanish) `detail` strings.

use thiserror::Error;

use crate::types::DraftField;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised by the console before any request is sent.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The product is not in the locally loaded list.
    ///
    /// ## When This Occurs
    /// - Picking a product for edit after a refresh removed it
    /// - A stale row selection after a delete
    #[error("Producto {0} no está en la lista cargada")]
    ProductNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Draft validation errors.
///
/// Raised while turning a [`ProductDraft`](crate::ProductDraft) into a
/// [`ProductPayload`](crate::ProductPayload), or while parsing a search id.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is empty after trimming.
    #[error("{} es obligatorio", .field.label())]
    Required { field: DraftField },

    /// A numeric field does not parse.
    #[error("{} debe ser un número válido (recibido '{value}')", .field.label())]
    InvalidNumber { field: DraftField, value: String },

    /// A numeric field is below zero.
    #[error("{} no puede ser negativo", .field.label())]
    Negative { field: DraftField },

    /// Product id is not a positive integer.
    #[error("El ID debe ser un número entero positivo.")]
    InvalidId { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
