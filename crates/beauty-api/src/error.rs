//! # API Error Types
//!
//! Error types for calls to the BeautyData backend.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / non-2xx response                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (this module) ← extracts the backend's `detail`              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Controller ← "No se pudo crear: " + user_message()                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Status banner                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Backend Error Bodies
//! FastAPI answers errors as `{"detail": ...}` where `detail` is either a
//! string (`HTTPException`) or a list of validation issues
//! (`[{"loc": [...], "msg": "...", "type": "..."}]`) for 422 responses.

use serde_json::Value;
use thiserror::Error;

/// Backend call failures.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    ///
    /// ## When This Occurs
    /// - Backend not running (connection refused)
    /// - DNS failure
    /// - Request timeout
    #[error("Error de red: {0}")]
    Transport(String),

    /// Non-success HTTP status.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("sin detalle"))]
    Status {
        status: u16,
        /// Message extracted from the body's `detail` field.
        detail: Option<String>,
    },

    /// 404 on a by-id endpoint.
    #[error("Producto con ID {cod} no encontrado")]
    NotFound { cod: i64, detail: Option<String> },

    /// The body was not the JSON we expected.
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),

    /// The configured base URL is unusable.
    #[error("URL de API inválida: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Text surfaced in the status banner.
    ///
    /// The backend's `detail` wins when present, verbatim; otherwise the
    /// transport or status description.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            }
            | ApiError::NotFound {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status {
                status,
                detail: None,
            } => format!("El servidor respondió con el código {status}"),
            other => other.to_string(),
        }
    }

    /// True for 404s, whichever endpoint produced them.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound { .. } | ApiError::Status { status: 404, .. }
        )
    }

    /// True when the backend could not be reached at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Extracts a human-readable message from an error body.
///
/// ## Rules
/// ```text
/// {"detail": "Producto con ID 9 no encontrado"}  → that string
/// {"detail": [{"msg": "a"}, {"msg": "b"}]}         → "a; b"
/// {"detail": {...}} / {"detail": 3}               → its JSON text
/// anything else                                   → None
/// ```
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Convert reqwest errors to ApiError.
///
/// ```text
/// decode errors  → ApiError::Decode
/// builder errors → ApiError::InvalidUrl
/// everything else (connect, timeout, body) → ApiError::Transport
/// ```
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidUrl(err.to_string())
        } else if err.is_timeout() {
            ApiError::Transport(format!("tiempo de espera agotado ({err})"))
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string_detail() {
        let body = r#"{"detail":"Producto con ID 9 no encontrado"}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("Producto con ID 9 no encontrado")
        );
    }

    #[test]
    fn test_extract_validation_array() {
        let body = r#"{"detail":[
            {"loc":["body","nombre"],"msg":"Value error, El campo no puede estar vacío","type":"value_error"},
            {"loc":["body","stock"],"msg":"Input should be greater than or equal to 0","type":"greater_than_equal"}
        ]}"#;
        assert_eq!(
            extract_detail(body).as_deref(),
            Some("Value error, El campo no puede estar vacío; Input should be greater than or equal to 0")
        );
    }

    #[test]
    fn test_extract_detail_absent_or_not_json() {
        assert_eq!(extract_detail(r#"{"error":"boom"}"#), None);
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(""), None);
        assert_eq!(extract_detail(r#"{"detail":null}"#), None);
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::NotFound {
            cod: 9,
            detail: Some("Producto con ID 9 no encontrado".into()),
        };
        assert_eq!(err.user_message(), "Producto con ID 9 no encontrado");
        assert!(err.is_not_found());

        let err = ApiError::Status {
            status: 500,
            detail: None,
        };
        assert_eq!(
            err.user_message(),
            "El servidor respondió con el código 500"
        );

        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.user_message(), "Error de red: connection refused");
        assert!(err.is_transport());
    }
}
