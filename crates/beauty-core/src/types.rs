//! # Domain Types
//!
//! Product types shared by the API client and the console.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   normalize()   ┌─────────────────┐               │
//! │  │  ProductDraft   │ ──────────────► │ ProductPayload  │ ── POST/PUT ─┐ │
//! │  │  (raw text)     │                 │ (typed, no cod) │              │ │
//! │  └─────────────────┘                 └─────────────────┘              │ │
//! │          ▲                                                            │ │
//! │          │ from_product()            ┌─────────────────┐              │ │
//! │          └────────────────────────── │    Product      │ ◄────────────┘ │
//! │                                      │  cod (server)   │   canonical    │
//! │                                      └─────────────────┘   record       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Names
//! The backend speaks Spanish (`nombre`, `precio_de_venta`, `estado`...).
//! Rust code uses English field names; serde renames bridge the two.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{CoreResult, ValidationError};
use crate::validation;
use crate::DEFAULT_STATUS;

// =============================================================================
// Product Status
// =============================================================================

/// The `estado` of a product.
///
/// The backend stores a free string (max 20 chars) but the console only ever
/// offers `Activo` and `Inactivo`. Anything else coming from the server is
/// kept verbatim in [`ProductStatus::Other`] so it survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    /// `Activo`
    #[default]
    Active,
    /// `Inactivo`
    Inactive,
    /// Any other value stored by the backend.
    Other(String),
}

impl ProductStatus {
    /// The wire string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            ProductStatus::Active => DEFAULT_STATUS,
            ProductStatus::Inactive => "Inactivo",
            ProductStatus::Other(s) => s,
        }
    }

    /// Cycles `Activo` ⇄ `Inactivo` (form select behaviour).
    /// Unknown values cycle back to `Activo`.
    pub fn toggled(&self) -> Self {
        match self {
            ProductStatus::Active => ProductStatus::Inactive,
            _ => ProductStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ProductStatus::Active)
    }
}

impl From<String> for ProductStatus {
    fn from(value: String) -> Self {
        match value.trim() {
            "" | DEFAULT_STATUS => ProductStatus::Active,
            "Inactivo" => ProductStatus::Inactive,
            other => ProductStatus::Other(other.to_string()),
        }
    }
}

impl From<&str> for ProductStatus {
    fn from(value: &str) -> Self {
        ProductStatus::from(value.to_string())
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry as returned by the backend.
///
/// ## Tolerant Decoding
/// Numeric fields accept numbers, numeric strings or `null`; anything that is
/// not a number decodes as `0`. One odd legacy row must not make the whole
/// `GET /productos` response unusable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier. Never set by the client.
    pub cod: i64,

    #[serde(rename = "nombre", default)]
    pub name: String,

    #[serde(rename = "categoria", default)]
    pub category: String,

    #[serde(rename = "descripcion", default)]
    pub description: String,

    /// Purchase price (`precio_de_compra`).
    #[serde(rename = "precio_de_compra", default, deserialize_with = "lenient_f64")]
    pub purchase_price: f64,

    /// Sale price (`precio_de_venta`).
    #[serde(rename = "precio_de_venta", default, deserialize_with = "lenient_f64")]
    pub sale_price: f64,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub stock: i64,

    #[serde(rename = "proveedor", default)]
    pub supplier: String,

    #[serde(rename = "estado", default)]
    pub status: ProductStatus,
}

impl Product {
    /// Unit margin: sale price minus purchase price.
    #[inline]
    pub fn margin(&self) -> f64 {
        self.sale_price - self.purchase_price
    }

    /// Picker label, e.g. `#12 - Labial rojo`.
    pub fn label(&self) -> String {
        format!("#{} - {}", self.cod, self.name)
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(numeric).unwrap_or(0.0))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(other) => numeric(&other).map(|f| f as i64),
        None => None,
    };
    Ok(parsed.unwrap_or(0))
}

// =============================================================================
// Product Payload
// =============================================================================

/// Body of `POST /productos` and `PUT /productos/{cod}`.
///
/// Identical to [`Product`] minus `cod`, which the server assigns on create
/// and which travels in the URL path on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio_de_compra")]
    pub purchase_price: f64,
    #[serde(rename = "precio_de_venta")]
    pub sale_price: f64,
    pub stock: i64,
    #[serde(rename = "proveedor")]
    pub supplier: String,
    #[serde(rename = "estado")]
    pub status: ProductStatus,
}

impl ProductPayload {
    /// The record the server is expected to return for this payload.
    pub fn into_product(self, cod: i64) -> Product {
        Product {
            cod,
            name: self.name,
            category: self.category,
            description: self.description,
            purchase_price: self.purchase_price,
            sale_price: self.sale_price,
            stock: self.stock,
            supplier: self.supplier,
            status: self.status,
        }
    }
}

// =============================================================================
// Draft Fields
// =============================================================================

/// One editable field of a product form.
///
/// Order of [`DraftField::ALL`] is the on-screen order of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Category,
    Description,
    PurchasePrice,
    SalePrice,
    Stock,
    Supplier,
    Status,
}

impl DraftField {
    pub const ALL: [DraftField; 8] = [
        DraftField::Name,
        DraftField::Category,
        DraftField::Description,
        DraftField::PurchasePrice,
        DraftField::SalePrice,
        DraftField::Stock,
        DraftField::Supplier,
        DraftField::Status,
    ];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Nombre",
            DraftField::Category => "Categoria",
            DraftField::Description => "Descripcion",
            DraftField::PurchasePrice => "Compra",
            DraftField::SalePrice => "Venta",
            DraftField::Stock => "Stock",
            DraftField::Supplier => "Proveedor",
            DraftField::Status => "Estado",
        }
    }

    /// Name of the JSON field this maps to.
    pub fn wire_name(self) -> &'static str {
        match self {
            DraftField::Name => "nombre",
            DraftField::Category => "categoria",
            DraftField::Description => "descripcion",
            DraftField::PurchasePrice => "precio_de_compra",
            DraftField::SalePrice => "precio_de_venta",
            DraftField::Stock => "stock",
            DraftField::Supplier => "proveedor",
            DraftField::Status => "estado",
        }
    }

    /// Whether the field holds a number (drives input filtering in the UI).
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            DraftField::PurchasePrice | DraftField::SalePrice | DraftField::Stock
        )
    }

    /// Whether the field must be non-empty after trimming.
    pub fn is_required(self) -> bool {
        !matches!(self, DraftField::Description | DraftField::Status)
    }

    pub fn next(self) -> DraftField {
        let idx = Self::index_of(self);
        DraftField::ALL[(idx + 1) % DraftField::ALL.len()]
    }

    pub fn prev(self) -> DraftField {
        let idx = Self::index_of(self);
        DraftField::ALL[(idx + DraftField::ALL.len() - 1) % DraftField::ALL.len()]
    }

    fn index_of(field: DraftField) -> usize {
        DraftField::ALL.iter().position(|&f| f == field).unwrap_or(0)
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// User-edited, not-yet-submitted form values.
///
/// Every field is raw text exactly as typed; nothing is parsed until
/// [`ProductDraft::normalize`] runs at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub purchase_price: String,
    pub sale_price: String,
    pub stock: String,
    pub supplier: String,
    pub status: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        ProductDraft {
            name: String::new(),
            category: String::new(),
            description: String::new(),
            purchase_price: String::new(),
            sale_price: String::new(),
            stock: String::new(),
            supplier: String::new(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

impl ProductDraft {
    /// Pre-fills a draft from an existing product (edit flow).
    pub fn from_product(product: &Product) -> Self {
        ProductDraft {
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.description.clone(),
            purchase_price: product.purchase_price.to_string(),
            sale_price: product.sale_price.to_string(),
            stock: product.stock.to_string(),
            supplier: product.supplier.clone(),
            status: product.status.as_str().to_string(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::Description => &self.description,
            DraftField::PurchasePrice => &self.purchase_price,
            DraftField::SalePrice => &self.sale_price,
            DraftField::Stock => &self.stock,
            DraftField::Supplier => &self.supplier,
            DraftField::Status => &self.status,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Category => &mut self.category,
            DraftField::Description => &mut self.description,
            DraftField::PurchasePrice => &mut self.purchase_price,
            DraftField::SalePrice => &mut self.sale_price,
            DraftField::Stock => &mut self.stock,
            DraftField::Supplier => &mut self.supplier,
            DraftField::Status => &mut self.status,
        }
    }

    /// Flips `estado` between `Activo` and `Inactivo`.
    pub fn toggle_status(&mut self) {
        let next = ProductStatus::from(self.status.as_str()).toggled();
        self.status = next.as_str().to_string();
    }

    /// Validates and converts the draft into a request payload.
    ///
    /// See [`validation::normalize_draft`] for the rules.
    pub fn normalize(&self) -> CoreResult<ProductPayload> {
        validation::normalize_draft(self).map_err(Into::into)
    }

    /// Same as [`normalize`](Self::normalize) but keeps the field error.
    pub fn validate(&self) -> Result<ProductPayload, ValidationError> {
        validation::normalize_draft(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
