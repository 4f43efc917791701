//! # Repository Module
//!
//! Resource-oriented handles over the backend's REST endpoints.
//!
//! ```text
//! Controller
//!      │
//!      │  client.products().get(7)
//!      ▼
//! ProductRepository
//! ├── list()            GET    /productos
//! ├── get(cod)          GET    /productos/{cod}
//! ├── create(payload)   POST   /productos
//! ├── update(cod, p)    PUT    /productos/{cod}
//! └── delete(cod)       DELETE /productos/{cod}
//!      │
//!      ▼
//! FastAPI backend
//! ```

pub mod product;
