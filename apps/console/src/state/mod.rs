//! # State Module
//!
//! In-memory state of the console, owned by the [`Controller`](crate::controller::Controller).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌───────────────────────────────────────────┐   │
//! │  │  ProductStore    │  │  UiState                                  │   │
//! │  │                  │  │                                           │   │
//! │  │  Vec<Product>    │  │  tab, theme, status banner                │   │
//! │  │  (server copy)   │  │  create / edit FormState                  │   │
//! │  │                  │  │  search box + result, pending delete      │   │
//! │  └──────────────────┘  └───────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Single owner: the event loop. No locks needed.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod form;
mod store;
mod ui;

pub use form::FormState;
pub use store::ProductStore;
pub use ui::{StatusMessage, Tab, Theme, UiState};
