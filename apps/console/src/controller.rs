//! # View Controller
//!
//! Owns the product store and UI state and turns user operations into
//! backend requests.
//!
//! ## Request Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Operation Lifecycle                                  │
//! │                                                                         │
//! │  key press ──► Operation::Create                                       │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  1. dispatch(op) ── validate draft ── invalid? ──► StatusMessage::Error │
//! │        │                               (no request issued)              │
//! │        ▼                                                                │
//! │     PendingRequest { seq: 7, Request::Create(payload) }                 │
//! │        │                                                                │
//! │        ▼  (spawned task in the TUI, awaited inline by `run`)            │
//! │  2. execute(backend, pending) ──► HTTP ──► Completion { seq: 7, .. }    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  3. complete(completion) ── patch store, reset draft, set status        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overlapping Requests
//! Every request gets a sequence number. A `Load` or `Search` completion
//! older than the latest one issued of the same kind is dropped, so a slow
//! response can never overwrite newer data. Mutations always apply: each
//! one patches a single record by `cod`.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info, warn};

use beauty_api::{ApiResult, ProductBackend};
use beauty_core::validation::parse_product_id;
use beauty_core::{InventoryStats, Product, ProductPayload};

use crate::state::{ProductStore, StatusMessage, Tab, UiState};

// =============================================================================
// Status Messages
// =============================================================================

pub const MSG_LOADED: &str = "Productos cargados.";
pub const MSG_CREATED: &str = "Producto creado.";
pub const MSG_UPDATED: &str = "Producto actualizado.";
pub const MSG_DELETED: &str = "Producto eliminado.";
pub const MSG_FOUND: &str = "Producto encontrado.";
pub const MSG_SELECT_FOR_EDIT: &str = "Selecciona un producto para editar.";
pub const MSG_SEARCH_EMPTY: &str = "Introduce un ID para buscar.";

pub const PREFIX_LOAD: &str = "No se pudo cargar: ";
pub const PREFIX_CREATE: &str = "No se pudo crear: ";
pub const PREFIX_UPDATE: &str = "No se pudo actualizar: ";
pub const PREFIX_DELETE: &str = "No se pudo eliminar: ";
pub const PREFIX_SEARCH: &str = "No encontrado: ";

// =============================================================================
// Operations and Requests
// =============================================================================

/// User-level operations that may reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Full reload of the catalog.
    Load,
    /// Submit the create form.
    Create,
    /// Submit the edit form.
    Update,
    /// Confirm the pending delete.
    ConfirmDelete,
    /// Look up the id typed in the search box.
    Search,
}

/// A validated backend call, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Load,
    Search { cod: i64 },
    Create { payload: ProductPayload },
    Update { cod: i64, payload: ProductPayload },
    Delete { cod: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub seq: u64,
    pub request: Request,
}

/// What came back from the backend.
#[derive(Debug, Clone)]
pub enum Outcome {
    Loaded(ApiResult<Vec<Product>>),
    Found(ApiResult<Product>),
    Created(ApiResult<Product>),
    Updated(ApiResult<Product>),
    Deleted { cod: i64, result: ApiResult<()> },
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub seq: u64,
    pub outcome: Outcome,
}

/// Performs the HTTP call for `pending`.
///
/// Takes no controller state so the TUI can run it on a spawned task.
pub async fn execute<B>(backend: &B, pending: PendingRequest) -> Completion
where
    B: ProductBackend + ?Sized,
{
    let PendingRequest { seq, request } = pending;
    let outcome = match request {
        Request::Load => Outcome::Loaded(backend.list_products().await),
        Request::Search { cod } => Outcome::Found(backend.get_product(cod).await),
        Request::Create { payload } => Outcome::Created(backend.create_product(&payload).await),
        Request::Update { cod, payload } => {
            Outcome::Updated(backend.update_product(cod, &payload).await)
        }
        Request::Delete { cod } => Outcome::Deleted {
            cod,
            result: backend.delete_product(cod).await,
        },
    };
    Completion { seq, outcome }
}

// =============================================================================
// Controller
// =============================================================================

/// Store, UI state and in-flight bookkeeping.
pub struct Controller<B: ProductBackend> {
    backend: Arc<B>,
    store: ProductStore,
    ui: UiState,
    next_seq: u64,
    latest_load: u64,
    latest_search: u64,
    in_flight: HashSet<u64>,
}

impl<B: ProductBackend> Controller<B> {
    pub fn new(backend: B, ui: UiState) -> Self {
        Controller {
            backend: Arc::new(backend),
            store: ProductStore::new(),
            ui,
            next_seq: 1,
            latest_load: 0,
            latest_search: 0,
            in_flight: HashSet::new(),
        }
    }

    pub fn backend(&self) -> Arc<B> {
        Arc::clone(&self.backend)
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    pub fn stats(&self) -> InventoryStats {
        self.store.stats()
    }

    /// True while any request is in flight.
    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Validates `op` against current state and issues a request for it.
    ///
    /// Returns `None` when validation fails; the status banner then already
    /// carries the reason and nothing was sent.
    pub fn dispatch(&mut self, op: Operation) -> Option<PendingRequest> {
        let request = match op {
            Operation::Load => Request::Load,
            Operation::Create => self.create_request()?,
            Operation::Update => self.update_request()?,
            Operation::ConfirmDelete => self.delete_request()?,
            Operation::Search => self.search_request()?,
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        match request {
            Request::Load => self.latest_load = seq,
            Request::Search { .. } => self.latest_search = seq,
            _ => {}
        }
        self.in_flight.insert(seq);

        debug!(seq, ?op, "Request issued");
        Some(PendingRequest { seq, request })
    }

    fn create_request(&mut self) -> Option<Request> {
        match self.ui.create.draft().validate() {
            Ok(payload) => Some(Request::Create { payload }),
            Err(e) => {
                self.set_error(PREFIX_CREATE, e.to_string());
                None
            }
        }
    }

    fn update_request(&mut self) -> Option<Request> {
        let Some(cod) = self.ui.edit.target() else {
            self.ui.status = StatusMessage::Error(MSG_SELECT_FOR_EDIT.to_string());
            return None;
        };
        match self.ui.edit.draft().validate() {
            Ok(payload) => Some(Request::Update { cod, payload }),
            Err(e) => {
                self.set_error(PREFIX_UPDATE, e.to_string());
                None
            }
        }
    }

    fn delete_request(&mut self) -> Option<Request> {
        let cod = self.ui.pending_delete?;
        Some(Request::Delete { cod })
    }

    fn search_request(&mut self) -> Option<Request> {
        if self.ui.search.is_blank() {
            self.ui.status = StatusMessage::Error(MSG_SEARCH_EMPTY.to_string());
            return None;
        }
        match parse_product_id(self.ui.search.text()) {
            Ok(cod) => Some(Request::Search { cod }),
            Err(e) => {
                self.ui.status = StatusMessage::Error(e.to_string());
                None
            }
        }
    }

    // -------------------------------------------------------------------------
    // Completion
    // -------------------------------------------------------------------------

    /// Applies a finished request to store and status.
    pub fn complete(&mut self, completion: Completion) {
        let Completion { seq, outcome } = completion;
        self.in_flight.remove(&seq);

        match outcome {
            Outcome::Loaded(result) => {
                if seq < self.latest_load {
                    debug!(seq, latest = self.latest_load, "Dropping stale load");
                    return;
                }
                self.on_loaded(result);
            }
            Outcome::Found(result) => {
                if seq < self.latest_search {
                    debug!(seq, latest = self.latest_search, "Dropping stale search");
                    return;
                }
                self.on_found(result);
            }
            Outcome::Created(result) => self.on_created(result),
            Outcome::Updated(result) => self.on_updated(result),
            Outcome::Deleted { cod, result } => self.on_deleted(cod, result),
        }
    }

    fn on_loaded(&mut self, result: ApiResult<Vec<Product>>) {
        match result {
            Ok(products) => {
                info!(count = products.len(), "Catalog loaded");
                self.store.replace_all(products);
                self.ui.clamp_selection(self.store.len());
                self.ui.last_loaded = Some(Local::now());
                self.set_success(MSG_LOADED);
            }
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                self.set_error(PREFIX_LOAD, e.user_message());
            }
        }
    }

    fn on_found(&mut self, result: ApiResult<Product>) {
        match result {
            Ok(product) => {
                if let Some(row) = self.store.position(product.cod) {
                    self.ui.selected_row = row;
                }
                self.ui.search_result = Some(product);
                self.set_success(MSG_FOUND);
            }
            Err(e) => {
                self.ui.search_result = None;
                self.set_error(PREFIX_SEARCH, e.user_message());
            }
        }
    }

    fn on_created(&mut self, result: ApiResult<Product>) {
        match result {
            Ok(product) => {
                info!(cod = product.cod, "Product created");
                self.store.prepend(product);
                self.ui.create.reset();
                self.set_success(MSG_CREATED);
            }
            Err(e) => {
                warn!(error = %e, "Create failed");
                self.set_error(PREFIX_CREATE, e.user_message());
            }
        }
    }

    fn on_updated(&mut self, result: ApiResult<Product>) {
        match result {
            Ok(product) => {
                info!(cod = product.cod, "Product updated");
                if let Some(found) = self.ui.search_result.as_mut() {
                    if found.cod == product.cod {
                        *found = product.clone();
                    }
                }
                if !self.store.replace(product) {
                    debug!("Updated product was not in the loaded list");
                }
                self.ui.edit.reset();
                self.set_success(MSG_UPDATED);
            }
            Err(e) => {
                warn!(error = %e, "Update failed");
                self.set_error(PREFIX_UPDATE, e.user_message());
            }
        }
    }

    fn on_deleted(&mut self, cod: i64, result: ApiResult<()>) {
        if self.ui.pending_delete == Some(cod) {
            self.ui.pending_delete = None;
            self.ui.confirm_focused = false;
        }

        match result {
            Ok(()) => {
                info!(cod, "Product deleted");
                self.store.remove(cod);
                self.ui.clamp_selection(self.store.len());
                if self.ui.edit.target() == Some(cod) {
                    self.ui.edit.reset();
                }
                if self.ui.search_result.as_ref().map(|p| p.cod) == Some(cod) {
                    self.ui.search_result = None;
                }
                self.set_success(MSG_DELETED);
            }
            Err(e) => {
                warn!(cod, error = %e, "Delete failed");
                self.set_error(PREFIX_DELETE, e.user_message());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Local-only operations
    // -------------------------------------------------------------------------

    /// Opens the delete confirmation for `cod`.
    pub fn request_delete(&mut self, cod: i64) {
        self.ui.pending_delete = Some(cod);
        self.ui.confirm_focused = false;
    }

    /// Closes the confirmation without touching the backend.
    pub fn cancel_delete(&mut self) {
        self.ui.pending_delete = None;
        self.ui.confirm_focused = false;
    }

    /// Copies a loaded product into the edit form and shows the Edit tab.
    ///
    /// Returns `false` if `cod` is not in the store.
    pub fn start_edit(&mut self, cod: i64) -> bool {
        let Some(product) = self.store.find(cod) else {
            return false;
        };
        self.ui.edit.load(product);
        self.ui.tab = Tab::Edit;
        true
    }

    /// Edit picker "none" entry.
    pub fn clear_edit(&mut self) {
        self.ui.edit.reset();
    }

    /// Moves the edit picker one entry forward (`delta > 0`) or back.
    ///
    /// The picker cycles through "none" followed by every loaded product.
    pub fn cycle_edit_target(&mut self, delta: isize) {
        let len = self.store.len() as isize + 1;
        let current = self
            .ui
            .edit
            .target()
            .and_then(|cod| self.store.position(cod))
            .map(|i| i as isize + 1)
            .unwrap_or(0);
        let next = (current + delta).rem_euclid(len) as usize;

        match next.checked_sub(1).and_then(|i| self.store.get(i)) {
            Some(product) => {
                let cod = product.cod;
                self.start_edit(cod);
            }
            None => self.clear_edit(),
        }
    }

    pub fn dismiss_status(&mut self) {
        self.ui.status = StatusMessage::Idle;
    }

    /// Product under the inventory row cursor.
    pub fn selected_product(&self) -> Option<&Product> {
        self.store.get(self.ui.selected_row)
    }

    fn set_success(&mut self, message: &str) {
        self.ui.status = StatusMessage::Success(message.to_string());
    }

    fn set_error(&mut self, prefix: &str, message: String) {
        self.ui.status = StatusMessage::Error(format!("{prefix}{message}"));
    }

    // -------------------------------------------------------------------------
    // Inline execution
    // -------------------------------------------------------------------------

    /// Dispatches, executes and completes `op` in one go.
    ///
    /// Returns `false` if validation stopped the operation before any
    /// request was made.
    pub async fn run(&mut self, op: Operation) -> bool {
        let Some(pending) = self.dispatch(op) else {
            return false;
        };
        let completion = execute(self.backend.as_ref(), pending).await;
        self.complete(completion);
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{product, FakeBackend};
    use beauty_api::ApiError;
    use beauty_core::DraftField;

    fn controller_with(products: Vec<Product>) -> Controller<FakeBackend> {
        Controller::new(FakeBackend::with_products(products), UiState::default())
    }

    async fn loaded(products: Vec<Product>) -> Controller<FakeBackend> {
        let mut ctrl = controller_with(products);
        assert!(ctrl.run(Operation::Load).await);
        ctrl.backend().clear_calls();
        ctrl
    }

    fn fill_create_form(ctrl: &mut Controller<FakeBackend>) {
        let form = &mut ctrl.ui_mut().create;
        form.set_field(DraftField::Name, " Labial ");
        form.set_field(DraftField::Category, "labios");
        form.set_field(DraftField::PurchasePrice, "2.5");
        form.set_field(DraftField::SalePrice, "3.5");
        form.set_field(DraftField::Stock, "10");
        form.set_field(DraftField::Supplier, "Acme");
    }

    fn status(ctrl: &Controller<FakeBackend>) -> &StatusMessage {
        &ctrl.ui().status
    }

    #[tokio::test]
    async fn test_load_replaces_store() {
        let ctrl = loaded(vec![product(1, "a"), product(2, "b")]).await;
        assert_eq!(ctrl.store().len(), 2);
        assert_eq!(status(&ctrl), &StatusMessage::Success(MSG_LOADED.into()));
        assert!(ctrl.ui().last_loaded.is_some());
        assert!(!ctrl.is_loading());
    }

    #[tokio::test]
    async fn test_load_failure_keeps_store() {
        let mut ctrl = loaded(vec![product(1, "a")]).await;
        ctrl.backend()
            .fail_next(ApiError::Transport("connection refused".into()));

        ctrl.run(Operation::Load).await;

        assert_eq!(ctrl.store().len(), 1);
        assert_eq!(
            status(&ctrl),
            &StatusMessage::Error("No se pudo cargar: Error de red: connection refused".into())
        );
    }

    #[tokio::test]
    async fn test_create_prepends_and_resets_draft() {
        let mut ctrl = loaded(vec![product(1, "a")]).await;
        fill_create_form(&mut ctrl);

        assert!(ctrl.run(Operation::Create).await);

        let first = ctrl.store().get(0).unwrap();
        assert_eq!(first.name, "Labial");
        assert_eq!(ctrl.store().len(), 2);
        assert_eq!(ctrl.ui().create, crate::state::FormState::default());
        assert_eq!(status(&ctrl), &StatusMessage::Success(MSG_CREATED.into()));
        assert_eq!(ctrl.backend().calls(), vec!["create Labial"]);
    }

    #[tokio::test]
    async fn test_create_rejects_non_numeric_without_call() {
        let mut ctrl = loaded(vec![]).await;
        fill_create_form(&mut ctrl);
        ctrl.ui_mut()
            .create
            .set_field(DraftField::SalePrice, "tres");

        assert!(!ctrl.run(Operation::Create).await);

        assert!(ctrl.backend().calls().is_empty());
        assert_eq!(ctrl.ui().create.draft().sale_price, "tres");
        assert_eq!(
            status(&ctrl),
            &StatusMessage::Error(
                "No se pudo crear: Venta debe ser un número válido (recibido 'tres')".into()
            )
        );
    }

    #[tokio::test]
    async fn test_create_failure_keeps_draft() {
        let mut ctrl = loaded(vec![]).await;
        fill_create_form(&mut ctrl);
        ctrl.backend().fail_next(ApiError::Status {
            status: 422,
            detail: Some("El campo no puede estar vacío".into()),
        });

        ctrl.run(Operation::Create).await;

        assert!(ctrl.store().is_empty());
        assert_eq!(ctrl.ui().create.draft().name, " Labial ");
        assert_eq!(
            status(&ctrl),
            &StatusMessage::Error("No se pudo crear: El campo no puede estar vacío".into())
        );
    }

    #[tokio::test]
    async fn test_update_without_selection_makes_no_call() {
        let mut ctrl = loaded(vec![product(1, "a")]).await;

        assert!(!ctrl.run(Operation::Update).await);

        assert!(ctrl.backend().calls().is_empty());
        assert_eq!(
            status(&ctrl),
            &StatusMessage::Error(MSG_SELECT_FOR_EDIT.into())
        );
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let mut ctrl = loaded(vec![product(1, "a"), product(2, "b"), product(3, "c")]).await;

        assert!(ctrl.start_edit(2));
        assert_eq!(ctrl.ui().tab, Tab::Edit);
        ctrl.ui_mut().edit.set_field(DraftField::Name, "b2");

        assert!(ctrl.run(Operation::Update).await);

        let names: Vec<_> = ctrl.store().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b2", "c"]);
        assert_eq!(ctrl.ui().edit.target(), None);
        assert_eq!(status(&ctrl), &StatusMessage::Success(MSG_UPDATED.into()));
        assert_eq!(ctrl.backend().calls(), vec!["update 2"]);
    }

    #[tokio::test]
    async fn test_update_failure_keeps_draft() {
        let mut ctrl = loaded(vec![product(4, "d")]).await;
        ctrl.start_edit(4);
        ctrl.backend().fail_next(ApiError::NotFound {
            cod: 4,
            detail: Some("Producto con ID 4 no encontrado".into()),
        });

        ctrl.run(Operation::Update).await;

        assert_eq!(ctrl.ui().edit.target(), Some(4));
        assert_eq!(
            status(&ctrl),
            &StatusMessage::Error("No se pudo actualizar: Producto con ID 4 no encontrado".into())
        );
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_record() {
        let mut ctrl = loaded(vec![product(1, "a"), product(2, "b")]).await;

        ctrl.request_delete(1);
        assert_eq!(ctrl.ui().pending_delete, Some(1));
        assert!(ctrl.run(Operation::ConfirmDelete).await);

        assert!(ctrl.store().find(1).is_none());
        assert_eq!(ctrl.ui().pending_delete, None);
        assert_eq!(status(&ctrl), &StatusMessage::Success(MSG_DELETED.into()));
        assert_eq!(ctrl.backend().calls(), vec!["delete 1"]);
    }

    #[tokio::test]
    async fn test_cancelled_delete_makes_no_call() {
        let mut ctrl = loaded(vec![product(1, "a")]).await;

        ctrl.request_delete(1);
        ctrl.cancel_delete();
        assert!(!ctrl.run(Operation::ConfirmDelete).await);

        assert_eq!(ctrl.store().len(), 1);
        assert_eq!(ctrl.ui().pending_delete, None);
        assert!(ctrl.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_empty_and_invalid_ids() {
        let mut ctrl = loaded(vec![product(1, "a")]).await;

        assert!(!ctrl.run(Operation::Search).await);
        assert_eq!(status(&ctrl), &StatusMessage::Error(MSG_SEARCH_EMPTY.into()));

        ctrl.ui_mut().search = crate::tui::widgets::InputBuffer::with_text("abc");
        assert!(!ctrl.run(Operation::Search).await);
        assert_eq!(
            status(&ctrl),
            &StatusMessage::Error("El ID debe ser un número entero positivo.".into())
        );
        assert!(ctrl.backend().calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_found_then_not_found_clears_result() {
        let mut ctrl = loaded(vec![product(1, "a"), product(2, "b")]).await;

        ctrl.ui_mut().search = crate::tui::widgets::InputBuffer::with_text("2");
        ctrl.run(Operation::Search).await;
        assert_eq!(ctrl.ui().search_result.as_ref().map(|p| p.cod), Some(2));
        assert_eq!(ctrl.ui().selected_row, 1);
        assert_eq!(status(&ctrl), &StatusMessage::Success(MSG_FOUND.into()));

        ctrl.ui_mut().search = crate::tui::widgets::InputBuffer::with_text("9");
        ctrl.run(Operation::Search).await;
        assert!(ctrl.ui().search_result.is_none());
        assert_eq!(
            status(&ctrl),
            &StatusMessage::Error("No encontrado: Producto con ID 9 no encontrado".into())
        );
    }

    #[tokio::test]
    async fn test_stale_load_is_discarded() {
        let mut ctrl = controller_with(vec![product(1, "a")]);

        let first = ctrl.dispatch(Operation::Load).unwrap();
        let second = ctrl.dispatch(Operation::Load).unwrap();
        assert!(ctrl.is_loading());

        // Newer response lands first.
        ctrl.complete(Completion {
            seq: second.seq,
            outcome: Outcome::Loaded(Ok(vec![product(1, "nuevo"), product(2, "b")])),
        });
        ctrl.complete(Completion {
            seq: first.seq,
            outcome: Outcome::Loaded(Ok(vec![product(1, "viejo")])),
        });

        assert_eq!(ctrl.store().len(), 2);
        assert_eq!(ctrl.store().get(0).unwrap().name, "nuevo");
        assert!(!ctrl.is_loading());
    }

    #[tokio::test]
    async fn test_stale_search_is_discarded() {
        let mut ctrl = loaded(vec![]).await;

        ctrl.ui_mut().search = crate::tui::widgets::InputBuffer::with_text("1");
        let first = ctrl.dispatch(Operation::Search).unwrap();
        ctrl.ui_mut().search = crate::tui::widgets::InputBuffer::with_text("2");
        let second = ctrl.dispatch(Operation::Search).unwrap();

        ctrl.complete(Completion {
            seq: second.seq,
            outcome: Outcome::Found(Ok(product(2, "b"))),
        });
        ctrl.complete(Completion {
            seq: first.seq,
            outcome: Outcome::Found(Ok(product(1, "a"))),
        });

        assert_eq!(ctrl.ui().search_result.as_ref().map(|p| p.cod), Some(2));
    }

    #[tokio::test]
    async fn test_edit_picker_cycles_through_none() {
        let mut ctrl = loaded(vec![product(1, "a"), product(2, "b")]).await;

        ctrl.cycle_edit_target(1);
        assert_eq!(ctrl.ui().edit.target(), Some(1));
        ctrl.cycle_edit_target(1);
        assert_eq!(ctrl.ui().edit.target(), Some(2));
        ctrl.cycle_edit_target(1);
        assert_eq!(ctrl.ui().edit.target(), None);
        ctrl.cycle_edit_target(-1);
        assert_eq!(ctrl.ui().edit.target(), Some(2));
    }

    #[tokio::test]
    async fn test_dismiss_status() {
        let mut ctrl = loaded(vec![]).await;
        ctrl.dismiss_status();
        assert_eq!(status(&ctrl), &StatusMessage::Idle);
    }
}
