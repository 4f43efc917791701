//! # Event Loop
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │  loop while running:                                               │
//! │    draw(views::render(view_model))                                 │
//! │    select! {                                                       │
//! │      tick            ──► redraw                                    │
//! │      event_rx        ──► AppEvent::Completed ──► controller.complete│
//! │      EventStream     ──► map_key ──► Action ──► handle_action      │
//! │    }                                                               │
//! │                                                                    │
//! │  handle_action ──► controller.dispatch(op) ──► tokio::spawn(       │
//! │                      execute(backend, pending) ──► event_tx)       │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop owns the controller; request tasks only hold an `Arc` of the
//! backend and a channel sender, so the UI never waits on the network.

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use beauty_api::ProductBackend;
use beauty_core::DraftField;

use super::events::{map_key, Action, AppEvent, InputContext};
use super::views::{self, ViewModel};
use crate::controller::{execute, Controller, Operation};
use crate::error::AppResult;
use crate::state::{FormState, Tab};

pub struct App<B: ProductBackend + 'static> {
    controller: Controller<B>,
    api_url: String,
    running: bool,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl<B: ProductBackend + 'static> App<B> {
    pub fn new(controller: Controller<B>, api_url: impl Into<String>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        App {
            controller,
            api_url: api_url.into(),
            running: true,
            event_tx,
            event_rx,
        }
    }

    pub fn controller(&self) -> &Controller<B> {
        &self.controller
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Render, wait for the next event, update, repeat until quit.
    pub async fn run<T: Backend>(
        &mut self,
        terminal: &mut Terminal<T>,
        tick_rate: Duration,
    ) -> AppResult<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        self.issue(Operation::Load);

        while self.running {
            terminal.draw(|frame| views::render(frame, &self.view_model()))?;

            tokio::select! {
                _ = tick_interval.tick() => {}
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                input = event_stream.next() => match input {
                    Some(Ok(event)) => self.handle_event(AppEvent::Input(event)),
                    Some(Err(e)) => return Err(e.into()),
                    None => self.running = false,
                },
            }
        }

        info!("Event loop finished");
        Ok(())
    }

    fn view_model(&self) -> ViewModel<'_> {
        ViewModel {
            store: self.controller.store(),
            ui: self.controller.ui(),
            stats: self.controller.stats(),
            loading: self.controller.is_loading(),
            api_url: &self.api_url,
        }
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {}
            AppEvent::Completed(completion) => self.controller.complete(completion),
            AppEvent::Input(Event::Key(key)) => {
                if let Some(action) = map_key(key, self.input_context()) {
                    self.handle_action(action);
                }
            }
            AppEvent::Input(_) => {}
        }
    }

    fn input_context(&self) -> InputContext {
        let ui = self.controller.ui();
        if ui.show_help {
            InputContext::Help
        } else if ui.pending_delete.is_some() {
            InputContext::Modal
        } else if ui.tab.is_form() {
            let form = if ui.tab == Tab::Edit { &ui.edit } else { &ui.create };
            InputContext::Form {
                tab: ui.tab,
                on_status: form.focus() == DraftField::Status,
            }
        } else if ui.search_focused {
            InputContext::Search
        } else {
            InputContext::Browse
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        let loading = self.controller.is_loading();
        match action {
            Action::Quit => self.running = false,

            Action::GoTo(tab) => self.switch_tab(tab),
            Action::NextTab => self.switch_tab(self.controller.ui().tab.next()),
            Action::PrevTab => self.switch_tab(self.controller.ui().tab.prev()),

            Action::Refresh => {
                if loading {
                    debug!("Refresh ignored while loading");
                } else {
                    self.issue(Operation::Load);
                }
            }
            Action::ToggleTheme => {
                let ui = self.controller.ui_mut();
                ui.theme = ui.theme.toggled();
            }
            Action::ShowHelp => self.controller.ui_mut().show_help = true,
            Action::CloseHelp => self.controller.ui_mut().show_help = false,
            Action::Dismiss => self.controller.dismiss_status(),

            Action::SelectNext => {
                let len = self.controller.store().len();
                self.controller.ui_mut().select_next(len);
            }
            Action::SelectPrev => self.controller.ui_mut().select_prev(),
            Action::EditSelected => {
                if let Some(cod) = self.controller.selected_product().map(|p| p.cod) {
                    self.controller.start_edit(cod);
                }
            }
            Action::DeleteSelected => {
                if let Some(cod) = self.controller.selected_product().map(|p| p.cod) {
                    self.controller.request_delete(cod);
                }
            }

            Action::FocusSearch => self.controller.ui_mut().search_focused = true,
            Action::BlurSearch => self.controller.ui_mut().search_focused = false,
            Action::SearchInput(c) => self.controller.ui_mut().search.insert_char(c),
            Action::SearchBackspace => self.controller.ui_mut().search.backspace(),
            Action::SearchLeft => self.controller.ui_mut().search.move_left(),
            Action::SearchRight => self.controller.ui_mut().search.move_right(),
            Action::SearchHome => self.controller.ui_mut().search.move_home(),
            Action::SearchEnd => self.controller.ui_mut().search.move_end(),
            Action::SubmitSearch => {
                if loading {
                    debug!("Search ignored while loading");
                } else {
                    self.issue(Operation::Search);
                }
            }

            Action::FieldNext => self.with_form(FormState::focus_next),
            Action::FieldPrev => self.with_form(FormState::focus_prev),
            Action::FieldInput(c) => self.with_form(|form| form.insert_char(c)),
            Action::FieldBackspace => self.with_form(FormState::backspace),
            Action::FieldDelete => self.with_form(FormState::delete),
            Action::FieldClear => self.with_form(FormState::clear_field),
            Action::FieldLeft => self.with_form(FormState::cursor_left),
            Action::FieldRight => self.with_form(FormState::cursor_right),
            Action::FieldHome => self.with_form(FormState::cursor_home),
            Action::FieldEnd => self.with_form(FormState::cursor_end),
            Action::ToggleStatus => self.with_form(FormState::toggle_status),
            Action::PickerNext => self.controller.cycle_edit_target(1),
            Action::PickerPrev => self.controller.cycle_edit_target(-1),
            Action::Submit => {
                if loading {
                    debug!("Submit ignored while loading");
                    return;
                }
                match self.controller.ui().tab {
                    Tab::Create => self.issue(Operation::Create),
                    Tab::Edit => self.issue(Operation::Update),
                    Tab::Inventory => {}
                }
            }

            Action::ModalToggle => {
                let ui = self.controller.ui_mut();
                ui.confirm_focused = !ui.confirm_focused;
            }
            Action::ModalChoose => {
                if !self.controller.ui().confirm_focused {
                    self.controller.cancel_delete();
                } else if !loading {
                    self.issue(Operation::ConfirmDelete);
                }
            }
            Action::ModalCancel => self.controller.cancel_delete(),
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        let ui = self.controller.ui_mut();
        ui.tab = tab;
        ui.search_focused = false;
    }

    fn with_form(&mut self, f: impl FnOnce(&mut FormState)) {
        let ui = self.controller.ui_mut();
        match ui.tab {
            Tab::Create => f(&mut ui.create),
            Tab::Edit if ui.edit.target().is_some() => f(&mut ui.edit),
            _ => {}
        }
    }

    /// Dispatches `op` and runs the request on a spawned task.
    fn issue(&mut self, op: Operation) {
        let Some(pending) = self.controller.dispatch(op) else {
            return;
        };
        let backend = self.controller.backend();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let completion = execute(backend.as_ref(), pending).await;
            // Receiver is gone only after the loop exits.
            let _ = tx.send(AppEvent::Completed(completion));
        });
    }

    /// Waits for the next spawned request to report back and applies it.
    #[cfg(test)]
    async fn settle(&mut self) {
        if let Some(event) = self.event_rx.recv().await {
            self.handle_event(event);
        }
    }
}
