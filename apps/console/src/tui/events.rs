//! Events, actions and key mapping for the Elm-style event loop.
//!
//! ```text
//! crossterm key ──► map_key(key, context) ──► Action ──► App::handle_action
//! request task  ──► AppEvent::Completed  ─────────────► Controller::complete
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::Completion;
use crate::state::Tab;

/// Events flowing through the event loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Periodic redraw.
    Tick,
    /// Raw terminal input.
    Input(crossterm::event::Event),
    /// A spawned backend request finished.
    Completed(Completion),
}

/// High-level actions produced by the key mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // Navigation
    GoTo(Tab),
    NextTab,
    PrevTab,

    // Global
    Refresh,
    ToggleTheme,
    ShowHelp,
    CloseHelp,
    Dismiss,

    // Inventory
    SelectNext,
    SelectPrev,
    EditSelected,
    DeleteSelected,
    FocusSearch,
    BlurSearch,
    SearchInput(char),
    SearchBackspace,
    SearchLeft,
    SearchRight,
    SearchHome,
    SearchEnd,
    SubmitSearch,

    // Forms
    FieldNext,
    FieldPrev,
    FieldInput(char),
    FieldBackspace,
    FieldDelete,
    FieldClear,
    FieldLeft,
    FieldRight,
    FieldHome,
    FieldEnd,
    ToggleStatus,
    PickerNext,
    PickerPrev,
    Submit,

    // Delete confirmation
    ModalToggle,
    ModalChoose,
    ModalCancel,
}

/// Which part of the UI owns the keyboard right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Help overlay is open.
    Help,
    /// Delete confirmation is open.
    Modal,
    /// Typing into the search box.
    Search,
    /// A form tab; `on_status` when the `estado` field has focus.
    Form { tab: Tab, on_status: bool },
    /// Inventory table.
    Browse,
}

/// Maps a key press to an action for the given context.
///
/// Returns `None` for keys with no meaning there (and for key releases).
pub fn map_key(key: KeyEvent, context: InputContext) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match context {
        InputContext::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
                Some(Action::CloseHelp)
            }
            _ => None,
        },

        InputContext::Modal => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                Some(Action::ModalToggle)
            }
            KeyCode::Enter => Some(Action::ModalChoose),
            KeyCode::Esc | KeyCode::Char('n') => Some(Action::ModalCancel),
            _ => None,
        },

        InputContext::Search => match key.code {
            KeyCode::Enter => Some(Action::SubmitSearch),
            KeyCode::Esc => Some(Action::BlurSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Left => Some(Action::SearchLeft),
            KeyCode::Right => Some(Action::SearchRight),
            KeyCode::Home => Some(Action::SearchHome),
            KeyCode::End => Some(Action::SearchEnd),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char(c) if !ctrl => Some(Action::SearchInput(c)),
            _ => None,
        },

        InputContext::Form { tab, on_status } => map_form_key(key, tab, on_status, ctrl),

        InputContext::Browse => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            KeyCode::Char('1') => Some(Action::GoTo(Tab::Inventory)),
            KeyCode::Char('2') => Some(Action::GoTo(Tab::Create)),
            KeyCode::Char('3') => Some(Action::GoTo(Tab::Edit)),
            KeyCode::Tab => Some(Action::NextTab),
            KeyCode::BackTab => Some(Action::PrevTab),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('/') => Some(Action::FocusSearch),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::EditSelected),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
            KeyCode::Esc => Some(Action::Dismiss),
            _ => None,
        },
    }
}

/// Form keys: printable characters type into the focused field, so global
/// shortcuts need Ctrl here.
fn map_form_key(key: KeyEvent, tab: Tab, on_status: bool, ctrl: bool) -> Option<Action> {
    if ctrl {
        return match key.code {
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('u') => Some(Action::FieldClear),
            KeyCode::Char('s') => Some(Action::Submit),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Down => Some(Action::FieldNext),
        KeyCode::Up => Some(Action::FieldPrev),
        KeyCode::PageDown if tab == Tab::Edit => Some(Action::PickerNext),
        KeyCode::PageUp if tab == Tab::Edit => Some(Action::PickerPrev),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Dismiss),
        KeyCode::F(1) => Some(Action::ShowHelp),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if on_status => {
            Some(Action::ToggleStatus)
        }
        KeyCode::Left => Some(Action::FieldLeft),
        KeyCode::Right => Some(Action::FieldRight),
        KeyCode::Home => Some(Action::FieldHome),
        KeyCode::End => Some(Action::FieldEnd),
        KeyCode::Backspace => Some(Action::FieldBackspace),
        KeyCode::Delete => Some(Action::FieldDelete),
        KeyCode::Char(c) => Some(Action::FieldInput(c)),
        _ => None,
    }
}
