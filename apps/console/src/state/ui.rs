//! # UI State
//!
//! Everything the views need besides the product list: active tab, forms,
//! search box, status banner, theme, pending delete and selection cursors.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use beauty_core::Product;

use super::form::FormState;
use crate::error::ConfigError;
use crate::tui::widgets::InputBuffer;

// =============================================================================
// Tabs
// =============================================================================

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Inventory,
    Create,
    Edit,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Inventory, Tab::Create, Tab::Edit];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Inventory => "Inventario",
            Tab::Create => "Nuevo Producto",
            Tab::Edit => "Editar Producto",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }

    /// Whether the tab is a product form (keys type into fields).
    pub fn is_form(self) -> bool {
        matches!(self, Tab::Create | Tab::Edit)
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Colour scheme. Serialized lowercase in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Navbar indicator: the icon of the theme a toggle switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" | "oscuro" => Ok(Theme::Dark),
            "light" | "claro" => Ok(Theme::Light),
            other => Err(ConfigError::Invalid(format!(
                "Unknown theme: '{other}'. Valid options: dark, light"
            ))),
        }
    }
}

// =============================================================================
// Status Banner
// =============================================================================

/// Result of the last user action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> Option<&str> {
        match self {
            StatusMessage::Idle => None,
            StatusMessage::Success(msg) | StatusMessage::Error(msg) => Some(msg),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusMessage::Error(_))
    }
}

// =============================================================================
// UiState
// =============================================================================

/// View state owned by the controller.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub tab: Tab,
    pub create: FormState,
    pub edit: FormState,
    /// Raw text of the search-by-id box.
    pub search: InputBuffer,
    /// Whether keystrokes go to the search box.
    pub search_focused: bool,
    pub search_result: Option<Product>,
    pub status: StatusMessage,
    pub theme: Theme,
    /// Product awaiting delete confirmation; `Some` means the modal is open.
    pub pending_delete: Option<i64>,
    /// Modal button focus: `true` when "Eliminar" is highlighted.
    pub confirm_focused: bool,
    /// Highlighted row of the inventory table.
    pub selected_row: usize,
    pub show_help: bool,
    pub last_loaded: Option<DateTime<Local>>,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        UiState {
            theme,
            ..Self::default()
        }
    }

    /// Keeps the row cursor inside a table of `len` rows.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected_row = (self.selected_row + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Inventory.next(), Tab::Create);
        assert_eq!(Tab::Edit.next(), Tab::Inventory);
        assert_eq!(Tab::Inventory.prev(), Tab::Edit);
        assert!(Tab::Edit.is_form());
        assert!(!Tab::Inventory.is_form());
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("claro".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_selection_clamps() {
        let mut ui = UiState::default();
        ui.select_next(3);
        ui.select_next(3);
        ui.select_next(3);
        assert_eq!(ui.selected_row, 2);

        ui.clamp_selection(1);
        assert_eq!(ui.selected_row, 0);
        ui.select_prev();
        assert_eq!(ui.selected_row, 0);

        ui.select_next(0);
        assert_eq!(ui.selected_row, 0);
    }
}
