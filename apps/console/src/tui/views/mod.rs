//! # Views
//!
//! Stateless render functions. Each one reads a [`ViewModel`] borrowed from
//! the controller for the current frame and never touches the backend.
//!
//! ```text
//! ┌ navbar ─────────────────────────────────────────────┐
//! │ stats                                                │
//! │ tabs                                                 │
//! │ inventory | create form | edit form                  │
//! └ status ─────────────────────────────────────────────┘
//!   overlays: delete modal, help
//! ```

mod form;
mod help;
mod inventory;
mod modal;
mod navbar;
mod stats;
mod status;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs};
use ratatui::Frame;

use beauty_core::InventoryStats;

use super::layout::AppLayout;
use super::theme::Palette;
use crate::state::{ProductStore, Tab, UiState};

/// Everything a frame needs, borrowed from the controller.
pub struct ViewModel<'a> {
    pub store: &'a ProductStore,
    pub ui: &'a UiState,
    pub stats: InventoryStats,
    pub loading: bool,
    pub api_url: &'a str,
}

impl ViewModel<'_> {
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.ui.theme)
    }
}

/// Draws the whole screen.
pub fn render(frame: &mut Frame, view: &ViewModel) {
    let palette = view.palette();
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let layout = AppLayout::compute(area);

    navbar::render(frame, layout.navbar, view, &palette);
    if let Some(stats_area) = layout.stats {
        stats::render(frame, stats_area, view, &palette);
    }
    render_tabs(frame, layout.tabs, view.ui.tab, &palette);

    match view.ui.tab {
        Tab::Inventory => inventory::render(frame, layout.body, view, &palette),
        Tab::Create => form::render(frame, layout.body, view, &palette, false),
        Tab::Edit => form::render(frame, layout.body, view, &palette, true),
    }

    status::render(frame, layout.status, view, &palette);

    if view.ui.pending_delete.is_some() {
        modal::render(frame, area, view, &palette);
    }
    if view.ui.show_help {
        help::render(frame, area, &palette);
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, current: Tab, palette: &Palette) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), palette.key_hint()),
                Span::raw(tab.label()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .style(palette.muted())
        .highlight_style(palette.highlight())
        .divider(Span::styled(" │ ", palette.muted()));

    frame.render_widget(tabs, area);
}

/// Single-line placeholder used by several views.
fn hint_line<'a>(text: &'a str, palette: &Palette) -> Paragraph<'a> {
    Paragraph::new(Line::from(Span::styled(text, palette.muted())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;
    use crate::testing::product;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(store: &ProductStore, ui: &UiState, loading: bool) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = ViewModel {
            store,
            ui,
            stats: store.stats(),
            loading,
            api_url: "http://127.0.0.1:8000/",
        };
        terminal.draw(|frame| render(frame, &view)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_inventory_renders_hint() {
        let screen = draw(&ProductStore::new(), &UiState::default(), false);
        assert!(screen.contains("BeautyData"));
        assert!(screen.contains("No hay productos aun. Crea el primero."));
        assert!(screen.contains("Listo para sincronizar."));
        assert!(screen.contains("Inventario"));
    }

    #[test]
    fn test_table_and_status_banner() {
        let mut store = ProductStore::new();
        store.replace_all(vec![product(1, "Labial"), product(2, "Rimel")]);
        let mut ui = UiState::default();
        ui.status = StatusMessage::Error("No se pudo cargar: Error de red".into());

        let screen = draw(&store, &ui, true);
        assert!(screen.contains("Labial"));
        assert!(screen.contains("Rimel"));
        assert!(screen.contains("No se pudo cargar: Error de red"));
        assert!(screen.contains("Cargando..."));
    }

    #[test]
    fn test_edit_form_and_modal() {
        let mut store = ProductStore::new();
        store.replace_all(vec![product(3, "Sombra")]);
        let mut ui = UiState::default();
        ui.tab = Tab::Edit;
        ui.edit.load(&product(3, "Sombra"));
        ui.pending_delete = Some(3);

        let screen = draw(&store, &ui, false);
        assert!(screen.contains("#3 - Sombra"));
        assert!(screen.contains("Eliminar este producto?"));
        assert!(screen.contains("Cancelar"));
    }

    #[test]
    fn test_help_overlay() {
        let mut ui = UiState::default();
        ui.show_help = true;
        let screen = draw(&ProductStore::new(), &ui, false);
        assert!(screen.contains("Atajos"));
        assert!(screen.contains("Ctrl+C / Ctrl+Q"));
        assert!(!screen.contains("q / Ctrl+C"));
    }

    #[test]
    fn test_search_result_shows_description() {
        let mut found = product(4, "Base");
        found.description = "Cobertura media, acabado mate".into();
        let mut store = ProductStore::new();
        store.replace_all(vec![found.clone()]);
        let mut ui = UiState::default();
        ui.search_result = Some(found.clone());

        let screen = draw(&store, &ui, false);
        assert!(screen.contains("Cobertura media, acabado mate"));
        assert!(screen.contains("Proveedor"));

        found.description.clear();
        ui.search_result = Some(found);
        let screen = draw(&store, &ui, false);
        assert!(screen.contains("Sin descripción"));
    }
}
