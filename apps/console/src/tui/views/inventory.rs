//! Inventory tab: search-by-id box, search result card and the product table.
//!
//! ```text
//! ╭ Buscar por ID ─────────────╮
//! │ 12█                        │
//! ╰────────────────────────────╯
//! ╭ Resultado ─────────────────╮   only after a successful search
//! │ label, descripcion, prices │
//! ╰────────────────────────────╯
//! ╭ Productos (n) ─────────────╮
//! │ ID  Producto  Categoria .. │
//! ```

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use beauty_core::{format_price, truncate, Product};

use super::{hint_line, ViewModel};
use crate::tui::theme::Palette;

const EMPTY: &str = "No hay productos aun. Crea el primero.";

pub(super) fn render(frame: &mut Frame, area: Rect, view: &ViewModel, palette: &Palette) {
    let result_height = if view.ui.search_result.is_some() { 5 } else { 0 };
    let [search_area, result_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(result_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_search(frame, search_area, view, palette);
    if let Some(product) = &view.ui.search_result {
        render_result(frame, result_area, product, palette);
    }
    render_table(frame, table_area, view, palette);

    let footer = Line::from(vec![
        Span::styled(" /", palette.key_hint()),
        Span::raw(":buscar "),
        Span::styled("↑↓", palette.key_hint()),
        Span::raw(":mover "),
        Span::styled("e", palette.key_hint()),
        Span::raw(":editar "),
        Span::styled("d", palette.key_hint()),
        Span::raw(":eliminar "),
        Span::styled("t", palette.key_hint()),
        Span::raw(":tema"),
    ]);
    frame.render_widget(Paragraph::new(footer), footer_area);
}

fn render_search(frame: &mut Frame, area: Rect, view: &ViewModel, palette: &Palette) {
    let focused = view.ui.search_focused;
    let block = if focused {
        palette.block_focused("Buscar por ID")
    } else {
        palette.block_default("Buscar por ID  (/)")
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let search = &view.ui.search;
    if search.text().is_empty() && !focused {
        frame.render_widget(hint_line("Escribe un ID y pulsa Enter", palette), inner);
    } else {
        frame.render_widget(Paragraph::new(search.text()), inner);
    }

    if focused {
        let x = inner.x + search.cursor_column() as u16;
        frame.set_cursor_position(Position::new(x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn render_result(frame: &mut Frame, area: Rect, product: &Product, palette: &Palette) {
    let block = palette.block_focused("Resultado");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(product.label(), palette.heading()),
            Span::raw("  "),
            Span::styled(product.category.as_str(), palette.muted()),
            Span::raw("  "),
            Span::raw(product.status.to_string()),
        ]),
        if product.description.is_empty() {
            Line::from(Span::styled("Sin descripción", palette.muted()))
        } else {
            Line::from(product.description.as_str())
        },
        Line::from(vec![
            Span::styled("Stock ", palette.muted()),
            Span::raw(product.stock.to_string()),
            Span::styled("  Compra ", palette.muted()),
            Span::raw(format_price(product.purchase_price)),
            Span::styled("  Venta ", palette.muted()),
            Span::raw(format_price(product.sale_price)),
            Span::styled("  Proveedor ", palette.muted()),
            Span::raw(product.supplier.as_str()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_table(frame: &mut Frame, area: Rect, view: &ViewModel, palette: &Palette) {
    let title = format!("Productos ({})", view.store.len());
    let block = if view.ui.search_focused {
        palette.block_default(&title)
    } else {
        palette.block_focused(&title)
    };

    if view.store.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(hint_line(EMPTY, palette), inner);
        return;
    }

    let found = view.ui.search_result.as_ref().map(|p| p.cod);
    let rows: Vec<Row> = view
        .store
        .iter()
        .map(|product| {
            let style = if Some(product.cod) == found {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else if product.status.is_active() {
                Style::default().fg(palette.text)
            } else {
                palette.muted()
            };
            Row::new(vec![
                Cell::from(product.cod.to_string()),
                Cell::from(truncate(&product.name, 32)),
                Cell::from(truncate(&product.category, 18)),
                Cell::from(product.stock.to_string()),
                Cell::from(format_price(product.sale_price)),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(["ID", "Producto", "Categoria", "Stock", "Venta"])
        .style(palette.heading())
        .bottom_margin(0);

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(16),
            Constraint::Length(18),
            Constraint::Length(7),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(palette.highlight())
    .highlight_symbol("▸ ");

    let mut state = TableState::default().with_selected(Some(view.ui.selected_row));
    frame.render_stateful_widget(table, area, &mut state);
}
