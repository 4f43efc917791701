//! Create and edit forms.
//!
//! One line per [`DraftField`]. The focused line shows the live editor and
//! the terminal cursor; `estado` renders as a `< Activo >` switch. The edit
//! form adds a product picker row on top.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use beauty_core::DraftField;

use super::ViewModel;
use crate::state::FormState;
use crate::tui::theme::Palette;

const LABEL_WIDTH: u16 = 14;

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    view: &ViewModel,
    palette: &Palette,
    editing: bool,
) {
    let (form, title) = if editing {
        (&view.ui.edit, "Editar Producto")
    } else {
        (&view.ui.create, "Nuevo Producto")
    };

    let block = palette.block_focused(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let picker_height = if editing { 2 } else { 0 };
    let [picker_area, fields_area, footer_area] = Layout::vertical([
        Constraint::Length(picker_height),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    if editing {
        render_picker(frame, picker_area, view, form, palette);
    }

    if editing && form.target().is_none() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Elige un producto con PgUp/PgDn o pulsa e en el inventario.",
                palette.muted(),
            ))),
            fields_area,
        );
    } else {
        render_fields(frame, fields_area, form, palette);
    }

    let action = if editing { "guardar cambios" } else { "crear" };
    let mut footer = vec![
        Span::styled("↑↓", palette.key_hint()),
        Span::raw(":campo "),
        Span::styled("Enter", palette.key_hint()),
        Span::raw(format!(":{action} ")),
        Span::styled("Ctrl+U", palette.key_hint()),
        Span::raw(":limpiar "),
        Span::styled("Esc", palette.key_hint()),
        Span::raw(":descartar aviso"),
    ];
    if view.loading {
        footer.push(Span::styled("  Guardando...", palette.heading()));
    }
    frame.render_widget(Paragraph::new(Line::from(footer)), footer_area);
}

fn render_picker(
    frame: &mut Frame,
    area: Rect,
    view: &ViewModel,
    form: &FormState,
    palette: &Palette,
) {
    let selected = form
        .target()
        .and_then(|cod| view.store.find(cod))
        .map(|p| p.label())
        .unwrap_or_else(|| "(ninguno)".to_string());

    let line = Line::from(vec![
        Span::styled(format!("{:<width$}", "Producto", width = LABEL_WIDTH as usize), palette.muted()),
        Span::styled("PgUp ", palette.key_hint()),
        Span::styled(format!("< {selected} >"), palette.heading()),
        Span::styled(" PgDn", palette.key_hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_fields(frame: &mut Frame, area: Rect, form: &FormState, palette: &Palette) {
    let draft = form.draft();
    let focus = form.focus();

    let lines: Vec<Line> = DraftField::ALL
        .iter()
        .map(|&field| {
            let focused = field == focus;
            let marker = if field.is_required() { "*" } else { " " };
            let label = format!(
                "{:<width$}",
                format!("{}{marker}", field.label()),
                width = LABEL_WIDTH as usize
            );
            let label_style = if focused { palette.title() } else { palette.muted() };

            let value = if field == DraftField::Status {
                Span::styled(
                    format!("< {} >", draft.field(field)),
                    if focused { palette.highlight() } else { palette.heading() },
                )
            } else if focused {
                Span::styled(form.editor().text().to_string(), palette.base())
            } else {
                Span::raw(draft.field(field).to_string())
            };

            Line::from(vec![Span::styled(label, label_style), value])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);

    if focus != DraftField::Status {
        if let Some(row) = DraftField::ALL.iter().position(|&f| f == focus) {
            let x = area.x + LABEL_WIDTH + form.editor().cursor_column() as u16;
            let y = area.y + row as u16;
            if y < area.bottom() {
                frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), y));
            }
        }
    }
}
