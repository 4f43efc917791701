use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use super::ViewModel;
use crate::tui::layout::centered;
use crate::tui::theme::Palette;

/// Delete confirmation for `UiState::pending_delete`.
pub(super) fn render(frame: &mut Frame, area: Rect, view: &ViewModel, palette: &Palette) {
    let Some(cod) = view.ui.pending_delete else {
        return;
    };
    let modal = centered(area, 46, 8);
    frame.render_widget(Clear, modal);

    let block = palette
        .block_focused("Confirmar")
        .border_style(palette.error())
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let name = view
        .store
        .find(cod)
        .map(|p| p.label())
        .unwrap_or_else(|| format!("#{cod}"));

    let (cancel_style, delete_style) = if view.ui.confirm_focused {
        (palette.muted(), palette.highlight())
    } else {
        (palette.highlight(), palette.muted())
    };
    let delete_label = if view.loading { " Eliminando... " } else { " Eliminar " };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("Eliminar este producto?", palette.heading())).centered(),
        Line::from(Span::raw(name)).centered(),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Cancelar ", cancel_style),
            Span::raw("   "),
            Span::styled(delete_label, delete_style),
        ])
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
