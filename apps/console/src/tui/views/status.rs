use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::ViewModel;
use crate::state::StatusMessage;
use crate::tui::theme::Palette;

const IDLE: &str = "Listo para sincronizar.";

pub(super) fn render(frame: &mut Frame, area: Rect, view: &ViewModel, palette: &Palette) {
    let [message_area, hint_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(40)]).areas(area);

    let message = match &view.ui.status {
        StatusMessage::Idle => Line::from(Span::styled(format!(" {IDLE}"), palette.muted())),
        StatusMessage::Success(text) => Line::from(vec![
            Span::styled(" ✓ ", palette.success()),
            Span::raw(text.as_str()),
            Span::styled("  Esc", palette.key_hint()),
        ]),
        StatusMessage::Error(text) => Line::from(vec![
            Span::styled(" ✗ ", palette.error()),
            Span::styled(text.as_str(), palette.error()),
            Span::styled("  Esc", palette.key_hint()),
        ]),
    };
    frame.render_widget(Paragraph::new(message), message_area);

    let mut hint = Vec::new();
    if view.loading {
        hint.push(Span::styled("Cargando...", palette.heading()));
    } else {
        hint.push(Span::styled("r", palette.key_hint()));
        hint.push(Span::raw(":actualizar"));
    }
    if let Some(when) = view.ui.last_loaded {
        hint.push(Span::styled(
            format!(" │ sincronizado {}", when.format("%H:%M:%S")),
            palette.muted(),
        ));
    }
    hint.push(Span::styled(" │ ", palette.muted()));
    hint.push(Span::styled("?", palette.key_hint()));
    hint.push(Span::raw(":ayuda "));

    frame.render_widget(Paragraph::new(Line::from(hint).right_aligned()), hint_area);
}
