use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::ViewModel;
use crate::tui::theme::Palette;

pub(super) fn render(frame: &mut Frame, area: Rect, view: &ViewModel, palette: &Palette) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(48)]).areas(area);

    let brand = Line::from(vec![
        Span::styled(" ✿ BeautyData ", palette.brand_badge()),
        Span::raw(" "),
        Span::styled("Inventario de cosmética", palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(brand), left);

    let api = Line::from(vec![
        Span::styled("API ", palette.muted()),
        Span::styled(beauty_core::truncate(view.api_url, 36), palette.heading()),
        Span::raw("  "),
        Span::styled(view.ui.theme.toggled().to_string(), palette.muted()),
        Span::raw(" "),
        Span::styled(view.ui.theme.icon(), palette.key_hint()),
        Span::raw(" "),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(api), right);
}
