//! Hero card: product count, stock units and mean unit margin.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use beauty_core::format_price;

use super::ViewModel;
use crate::tui::theme::Palette;

pub(super) fn render(frame: &mut Frame, area: Rect, view: &ViewModel, palette: &Palette) {
    let cells = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let stats = &view.stats;
    let entries = [
        ("Total productos", stats.total.to_string()),
        ("Stock total", stats.stock.to_string()),
        ("Margen medio", format_price(stats.margin)),
    ];

    for ((label, value), cell) in entries.into_iter().zip(cells.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_default())
            .style(Style::default().bg(palette.surface));

        let lines = vec![
            Line::from(Span::styled(label, palette.muted())),
            Line::from(Span::styled(value, palette.heading())),
        ];
        frame.render_widget(Paragraph::new(lines).centered().block(block), *cell);
    }
}
