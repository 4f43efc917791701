use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::tui::layout::centered;
use crate::tui::theme::Palette;

const BINDINGS: &[(&str, &str)] = &[
    ("General", ""),
    ("1 / 2 / 3", "Ir a pestaña"),
    ("Tab / Shift+Tab", "Pestaña siguiente / anterior"),
    ("r  (Ctrl+R)", "Recargar productos"),
    ("t  (Ctrl+T)", "Cambiar tema"),
    ("Esc", "Descartar aviso / cancelar"),
    ("Ctrl+C / Ctrl+Q", "Salir"),
    ("Inventario", ""),
    ("/", "Buscar por ID"),
    ("↑ ↓", "Mover selección"),
    ("e / Enter", "Editar producto"),
    ("d / Supr", "Eliminar producto"),
    ("q", "Salir"),
    ("Formularios", ""),
    ("↑ ↓", "Campo anterior / siguiente"),
    ("Espacio ← →", "Cambiar estado"),
    ("PgUp / PgDn", "Elegir producto a editar"),
    ("Ctrl+U", "Vaciar campo"),
    ("Enter / Ctrl+S", "Guardar"),
];

pub(super) fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let modal = centered(area, 56, BINDINGS.len() as u16 + 4);
    frame.render_widget(Clear, modal);

    let block = palette
        .block_focused("Atajos de teclado")
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|&(key, desc)| {
            if desc.is_empty() {
                Line::from(Span::styled(key, palette.heading()))
            } else {
                Line::from(vec![
                    Span::styled(format!("  {key:<18}"), palette.key_hint()),
                    Span::raw(desc),
                ])
            }
        })
        .collect();
    lines.push(Line::from(Span::styled("Esc o ? para cerrar", palette.muted())));

    frame.render_widget(Paragraph::new(lines), inner);
}
