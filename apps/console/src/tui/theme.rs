//! Dark and light palettes for the console.
//!
//! Views ask for a [`Palette`] from the current [`Theme`] and use its style
//! helpers instead of inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use crate::state::Theme;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Rose, brand and focused borders.
    pub primary: Color,
    /// Gold, highlights and calls to action.
    pub accent: Color,
    pub bg: Color,
    /// Elevated panels (stats card, modal).
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub dim: Color,
    pub success: Color,
    pub error: Color,
}

const DARK: Palette = Palette {
    primary: Color::Rgb(0xE0, 0x7A, 0x9B),
    accent: Color::Rgb(0xF2, 0xC1, 0x6B),
    bg: Color::Rgb(0x16, 0x12, 0x1A),
    surface: Color::Rgb(0x24, 0x1E, 0x2A),
    text: Color::Rgb(0xEC, 0xE6, 0xEE),
    muted: Color::Rgb(0x9A, 0x8F, 0xA0),
    dim: Color::Rgb(0x5C, 0x54, 0x62),
    success: Color::Rgb(0x6B, 0xC4, 0x8A),
    error: Color::Rgb(0xEF, 0x5F, 0x5F),
};

const LIGHT: Palette = Palette {
    primary: Color::Rgb(0xB8, 0x3B, 0x67),
    accent: Color::Rgb(0xA8, 0x6A, 0x00),
    bg: Color::Rgb(0xFB, 0xF7, 0xF9),
    surface: Color::Rgb(0xF0, 0xE6, 0xEC),
    text: Color::Rgb(0x2A, 0x22, 0x2E),
    muted: Color::Rgb(0x6E, 0x62, 0x74),
    dim: Color::Rgb(0xA8, 0x9E, 0xAD),
    success: Color::Rgb(0x1E, 0x7B, 0x43),
    error: Color::Rgb(0xC6, 0x28, 0x28),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Palette {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────────

    /// Base text on the theme background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn border_default(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Selected row / focused field.
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn brand_badge(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    // ── Block builders ──────────────────────────────────────────────────────

    pub fn block_focused<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(format!(" {title} "))
            .title_style(self.title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_focused())
    }

    pub fn block_default<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(format!(" {title} "))
            .title_style(self.muted())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        assert_ne!(Palette::for_theme(Theme::Dark), Palette::for_theme(Theme::Light));
        assert_eq!(Palette::for_theme(Theme::Dark).bg, DARK.bg);
    }

    #[test]
    fn test_status_styles_are_distinct() {
        let p = Palette::for_theme(Theme::Light);
        assert_ne!(p.success(), p.error());
        assert_ne!(p.highlight(), Style::default());
    }
}
