//! Root layout: navbar, stats card, tabs, body and status bar.
//!
//! ```text
//! ┌ navbar ───────────────────────────────────────────┐  1 row
//! │ stats card                                         │  4 rows (hidden when short)
//! │ tabs                                               │  1 row
//! │ body (inventory table / form)                      │  rest
//! └ status bar ───────────────────────────────────────┘  1 row
//! ```

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this height the stats card is dropped to leave room for the body.
pub const STATS_MIN_HEIGHT: u16 = 18;
const STATS_HEIGHT: u16 = 4;

/// Computed regions for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub navbar: Rect,
    pub stats: Option<Rect>,
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let show_stats = area.height >= STATS_MIN_HEIGHT;
        let stats_height = if show_stats { STATS_HEIGHT } else { 0 };

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(stats_height),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        AppLayout {
            navbar: rows[0],
            stats: show_stats.then_some(rows[1]),
            tabs: rows[2],
            body: rows[3],
            status: rows[4],
        }
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_layout() {
        let layout = AppLayout::compute(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.navbar.height, 1);
        assert_eq!(layout.stats.map(|r| r.height), Some(STATS_HEIGHT));
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.body.height, 40 - 1 - STATS_HEIGHT - 1 - 1);
    }

    #[test]
    fn test_short_terminal_hides_stats() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 12));
        assert!(layout.stats.is_none());
        assert_eq!(layout.body.height, 9);
    }

    #[test]
    fn test_centered_clips() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 50, 50), area);
    }
}
