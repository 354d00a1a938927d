//! Layout definitions for the TUI
//!
//! Tabs across the top, the current screen in the middle, status bar below.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Screen tabs
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the dashboard
pub struct DashboardLayout {
    /// Statistics cards
    pub cards: [Rect; 3],
    /// Navigation menu
    pub menu: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Cards
                Constraint::Min(4),    // Menu
            ])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[0]);

        Self {
            cards: [cards[0], cards[1], cards[2]],
            menu: rows[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_splits_full_height() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(layout.main.height, 20);
    }

    #[test]
    fn test_centered_rect_fixed_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect_fixed(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect_fixed(60, 20, area), Rect::new(0, 0, 40, 10));
    }
}
