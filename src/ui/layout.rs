use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const RESTART_BAR_HEIGHT: u16 = 3;
pub const BUTTON_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub titlebar: Rect,
    pub board: Rect,
    pub restart_bar: Rect,
    pub statusbar: Rect,
    pub keybar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                  // titlebar
            Constraint::Min(5),                     // board grid
            Constraint::Length(RESTART_BAR_HEIGHT), // restart control
            Constraint::Length(1),                  // statusbar
            Constraint::Length(1),                  // keybar
        ])
        .split(area);

    AppLayout {
        titlebar: vertical[0],
        board: vertical[1],
        restart_bar: vertical[2],
        statusbar: vertical[3],
        keybar: vertical[4],
    }
}

/// A bordered button of `label` centered horizontally in `area`, with its top
/// edge at `y`.
pub fn button_rect(area: Rect, label: &str, y: u16) -> Rect {
    let width = (label.chars().count() as u16 + 4).min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = y.min(area.y + area.height.saturating_sub(BUTTON_HEIGHT));
    Rect::new(x, y, width, BUTTON_HEIGHT.min(area.height))
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
