pub mod board;
pub mod button;
pub mod dialog;
pub mod failed;
pub mod keybar;
pub mod layout;
pub mod start;
pub mod statusbar;
pub mod titlebar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::state::{AppState, Screen};

/// Split a non-board screen into its content area and key bar.
pub fn screen_areas(area: Rect) -> (Rect, Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    (vertical[0], vertical[1])
}

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();

    match state.screen {
        Screen::Start => {
            let (main, keys) = screen_areas(area);
            start::draw_start(f, main, state);
            keybar::draw_keybar(f, keys, state);
        }
        Screen::Loading => {
            let (main, keys) = screen_areas(area);
            start::draw_loading(f, main, state);
            keybar::draw_keybar(f, keys, state);
        }
        Screen::Playing => {
            draw_playing(f, area, state);
        }
        Screen::Failed => {
            let (main, keys) = screen_areas(area);
            failed::draw_failed(f, main);
            keybar::draw_keybar(f, keys, state);
        }
    }

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}

fn draw_playing(f: &mut Frame, area: Rect, state: &AppState) {
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    board::draw_board(f, &layout, state);
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);
}
