use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Position, Rect};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tracing::debug;

use crate::controller::GameController;
use crate::reveal::{ClickTarget, RevealOutcome};
use crate::state::*;

pub fn run_tui(mut state: AppState, controller: &GameController) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Cannot enable raw mode: {}", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("Cannot enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Cannot create terminal: {}", e))?;

    let result = main_loop(&mut terminal, &mut state, controller);

    controller.shutdown(&mut state);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    controller: &GameController,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|f| crate::ui::draw(f, state))
            .map_err(|e| format!("Draw error: {}", e))?;

        if state.should_quit {
            break;
        }

        // Poll for input events
        if event::poll(Duration::from_millis(100)).map_err(|e| format!("Poll error: {}", e))? {
            match event::read().map_err(|e| format!("Read error: {}", e))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(key, state, controller);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size().unwrap_or_default();
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(mouse, state, controller, area);
                }
                _ => {}
            }
        }

        // Apply finished loads
        controller.poll(state);
        state.tick();
    }

    Ok(())
}

pub fn handle_key(key: KeyEvent, state: &mut AppState, controller: &GameController) {
    // Handle dialog keys first
    if state.has_dialog() {
        handle_dialog_key(key, state);
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') => {
            state.push_dialog(Dialog::ConfirmQuit);
            return;
        }
        KeyCode::Char('c') if ctrl => {
            state.push_dialog(Dialog::ConfirmQuit);
            return;
        }
        KeyCode::Char('?') => {
            state.push_dialog(Dialog::Help);
            return;
        }
        _ => {}
    }

    match state.screen {
        Screen::Start => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => controller.start(state),
            _ => {}
        },
        Screen::Loading => {
            if key.code == KeyCode::Char('r') {
                controller.start(state);
            }
        }
        Screen::Playing => handle_playing_key(key, state, controller),
        Screen::Failed => match key.code {
            KeyCode::Enter | KeyCode::Char('r') => controller.start(state),
            _ => {}
        },
    }
}

fn handle_playing_key(key: KeyEvent, state: &mut AppState, controller: &GameController) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => state.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => state.move_cursor(1, 0),
        KeyCode::Up | KeyCode::Char('k') => state.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => state.move_cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.click_cursor();
        }
        KeyCode::Char('r') => controller.start(state),
        _ => {}
    }
}

fn handle_dialog_key(key: KeyEvent, state: &mut AppState) {
    match state.top_dialog() {
        Some(Dialog::ConfirmQuit) => match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                state.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                state.pop_dialog();
            }
            _ => {}
        },
        Some(Dialog::Help) => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => {
                state.pop_dialog();
            }
            _ => {}
        },
        None => {}
    }
}

/// Resolve a left click at (`x`, `y`) against what `ui::draw` puts on screen
/// for `area`.
pub fn click_target_at(state: &AppState, area: Rect, x: u16, y: u16) -> Option<ScreenClick> {
    let pos = Position::new(x, y);
    match state.screen {
        Screen::Start => {
            let (main, _) = crate::ui::screen_areas(area);
            crate::ui::start::start_button_rect(main)
                .contains(pos)
                .then_some(ScreenClick::Start)
        }
        Screen::Failed => {
            let (main, _) = crate::ui::screen_areas(area);
            crate::ui::failed::restart_button_rect(main)
                .contains(pos)
                .then_some(ScreenClick::Restart)
        }
        Screen::Playing => {
            let session = state.session.as_ref()?;
            let layout = crate::ui::layout::compute_layout(area);
            match crate::ui::board::compute_hit_map(&layout, &session.board).target_at(x, y)? {
                ClickTarget::Restart => Some(ScreenClick::Restart),
                target => Some(ScreenClick::Board(target)),
            }
        }
        Screen::Loading => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenClick {
    Start,
    Restart,
    Board(ClickTarget),
}

pub fn handle_mouse(
    mouse: MouseEvent,
    state: &mut AppState,
    controller: &GameController,
    area: Rect,
) {
    // If a dialog is open, ignore mouse events
    if state.has_dialog() {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    match click_target_at(state, area, mouse.column, mouse.row) {
        Some(ScreenClick::Start) | Some(ScreenClick::Restart) => controller.start(state),
        Some(ScreenClick::Board(target)) => {
            if state.click(target) == RevealOutcome::Ignored {
                debug!(?target, "click ignored");
            }
        }
        None => {}
    }
}
