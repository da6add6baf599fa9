use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::board::BoardView;
use crate::model::{CellId, RevealState};
use crate::reveal::ClickTarget;
use crate::state::AppState;
use crate::ui::button::draw_button;
use crate::ui::layout::{button_rect, AppLayout};

pub const HEADER_HEIGHT: u16 = 3;
pub const RESTART_LABEL: &str = "Restart";

const BOARD_BG: Color = Color::Rgb(6, 12, 233);
const HEADER_FG: Color = Color::White;
const PLACEHOLDER_FG: Color = Color::Rgb(214, 159, 76);

/// Screen rectangles of everything clickable on the playing screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardHitMap {
    pub headers: Vec<Rect>,
    pub cells: Vec<(CellId, Rect)>,
    pub restart: Rect,
}

impl BoardHitMap {
    pub fn target_at(&self, x: u16, y: u16) -> Option<ClickTarget> {
        let pos = Position::new(x, y);
        if self.restart.contains(pos) {
            return Some(ClickTarget::Restart);
        }
        if let Some(i) = self.headers.iter().position(|r| r.contains(pos)) {
            return Some(ClickTarget::Header(i));
        }
        self.cells
            .iter()
            .find(|(_, r)| r.contains(pos))
            .map(|(id, _)| ClickTarget::Cell(*id))
    }

    pub fn cell_rect(&self, id: CellId) -> Option<Rect> {
        self.cells.iter().find(|(c, _)| *c == id).map(|(_, r)| *r)
    }
}

pub fn compute_hit_map(layout: &AppLayout, board: &BoardView) -> BoardHitMap {
    let columns = board.columns().max(1) as u32;
    let rows = board.row_count();

    let col_rects = Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..columns).map(|_| Constraint::Ratio(1, columns)))
        .split(layout.board);

    let mut row_constraints = vec![Constraint::Length(HEADER_HEIGHT)];
    row_constraints.extend((0..rows).map(|_| Constraint::Ratio(1, rows.max(1) as u32)));

    let mut headers = Vec::with_capacity(board.columns());
    let mut cells = Vec::with_capacity(board.columns() * rows);

    for (ci, col) in col_rects.iter().enumerate().take(board.columns()) {
        let stack = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints.clone())
            .split(*col);
        headers.push(stack[0]);
        for (ri, row) in board.rows.iter().enumerate() {
            if let Some(id) = row.get(ci) {
                cells.push((*id, stack[ri + 1]));
            }
        }
    }

    BoardHitMap {
        headers,
        cells,
        restart: button_rect(layout.restart_bar, RESTART_LABEL, layout.restart_bar.y),
    }
}

pub fn draw_board(f: &mut Frame, layout: &AppLayout, state: &AppState) {
    let Some(session) = &state.session else {
        return;
    };
    let hit_map = compute_hit_map(layout, &session.board);

    for (title, rect) in session.board.headers.iter().zip(&hit_map.headers) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Black))
            .style(Style::default().bg(BOARD_BG));
        let widget = Paragraph::new(title.to_uppercase())
            .style(
                Style::default()
                    .fg(HEADER_FG)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(widget, *rect);
    }

    for (id, rect) in &hit_map.cells {
        let reveal = session.cells.reveal_state(*id).unwrap_or_default();
        let text = session.display_text(*id);
        let selected = *id == state.cursor && !state.has_dialog();

        let text_style = match reveal {
            RevealState::Hidden => Style::default()
                .fg(PLACEHOLDER_FG)
                .add_modifier(Modifier::BOLD),
            RevealState::Question => Style::default().fg(Color::White),
            RevealState::Answer => Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        };
        let border_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Black)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(BOARD_BG));
        let widget = Paragraph::new(text.to_string())
            .style(text_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(widget, *rect);
    }

    draw_button(f, hit_map.restart, RESTART_LABEL, Color::Cyan);
}
