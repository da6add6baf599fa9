use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::state::AppState;
use crate::ui::button::draw_button;
use crate::ui::layout::button_rect;
use crate::ui::titlebar::TITLE;

pub const START_LABEL: &str = "Start";

const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Lines drawn above the start button, counted from the top border.
const START_TEXT_LINES: u16 = 7;

pub fn start_button_rect(area: Rect) -> Rect {
    button_rect(area, START_LABEL, area.y + 1 + START_TEXT_LINES)
}

pub fn draw_start(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} {}, {} {} each.",
            state.category_count,
            plural(state.category_count, "category", "categories"),
            state.clue_count,
            plural(state.clue_count, "clue", "clues"),
        )),
        Line::from("Click a cell once for the question, again for the answer."),
        Line::from(""),
    ];

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);

    draw_button(f, start_button_rect(area), START_LABEL, Color::Green);
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

pub fn draw_loading(f: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  Loading board...", spinner_glyph(state.spinner_frame)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Fetching categories and clues from the trivia service."),
        Line::from(""),
    ];

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
