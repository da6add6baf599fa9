use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::error::STARTUP_FAILED_MESSAGE;
use crate::ui::board::RESTART_LABEL;
use crate::ui::button::draw_button;
use crate::ui::layout::button_rect;

const FAILED_TEXT_LINES: u16 = 6;

pub fn restart_button_rect(area: Rect) -> Rect {
    button_rect(area, RESTART_LABEL, area.y + 1 + FAILED_TEXT_LINES)
}

pub fn draw_failed(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "✗  Could not start the game",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(STARTUP_FAILED_MESSAGE),
        Line::from(""),
    ];

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);

    draw_button(f, restart_button_rect(area), RESTART_LABEL, Color::Cyan);
}
