use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, Dialog};
use crate::ui::layout::centered_rect;

pub fn draw_dialog(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(dialog) = state.top_dialog() else {
        return;
    };

    match dialog {
        Dialog::ConfirmQuit => draw_confirm_quit(f, area),
        Dialog::Help => draw_help(f, area),
    }
}

fn draw_confirm_quit(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Quit?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("   The current board will be lost."),
        Line::from(""),
        Line::from(vec![
            Span::styled("   [Enter] Confirm", Style::default().fg(Color::Green)),
            Span::raw("    "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    let rect = centered_rect(40, lines.len() as u16, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Key Bindings",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("   arrows/hjkl  Move between cells"),
        Line::from("   Enter/Space  Reveal question, then answer"),
        Line::from("   click        Same as Enter on that cell"),
        Line::from("   r            Restart with a new board"),
        Line::from("   q / Ctrl+C   Quit"),
        Line::from("   ?            This help"),
        Line::from("   Esc          Close dialog"),
        Line::from(""),
        Line::from(Span::styled(
            "          [Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let rect = centered_rect(50, lines.len() as u16, area);
    f.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));
    let widget = Paragraph::new(lines).block(block);
    f.render_widget(widget, rect);
}
