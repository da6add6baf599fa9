use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub fn draw_statusbar(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(session) = &state.session else {
        return;
    };
    let counts = session.reveal_counts();

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("? {} hidden", counts.hidden),
            Style::default().fg(Color::Rgb(214, 159, 76)),
        ),
        Span::raw("   "),
        Span::styled(
            format!("◐ {} question", counts.question),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled(
            format!("✓ {} answered", counts.answer),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled("[?] help", Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
