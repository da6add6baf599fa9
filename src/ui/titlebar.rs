use chrono::Local;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::state::AppState;

pub const TITLE: &str = "JEOPARDY!";

pub fn draw_titlebar(f: &mut Frame, area: Rect, state: &AppState) {
    let session_text = match &state.session {
        Some(session) => Span::styled(
            format!(
                " Game #{} · started {} ",
                session.number,
                session.started_at.with_timezone(&Local).format("%H:%M:%S")
            ),
            Style::default().fg(Color::Rgb(200, 200, 120)),
        ),
        None => Span::raw(""),
    };

    let title_text = format!("[ {} ]", TITLE);
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Title centered on the full width, session info right-aligned
    let available = area.width as usize;
    let session_len = session_text.content.chars().count();
    let title_len = title_text.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + session_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        session_text,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
