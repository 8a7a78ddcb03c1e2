//! Form widget rendering utilities

use crate::state::{FormField, StatusKind, StatusMessage};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies: bordered input box plus the feedback line below
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field, with its validation error (if any) underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let display_value = field.display_value();
    let showing_placeholder = display_value.is_empty() && !is_active;
    let display_str = if showing_placeholder {
        field.placeholder.to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(message) = error {
        let feedback = Paragraph::new(message).style(Style::default().fg(Color::Red));
        frame.render_widget(feedback, chunks[1]);
    }
}

/// Draw the screen's status message, colored by its polarity
pub fn draw_alert(frame: &mut Frame, area: Rect, status: Option<&StatusMessage>) {
    let Some(status) = status else { return };

    let color = match status.kind {
        StatusKind::Success => Color::Green,
        StatusKind::Failure => Color::Red,
    };
    let alert = Paragraph::new(status.text)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true });
    frame.render_widget(alert, area);
}
