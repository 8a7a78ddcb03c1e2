//! Signup screen rendering

use super::field_renderer::{draw_alert, draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::Signup(form) = &app.state.form else {
        return;
    };

    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // status alert
            Constraint::Length(FIELD_HEIGHT), // first name
            Constraint::Length(FIELD_HEIGHT), // last name
            Constraint::Length(FIELD_HEIGHT), // email
            Constraint::Length(FIELD_HEIGHT), // password
            Constraint::Length(1),            // login link
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    draw_alert(frame, chunks[0], app.state.status_message.as_ref());

    for index in 0..form.field_count() {
        if let Some(field) = form.get_field(index) {
            draw_field(
                frame,
                chunks[1 + index],
                field,
                form.active_field() == index,
                app.state.errors.get(field.name).copied(),
            );
        }
    }

    let link = Paragraph::new(Line::from(vec![
        Span::raw("Already have an account? "),
        Span::styled("Login here", Style::default().fg(Color::Blue)),
        Span::styled(" (Ctrl+L)", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(link, chunks[5]);
}
