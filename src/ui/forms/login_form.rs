//! Login screen rendering

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
    let FormState::Login(form) = &app.state.form else {
        return;
    };

    let block = Block::default()
        .title(" Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // status alert
            Constraint::Length(FIELD_HEIGHT), // email
            Constraint::Length(FIELD_HEIGHT), // password
            Constraint::Length(1),            // sign-up link
            Constraint::Length(1),            // forgot-password link
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

    let signup_link = Paragraph::new(Line::from(vec![
        Span::styled("Sign up", Style::default().fg(Color::Blue)),
        Span::styled(" (Ctrl+U)", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(signup_link, chunks[3]);

    let forgot_link = Paragraph::new(Line::from(vec![
        Span::styled("Forgot Password?", Style::default().fg(Color::Red)),
        Span::styled(" (Ctrl+F)", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(forgot_link, chunks[4]);
}
