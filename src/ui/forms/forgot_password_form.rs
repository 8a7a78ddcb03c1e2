//! Forgot-password screen rendering

use super::field_renderer::{draw_alert, draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::FormState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::ForgotPassword(form) = &app.state.form else {
        return;
    };

    let block = Block::default()
        .title(" Forgot Password? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // email
            Constraint::Length(1),            // helper text
            Constraint::Length(2),            // status alert
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    draw_field(
        frame,
        chunks[0],
        &form.email,
        true,
        app.state.errors.get("email").copied(),
    );

    let helper = Paragraph::new("We'll send a link to reset your password.")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(helper, chunks[1]);

    draw_alert(frame, chunks[2], app.state.status_message.as_ref());
}
