//! Reset-password screen rendering

use super::field_renderer::{draw_alert, draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::ResetPassword(form) = &app.state.form else {
        return;
    };

    let block = Block::default()
        .title(" Reset Password ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // status alert
            Constraint::Length(FIELD_HEIGHT), // new password
            Constraint::Length(FIELD_HEIGHT), // confirm password
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
}
