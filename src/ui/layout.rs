//! Screen layout and status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the centered form card
const CARD_WIDTH: u16 = 60;

/// Split the screen into a centered card column and a bottom status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(CARD_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    (columns[1], rows[1])
}

/// Draw the bottom status bar: key hints plus submission/redirect activity
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    match app.state.current_view {
        View::Signup => push_hint(&mut spans, "Ctrl+L", "login"),
        View::Login => {
            push_hint(&mut spans, "Ctrl+U", "sign up");
            push_hint(&mut spans, "Ctrl+F", "forgot password");
        }
        View::ForgotPassword | View::ResetPassword => push_hint(&mut spans, "Esc", "back to login"),
    }
    push_hint(&mut spans, "Tab", "next field");
    push_hint(&mut spans, "Enter", "submit");
    push_hint(&mut spans, "Ctrl+C", "quit");

    if app.state.in_flight {
        spans.push(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(redirect) = &app.state.pending_redirect {
        let seconds = redirect.remaining().as_secs() + 1;
        spans.push(Span::styled(
            format!("Redirecting in {seconds}s..."),
            Style::default().fg(Color::Green),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

fn push_hint(spans: &mut Vec<Span<'static>>, keys: &'static str, action: &'static str) {
    spans.push(Span::styled(keys, Style::default().fg(Color::Cyan)));
    spans.push(Span::raw(format!(": {action}  ")));
}
