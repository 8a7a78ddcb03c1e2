//! UI module for rendering the TUI

mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (card_area, status_area) = layout::create_layout(area);

    // Draw the current screen's card
    match app.state.current_view {
        View::Signup => forms::draw_signup(frame, card_area, app),
        View::Login => forms::draw_login(frame, card_area, app),
        View::ForgotPassword => forms::draw_forgot_password(frame, card_area, app),
        View::ResetPassword => forms::draw_reset_password(frame, card_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
