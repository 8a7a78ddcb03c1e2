//! Form screen rendering

mod field_renderer;
mod forgot_password_form;
mod login_form;
mod reset_password_form;
mod signup_form;

pub use forgot_password_form::draw as draw_forgot_password;
pub use login_form::draw as draw_login;
pub use reset_password_form::draw as draw_reset_password;
pub use signup_form::draw as draw_signup;
