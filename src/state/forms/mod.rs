//! Form domain layer
//!
//! Type-safe form handling for the four auth screens.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{
    Form, FormState, ForgotPasswordForm, LoginForm, ResetPasswordForm, SignupForm,
};
