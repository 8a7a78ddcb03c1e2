//! Form state management and form structs

use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Enum representing the form owned by the current screen
#[derive(Debug, Clone)]
pub enum FormState {
    Signup(SignupForm),
    Login(LoginForm),
    ForgotPassword(ForgotPasswordForm),
    ResetPassword(ResetPasswordForm),
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Signup(SignupForm::new())
    }
}

impl FormState {
    pub fn next_field(&mut self) {
        match self {
            FormState::Signup(f) => f.next_field(),
            FormState::Login(f) => f.next_field(),
            FormState::ForgotPassword(f) => f.next_field(),
            FormState::ResetPassword(f) => f.next_field(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            FormState::Signup(f) => f.prev_field(),
            FormState::Login(f) => f.prev_field(),
            FormState::ForgotPassword(f) => f.prev_field(),
            FormState::ResetPassword(f) => f.prev_field(),
        }
    }

    pub fn get_active_field_mut(&mut self) -> &mut FormField {
        match self {
            FormState::Signup(f) => f.get_active_field_mut(),
            FormState::Login(f) => f.get_active_field_mut(),
            FormState::ForgotPassword(f) => f.get_active_field_mut(),
            FormState::ResetPassword(f) => f.get_active_field_mut(),
        }
    }
}

// Signup form
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::text("first_name", "First Name", "Enter your first name"),
            last_name: FormField::text("last_name", "Last Name", "Enter your last name"),
            email: FormField::text("email", "Email Address", "Enter your email address"),
            password: FormField::secret("password", "Password", "Enter your password"),
            active_field_index: 0,
        }
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        4
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.first_name,
            1 => &mut self.last_name,
            2 => &mut self.email,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.first_name),
            1 => Some(&self.last_name),
            2 => Some(&self.email),
            3 => Some(&self.password),
            _ => None,
        }
    }
}

// Login form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email Address", "Enter your email address"),
            password: FormField::secret("password", "Password", "Enter your password"),
            active_field_index: 0,
        }
    }

    /// Reset every field back to empty (after a successful login)
    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.active_field_index = 0;
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            1 => Some(&self.password),
            _ => None,
        }
    }
}

// Forgot password form
#[derive(Debug, Clone)]
pub struct ForgotPasswordForm {
    pub email: FormField,
    pub active_field_index: usize,
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "Email Address", "Enter your email address"),
            active_field_index: 0,
        }
    }
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ForgotPasswordForm {
    fn field_count(&self) -> usize {
        1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, _index: usize) {
        self.active_field_index = 0;
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        &mut self.email
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.email),
            _ => None,
        }
    }
}

// Reset password form
#[derive(Debug, Clone)]
pub struct ResetPasswordForm {
    pub new_password: FormField,
    pub confirm_password: FormField,
    pub active_field_index: usize,
}

impl ResetPasswordForm {
    pub fn new() -> Self {
        Self {
            new_password: FormField::secret(
                "new_password",
                "New Password",
                "Enter your new password",
            ),
            confirm_password: FormField::secret(
                "confirm_password",
                "Confirm Password",
                "Confirm your new password",
            ),
            active_field_index: 0,
        }
    }
}

impl Default for ResetPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ResetPasswordForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.new_password,
            _ => &mut self.confirm_password,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.new_password),
            1 => Some(&self.confirm_password),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_state_enum {
        use super::*;

        #[test]
        fn test_default_is_signup() {
            let state = FormState::default();
            assert!(matches!(state, FormState::Signup(_)));
        }

        #[test]
        fn test_next_field_cycles_through_form() {
            let mut state = FormState::Login(LoginForm::new());
            if let FormState::Login(ref f) = state {
                assert_eq!(f.active_field_index, 0);
            }
            state.next_field();
            if let FormState::Login(ref f) = state {
                assert_eq!(f.active_field_index, 1);
            }
        }

        #[test]
        fn test_get_active_field_mut_returns_first_field() {
            let mut state = FormState::Signup(SignupForm::new());
            assert_eq!(state.get_active_field_mut().name, "first_name");
        }
    }

    mod signup_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = SignupForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.first_name.as_text(), "");
            assert_eq!(form.last_name.as_text(), "");
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.password.as_text(), "");
        }

        #[test]
        fn test_field_count() {
            let form = SignupForm::new();
            assert_eq!(form.field_count(), 4);
        }

        #[test]
        fn test_password_is_secret() {
            let form = SignupForm::new();
            assert!(form.password.is_secret);
            assert!(!form.email.is_secret);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = SignupForm::new();
            for _ in 0..4 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = SignupForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, 3); // Wrapped to last
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = SignupForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "first_name");
            assert_eq!(form.get_field(1).unwrap().name, "last_name");
            assert_eq!(form.get_field(2).unwrap().name, "email");
            assert_eq!(form.get_field(3).unwrap().name, "password");
            assert!(form.get_field(4).is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = SignupForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 3);
        }
    }

    mod login_form {
        use super::*;

        #[test]
        fn test_field_count() {
            let form = LoginForm::new();
            assert_eq!(form.field_count(), 2);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = LoginForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "email");
            assert_eq!(form.get_field(1).unwrap().name, "password");
            assert!(form.get_field(2).is_none());
        }

        #[test]
        fn test_clear_resets_fields_and_focus() {
            let mut form = LoginForm::new();
            form.email.push_char('a');
            form.password.push_char('x');
            form.active_field_index = 1;
            form.clear();
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.password.as_text(), "");
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod forgot_password_form {
        use super::*;

        #[test]
        fn test_single_field() {
            let form = ForgotPasswordForm::new();
            assert_eq!(form.field_count(), 1);
            assert_eq!(form.get_field(0).unwrap().name, "email");
            assert!(form.get_field(1).is_none());
        }

        #[test]
        fn test_next_field_stays_on_email() {
            let mut form = ForgotPasswordForm::new();
            form.next_field();
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod reset_password_form {
        use super::*;

        #[test]
        fn test_both_fields_are_secret() {
            let form = ResetPasswordForm::new();
            assert!(form.new_password.is_secret);
            assert!(form.confirm_password.is_secret);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = ResetPasswordForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "new_password");
            assert_eq!(form.get_field(1).unwrap().name, "confirm_password");
            assert!(form.get_field(2).is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ResetPasswordForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 1);
        }
    }
}
