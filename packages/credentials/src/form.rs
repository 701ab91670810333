//! # Credential form state machine
//!
//! [`FormState`] is everything the sign-in / sign-up screen holds: the active
//! [`Mode`], the four text fields, the in-flight flag, the last error and
//! whether passwords are shown in clear text. The rendering layer feeds input
//! events into the transition methods and draws whatever the state holds.
//!
//! ## Transitions
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`edit_field`](FormState::edit_field) | Stores the value, clears the error. |
//! | [`toggle_mode`](FormState::toggle_mode) | Flips the mode, clears the error and every text field. Ignored while submitting. |
//! | [`toggle_password_visibility`](FormState::toggle_password_visibility) | Flips clear-text display of passwords. |
//! | [`submit`](FormState::submit) | Waits the simulated delay, asks the [`Authenticator`], applies the outcome. |
//!
//! ## Submission
//!
//! `submit` is split in three steps so that a UI holding the state in a
//! reactive cell never keeps it borrowed across the delay:
//!
//! 1. [`begin_submit`](FormState::begin_submit) marks the form as submitting
//!    and hands out an owned [`Submission`] snapshot. While a submission is in
//!    flight it returns `None`, so a second submit is ignored.
//! 2. [`Submission::resolve`] sleeps through the [`Timer`] and decides the
//!    result.
//! 3. [`finish_submit`](FormState::finish_submit) applies the result and
//!    always clears the in-flight flag.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::authenticator::{Authenticator, Timer};
use crate::error::FormError;

/// Which flow the form presents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    SignIn,
    SignUp,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::SignIn => Mode::SignUp,
            Mode::SignUp => Mode::SignIn,
        }
    }
}

/// Editable text fields of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    Name,
    ConfirmPassword,
}

impl Field {
    /// Form control name used by the rendering layer.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::Name => "name",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

/// Success signal of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    SignedIn,
    AccountCreated,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SignedIn => f.write_str("Login successful! Redirecting..."),
            Notice::AccountCreated => f.write_str("Account created successfully! Please login."),
        }
    }
}

/// What a call to [`FormState::submit`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    Ignored,
    Succeeded(Notice),
    Failed(FormError),
}

/// Transient state of the credential screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    mode: Mode,
    email: String,
    password: String,
    name: String,
    confirm_password: String,
    submitting: bool,
    error: Option<FormError>,
    password_visible: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Name => &self.name,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    /// Whether `field` is shown and required in the current mode.
    pub fn shows(&self, field: Field) -> bool {
        match field {
            Field::Email | Field::Password => true,
            Field::Name | Field::ConfirmPassword => self.mode == Mode::SignUp,
        }
    }

    /// Store a new value for `field` and clear any error.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::Name => self.name = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
        self.error = None;
    }

    /// Switch between sign-in and sign-up, starting from empty fields.
    ///
    /// Returns `false` and changes nothing while a submission is in flight,
    /// since its result applies to the mode it was started in.
    pub fn toggle_mode(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.mode = self.mode.toggled();
        self.error = None;
        self.clear_fields();
        true
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Mark the form as submitting and snapshot what will be submitted.
    ///
    /// Returns `None` while another submission is in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        Some(Submission {
            mode: self.mode,
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }

    /// Apply the result of a resolved [`Submission`].
    pub fn finish_submit(&mut self, result: Result<Notice, FormError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(Notice::AccountCreated) => {
                self.mode = Mode::SignIn;
                self.error = None;
                self.clear_fields();
                SubmitOutcome::Succeeded(Notice::AccountCreated)
            }
            Ok(notice) => {
                self.error = None;
                SubmitOutcome::Succeeded(notice)
            }
            Err(err) => {
                self.error = Some(err.clone());
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Run a whole submission against `authenticator`, waiting `delay` on
    /// `timer` first.
    pub async fn submit<A, T>(&mut self, authenticator: &A, timer: &T, delay: Duration) -> SubmitOutcome
    where
        A: Authenticator,
        T: Timer,
    {
        let Some(submission) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };
        let result = submission.resolve(authenticator, timer, delay).await;
        self.finish_submit(result)
    }

    /// Header title for the current mode.
    pub fn title(&self) -> &'static str {
        match self.mode {
            Mode::SignIn => "Welcome Back",
            Mode::SignUp => "Create Account",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self.mode {
            Mode::SignIn => "Sign in to your account to continue",
            Mode::SignUp => "Sign up to get started with our platform",
        }
    }

    /// Submit button text, which changes while submitting.
    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.submitting) {
            (Mode::SignIn, false) => "Sign In",
            (Mode::SignIn, true) => "Signing in...",
            (Mode::SignUp, false) => "Create Account",
            (Mode::SignUp, true) => "Creating account...",
        }
    }

    pub fn toggle_prompt(&self) -> &'static str {
        match self.mode {
            Mode::SignIn => "Don't have an account?",
            Mode::SignUp => "Already have an account?",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            Mode::SignIn => "Sign up",
            Mode::SignUp => "Sign in",
        }
    }

    /// HTML input type for password fields.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    fn clear_fields(&mut self) {
        self.email.clear();
        self.password.clear();
        self.name.clear();
        self.confirm_password.clear();
    }
}

/// Owned snapshot of what is being submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    mode: Mode,
    email: String,
    password: String,
    name: String,
    confirm_password: String,
}

impl Submission {
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Wait `delay`, then decide the outcome of this submission.
    pub async fn resolve<A, T>(
        self,
        authenticator: &A,
        timer: &T,
        delay: Duration,
    ) -> Result<Notice, FormError>
    where
        A: Authenticator,
        T: Timer,
    {
        timer.sleep(delay).await;

        match self.mode {
            Mode::SignUp => {
                if self.password != self.confirm_password {
                    return Err(FormError::PasswordMismatch);
                }
                authenticator
                    .sign_up(&self.name, &self.email, &self.password)
                    .await
                    .map_err(|_| FormError::Unexpected)?;
                Ok(Notice::AccountCreated)
            }
            Mode::SignIn => {
                authenticator.sign_in(&self.email, &self.password).await?;
                Ok(Notice::SignedIn)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::authenticator::DemoAuthenticator;
    use crate::error::AuthError;

    const DELAY: Duration = Duration::from_millis(1500);

    /// Resolves immediately and remembers what it was asked to wait.
    #[derive(Default)]
    struct InstantTimer {
        waits: RefCell<Vec<Duration>>,
    }

    impl Timer for InstantTimer {
        async fn sleep(&self, duration: Duration) {
            self.waits.borrow_mut().push(duration);
        }
    }

    /// Authenticator that cannot be reached.
    struct Offline;

    impl Authenticator for Offline {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<(), AuthError> {
            Err(AuthError::Unavailable("connection refused".to_string()))
        }

        async fn sign_up(&self, _name: &str, _email: &str, _password: &str) -> Result<(), AuthError> {
            Err(AuthError::Unavailable("connection refused".to_string()))
        }
    }

    fn demo() -> DemoAuthenticator {
        DemoAuthenticator::new("demo@example.com", "password")
    }

    fn sign_up_form(password: &str, confirm: &str) -> FormState {
        let mut form = FormState::new();
        form.toggle_mode();
        form.edit_field(Field::Name, "Ana Traveler");
        form.edit_field(Field::Email, "ana@example.com");
        form.edit_field(Field::Password, password);
        form.edit_field(Field::ConfirmPassword, confirm);
        form
    }

    #[test]
    fn test_new_form_is_empty_sign_in() {
        let form = FormState::new();
        assert_eq!(form.mode(), Mode::SignIn);
        assert_eq!(form.email(), "");
        assert_eq!(form.password(), "");
        assert_eq!(form.name(), "");
        assert_eq!(form.confirm_password(), "");
        assert!(!form.is_submitting());
        assert!(form.error().is_none());
        assert!(!form.is_password_visible());
    }

    #[test]
    fn test_edit_field_clears_error() {
        let mut form = FormState::new();
        form.finish_submit(Err(FormError::InvalidCredentials));
        assert_eq!(form.error(), Some(&FormError::InvalidCredentials));

        for (field, value) in [
            (Field::Email, "a@b.c"),
            (Field::Password, "pw"),
            (Field::Name, "Ana"),
            (Field::ConfirmPassword, "pw"),
        ] {
            form.finish_submit(Err(FormError::Unexpected));
            form.edit_field(field, value);
            assert!(form.error().is_none());
            assert_eq!(form.field(field), value);
        }
    }

    #[test]
    fn test_toggle_mode_resets_fields_and_error() {
        let mut form = sign_up_form("a", "b");
        form.finish_submit(Err(FormError::PasswordMismatch));
        form.toggle_password_visibility();

        form.toggle_mode();
        assert_eq!(form.mode(), Mode::SignIn);
        assert!(form.error().is_none());
        for field in [Field::Email, Field::Password, Field::Name, Field::ConfirmPassword] {
            assert_eq!(form.field(field), "");
        }
        assert!(form.is_password_visible());

        form.edit_field(Field::Email, "x@y.z");
        form.toggle_mode();
        assert_eq!(form.mode(), Mode::SignUp);
        assert_eq!(form.email(), "");
    }

    #[test]
    fn test_password_visibility_double_toggle() {
        let mut form = FormState::new();
        form.toggle_password_visibility();
        assert!(form.is_password_visible());
        assert_eq!(form.password_input_type(), "text");
        form.toggle_password_visibility();
        assert!(!form.is_password_visible());
        assert_eq!(form.password_input_type(), "password");
    }

    #[test]
    fn test_sign_up_fields_only_shown_in_sign_up() {
        let mut form = FormState::new();
        assert!(form.shows(Field::Email));
        assert!(!form.shows(Field::Name));
        assert!(!form.shows(Field::ConfirmPassword));
        form.toggle_mode();
        assert!(form.shows(Field::Name));
        assert!(form.shows(Field::ConfirmPassword));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::ConfirmPassword.name(), "confirmPassword");
        assert_eq!(Field::Email.name(), "email");
        assert_eq!(Field::Name.name(), "name");
    }

    #[tokio::test]
    async fn test_toggle_mode_ignored_while_submitting() {
        let mut form = FormState::new();
        form.edit_field(Field::Email, "wrong@example.com");
        form.edit_field(Field::Password, "password");
        let submission = form.begin_submit().unwrap();

        assert!(!form.toggle_mode());
        assert_eq!(form.mode(), Mode::SignIn);
        assert_eq!(form.submit_label(), "Signing in...");
        assert_eq!(form.email(), "wrong@example.com");

        let result = submission.resolve(&demo(), &InstantTimer::default(), DELAY).await;
        form.finish_submit(result);
        assert_eq!(form.mode(), Mode::SignIn);
        assert_eq!(form.error(), Some(&FormError::InvalidCredentials));

        assert!(form.toggle_mode());
        assert_eq!(form.mode(), Mode::SignUp);
    }

    #[tokio::test]
    async fn test_sign_up_mismatch_keeps_fields() {
        let mut form = sign_up_form("a", "b");
        let before = form.clone();
        let timer = InstantTimer::default();

        let outcome = form.submit(&demo(), &timer, DELAY).await;

        assert_eq!(outcome, SubmitOutcome::Failed(FormError::PasswordMismatch));
        assert_eq!(form.error().map(ToString::to_string).as_deref(), Some("Passwords do not match"));
        assert!(!form.is_submitting());
        assert_eq!(form.mode(), Mode::SignUp);
        assert_eq!(form.name(), before.name());
        assert_eq!(form.email(), before.email());
        assert_eq!(form.password(), "a");
        assert_eq!(form.confirm_password(), "b");
    }

    #[tokio::test]
    async fn test_sign_up_success_returns_to_empty_sign_in() {
        let mut form = sign_up_form("x", "x");
        let timer = InstantTimer::default();

        let outcome = form.submit(&demo(), &timer, DELAY).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(Notice::AccountCreated));
        assert_eq!(form.mode(), Mode::SignIn);
        for field in [Field::Email, Field::Password, Field::Name, Field::ConfirmPassword] {
            assert_eq!(form.field(field), "");
        }
        assert!(form.error().is_none());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_sign_in_with_demo_credentials() {
        let mut form = FormState::new();
        form.edit_field(Field::Email, "demo@example.com");
        form.edit_field(Field::Password, "password");

        let outcome = form.submit(&demo(), &InstantTimer::default(), DELAY).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded(Notice::SignedIn));
        assert_eq!(Notice::SignedIn.to_string(), "Login successful! Redirecting...");
        assert!(form.error().is_none());
        assert!(!form.is_submitting());
        assert_eq!(form.email(), "demo@example.com");
    }

    #[tokio::test]
    async fn test_sign_in_with_wrong_credentials() {
        let mut form = FormState::new();
        form.edit_field(Field::Email, "wrong@x.com");
        form.edit_field(Field::Password, "whatever");

        let outcome = form.submit(&demo(), &InstantTimer::default(), DELAY).await;

        assert_eq!(outcome, SubmitOutcome::Failed(FormError::InvalidCredentials));
        assert_eq!(
            form.error().map(ToString::to_string).as_deref(),
            Some("Invalid email or password")
        );
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_unreachable_authenticator_is_unexpected() {
        let mut form = FormState::new();
        form.edit_field(Field::Email, "demo@example.com");
        form.edit_field(Field::Password, "password");
        let outcome = form.submit(&Offline, &InstantTimer::default(), DELAY).await;
        assert_eq!(outcome, SubmitOutcome::Failed(FormError::Unexpected));
        assert_eq!(
            form.error().map(ToString::to_string).as_deref(),
            Some("Something went wrong. Please try again.")
        );

        let mut form = sign_up_form("x", "x");
        let outcome = form.submit(&Offline, &InstantTimer::default(), DELAY).await;
        assert_eq!(outcome, SubmitOutcome::Failed(FormError::Unexpected));
        assert_eq!(form.mode(), Mode::SignUp);
        assert_eq!(form.password(), "x");
    }

    #[tokio::test]
    async fn test_submit_waits_configured_delay() {
        let mut form = FormState::new();
        let timer = InstantTimer::default();
        form.submit(&demo(), &timer, Duration::from_millis(40)).await;
        assert_eq!(*timer.waits.borrow(), vec![Duration::from_millis(40)]);
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_ignored() {
        let mut form = FormState::new();
        let submission = form.begin_submit().expect("first submission starts");
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());

        let timer = InstantTimer::default();
        assert_eq!(form.submit(&demo(), &timer, DELAY).await, SubmitOutcome::Ignored);
        assert!(timer.waits.borrow().is_empty());
        assert!(form.is_submitting());

        let result = submission.resolve(&demo(), &timer, DELAY).await;
        form.finish_submit(result);
        assert!(!form.is_submitting());
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_begin_submit_clears_error() {
        let mut form = FormState::new();
        form.finish_submit(Err(FormError::InvalidCredentials));
        let submission = form.begin_submit().unwrap();
        assert!(form.error().is_none());
        assert_eq!(submission.mode(), Mode::SignIn);
    }

    #[test]
    fn test_labels_follow_mode_and_progress() {
        let mut form = FormState::new();
        assert_eq!(form.title(), "Welcome Back");
        assert_eq!(form.submit_label(), "Sign In");
        assert_eq!(form.toggle_label(), "Sign up");
        form.begin_submit();
        assert_eq!(form.submit_label(), "Signing in...");
        form.finish_submit(Ok(Notice::SignedIn));

        form.toggle_mode();
        assert_eq!(form.title(), "Create Account");
        assert_eq!(form.subtitle(), "Sign up to get started with our platform");
        assert_eq!(form.toggle_prompt(), "Already have an account?");
        form.begin_submit();
        assert_eq!(form.submit_label(), "Creating account...");
    }
}
