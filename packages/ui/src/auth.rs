//! Sign-in / sign-up screen.
//!
//! Renders a [`FormState`] and turns input events into its transitions. The
//! submission runs in a spawned task so the form stays responsive while the
//! simulated delay elapses.

use credentials::{Field, FormConfig, FormState, Mode, SubmitOutcome};
use dioxus::prelude::*;

use crate::glyph::{Glyph, GlyphIcon};
use crate::notifications::{notify, use_notifications, NoticeLevel};
use crate::timer::PlatformTimer;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Credential screen backed by the authenticator in `config`.
#[component]
pub fn CredentialScreen(#[props(default)] config: FormConfig) -> Element {
    let mut form = use_signal(FormState::new);
    let mut notifications = use_notifications();

    let authenticator = config.authenticator();
    let delay = config.submit_delay();

    let demo_email = authenticator.email().to_string();
    let demo_password = authenticator.password().to_string();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(submission) = form.write().begin_submit() else {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return;
        };
        let authenticator = authenticator.clone();
        spawn(async move {
            let mode = submission.mode();
            let result = submission.resolve(&authenticator, &PlatformTimer, delay).await;
            let outcome = form.write().finish_submit(result);
            match &outcome {
                SubmitOutcome::Succeeded(_) => {
                    tracing::info!(?mode, "credential submission succeeded");
                }
                SubmitOutcome::Failed(err) => {
                    tracing::debug!(?mode, "credential submission failed: {}", err);
                }
                SubmitOutcome::Ignored => {}
            }
            if let Some((level, message)) = outcome_toast(&outcome) {
                notify(&mut notifications, level, &message);
            }
        });
    };

    let state = form();
    let input_type = state.password_input_type();
    let visibility_title = if state.is_password_visible() {
        "Hide password"
    } else {
        "Show password"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }

        div {
            class: "auth-page",
            div {
                class: "auth-column",

                div {
                    class: "auth-header",
                    div {
                        class: "auth-badge",
                        GlyphIcon { glyph: Glyph::Lock, size: 32 }
                    }
                    h1 { "{state.title()}" }
                    p { "{state.subtitle()}" }
                }

                div {
                    class: "auth-card",
                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        if state.shows(Field::Name) {
                            TextField {
                                field: Field::Name,
                                label: "Full Name",
                                input_type: "text",
                                placeholder: "Enter your full name",
                                glyph: Glyph::User,
                                value: state.field(Field::Name).to_string(),
                                oninput: move |value: String| form.write().edit_field(Field::Name, value),
                            }
                        }

                        TextField {
                            field: Field::Email,
                            label: "Email Address",
                            input_type: "email",
                            placeholder: "Enter your email",
                            glyph: Glyph::Mail,
                            value: state.field(Field::Email).to_string(),
                            oninput: move |value: String| form.write().edit_field(Field::Email, value),
                        }

                        div {
                            class: "auth-field",
                            label { r#for: Field::Password.name(), "Password" }
                            div {
                                class: "auth-input",
                                GlyphIcon { glyph: Glyph::Lock, size: 18, class: "auth-input-icon" }
                                input {
                                    r#type: input_type,
                                    id: Field::Password.name(),
                                    name: Field::Password.name(),
                                    class: "with-trailing",
                                    required: true,
                                    placeholder: "Enter your password",
                                    value: state.field(Field::Password),
                                    oninput: move |evt: FormEvent| form.write().edit_field(Field::Password, evt.value()),
                                }
                                button {
                                    class: "auth-visibility",
                                    r#type: "button",
                                    title: visibility_title,
                                    onclick: move |_| form.write().toggle_password_visibility(),
                                    if state.is_password_visible() {
                                        GlyphIcon { glyph: Glyph::EyeOff, size: 18 }
                                    } else {
                                        GlyphIcon { glyph: Glyph::Eye, size: 18 }
                                    }
                                }
                            }
                        }

                        if state.shows(Field::ConfirmPassword) {
                            TextField {
                                field: Field::ConfirmPassword,
                                label: "Confirm Password",
                                input_type: input_type,
                                placeholder: "Confirm your password",
                                glyph: Glyph::Lock,
                                value: state.field(Field::ConfirmPassword).to_string(),
                                oninput: move |value: String| form.write().edit_field(Field::ConfirmPassword, value),
                            }
                        }

                        if let Some(err) = state.error() {
                            div {
                                class: "auth-error",
                                p { "{err}" }
                            }
                        }

                        if state.mode() == Mode::SignIn {
                            div {
                                class: "auth-forgot",
                                button {
                                    r#type: "button",
                                    onclick: move |_| {
                                        notify(
                                            &mut notifications,
                                            NoticeLevel::Info,
                                            "Forgot password functionality would go here",
                                        )
                                    },
                                    "Forgot your password?"
                                }
                            }
                        }

                        button {
                            class: "auth-submit",
                            r#type: "submit",
                            disabled: state.is_submitting(),
                            if state.is_submitting() {
                                span { class: "spinner" }
                            }
                            "{state.submit_label()}"
                        }
                    }

                    div {
                        class: "auth-toggle",
                        p {
                            "{state.toggle_prompt()} "
                            button {
                                r#type: "button",
                                disabled: state.is_submitting(),
                                onclick: move |_| {
                                    if !form.write().toggle_mode() {
                                        tracing::debug!("Ignoring mode toggle while a submission is in flight");
                                    }
                                },
                                "{state.toggle_label()}"
                            }
                        }
                    }

                    if state.mode() == Mode::SignIn {
                        div {
                            class: "auth-demo",
                            p { class: "auth-demo-title", "Demo credentials:" }
                            p {
                                "Email: {demo_email}"
                                br {}
                                "Password: {demo_password}"
                            }
                        }
                    }
                }

                p {
                    class: "auth-terms",
                    "By continuing, you agree to our Terms of Service and Privacy Policy"
                }
            }
        }
    }
}

/// Toast for a finished submission: success notices and failures both
/// reach the notification area.
fn outcome_toast(outcome: &SubmitOutcome) -> Option<(NoticeLevel, String)> {
    match outcome {
        SubmitOutcome::Succeeded(notice) => Some((NoticeLevel::Success, notice.to_string())),
        SubmitOutcome::Failed(err) => Some((NoticeLevel::Error, err.to_string())),
        SubmitOutcome::Ignored => None,
    }
}

/// Labelled text input with a leading icon.
#[component]
fn TextField(
    field: Field,
    label: String,
    input_type: String,
    placeholder: String,
    glyph: Glyph,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "auth-field",
            label { r#for: field.name(), "{label}" }
            div {
                class: "auth-input",
                GlyphIcon { glyph, size: 18, class: "auth-input-icon" }
                input {
                    r#type: "{input_type}",
                    id: field.name(),
                    name: field.name(),
                    required: true,
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credentials::{FormError, Notice};

    #[test]
    fn test_success_toast_carries_notice() {
        let toast = outcome_toast(&SubmitOutcome::Succeeded(Notice::SignedIn));
        assert_eq!(
            toast,
            Some((NoticeLevel::Success, "Login successful! Redirecting...".to_string()))
        );
    }

    #[test]
    fn test_failure_toast_is_error_level() {
        let toast = outcome_toast(&SubmitOutcome::Failed(FormError::PasswordMismatch));
        assert_eq!(toast, Some((NoticeLevel::Error, "Passwords do not match".to_string())));

        let (level, _) = outcome_toast(&SubmitOutcome::Failed(FormError::Unexpected)).unwrap();
        assert_ne!(level, NoticeLevel::Success);
    }

    #[test]
    fn test_ignored_submit_shows_nothing() {
        assert_eq!(outcome_toast(&SubmitOutcome::Ignored), None);
    }
}
