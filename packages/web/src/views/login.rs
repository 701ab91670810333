//! Sign-in / sign-up page view.

use dioxus::prelude::*;
use ui::CredentialScreen;

use crate::form_config;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let config = use_hook(form_config);

    rsx! {
        CredentialScreen { config }
    }
}
