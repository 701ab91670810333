use dioxus::prelude::*;
use ui::LandingPage;

/// Marketing landing page at `/`.
#[component]
pub fn Home() -> Element {
    rsx! {
        LandingPage {}
    }
}
