use dioxus::prelude::*;

/// Bare page with a heading and one line of copy.
#[component]
pub fn PlaceholderView(title: String, body: String) -> Element {
    rsx! {
        div {
            class: "placeholder",
            h1 { "{title}" }
            p { "{body}" }
        }
    }
}
