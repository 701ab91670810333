use dioxus::prelude::*;
use ui::views::PlaceholderView;

#[component]
pub fn Landing() -> Element {
    rsx! {
        PlaceholderView {
            title: "Welcome to the Tour Guide App",
            body: "This is the landing page.",
        }
    }
}
