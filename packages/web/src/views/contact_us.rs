use dioxus::prelude::*;
use ui::views::PlaceholderView;

#[component]
pub fn ContactUs() -> Element {
    rsx! {
        PlaceholderView {
            title: "Welcome to the Tour Guide App",
            body: "This is the main page.",
        }
    }
}
