//! Database connectivity check page.

use dioxus::prelude::*;
use ui::views::DatabaseProbeView;

#[component]
pub fn AboutUs() -> Element {
    rsx! {
        DatabaseProbeView {}
    }
}
