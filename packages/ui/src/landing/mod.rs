//! Marketing landing page.
//!
//! Static sections, animated from two pieces of derived UI state: the scroll
//! position (parallax backgrounds) and which sections intersect the viewport
//! (cards slide in once their section is seen).

use dioxus::prelude::*;

pub mod content;
mod sections;

pub use sections::{CallToAction, FeaturesSection, Footer, Hero, StatsSection, TestimonialsSection};

use crate::navbar::Navbar;
use crate::scroll::{use_scroll_y, use_section_visibility};
use content::SECTION_IDS;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

#[component]
pub fn LandingPage() -> Element {
    let scroll_y = use_scroll_y();
    let visibility = use_section_visibility(&SECTION_IDS);

    let y = scroll_y();
    let seen = visibility();

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        div {
            class: "landing",
            Navbar {}
            Hero { scroll_y: y }
            StatsSection { visible: seen.is_visible("stats"), scroll_y: y }
            FeaturesSection { visible: seen.is_visible("features") }
            TestimonialsSection { visible: seen.is_visible("testimonials"), scroll_y: y }
            CallToAction {}
            Footer {}
        }
    }
}
