use dioxus::prelude::*;

use crate::glyph::{Glyph, GlyphIcon};
use crate::landing::content::NAV_LINKS;

/// Logo mark and wordmark.
#[component]
pub fn Brand() -> Element {
    rsx! {
        div {
            class: "brand",
            GlyphIcon { glyph: Glyph::MapPin, size: 32, class: "brand-mark" }
            span { class: "brand-name", "TourGuide" }
        }
    }
}

/// Fixed top bar with section anchors and the way into the credential screen.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-inner",
                Brand {}
                div {
                    class: "navbar-links",
                    for (label, href) in NAV_LINKS {
                        a { key: "{href}", href: href, "{label}" }
                    }
                }
                div {
                    class: "navbar-actions",
                    a { class: "btn btn--ghost", href: "/login", "Sign In" }
                    a { class: "btn btn--primary", href: "/login", "Get Started" }
                }
            }
        }
    }
}
