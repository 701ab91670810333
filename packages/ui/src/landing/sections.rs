use dioxus::prelude::*;

use super::content::{FEATURES, FOOTER_LINKS, STATS, TESTIMONIALS};
use crate::glyph::{Glyph, GlyphIcon};
use crate::navbar::Brand;
use crate::scroll::{hero_parallax, parallax_offset, reveal_class, stagger_delay, translate_y};

#[component]
pub fn Hero(scroll_y: f64) -> Element {
    rsx! {
        section {
            class: "hero",
            div {
                class: "hero-dots",
                style: translate_y(hero_parallax(scroll_y)),
                div { class: "dot dot--cyan" }
                div { class: "dot dot--blue" }
                div { class: "dot dot--purple" }
                div { class: "dot dot--green" }
            }

            div {
                class: "hero-body",
                span { class: "hero-badge fade-in", "🌟 Discover Amazing Places" }
                h1 {
                    class: "hero-title fade-in",
                    span { class: "gradient-text", "Explore" }
                    br {}
                    span { "The World" }
                }
                p {
                    class: "hero-tagline fade-in",
                    "Your personal AI-powered tour guide for unforgettable adventures and hidden gems around the globe"
                }
                div {
                    class: "hero-actions fade-in",
                    a {
                        class: "btn btn--primary btn--large",
                        href: "/login",
                        "Start Your Journey"
                        GlyphIcon { glyph: Glyph::ArrowRight, size: 18, class: "btn-trailing" }
                    }
                    button {
                        class: "btn btn--outline btn--large",
                        r#type: "button",
                        GlyphIcon { glyph: Glyph::Play, size: 20, class: "btn-leading" }
                        "Watch Demo"
                    }
                }
            }

            div {
                class: "scroll-hint",
                GlyphIcon { glyph: Glyph::ChevronDown, size: 32 }
            }
        }
    }
}

#[component]
pub fn StatsSection(visible: bool, scroll_y: f64) -> Element {
    rsx! {
        section {
            id: "stats",
            class: "stats",
            div { class: "stats-backdrop", style: translate_y(parallax_offset(scroll_y)) }
            div {
                class: "container stats-grid",
                for (index, stat) in STATS.iter().enumerate() {
                    div {
                        key: "{stat.label}",
                        class: reveal_class(visible),
                        style: stagger_delay(index, 100),
                        GlyphIcon { glyph: stat.glyph, size: 32, class: "stat-icon" }
                        div { class: "stat-number", "{stat.number}" }
                        div { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FeaturesSection(visible: bool) -> Element {
    rsx! {
        section {
            id: "features",
            class: "features",
            div {
                class: "container",
                div {
                    class: "section-heading",
                    h2 {
                        class: reveal_class(visible),
                        span { class: "gradient-text", "Amazing Features" }
                    }
                    p {
                        class: reveal_class(visible),
                        style: stagger_delay(1, 200),
                        "Discover what makes our tour guide app the perfect companion for your adventures"
                    }
                }
                div {
                    class: "card-grid",
                    for (index, feature) in FEATURES.iter().enumerate() {
                        div {
                            key: "{feature.title}",
                            class: "card feature-card {reveal_class(visible)}",
                            style: stagger_delay(index, 200),
                            div {
                                class: "feature-tile {feature.accent}",
                                GlyphIcon { glyph: feature.glyph, size: 32 }
                            }
                            h3 { "{feature.title}" }
                            p { "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TestimonialsSection(visible: bool, scroll_y: f64) -> Element {
    rsx! {
        section {
            id: "testimonials",
            class: "testimonials",
            div {
                class: "testimonials-backdrop",
                style: translate_y(parallax_offset(scroll_y) * 0.3),
            }
            div {
                class: "container",
                div {
                    class: "section-heading",
                    h2 { class: reveal_class(visible), "What Travelers Say" }
                }
                div {
                    class: "card-grid",
                    for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                        div {
                            key: "{testimonial.name}",
                            class: "card testimonial-card {reveal_class(visible)}",
                            style: stagger_delay(index, 150),
                            div {
                                class: "testimonial-author",
                                div { class: "testimonial-avatar", "{testimonial.avatar}" }
                                div {
                                    div { class: "testimonial-name", "{testimonial.name}" }
                                    div { class: "testimonial-location", "{testimonial.location}" }
                                }
                            }
                            div {
                                class: "testimonial-rating",
                                for star in 0..testimonial.rating {
                                    GlyphIcon { key: "{star}", glyph: Glyph::Star, size: 18, class: "star" }
                                }
                            }
                            p { class: "testimonial-text", "\"{testimonial.text}\"" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CallToAction() -> Element {
    rsx! {
        section {
            class: "cta",
            div {
                class: "container container--narrow",
                h2 { span { class: "gradient-text", "Ready to Explore?" } }
                p {
                    "Join thousands of travelers who have discovered amazing places with our AI-powered guide"
                }
                div {
                    class: "hero-actions",
                    a { class: "btn btn--primary btn--large", href: "/login", "Download Now - Free" }
                    a { class: "btn btn--outline-cyan btn--large", href: "#pricing", "View Pricing" }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "container",
                Brand {}
                p { "Discover the world with confidence. Your adventure starts here." }
                div {
                    class: "footer-links",
                    for (label, href) in FOOTER_LINKS {
                        a { key: "{label}", href: href, "{label}" }
                    }
                }
            }
        }
    }
}
