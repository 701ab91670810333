//! Copy shown on the landing page.

use crate::glyph::Glyph;

/// Sections whose visibility drives the reveal animations.
pub const SECTION_IDS: [&str; 3] = ["stats", "features", "testimonials"];

/// Anchor links in the navigation bar: (label, href).
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Features", "#features"),
    ("Reviews", "#testimonials"),
    ("Pricing", "#pricing"),
];

/// Footer links: (label, href).
pub const FOOTER_LINKS: [(&str, &str); 3] = [
    ("Privacy Policy", "#"),
    ("Terms of Service", "#"),
    ("Contact Us", "/contactus"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub glyph: Glyph,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
    /// Gradient modifier class for the icon tile.
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    /// Stars out of five.
    pub rating: u8,
    pub text: &'static str,
    pub avatar: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { number: "50K+", label: "Happy Travelers", glyph: Glyph::Users },
    Stat { number: "200+", label: "Destinations", glyph: Glyph::Globe },
    Stat { number: "4.9", label: "Average Rating", glyph: Glyph::Star },
    Stat { number: "99%", label: "Success Rate", glyph: Glyph::Award },
];

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Smart Navigation",
        description: "AI-powered route optimization with real-time traffic updates and hidden shortcuts",
        glyph: Glyph::MapPin,
        accent: "accent--cyan",
    },
    Feature {
        title: "AR Experiences",
        description: "Augmented reality features that bring historical sites and landmarks to life",
        glyph: Glyph::Camera,
        accent: "accent--purple",
    },
    Feature {
        title: "Safe & Secure",
        description: "Your data and location are protected with end-to-end encryption and privacy controls",
        glyph: Glyph::Shield,
        accent: "accent--green",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        location: "New York, USA",
        rating: 5,
        text: "This app completely transformed my European adventure! The AI recommendations were spot-on.",
        avatar: "👩‍💼",
    },
    Testimonial {
        name: "Miguel Rodriguez",
        location: "Barcelona, Spain",
        rating: 5,
        text: "As a local guide, I love how this app helps tourists discover hidden gems in my city.",
        avatar: "👨‍🎨",
    },
    Testimonial {
        name: "Yuki Tanaka",
        location: "Tokyo, Japan",
        rating: 5,
        text: "The offline maps and cultural insights made exploring rural Japan absolutely incredible.",
        avatar: "👩‍💻",
    },
];
