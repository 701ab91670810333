//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

mod glyph;
pub use glyph::{Glyph, GlyphIcon};

mod navbar;
pub use navbar::{Brand, Navbar};

pub mod landing;
pub use landing::LandingPage;

pub mod scroll;
pub use scroll::{use_scroll_y, use_section_visibility, SectionVisibility};

mod auth;
pub use auth::CredentialScreen;

pub mod notifications;
pub use notifications::{notify, use_notifications, NoticeLevel, NotificationProvider};

mod timer;
pub use timer::PlatformTimer;
