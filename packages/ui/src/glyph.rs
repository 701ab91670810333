use dioxus::prelude::*;

use crate::icons::*;
use crate::Icon;

/// Icons used across the site, as plain data so content tables can name them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    MapPin,
    Star,
    Users,
    Camera,
    ChevronDown,
    Play,
    Award,
    Globe,
    Shield,
    ArrowRight,
    Eye,
    EyeOff,
    Lock,
    Mail,
    User,
}

#[component]
pub fn GlyphIcon(
    glyph: Glyph,
    #[props(default = 20)] size: u32,
    #[props(default = "".to_string())] class: String,
) -> Element {
    match glyph {
        Glyph::MapPin => rsx! { Icon { icon: FaLocationDot, width: size, height: size, class } },
        Glyph::Star => rsx! { Icon { icon: FaStar, width: size, height: size, class } },
        Glyph::Users => rsx! { Icon { icon: FaUsers, width: size, height: size, class } },
        Glyph::Camera => rsx! { Icon { icon: FaCamera, width: size, height: size, class } },
        Glyph::ChevronDown => rsx! { Icon { icon: FaChevronDown, width: size, height: size, class } },
        Glyph::Play => rsx! { Icon { icon: FaPlay, width: size, height: size, class } },
        Glyph::Award => rsx! { Icon { icon: FaAward, width: size, height: size, class } },
        Glyph::Globe => rsx! { Icon { icon: FaGlobe, width: size, height: size, class } },
        Glyph::Shield => rsx! { Icon { icon: FaShieldHalved, width: size, height: size, class } },
        Glyph::ArrowRight => rsx! { Icon { icon: FaArrowRight, width: size, height: size, class } },
        Glyph::Eye => rsx! { Icon { icon: FaEye, width: size, height: size, class } },
        Glyph::EyeOff => rsx! { Icon { icon: FaEyeSlash, width: size, height: size, class } },
        Glyph::Lock => rsx! { Icon { icon: FaLock, width: size, height: size, class } },
        Glyph::Mail => rsx! { Icon { icon: FaEnvelope, width: size, height: size, class } },
        Glyph::User => rsx! { Icon { icon: FaUser, width: size, height: size, class } },
    }
}
