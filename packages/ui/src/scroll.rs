//! Scroll position and section visibility for the landing page.
//!
//! Both hooks bridge browser events into signals through a long-lived
//! `document::eval`: the script calls `dioxus.send` whenever the page
//! scrolls or an observed section enters or leaves the viewport.
//!
//! Each bridge registers its teardown on `window` under a key unique to the
//! hook instance; dropping the hook evals that teardown, so revisiting the
//! page does not stack listeners or observers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

/// Fraction of a section that must be on screen to count as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
/// Viewport inset applied before intersecting.
pub const VISIBILITY_ROOT_MARGIN: &str = "-50px";

static NEXT_BRIDGE: AtomicU64 = AtomicU64::new(0);

/// Background layers drift at half the scroll speed.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * 0.5
}

/// The hero decoration drifts slower than the other layers.
pub fn hero_parallax(scroll_y: f64) -> f64 {
    scroll_y * 0.3
}

/// Inline style shifting an element down by `px`.
pub fn translate_y(px: f64) -> String {
    format!("transform: translateY({px}px)")
}

/// Inline style delaying the reveal transition of the `index`-th card.
pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", index as u32 * step_ms)
}

/// Class for an element that slides in once its section is visible.
pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal reveal--shown"
    } else {
        "reveal"
    }
}

/// Last reported visibility per section id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionVisibility {
    sections: HashMap<String, bool>,
}

impl SectionVisibility {
    pub fn set(&mut self, id: impl Into<String>, visible: bool) {
        self.sections.insert(id.into(), visible);
    }

    /// Sections that were never reported are not visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.sections.get(id).copied().unwrap_or(false)
    }
}

/// Follow `window.scrollY`.
pub fn use_scroll_y() -> Signal<f64> {
    let mut scroll_y = use_signal(|| 0.0_f64);
    let key = use_hook(|| bridge_key("scroll"));

    use_effect({
        let key = key.clone();
        move || {
            let js = scroll_bridge_js(&key);
            spawn(async move {
                let mut eval = document::eval(&js);
                while let Ok(y) = eval.recv::<f64>().await {
                    scroll_y.set(y);
                }
            });
        }
    });
    use_bridge_teardown(key);

    scroll_y
}

/// Observe the elements with the given ids and track whether each one
/// intersects the viewport.
pub fn use_section_visibility(ids: &'static [&'static str]) -> Signal<SectionVisibility> {
    let mut visibility = use_signal(SectionVisibility::default);
    let key = use_hook(|| bridge_key("sections"));

    use_effect({
        let key = key.clone();
        move || {
            let js = visibility_bridge_js(&key, ids);
            spawn(async move {
                let mut eval = document::eval(&js);
                loop {
                    match eval.recv::<(String, bool)>().await {
                        Ok((id, visible)) => {
                            if visibility.peek().is_visible(&id) != visible {
                                visibility.write().set(id, visible);
                            }
                        }
                        Err(e) => {
                            tracing::debug!("visibility bridge closed: {:?}", e);
                            break;
                        }
                    }
                }
            });
        }
    });
    use_bridge_teardown(key);

    visibility
}

fn use_bridge_teardown(key: String) {
    use_drop(move || {
        document::eval(&teardown_js(&key));
    });
}

fn bridge_key(kind: &str) -> String {
    format!(
        "__tourguide_{kind}_{}",
        NEXT_BRIDGE.fetch_add(1, Ordering::Relaxed)
    )
}

fn scroll_bridge_js(key: &str) -> String {
    format!(
        r#"(function() {{
            var send = function() {{ dioxus.send(window.scrollY); }};
            window.addEventListener('scroll', send, {{ passive: true }});
            window['{key}'] = function() {{
                window.removeEventListener('scroll', send);
            }};
            send();
        }})();"#
    )
}

fn visibility_bridge_js(key: &str, ids: &[&str]) -> String {
    let ids_js = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"(function() {{
            var observer = new IntersectionObserver(function(entries) {{
                entries.forEach(function(entry) {{
                    dioxus.send([entry.target.id, entry.isIntersecting]);
                }});
            }}, {{ threshold: {VISIBILITY_THRESHOLD}, rootMargin: '{VISIBILITY_ROOT_MARGIN}' }});
            {ids_js}.forEach(function(id) {{
                var el = document.getElementById(id);
                if (el) observer.observe(el);
            }});
            window['{key}'] = function() {{ observer.disconnect(); }};
        }})();"#
    )
}

/// Run and forget the teardown registered under `key`.
fn teardown_js(key: &str) -> String {
    format!(
        r#"(function() {{
            var stop = window['{key}'];
            if (stop) {{
                delete window['{key}'];
                stop();
            }}
        }})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_rates() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(200.0), 100.0);
        assert!((hero_parallax(100.0) - 30.0).abs() < 1e-9);
        assert!(hero_parallax(400.0) < parallax_offset(400.0));
    }

    #[test]
    fn test_inline_styles() {
        assert_eq!(translate_y(12.5), "transform: translateY(12.5px)");
        assert_eq!(translate_y(0.0), "transform: translateY(0px)");
        assert_eq!(stagger_delay(0, 100), "transition-delay: 0ms");
        assert_eq!(stagger_delay(2, 150), "transition-delay: 300ms");
    }

    #[test]
    fn test_unreported_section_is_hidden() {
        let mut visibility = SectionVisibility::default();
        assert!(!visibility.is_visible("features"));

        visibility.set("features", true);
        assert!(visibility.is_visible("features"));
        assert!(!visibility.is_visible("stats"));

        visibility.set("features", false);
        assert!(!visibility.is_visible("features"));
    }

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal reveal--shown");
    }

    #[test]
    fn test_bridge_observes_every_id() {
        let js = visibility_bridge_js("__tourguide_sections_0", &["stats", "features"]);
        assert!(js.contains(r#"["stats","features"].forEach"#));
        assert!(js.contains("threshold: 0.1"));
        assert!(js.contains("rootMargin: '-50px'"));
    }

    #[test]
    fn test_bridge_keys_are_unique_per_mount() {
        let first = bridge_key("scroll");
        let second = bridge_key("scroll");
        assert_ne!(first, second);
        assert!(first.starts_with("__tourguide_scroll_"));
    }

    #[test]
    fn test_bridges_register_their_teardown() {
        let scroll = scroll_bridge_js("__tourguide_scroll_7");
        assert!(scroll.contains("window['__tourguide_scroll_7'] = function()"));
        assert!(scroll.contains("removeEventListener('scroll', send)"));

        let sections = visibility_bridge_js("__tourguide_sections_8", &["stats"]);
        assert!(sections.contains("window['__tourguide_sections_8'] = function()"));
        assert!(sections.contains("observer.disconnect()"));

        let teardown = teardown_js("__tourguide_scroll_7");
        assert!(teardown.contains("var stop = window['__tourguide_scroll_7'];"));
        assert!(teardown.contains("delete window['__tourguide_scroll_7'];"));
        assert!(teardown.contains("stop();"));
    }
}
