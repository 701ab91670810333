//! Toast notifications shared through context.
//!
//! This is how the app tells the user that something succeeded or failed
//! outside of an inline error box. Wrap the app in [`NotificationProvider`]
//! and push with [`notify`].

use std::time::Duration;

use credentials::Timer;
use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::timer::PlatformTimer;
use crate::Icon;

/// How long a toast stays up before it dismisses itself.
const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "toast toast--info",
            NoticeLevel::Success => "toast toast--success",
            NoticeLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub timestamp: String,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    /// Append a notification and return its id.
    pub fn push(&mut self, level: NoticeLevel, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show `message` and schedule its dismissal.
pub fn notify(notifications: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    let id = notifications.write().push(level, message);
    let mut notifications = *notifications;
    spawn(async move {
        PlatformTimer.sleep(AUTO_DISMISS).await;
        notifications.write().dismiss(id);
    });
}

/// Provides the notification list and renders the toasts above `children`.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let notifications = use_signal(Notifications::default);
    use_context_provider(|| notifications);

    rsx! {
        {children}
        NotificationToasts {}
    }
}

#[component]
fn NotificationToasts() -> Element {
    let mut notifications = use_notifications();
    let entries = notifications().entries;

    rsx! {
        div {
            class: "toasts",
            role: "status",
            for entry in entries {
                div {
                    key: "{entry.id}",
                    class: entry.level.class(),
                    span { class: "toast-time", "{entry.timestamp}" }
                    span { class: "toast-message", "{entry.message}" }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        title: "Dismiss",
                        onclick: move |_| notifications.write().dismiss(entry.id),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    format!("{h:02}:{m:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut list = Notifications::default();
        let a = list.push(NoticeLevel::Success, "Login successful! Redirecting...");
        let b = list.push(NoticeLevel::Info, "Forgot password functionality would go here");
        assert!(b > a);
        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.entries[0].level, NoticeLevel::Success);
        assert_eq!(list.entries[1].message, "Forgot password functionality would go here");
    }

    #[test]
    fn test_dismiss_removes_only_that_entry() {
        let mut list = Notifications::default();
        let a = list.push(NoticeLevel::Info, "first");
        let b = list.push(NoticeLevel::Error, "second");
        list.dismiss(a);
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.entries[0].id, b);

        // Unknown ids are ignored.
        list.dismiss(a);
        assert_eq!(list.entries.len(), 1);
    }

    #[test]
    fn test_levels_are_distinguishable() {
        assert_ne!(NoticeLevel::Success.class(), NoticeLevel::Error.class());
        assert_ne!(NoticeLevel::Info.class(), NoticeLevel::Success.class());
    }
}
