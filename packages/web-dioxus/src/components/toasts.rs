//! Transient notifications

use academy_core::{Notification, NotificationKind};
use dioxus::prelude::*;

const AUTO_DISMISS_MS: u32 = 5_000;

/// Stack of dismissible notifications in the corner of the screen
#[component]
pub fn Toasts(notifications: Vec<Notification>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 flex flex-col gap-2 w-80",
            for notification in notifications {
                ToastItem {
                    key: "{notification.id}",
                    notification: notification.clone(),
                    on_dismiss
                }
            }
        }
    }
}

#[component]
fn ToastItem(notification: Notification, on_dismiss: EventHandler<u64>) -> Element {
    let id = notification.id;

    use_future(move || async move {
        sleep_ms(AUTO_DISMISS_MS).await;
        on_dismiss.call(id);
    });

    let style = match notification.kind {
        NotificationKind::Success => "bg-emerald-50 border-emerald-200 text-emerald-800",
        NotificationKind::Error => "bg-red-50 border-red-200 text-red-800",
        NotificationKind::Info => "bg-blue-50 border-blue-200 text-blue-800",
    };

    rsx! {
        div {
            class: "flex items-start justify-between gap-3 border rounded-lg shadow-sm px-4 py-3 text-sm {style}",
            role: "status",
            span { "{notification.message}" }
            button {
                class: "opacity-60 hover:opacity-100",
                aria_label: "Dismiss",
                onclick: move |_| on_dismiss.call(id),
                "\u{2715}"
            }
        }
    }
}

#[cfg(feature = "web")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

// Server-rendered toasts stay until the client takes over
#[cfg(not(feature = "web"))]
async fn sleep_ms(_ms: u32) {
    futures::future::pending::<()>().await;
}
