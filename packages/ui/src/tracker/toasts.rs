//! Transient notifications shown in a corner stack.

use dioxus::prelude::*;
use tracker_core::{Notification, NotificationKind};

/// How long a toast stays up unless clicked away.
const TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// Handle for raising toasts, provided as context by `JobTracker`.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    /// Show `notification` and schedule its dismissal.
    pub fn push(mut self, notification: Notification) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        tracing::debug!(id, message = %notification.message, "toast");
        self.toasts.write().push(Toast { id, notification });

        spawn(async move {
            sleep_ms(TOAST_TIMEOUT_MS).await;
            self.dismiss(id);
        });
    }

    pub fn dismiss(mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

/// Renders the notifier's current toasts. Clicking one dismisses it.
#[component]
pub fn Toasts() -> Element {
    let notifier = use_context::<Notifier>();
    let toasts = notifier.toasts.read().clone();

    rsx! {
        div { class: "toast-stack",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: if toast.notification.kind == NotificationKind::Error { "toast toast-error" } else { "toast toast-success" },
                    onclick: move |_| notifier.dismiss(toast.id),
                    "{toast.notification.message}"
                }
            }
        }
    }
}
