use dioxus::prelude::*;

use crate::core::platform::sleep_ms;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle to the toast queue, provided by `AppShell` through context.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    items: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            items: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.read().clone()
    }

    /// Show a toast and dismiss it after `TOAST_DURATION_MS`.
    pub fn push(mut self, kind: ToastKind, message: impl Into<String>) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        self.items.write().push(Toast {
            id,
            kind,
            message: message.into(),
        });
        // Outlives the page that raised it.
        spawn_forever(async move {
            sleep_ms(TOAST_DURATION_MS).await;
            self.dismiss(id);
        });
    }

    pub fn dismiss(mut self, id: u64) {
        self.items.write().retain(|toast| toast.id != id);
    }
}

/// Provide the queue for the subtree.
pub fn use_toaster_provider() -> Toaster {
    use_context_provider(Toaster::new)
}

/// Queue from context; a detached one when rendered outside `AppShell`.
pub fn use_toaster() -> Toaster {
    use_hook(|| try_consume_context::<Toaster>().unwrap_or_else(Toaster::new))
}

#[component]
pub fn ToastHost() -> Element {
    let toaster = use_toaster();
    let toasts = toaster.items();

    rsx! {
        div { class: "toast-host", aria_live: "polite",
            for toast in toasts {
                div { key: "{toast.id}", class: toast.kind.class(), role: "status",
                    span { class: "toast__message", "{toast.message}" }
                    button {
                        class: "toast__close",
                        r#type: "button",
                        aria_label: crate::t!("toast-dismiss"),
                        onclick: move |_| toaster.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
