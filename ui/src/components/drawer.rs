use dioxus::prelude::*;

use crate::nav::{NavLink, NavTarget};
use crate::t;

/// Drawer links, one per workbook, in listing order.
pub fn drawer_entries(files: &[String]) -> Vec<(String, NavTarget)> {
    files
        .iter()
        .filter(|name| !name.trim().is_empty())
        .map(|name| (name.clone(), NavTarget::Survey(name.clone())))
        .collect()
}

/// Side drawer listing the survey workbooks found in blob storage.
/// A failed listing shows the same placeholder as an empty container.
#[component]
pub fn NavigationDrawer(open: Signal<bool>) -> Element {
    let files = use_resource(|| async move { api::survey_files().await });
    let mut open = open;

    let body = match &*files.read() {
        None => rsx! { p { class: "drawer__placeholder", {t!("status-loading")} } },
        Some(files) if files.is_empty() => rsx! {
            p { class: "drawer__placeholder", {t!("drawer-empty")} }
        },
        Some(files) => {
            let entries = drawer_entries(files);
            rsx! {
                ul { class: "drawer__list",
                    for (name, target) in entries {
                        li { key: "{name}",
                            NavLink { to: target, class: "drawer__link", "{name}" }
                        }
                    }
                }
            }
        }
    };

    let class = if open() { "drawer drawer--open" } else { "drawer" };
    let hidden = !open();

    rsx! {
        aside { class: "{class}", aria_hidden: "{hidden}",
            div { class: "drawer__header",
                h2 { {t!("drawer-title")} }
                button {
                    class: "drawer__close",
                    r#type: "button",
                    aria_label: t!("drawer-close"),
                    onclick: move |_| open.set(false),
                    "×"
                }
            }
            {body}
        }
    }
}
