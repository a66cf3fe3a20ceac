use dioxus::prelude::*;

use super::app_navbar::AppNavbar;
use super::drawer::NavigationDrawer;
use super::toast::{use_toaster_provider, ToastHost};

/// Frame shared by every page: navbar, survey drawer, content and toasts.
/// Platforms wrap their router `Outlet` in it.
#[component]
pub fn AppShell(children: Element) -> Element {
    use_toaster_provider();
    let mut drawer_open = use_signal(|| false);

    rsx! {
        AppNavbar { on_toggle_drawer: move |_| drawer_open.set(!drawer_open()) }
        div { class: "shell",
            NavigationDrawer { open: drawer_open }
            main { class: "shell__content", {children} }
        }
        ToastHost {}
    }
}
