use dioxus::prelude::*;

use crate::nav::{NavLink, NavTarget};
use crate::t;

#[component]
pub fn NotFound() -> Element {
    rsx! {
        section { class: "page page-not-found",
            h1 { {t!("not-found-title")} }
            p { {t!("not-found-body")} }
            NavLink { to: NavTarget::Home, class: "button", {t!("not-found-home")} }
        }
    }
}
