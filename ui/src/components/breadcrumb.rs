use dioxus::prelude::*;

use crate::nav::{survey_name_from_homepage, NavLink, NavTarget};
use crate::t;

#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    /// `None` for the current page.
    pub target: Option<NavTarget>,
}

impl Crumb {
    fn link(label: String, target: NavTarget) -> Self {
        Self {
            label,
            target: Some(target),
        }
    }

    fn current(label: String) -> Self {
        Self {
            label,
            target: None,
        }
    }
}

pub fn survey_trail(survey_name: &str) -> Vec<Crumb> {
    vec![
        Crumb::link(t!("nav-home"), NavTarget::Home),
        Crumb::current(survey_name.to_string()),
    ]
}

/// Home › survey › `current`, with the survey recovered from `homepage`.
pub fn page_trail(homepage: &str, current: String) -> Vec<Crumb> {
    let mut trail = vec![Crumb::link(t!("nav-home"), NavTarget::Home)];
    if let Some(name) = survey_name_from_homepage(homepage) {
        trail.push(Crumb::link(name.clone(), NavTarget::Survey(name)));
    }
    trail.push(Crumb::current(current));
    trail
}

#[component]
pub fn Breadcrumb(trail: Vec<Crumb>) -> Element {
    let last = trail.len().saturating_sub(1);
    rsx! {
        nav { class: "breadcrumb", aria_label: "breadcrumb",
            ol {
                for (i, crumb) in trail.into_iter().enumerate() {
                    li { key: "{i}", class: "breadcrumb__item",
                        {match crumb.target {
                            Some(target) => rsx! {
                                NavLink { to: target, class: "breadcrumb__link", "{crumb.label}" }
                            },
                            None => rsx! {
                                span { aria_current: "page", "{crumb.label}" }
                            },
                        }}
                        if i < last {
                            span { class: "breadcrumb__sep", aria_hidden: "true", "›" }
                        }
                    }
                }
            }
        }
    }
}
