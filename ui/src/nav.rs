//! Platform-neutral navigation.
//!
//! Each launcher owns its own `Route` enum, so shared views address pages
//! through `NavTarget` and let the platform turn it into a router `Link` (or
//! perform a redirect) via a registered `NavBuilder`.
//!
//! ```ignore
//! register_nav(NavBuilder {
//!     link: |target, class, children| rsx!(Link { class, to: Route::from(target), {children} }),
//!     redirect: |target| { navigator().replace(Route::from(target)); },
//! });
//! ```

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Survey(String),
    Detail { column: String, homepage: String },
    Participants { homepage: String },
    Upload,
    NotFound,
}

impl NavTarget {
    /// Browser path for the target. Used for plain anchors when no builder is
    /// registered (SSR tests, embedding).
    pub fn path(&self) -> String {
        match self {
            NavTarget::Home => "/".to_string(),
            NavTarget::Survey(name) => format!("/survey/{}", encode(name)),
            NavTarget::Detail { column, homepage } => format!(
                "/detail-screen/{}?homepage_url={}",
                encode(column),
                encode(homepage)
            ),
            NavTarget::Participants { homepage } => {
                format!("/participant-page?homepage_url={}", encode(homepage))
            }
            NavTarget::Upload => "/upload-survey".to_string(),
            NavTarget::NotFound => "/custom404".to_string(),
        }
    }
}

/// Survey page path that detail and participant pages carry as `homepage_url`.
/// The name is percent-encoded so the router's query decoding leaves it intact.
pub fn homepage_for(survey_name: &str) -> String {
    format!("/survey/{}", encode(survey_name))
}

/// Recover the survey name from a `homepage_url` (its last path segment).
pub fn survey_name_from_homepage(homepage: &str) -> Option<String> {
    let path = homepage.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(decode)
}

fn encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

fn decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

pub struct NavBuilder {
    /// Build a router link for `target` with the given CSS class wrapping `children`.
    pub link: fn(target: NavTarget, class: String, children: Element) -> Element,
    /// Client-side navigation that replaces the current history entry.
    pub redirect: fn(target: NavTarget),
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn NavLink(to: NavTarget, #[props(default)] class: String, children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(to, class, children),
        None => {
            let href = to.path();
            rsx! {
                a { class: "{class}", href: "{href}", {children} }
            }
        }
    }
}

/// Navigate without a user click (e.g. detail page with no data).
pub fn redirect(target: NavTarget) {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.redirect)(target),
        None => tracing::warn!(path = %target.path(), "no navigation registered; redirect skipped"),
    }
}
