use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::components::AppShell;
use ui::config::{AppConfig, DataMode, FixtureRoot};
use ui::nav::{register_nav, NavBuilder, NavTarget};
use ui::views::{DetailScreen, Home, NotFound, ParticipantPage, Survey, UploadSurvey};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/survey/:survey_name")]
    Survey { survey_name: String },
    #[route("/detail-screen/:column_name?:homepage_url")]
    DetailScreen { column_name: String, homepage_url: String },
    #[route("/participant-page?:homepage_url")]
    ParticipantPage { homepage_url: String },
    #[route("/upload-survey")]
    UploadSurvey {},
    #[route("/custom404")]
    NotFound {},
    #[route("/:..segments")]
    Unmatched { segments: Vec<String> },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Survey(survey_name) => Route::Survey { survey_name },
            NavTarget::Detail { column, homepage } => Route::DetailScreen {
                column_name: column,
                homepage_url: homepage,
            },
            NavTarget::Participants { homepage } => Route::ParticipantPage {
                homepage_url: homepage,
            },
            NavTarget::Upload => Route::UploadSurvey {},
            NavTarget::NotFound => Route::NotFound {},
        }
    }
}

fn nav_link(target: NavTarget, class: String, children: Element) -> Element {
    rsx!(Link { class, to: Route::from(target), {children} })
}

fn nav_redirect(target: NavTarget) {
    let _ = navigator().replace(Route::from(target));
}

/// Fixtures are served from the same origin as the app bundle.
fn fixture_root() -> FixtureRoot {
    #[cfg(target_arch = "wasm32")]
    {
        match ui::core::platform::static_origin() {
            Some(origin) => FixtureRoot::Http(origin),
            None => FixtureRoot::Http("http://localhost:8080".to_string()),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        FixtureRoot::Directory(concat!(env!("CARGO_MANIFEST_DIR"), "/public").into())
    }
}

fn resolve_config() -> AppConfig {
    let root = fixture_root();
    AppConfig::resolve(AppConfig::build_env, root.clone()).unwrap_or_else(|err| {
        tracing::error!("invalid build configuration ({err}); using defaults");
        AppConfig::new(DataMode::build_default(), root)
    })
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("logger failed to init");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(|| {
        let config = resolve_config();
        tracing::info!(
            platform = %ui::core::platform::platform_string(),
            mode = config.mode.as_str(),
            "starting survey dashboard"
        );
        ui::connect(&config)
    });

    register_nav(NavBuilder {
        link: nav_link,
        redirect: nav_redirect,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[component]
fn WebShell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Unmatched(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");
    rsx! { NotFound {} }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::nav::{homepage_for, survey_name_from_homepage};

    #[test]
    fn participant_route_keeps_survey_name() {
        for name in ["q1 & q2.xlsx", "50%20off.xlsx", "a=b.xlsx", "wave2.xlsx"] {
            let route = Route::from(NavTarget::Participants {
                homepage: homepage_for(name),
            });
            let parsed: Route = route.to_string().parse().unwrap();
            let Route::ParticipantPage { homepage_url } = parsed else {
                panic!("{route} parsed as {parsed:?}");
            };
            assert_eq!(survey_name_from_homepage(&homepage_url).as_deref(), Some(name));
        }
    }
}
