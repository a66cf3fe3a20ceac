#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::components::AppShell;
use ui::config::{AppConfig, DataMode, FixtureRoot};
use ui::nav::{register_nav, NavBuilder, NavTarget};
use ui::views::{DetailScreen, Home, NotFound, ParticipantPage, Survey, UploadSurvey};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
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

// Shared theme, inlined so packaged builds need no external stylesheet.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::init(Level::INFO).expect("logger failed to init");
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Survey Insights – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::init(Level::INFO).expect("logger failed to init");
    LaunchBuilder::server().launch(App);
}

fn nav_link(target: NavTarget, class: String, children: Element) -> Element {
    rsx!(Link { class, to: Route::from(target), {children} })
}

fn nav_redirect(target: NavTarget) {
    let _ = navigator().replace(Route::from(target));
}

/// Fixture directory: the web build's static root during development, an
/// `assets/fixtures` folder beside the executable when packaged.
fn fixture_root() -> FixtureRoot {
    #[cfg(debug_assertions)]
    {
        FixtureRoot::Directory(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/public").into())
    }

    #[cfg(not(debug_assertions))]
    {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets").join("fixtures")))
            .unwrap_or_else(|| "assets/fixtures".into());
        FixtureRoot::Directory(dir)
    }
}

/// Process environment first, then values baked in at build time.
///
/// Release bundles ship no fixtures, so dev mode there needs
/// `SURVEY_FIXTURE_ROOT`; without it the service is used instead.
fn resolve_config() -> AppConfig {
    let root = fixture_root();
    let lookup = |name: &str| std::env::var(name).ok().or_else(|| AppConfig::build_env(name));
    let config = AppConfig::resolve(lookup, root.clone()).unwrap_or_else(|err| {
        tracing::error!("invalid configuration ({err}); using defaults");
        AppConfig::new(DataMode::build_default(), root)
    });
    match config.check_fixtures() {
        Ok(()) => config,
        Err(err) => {
            tracing::error!("{err}; using the analytics service");
            AppConfig {
                mode: DataMode::Prod,
                ..config
            }
        }
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes this on language selection; keying the router on it
    // remounts every page with fresh strings.
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

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn DesktopShell() -> Element {
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
