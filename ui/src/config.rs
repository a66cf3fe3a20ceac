//! Startup configuration. Resolved once by the launcher and provided to the
//! component tree through context; nothing reads the environment afterwards.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const ENV_MODE: &str = "SURVEY_DATA_MODE";
pub const ENV_API_URL: &str = "SURVEY_API_URL";
pub const ENV_FIXTURE_ROOT: &str = "SURVEY_FIXTURE_ROOT";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown data mode `{0}` (expected `prod` or `dev`)")]
    UnknownMode(String),
    #[error("SURVEY_API_URL must be an http(s) URL, got `{0}`")]
    InvalidApiUrl(String),
    #[error("dev mode reads fixtures from `{0}`, which is not a directory (set SURVEY_FIXTURE_ROOT)")]
    MissingFixtures(String),
}

/// Where survey data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataMode {
    /// Remote analytics service.
    Prod,
    /// Static fixture files.
    Dev,
}

impl DataMode {
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            DataMode::Dev
        } else {
            DataMode::Prod
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DataMode::Prod => "prod",
            DataMode::Dev => "dev",
        }
    }
}

impl FromStr for DataMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(DataMode::Prod),
            "dev" | "development" | "fixture" | "fixtures" => Ok(DataMode::Dev),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Location of the fixture files used in dev mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureRoot {
    /// Served over HTTP (the web build's static root).
    Http(String),
    /// A local directory (desktop builds, tests).
    Directory(PathBuf),
}

impl FixtureRoot {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            FixtureRoot::Http(raw.trim_end_matches('/').to_string())
        } else {
            FixtureRoot::Directory(PathBuf::from(raw))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: DataMode,
    pub api_base_url: String,
    pub fixture_root: FixtureRoot,
}

impl AppConfig {
    pub fn new(mode: DataMode, fixture_root: FixtureRoot) -> Self {
        Self {
            mode,
            api_base_url: DEFAULT_API_URL.to_string(),
            fixture_root,
        }
    }

    /// Resolve configuration through `lookup`, falling back to build defaults
    /// for anything unset. `fixture_root` is used unless overridden.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        fixture_root: FixtureRoot,
    ) -> Result<Self, ConfigError> {
        let set = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mode = match set(ENV_MODE) {
            Some(raw) => raw.parse()?,
            None => DataMode::build_default(),
        };

        let api_base_url = match set(ENV_API_URL) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) => return Err(ConfigError::InvalidApiUrl(url)),
            None => DEFAULT_API_URL.to_string(),
        };

        let fixture_root = set(ENV_FIXTURE_ROOT)
            .map(|raw| FixtureRoot::parse(&raw))
            .unwrap_or(fixture_root);

        Ok(Self {
            mode,
            api_base_url,
            fixture_root,
        })
    }

    /// Dev mode over a local directory needs that directory to exist.
    pub fn check_fixtures(&self) -> Result<(), ConfigError> {
        match (self.mode, &self.fixture_root) {
            (DataMode::Dev, FixtureRoot::Directory(dir)) if !dir.is_dir() => {
                Err(ConfigError::MissingFixtures(dir.display().to_string()))
            }
            _ => Ok(()),
        }
    }

    /// Values baked in at compile time (`SURVEY_* cargo build`). The browser
    /// has no process environment, so this is the web build's only source.
    pub fn build_env(name: &str) -> Option<String> {
        let value = match name {
            ENV_MODE => option_env!("SURVEY_DATA_MODE"),
            ENV_API_URL => option_env!("SURVEY_API_URL"),
            ENV_FIXTURE_ROOT => option_env!("SURVEY_FIXTURE_ROOT"),
            _ => None,
        };
        value.map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let root = FixtureRoot::Directory("public".into());
        let cfg = AppConfig::resolve(lookup(&[]), root.clone()).unwrap();
        assert_eq!(cfg.mode, DataMode::build_default());
        assert_eq!(cfg.api_base_url, DEFAULT_API_URL);
        assert_eq!(cfg.fixture_root, root);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = AppConfig::resolve(
            lookup(&[
                (ENV_MODE, "PROD"),
                (ENV_API_URL, "https://analytics.example.org/"),
                (ENV_FIXTURE_ROOT, "http://localhost:8080/"),
            ]),
            FixtureRoot::Directory("public".into()),
        )
        .unwrap();

        assert_eq!(cfg.mode, DataMode::Prod);
        assert_eq!(cfg.api_base_url, "https://analytics.example.org");
        assert_eq!(
            cfg.fixture_root,
            FixtureRoot::Http("http://localhost:8080".into())
        );
    }

    #[test]
    fn dev_mode_requires_fixture_directory() {
        let dir = tempfile::tempdir().unwrap();
        let present = AppConfig::new(DataMode::Dev, FixtureRoot::Directory(dir.path().into()));
        assert_eq!(present.check_fixtures(), Ok(()));

        let gone = dir.path().join("fixtures");
        let missing = AppConfig::new(DataMode::Dev, FixtureRoot::Directory(gone.clone()));
        assert_eq!(
            missing.check_fixtures(),
            Err(ConfigError::MissingFixtures(gone.display().to_string()))
        );

        let prod = AppConfig::new(DataMode::Prod, FixtureRoot::Directory(gone));
        assert_eq!(prod.check_fixtures(), Ok(()));
        let http = AppConfig::new(DataMode::Dev, FixtureRoot::Http("http://localhost:8080".into()));
        assert_eq!(http.check_fixtures(), Ok(()));
    }

    #[test]
    fn bad_values_are_rejected() {
        let root = FixtureRoot::Directory("public".into());
        assert_eq!(
            AppConfig::resolve(lookup(&[(ENV_MODE, "staging")]), root.clone()),
            Err(ConfigError::UnknownMode("staging".into()))
        );
        assert!(matches!(
            AppConfig::resolve(lookup(&[(ENV_API_URL, "ftp://x")]), root),
            Err(ConfigError::InvalidApiUrl(_))
        ));
    }
}
