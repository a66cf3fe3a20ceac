//! Locale bundles stay in step with the en-US fallback: same keys, no
//! duplicates, and the same `{ $variables }` in every message.

use std::collections::{BTreeMap, BTreeSet};

const EN_US: &str = include_str!("../i18n/en-US/survey-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/survey-ui.ftl");

/// Message id → variables referenced by its value.
fn messages(locale: &str, src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for line in src.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        let previous = out.insert(id.to_string(), variables(value));
        assert!(previous.is_none(), "{locale}: duplicate key `{id}`");
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .map(|tail| {
            tail.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

#[test]
fn every_locale_matches_fallback() {
    let fallback = messages("en-US", EN_US);
    assert!(!fallback.is_empty(), "en-US bundle has no messages");

    for (locale, src) in [("es-ES", ES_ES)] {
        let bundle = messages(locale, src);

        let missing: Vec<_> = fallback.keys().filter(|k| !bundle.contains_key(*k)).collect();
        assert!(missing.is_empty(), "{locale} is missing {missing:?}");

        let extra: Vec<_> = bundle.keys().filter(|k| !fallback.contains_key(*k)).collect();
        assert!(extra.is_empty(), "{locale} has keys not in en-US: {extra:?}");

        for (id, vars) in &fallback {
            assert_eq!(&bundle[id], vars, "{locale}: `{id}` uses different variables");
        }
    }
}

#[test]
fn variables_are_extracted() {
    assert_eq!(
        variables(" Uploading { $name } failed."),
        BTreeSet::from(["name".to_string()])
    );
    assert!(variables(" Home").is_empty());
}

#[test]
fn config_pins_hyphenated_domain() {
    // `fl!` would otherwise look for `survey_ui.ftl` (the crate name).
    let domain = include_str!("../i18n.toml")
        .lines()
        .filter_map(|line| line.trim().strip_prefix("domain"))
        .filter_map(|rest| rest.trim().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"'))
        .next();
    assert_eq!(domain, Some("survey-ui"));
}
