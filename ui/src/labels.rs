//! Static registry of chart colors, severity order and legend keys.
//! Display strings live in the Fluent bundles (see `i18n`); this module only
//! holds values that never change per locale.

/// Legend key for two-bucket (negative/positive) charts.
pub const SENTIMENT_LEGEND: &str = "sentiment";
/// Legend key for the seven-level satisfaction scale.
pub const FULL_LEGEND: &str = "full";

pub const NEGATIVE_COLOR: &str = "#e5484d";
pub const POSITIVE_COLOR: &str = "#30a46c";
/// Used for points whose satisfaction level is missing or unrecognised.
pub const FALLBACK_COLOR: &str = "#7aa2ff";

/// Seven-level satisfaction scale, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    VeryDissatisfied,
    Dissatisfied,
    SomewhatDissatisfied,
    Neutral,
    SomewhatSatisfied,
    Satisfied,
    VerySatisfied,
}

impl Severity {
    pub const ORDER: [Severity; 7] = [
        Severity::VeryDissatisfied,
        Severity::Dissatisfied,
        Severity::SomewhatDissatisfied,
        Severity::Neutral,
        Severity::SomewhatSatisfied,
        Severity::Satisfied,
        Severity::VerySatisfied,
    ];

    /// Value used for this level in the analytics payloads.
    pub fn data_label(self) -> &'static str {
        match self {
            Severity::VeryDissatisfied => "Very Dissatisfied",
            Severity::Dissatisfied => "Dissatisfied",
            Severity::SomewhatDissatisfied => "Somewhat Dissatisfied",
            Severity::Neutral => "Neutral",
            Severity::SomewhatSatisfied => "Somewhat Satisfied",
            Severity::Satisfied => "Satisfied",
            Severity::VerySatisfied => "Very Satisfied",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::VeryDissatisfied => "#b42318",
            Severity::Dissatisfied => "#e5484d",
            Severity::SomewhatDissatisfied => "#f76b15",
            Severity::Neutral => "#9ba1a6",
            Severity::SomewhatSatisfied => "#94ba2c",
            Severity::Satisfied => "#30a46c",
            Severity::VerySatisfied => "#18794e",
        }
    }

    pub fn from_data_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ORDER
            .into_iter()
            .find(|level| level.data_label().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Negative,
    Positive,
}

impl Sentiment {
    pub fn color(self) -> &'static str {
        match self {
            Sentiment::Negative => NEGATIVE_COLOR,
            Sentiment::Positive => POSITIVE_COLOR,
        }
    }

    pub fn from_data_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "negative" => Some(Sentiment::Negative),
            "positive" => Some(Sentiment::Positive),
            _ => None,
        }
    }
}

/// Chart color for a point's satisfaction level.
pub fn level_color(level: Option<&str>) -> &'static str {
    let Some(level) = level else {
        return FALLBACK_COLOR;
    };
    Severity::from_data_label(level)
        .map(Severity::color)
        .or_else(|| Sentiment::from_data_label(level).map(Sentiment::color))
        .unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_round_trips_through_data_labels() {
        for level in Severity::ORDER {
            assert_eq!(Severity::from_data_label(level.data_label()), Some(level));
        }
        assert_eq!(
            Severity::from_data_label("  very satisfied "),
            Some(Severity::VerySatisfied)
        );
    }

    #[test]
    fn colors_fall_back_for_unknown_levels() {
        assert_eq!(level_color(Some("Neutral")), Severity::Neutral.color());
        assert_eq!(level_color(Some("Positive")), POSITIVE_COLOR);
        assert_eq!(level_color(Some("Meh")), FALLBACK_COLOR);
        assert_eq!(level_color(None), FALLBACK_COLOR);
    }
}
