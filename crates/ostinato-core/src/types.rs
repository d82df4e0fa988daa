use serde::{Deserialize, Serialize};

/// Locale for description rendering.
///
/// Always passed explicitly by callers; nothing in the workspace reads an
/// ambient per-user language preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    English,
    Spanish,
    Dutch,
}

impl Locale {
    /// Parses from a language tag such as `en_US` or `nl`.
    #[must_use]
    pub fn from_tag(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" | "en_us" | "en-us" | "english" => Some(Self::English),
            "es" | "es_es" | "es-es" | "spanish" => Some(Self::Spanish),
            "nl" | "nl_nl" | "nl-nl" | "dutch" => Some(Self::Dutch),
            _ => None,
        }
    }

    /// Returns the canonical language tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "en_US",
            Self::Spanish => "es_ES",
            Self::Dutch => "nl_NL",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_from_tag() {
        assert_eq!(Locale::from_tag("en_US"), Some(Locale::English));
        assert_eq!(Locale::from_tag("NL"), Some(Locale::Dutch));
        assert_eq!(Locale::from_tag("es-ES"), Some(Locale::Spanish));
        assert_eq!(Locale::from_tag("fr_FR"), None);
    }

    #[test]
    fn locale_as_str() {
        assert_eq!(Locale::English.as_str(), "en_US");
        assert_eq!(Locale::Spanish.as_str(), "es_ES");
        assert_eq!(Locale::Dutch.as_str(), "nl_NL");
    }
}
