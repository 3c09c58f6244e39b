use std::collections::HashMap;
use std::sync::LazyLock;

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "locales"]
struct Assets;

static TRANSLATIONS: LazyLock<DashMap<Locale, HashMap<String, String>>> =
    LazyLock::new(DashMap::new);

/// Languages the site is published in. `En` is the fallback for every
/// translatable string, so it doubles as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fa,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fa];

    /// The URL path segment for this locale.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fa => "fa",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "fa" => Some(Locale::Fa),
            _ => None,
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Fa => "rtl",
        }
    }

    /// The other locale, for the language switcher.
    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Fa,
            Locale::Fa => Locale::En,
        }
    }
}

/// Look up a UI string by key. Falls back to English, then to the key itself,
/// so a missing translation shows up on the page instead of panicking.
pub fn t(locale: Locale, key: &str) -> String {
    if let Some(text) = lookup(locale, key) {
        return text;
    }
    if locale != Locale::En {
        if let Some(text) = lookup(Locale::En, key) {
            return text;
        }
    }
    key.to_string()
}

fn lookup(locale: Locale, key: &str) -> Option<String> {
    let table = TRANSLATIONS
        .entry(locale)
        .or_insert_with(|| load_table(locale));
    table.get(key).cloned()
}

fn load_table(locale: Locale) -> HashMap<String, String> {
    let file = format!("{}.json", locale.code());
    let Some(raw) = Assets::get(&file) else {
        return HashMap::new();
    };
    serde_json::from_slice(&raw.data).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn persian_is_right_to_left() {
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::Fa.dir(), "rtl");
    }

    #[test]
    fn switcher_toggles_between_locales() {
        assert_eq!(Locale::En.other(), Locale::Fa);
        assert_eq!(Locale::Fa.other(), Locale::En);
    }

    #[test]
    fn translations_resolve_per_locale() {
        assert_eq!(t(Locale::En, "nav.home"), "Home");
        assert_eq!(t(Locale::Fa, "nav.home"), "خانه");
    }

    #[test]
    fn missing_persian_string_falls_back_to_english() {
        // "blog.rss" is deliberately only present in en.json.
        assert_eq!(t(Locale::Fa, "blog.rss"), "RSS feed");
    }

    #[test]
    fn unknown_key_falls_back_to_the_key() {
        assert_eq!(t(Locale::Fa, "no.such.key"), "no.such.key");
    }
}
