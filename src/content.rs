use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

use crate::i18n::{t, Locale};

const PROFILE_FILE: &str = "profile.json";

pub static GLOBAL_PROFILE_CACHE: LazyLock<DashMap<String, Option<Profile>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

/// An English string with an optional Persian override. Persian text is
/// optional everywhere; readers on the Persian pages see the English original
/// when no translation was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fa: Option<String>,
}

impl Localized {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Fa => self.fa.as_deref().unwrap_or(&self.en),
        }
    }
}

/// A point inside a date range, month-precise when the source says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodPoint {
    pub year: i32,
    pub month: Option<u32>,
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl fmt::Display for PeriodPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(month @ 1..=12) => write!(f, "{} {}", MONTHS[month as usize - 1], self.year),
            _ => write!(f, "{}", self.year),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodEnd {
    Date(PeriodPoint),
    Present,
}

/// A date range such as `"Mar 2021 - Jul 2023"` or `"2020 - Present"`,
/// parsed once when the profile is loaded. Components only format; they never
/// see the raw string. A string the parser does not understand is carried
/// verbatim so no content is ever lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Period {
    Range { start: PeriodPoint, end: PeriodEnd },
    Single(PeriodPoint),
    Raw(String),
}

impl Period {
    pub fn parse(raw: &str) -> Period {
        let raw = raw.trim();
        match raw.split_once('-') {
            Some((lhs, rhs)) => {
                let (Some(start), Some(end)) = (parse_point(lhs), parse_end(rhs)) else {
                    return Period::Raw(raw.to_string());
                };
                Period::Range { start, end }
            }
            None => match parse_point(raw) {
                Some(point) => Period::Single(point),
                None => Period::Raw(raw.to_string()),
            },
        }
    }

    /// Human-readable form, with the open end localized ("Present" / «اکنون»).
    pub fn format(&self, locale: Locale) -> String {
        match self {
            Period::Range { start, end } => {
                let end = match end {
                    PeriodEnd::Date(point) => point.to_string(),
                    PeriodEnd::Present => t(locale, "experience.present"),
                };
                format!("{start} - {end}")
            }
            Period::Single(point) => point.to_string(),
            Period::Raw(raw) => raw.clone(),
        }
    }

    pub fn is_ongoing(&self) -> bool {
        matches!(
            self,
            Period::Range {
                end: PeriodEnd::Present,
                ..
            }
        )
    }
}

fn parse_point(text: &str) -> Option<PeriodPoint> {
    let text = text.trim();
    if let Ok(year) = text.parse::<i32>() {
        return Some(PeriodPoint { year, month: None });
    }
    // "Mar 2021" / "March 2021"; chrono needs a day to parse a full date
    let date = NaiveDate::parse_from_str(&format!("1 {text}"), "%d %b %Y").ok()?;
    Some(PeriodPoint {
        year: date.year(),
        month: Some(date.month()),
    })
}

fn parse_end(text: &str) -> Option<PeriodEnd> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("present") {
        return Some(PeriodEnd::Present);
    }
    parse_point(text).map(PeriodEnd::Date)
}

impl From<String> for Period {
    fn from(raw: String) -> Self {
        Period::parse(&raw)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        // canonical English form; `Period::parse` reads it back unchanged
        period.format(Locale::En)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub location: Localized,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: Localized,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: Localized,
    pub level: Localized,
    pub flag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: Localized,
    pub company: Localized,
    pub location: Localized,
    pub period: Period,
    pub highlights: Vec<Localized>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: Localized,
    pub school: Localized,
    pub location: Localized,
    pub period: Period,
    #[serde(default)]
    pub notes: Vec<Localized>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub slug: String,
    pub title: Localized,
    pub description: Localized,
    #[serde(default)]
    pub body: Vec<Localized>,
    pub image: String,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub tags: Vec<String>,
}

macro_rules! variant_enum {
    ($name:ident { $default:ident => $default_str:literal $(, $variant:ident => $str:literal)* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            #[default]
            $default,
            $($variant,)*
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $default_str => Ok(Self::$default),
                    $($str => Ok(Self::$variant),)*
                    _ => Err(()),
                }
            }
        }
    };
}

variant_enum!(HeroVariant { Classic => "classic", Minimal => "minimal", Motion => "motion" });
variant_enum!(AboutVariant { Clean => "clean", Cards => "cards" });
variant_enum!(ExperienceVariant { Timeline => "timeline", Compact => "compact" });
variant_enum!(ContactVariant { Panel => "panel", Split => "split" });

/// Which visual variant renders each home-page section. Variants are plain
/// strings in the content file; an unknown name selects the default variant
/// instead of failing the whole profile load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    hero: String,
    about: String,
    experience: String,
    contact: String,
}

impl ThemeConfig {
    pub fn hero(&self) -> HeroVariant {
        self.hero.parse().unwrap_or_default()
    }

    pub fn about(&self) -> AboutVariant {
        self.about.parse().unwrap_or_default()
    }

    pub fn experience(&self) -> ExperienceVariant {
        self.experience.parse().unwrap_or_default()
    }

    pub fn contact(&self) -> ContactVariant {
        self.contact.parse().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub base_url: String,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Everything the site renders besides blog posts, as one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Localized,
    pub title: Localized,
    pub tagline: Localized,
    pub about: Vec<Localized>,
    pub contact: Contact,
    pub skills: Vec<SkillGroup>,
    pub languages: Vec<Language>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
    pub site: SiteConfig,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn load_profile() -> Option<Profile> {
    let cache = &*GLOBAL_PROFILE_CACHE;
    if let Some(cached) = cache.get(PROFILE_FILE) {
        return cached.clone();
    }
    let profile = read_profile();
    cache.insert(PROFILE_FILE.to_string(), profile.clone());
    profile
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn project_by_slug(slug: &str) -> Option<Project> {
    load_profile()?.projects.into_iter().find(|p| p.slug == slug)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn read_profile() -> Option<Profile> {
    let raw = Assets::get(PROFILE_FILE)?;
    match serde_json::from_slice::<Profile>(&raw.data) {
        Ok(profile) => Some(profile),
        Err(_err) => {
            #[cfg(feature = "ssr")]
            tracing::warn!(error = %_err, "embedded profile failed to parse");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_range_parses_to_points() {
        let period = Period::parse("Mar 2021 - Jul 2023");
        assert_eq!(
            period,
            Period::Range {
                start: PeriodPoint {
                    year: 2021,
                    month: Some(3)
                },
                end: PeriodEnd::Date(PeriodPoint {
                    year: 2023,
                    month: Some(7)
                }),
            }
        );
        assert_eq!(period.format(Locale::En), "Mar 2021 - Jul 2023");
    }

    #[test]
    fn present_end_is_open_and_localized() {
        let period = Period::parse("2020 - Present");
        assert!(period.is_ongoing());
        assert_eq!(period.format(Locale::En), "2020 - Present");
        assert_eq!(period.format(Locale::Fa), "2020 - اکنون");
        // case-insensitive, like the ad-hoc parsers this replaces were not
        assert!(Period::parse("2020 - present").is_ongoing());
    }

    #[test]
    fn single_year_stands_alone() {
        assert_eq!(
            Period::parse("2016"),
            Period::Single(PeriodPoint {
                year: 2016,
                month: None
            })
        );
        assert_eq!(Period::parse(" 2016 ").format(Locale::En), "2016");
    }

    #[test]
    fn unparseable_period_is_kept_verbatim() {
        let period = Period::parse("whenever the mood strikes");
        assert_eq!(
            period,
            Period::Raw("whenever the mood strikes".to_string())
        );
        assert_eq!(period.format(Locale::Fa), "whenever the mood strikes");
    }

    #[test]
    fn period_survives_a_serde_round_trip() {
        let period: Period = serde_json::from_str("\"Jun 2020 - Present\"").unwrap();
        assert!(period.is_ongoing());
        let back = serde_json::to_string(&period).unwrap();
        assert_eq!(back, "\"Jun 2020 - Present\"");
    }

    #[test]
    fn localized_text_falls_back_to_english() {
        let text = Localized {
            en: "Projects".to_string(),
            fa: None,
        };
        assert_eq!(text.get(Locale::Fa), "Projects");
        let text = Localized {
            en: "Projects".to_string(),
            fa: Some("پروژه‌ها".to_string()),
        };
        assert_eq!(text.get(Locale::Fa), "پروژه‌ها");
        assert_eq!(text.get(Locale::En), "Projects");
    }

    #[test]
    fn unknown_theme_variant_selects_the_default() {
        let theme: ThemeConfig = serde_json::from_str(r#"{"hero": "sparkle"}"#).unwrap();
        assert_eq!(theme.hero(), HeroVariant::Classic);
        assert_eq!(theme.about(), AboutVariant::Clean);
        let theme: ThemeConfig = serde_json::from_str(r#"{"hero": "motion"}"#).unwrap();
        assert_eq!(theme.hero(), HeroVariant::Motion);
    }

    #[test]
    fn embedded_profile_matches_its_source() {
        let raw = Assets::get(PROFILE_FILE).expect("profile.json should be embedded");
        let profile: Profile =
            serde_json::from_slice(&raw.data).expect("embedded profile should parse");
        assert_eq!(profile.name.en, "Arman Nikfar");
        assert_eq!(profile.projects.len(), 4);
        assert!(profile.projects.iter().any(|p| p.slug == "chaparak"));
        // period strings are parsed at load time, not in the components
        assert!(profile.experience[0].period.is_ongoing());
        assert_eq!(profile.site.theme.hero(), HeroVariant::Motion);
    }
}
