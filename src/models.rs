//! Content Models
//!
//! Records served from `content/*.json` and mirrored in the local cache.

use serde::{Deserialize, Deserializer, Serialize};

/// Network body shape: `{ "items": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub items: Vec<T>,
}

/// Completion percentage clamped to 0..=100.
///
/// Content files write it as a number (`75`, `72.5`) or a string (`"60"`);
/// anything else (null, unparseable text) reads as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "PercentRepr", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Percent(0);
        }
        Percent(value.round().clamp(0.0, 100.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Percent> for u8 {
    fn from(p: Percent) -> u8 {
        p.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PercentRepr {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

impl From<PercentRepr> for Percent {
    fn from(repr: PercentRepr) -> Self {
        match repr {
            PercentRepr::Number(n) => Percent::new(n),
            PercentRepr::Text(s) => s.trim().trim_end_matches('%').parse().map(Percent::new).unwrap_or_default(),
            PercentRepr::Other(_) => Percent::default(),
        }
    }
}

/// Timeline column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl From<Option<String>> for Side {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("right") => Side::Right,
            _ => Side::Left,
        }
    }
}

impl From<Side> for String {
    fn from(side: Side) -> String {
        side.as_str().to_string()
    }
}

/// One card in the skills grid
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillRecord {
    pub category_id: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub list_items: Vec<String>,
    pub progress: Percent,
}

/// One entry on the learning timeline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineEvent {
    pub side: Side,
    /// `past`, `current` or `future`; used verbatim as a CSS class
    pub status_class: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub date_label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// One project card
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub image: Option<String>,
    pub icon_class: Option<String>,
    pub live_link: Option<String>,
    pub github_link: Option<String>,
    pub category: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub learnings: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
}

/// One certificate card
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateRecord {
    /// `Planned`, `In Progress`, `Upcoming` or free text
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub image: Option<String>,
    pub icon: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub certificate_link: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub progress: Percent,
    #[serde(deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
}

/// Decode an explicit `null` the same way as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Treat `Some("")` like `None`, as the content files use both
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
