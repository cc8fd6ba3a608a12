//! Configuration types

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::defaults::{default_trim, DEFAULT_BREAKING_CHANGES_HEADING, DEFAULT_OTHERS_HEADING};

/// Changelog configuration
///
/// Every pattern is a regular expression that is matched at the start of
/// the string it is applied to (or at the end, for `title_right_trim`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Prefixes stripped before the type is captured (e.g. ticket ids)
    pub pre_captures: Vec<String>,

    /// Trimmed from the start of the title after a pre-capture match
    pub pre_captures_after_trim: String,

    /// Type prefixes; group 1 is the type token, group 2 an optional breaking marker
    pub type_captures: Vec<String>,

    /// Trimmed from the start of the title after a type-capture match
    pub type_captures_after_trim: String,

    /// Whether a participating second group in a type capture marks a breaking change
    pub type_captures_allow_breaking_change_group: bool,

    /// Message lines announcing a breaking change (e.g. `BREAKING CHANGE:`)
    pub breaking_change_line_captures: Vec<String>,

    /// Trimmed from the start of a breaking-change line after its prefix
    pub breaking_change_line_captures_after_trim: String,

    /// Trimmed from the start of the final title
    pub title_left_trim: String,

    /// Trimmed from the end of the final title
    pub title_right_trim: String,

    /// Type token to heading key
    pub supported_types: HashMap<String, String>,

    /// Heading key to display text, in output order
    pub headings: Headings,

    /// Section label for commits without a supported type
    pub others_heading: String,

    /// Section label for breaking changes
    pub breaking_changes_heading: String,

    /// Uppercase the first character of every title
    pub capitalize_title_first_char: bool,

    /// Search/replace applied to the subject before any capture
    pub preprocessing: Option<Processing>,

    /// Search/replace applied to the classified title
    pub postprocessing: Option<Processing>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            pre_captures: Vec::new(),
            pre_captures_after_trim: default_trim(),
            type_captures: Vec::new(),
            type_captures_after_trim: default_trim(),
            type_captures_allow_breaking_change_group: true,
            breaking_change_line_captures: Vec::new(),
            breaking_change_line_captures_after_trim: default_trim(),
            title_left_trim: default_trim(),
            title_right_trim: default_trim(),
            supported_types: HashMap::new(),
            headings: Headings::default(),
            others_heading: DEFAULT_OTHERS_HEADING.to_string(),
            breaking_changes_heading: DEFAULT_BREAKING_CHANGES_HEADING.to_string(),
            capitalize_title_first_char: true,
            preprocessing: None,
            postprocessing: None,
        }
    }
}

impl ChangelogConfig {
    /// Resolve the heading key a supported type token files under.
    ///
    /// The configured `supported_types` value is used when it names a
    /// heading; otherwise the token itself is tried. Returns `None` for
    /// tokens that are not supported.
    pub fn heading_key_for(&self, type_token: &str) -> Option<&str> {
        let key = self.supported_types.get(type_token)?;
        if !self.headings.contains_key(key) && self.headings.contains_key(type_token) {
            return self.headings.key(type_token);
        }
        Some(key.as_str())
    }
}

/// A single search/replace step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Processing {
    /// Regular expression to search for
    pub search: String,
    /// Replacement, `$1` / `${name}` refer to capture groups
    pub replace: String,
}

impl Processing {
    /// Create a new search/replace step
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
        }
    }
}

/// Ordered heading key to display text mapping
///
/// Keeps the order of the configuration document so sections render in
/// the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headings(Vec<(String, String)>);

impl Headings {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a heading; an existing key keeps its position and takes the new text
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = text,
            None => self.0.push((key, text)),
        }
    }

    /// Builder form of [`Headings::insert`]
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    /// Whether the key is configured
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    fn key(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(k, _)| k.as_str())
    }

    /// Iterate `(key, text)` in configured order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for Headings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct HeadingsVisitor;

impl<'de> Visitor<'de> for HeadingsVisitor {
    type Value = Headings;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a mapping of heading keys to heading text")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut headings = Headings::new();
        while let Some((key, text)) = access.next_entry::<String, String>()? {
            headings.insert(key, text);
        }
        Ok(headings)
    }
}

impl<'de> Deserialize<'de> for Headings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HeadingsVisitor)
    }
}
