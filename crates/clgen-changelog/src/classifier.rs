//! Commit subject classification

use serde::{Deserialize, Serialize};
use tracing::trace;

use clgen_core::config::ChangelogConfig;
use clgen_core::error::Result;

use crate::capture::{PrefixCaptures, TrimPattern};

/// Whether a subject's type token is one the configuration supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeMatch {
    /// The type token is a key of `supported_types`
    SupportedType,
    /// No type token, or one that is not supported
    Others,
}

/// Result of classifying one subject line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Cleaned title
    pub title: String,
    /// Captured type token, empty when no type capture matched
    pub type_token: String,
    /// Classification outcome
    pub type_match: TypeMatch,
    /// Inline breaking change marker was present
    pub is_breaking_change: bool,
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Compiled pre-capture, type-capture and trim rules
#[derive(Debug, Clone)]
pub struct TitleClassifier {
    pre_captures: PrefixCaptures,
    pre_captures_after_trim: TrimPattern,
    type_captures: PrefixCaptures,
    type_captures_after_trim: TrimPattern,
    allow_breaking_change_group: bool,
    title_left_trim: TrimPattern,
    title_right_trim: TrimPattern,
    supported_types: Vec<String>,
    capitalize: bool,
}

impl TitleClassifier {
    /// Compile the classifier rules from configuration
    pub fn new(config: &ChangelogConfig) -> Result<Self> {
        Ok(Self {
            pre_captures: PrefixCaptures::new("pre_captures", &config.pre_captures)?,
            pre_captures_after_trim: TrimPattern::leading(
                "pre_captures_after_trim",
                &config.pre_captures_after_trim,
            )?,
            type_captures: PrefixCaptures::new("type_captures", &config.type_captures)?,
            type_captures_after_trim: TrimPattern::leading(
                "type_captures_after_trim",
                &config.type_captures_after_trim,
            )?,
            allow_breaking_change_group: config.type_captures_allow_breaking_change_group,
            title_left_trim: TrimPattern::leading("title_left_trim", &config.title_left_trim)?,
            title_right_trim: TrimPattern::trailing("title_right_trim", &config.title_right_trim)?,
            supported_types: config.supported_types.keys().cloned().collect(),
            capitalize: config.capitalize_title_first_char,
        })
    }

    /// Classify a subject line
    pub fn classify(&self, subject: &str) -> ClassificationResult {
        let mut title = subject;

        if let Some(m) = self.pre_captures.capture(title) {
            title = self.pre_captures_after_trim.strip(m.remainder());
        }

        let mut type_token = "";
        let mut type_match = TypeMatch::Others;
        let mut is_breaking_change = false;

        if let Some(m) = self.type_captures.capture(title) {
            type_token = m.group(1).unwrap_or_default();
            is_breaking_change = self.allow_breaking_change_group && m.group(2).is_some();
            title = self.type_captures_after_trim.strip(m.remainder());

            if self.supported_types.iter().any(|t| t == type_token) {
                type_match = TypeMatch::SupportedType;
            }
        }

        title = self.title_left_trim.strip(title);
        title = self.title_right_trim.strip(title);

        let title = if self.capitalize {
            capitalize_first(title)
        } else {
            title.to_string()
        };

        trace!(subject, %title, type_token, ?type_match, is_breaking_change, "classified subject");

        ClassificationResult {
            title,
            type_token: type_token.to_string(),
            type_match,
            is_breaking_change,
        }
    }
}
