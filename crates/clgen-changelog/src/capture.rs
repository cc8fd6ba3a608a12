//! Anchored regex primitives shared by every capture stage

use regex::{Captures, Regex};

use clgen_core::config::Processing;
use clgen_core::error::{ConfigError, Result};

fn compile(field: &str, pattern: &str, anchored: String) -> Result<Regex> {
    Regex::new(&anchored).map_err(|source| {
        ConfigError::InvalidPattern {
            field: field.to_string(),
            pattern: pattern.to_string(),
            source,
        }
        .into()
    })
}

/// Ordered list of prefix patterns, first match wins
#[derive(Debug, Clone)]
pub struct PrefixCaptures {
    patterns: Vec<Regex>,
}

impl PrefixCaptures {
    /// Compile `patterns`, anchoring each at the start of the subject
    pub fn new(field: &str, patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .enumerate()
            .map(|(i, p)| compile(&format!("{}[{}]", field, i), p, format!("^(?:{})", p)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Apply the first pattern that matches at the start of `subject`
    pub fn capture<'t>(&self, subject: &'t str) -> Option<PrefixMatch<'t>> {
        let captures = self.patterns.iter().find_map(|re| re.captures(subject))?;
        let end = captures.get(0).map_or(0, |m| m.end());
        Some(PrefixMatch {
            remainder: &subject[end..],
            captures,
        })
    }
}

/// A successful prefix match
#[derive(Debug)]
pub struct PrefixMatch<'t> {
    remainder: &'t str,
    captures: Captures<'t>,
}

impl<'t> PrefixMatch<'t> {
    /// Text following the matched prefix
    pub fn remainder(&self) -> &'t str {
        self.remainder
    }

    /// Capture group `index`; `None` when the group did not participate
    pub fn group(&self, index: usize) -> Option<&'t str> {
        self.captures.get(index).map(|m| m.as_str())
    }
}

/// A trim pattern anchored at one end of the string
#[derive(Debug, Clone)]
pub struct TrimPattern {
    regex: Regex,
    leading: bool,
}

impl TrimPattern {
    /// Strips one match of `pattern` from the start
    pub fn leading(field: &str, pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: compile(field, pattern, format!("^(?:{})", pattern))?,
            leading: true,
        })
    }

    /// Strips one match of `pattern` from the end
    pub fn trailing(field: &str, pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: compile(field, pattern, format!("(?:{})$", pattern))?,
            leading: false,
        })
    }

    /// Remove the anchored run, or return `text` unchanged
    pub fn strip<'t>(&self, text: &'t str) -> &'t str {
        match self.regex.find(text) {
            Some(m) if self.leading => &text[m.end()..],
            Some(m) => &text[..m.start()],
            None => text,
        }
    }
}

/// Compiled search/replace step
#[derive(Debug, Clone)]
pub struct Substitution {
    search: Regex,
    replace: String,
}

impl Substitution {
    /// Compile a configured processing step
    pub fn new(field: &str, processing: &Processing) -> Result<Self> {
        Ok(Self {
            search: compile(field, &processing.search, processing.search.clone())?,
            replace: processing.replace.clone(),
        })
    }

    /// Replace every match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.search
            .replace_all(text, self.replace.as_str())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clgen_core::error::ClgenError;

    fn captures(patterns: &[&str]) -> PrefixCaptures {
        let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        PrefixCaptures::new("type_captures", &patterns).unwrap()
    }

    #[test]
    fn test_empty_list_never_matches() {
        let empty = captures(&[]);
        assert!(empty.capture("feat: anything").is_none());
        assert!(empty.capture("").is_none());
    }

    #[test]
    fn test_match_is_anchored_at_start() {
        let caps = captures(&[r"(\w+):"]);
        assert!(caps.capture("  feat: indented").is_none());
        assert!(caps.capture("see feat: later").is_none());
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        let caps = captures(&[r"(fix)\b", r"(\w+):", r"(fi)"]);

        let m = caps.capture("fix: typo").unwrap();
        assert_eq!(m.group(1), Some("fix"));
        assert_eq!(m.remainder(), ": typo");

        let m = caps.capture("feat: login").unwrap();
        assert_eq!(m.group(1), Some("feat"));
        assert_eq!(m.remainder(), " login");
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let caps = captures(&[r"a|(b)"]);
        assert!(caps.capture("xb").is_none());
        assert_eq!(caps.capture("b-rest").unwrap().remainder(), "-rest");
    }

    #[test]
    fn test_groups_report_participation() {
        let caps = captures(&[r"(\w+)(!)?:"]);

        let plain = caps.capture("feat: x").unwrap();
        assert_eq!((plain.group(1), plain.group(2)), (Some("feat"), None));

        let breaking = caps.capture("feat!: x").unwrap();
        assert_eq!((breaking.group(1), breaking.group(2)), (Some("feat"), Some("!")));
    }

    #[test]
    fn test_invalid_pattern_reports_field() {
        let err = PrefixCaptures::new("pre_captures", &["(".to_string()]).unwrap_err();
        match err {
            ClgenError::Config(ConfigError::InvalidPattern { field, .. }) => {
                assert_eq!(field, "pre_captures[0]")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trim_leading_and_trailing() {
        let left = TrimPattern::leading("title_left_trim", r"\s+").unwrap();
        let right = TrimPattern::trailing("title_right_trim", r"\s+").unwrap();

        assert_eq!(left.strip("   add login  "), "add login  ");
        assert_eq!(right.strip("   add login  "), "   add login");
        assert_eq!(left.strip("add"), "add");
        assert_eq!(right.strip("add"), "add");
    }

    #[test]
    fn test_trim_removes_one_run_only() {
        let left = TrimPattern::leading("pre_captures_after_trim", r"[-:]").unwrap();
        assert_eq!(left.strip("--x"), "-x");

        let right = TrimPattern::trailing("title_right_trim", r"[.!]+").unwrap();
        assert_eq!(right.strip("done!!."), "done");
    }

    #[test]
    fn test_substitution_replaces_all_matches() {
        let sub = Substitution::new(
            "preprocessing.search",
            &Processing::new(r"#(\d+)", "issue-$1"),
        )
        .unwrap();
        assert_eq!(sub.apply("fix #12 and #34"), "fix issue-12 and issue-34");
    }
}
