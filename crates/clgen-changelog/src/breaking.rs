//! Explicit breaking change lines

use tracing::trace;

use clgen_core::config::ChangelogConfig;
use clgen_core::error::Result;

use crate::capture::{PrefixCaptures, TrimPattern};
use crate::classifier::capitalize_first;

/// Finds lines such as `BREAKING CHANGE: ...` anywhere in a message
#[derive(Debug, Clone)]
pub struct BreakingChangeDetector {
    patterns: Vec<PrefixCaptures>,
    after_trim: TrimPattern,
    capitalize: bool,
}

impl BreakingChangeDetector {
    /// Compile the detector from configuration
    pub fn new(config: &ChangelogConfig) -> Result<Self> {
        // Patterns are tried one at a time across every line, so each one
        // gets its own single-entry capture list.
        let patterns = config
            .breaking_change_line_captures
            .iter()
            .enumerate()
            .map(|(i, p)| {
                PrefixCaptures::new(
                    &format!("breaking_change_line_captures[{}]", i),
                    std::slice::from_ref(p),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            after_trim: TrimPattern::leading(
                "breaking_change_line_captures_after_trim",
                &config.breaking_change_line_captures_after_trim,
            )?,
            capitalize: config.capitalize_title_first_char,
        })
    }

    /// Description from the first matching line, or `None` when no pattern
    /// matches any line
    pub fn detect<'a, I>(&self, lines: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let lines = lines.into_iter();

        for pattern in &self.patterns {
            for line in lines.clone() {
                if let Some(m) = pattern.capture(line) {
                    let text = self.after_trim.strip(m.remainder());
                    trace!(line, text, "breaking change line found");
                    return Some(if self.capitalize {
                        capitalize_first(text)
                    } else {
                        text.to_string()
                    });
                }
            }
        }

        None
    }
}
