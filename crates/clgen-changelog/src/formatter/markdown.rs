//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::ChangelogFormatter;
use crate::types::{ChangelogEntry, Section, SectionKind};

/// Markdown changelog formatter
///
/// Renders a level-1 title, then one level-2 heading per section with one
/// bullet per item. Sections are separated by a blank line; the breaking
/// changes section closes the document without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn section(output: &mut String, section: &Section) {
        output.push_str(&format!("## {}\n\n", section.title));
        for item in &section.items {
            output.push_str(&format!("- {}\n", item));
        }
        if section.kind != SectionKind::BreakingChanges {
            output.push('\n');
        }
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, entry), fields(title = %entry.title, section_count = entry.sections.len()))]
    fn format(&self, entry: &ChangelogEntry) -> String {
        let mut output = format!("# {}\n\n", entry.title);

        for section in &entry.sections {
            Self::section(&mut output, section);
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }
}
