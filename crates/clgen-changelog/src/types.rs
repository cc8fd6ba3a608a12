//! Changelog types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use clgen_core::config::ChangelogConfig;

/// Titles collected during one pass over the commits
///
/// Every bucket keeps commit traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    /// Release title
    pub title: String,
    values: HashMap<String, Vec<String>>,
    /// Titles without a supported type
    pub others: Vec<String>,
    /// Breaking change descriptions
    pub breaking_changes: Vec<String>,
}

impl ChangelogDocument {
    /// Create an empty document
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Titles under a heading key, created empty on first use
    pub fn values(&mut self, heading_key: &str) -> &mut Vec<String> {
        self.values.entry(heading_key.to_string()).or_default()
    }

    /// Titles collected under a heading key
    pub fn get(&self, heading_key: &str) -> Option<&[String]> {
        self.values.get(heading_key).map(Vec::as_slice)
    }

    /// Lay the document out in output order, skipping empty sections
    pub fn to_entry(&self, config: &ChangelogConfig) -> ChangelogEntry {
        let mut entry = ChangelogEntry::new(&self.title);

        for (key, heading) in config.headings.iter() {
            if let Some(items) = self.get(key) {
                entry.add_section(Section::new(SectionKind::Heading, heading, items.to_vec()));
            }
        }

        entry.add_section(Section::new(
            SectionKind::Others,
            &config.others_heading,
            self.others.clone(),
        ));
        entry.add_section(Section::new(
            SectionKind::BreakingChanges,
            &config.breaking_changes_heading,
            self.breaking_changes.clone(),
        ));

        entry
    }
}

/// Where a section comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// A configured heading
    Heading,
    /// The others bucket
    Others,
    /// The breaking changes bucket
    BreakingChanges,
}

/// A section in a changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section origin
    pub kind: SectionKind,
    /// Section title
    pub title: String,
    /// Bullet items
    pub items: Vec<String>,
}

impl Section {
    /// Create a new section
    pub fn new(kind: SectionKind, title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            items,
        }
    }

    /// Check if section is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A laid-out changelog ready for formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    /// Release title
    pub title: String,
    /// Non-empty sections in output order
    pub sections: Vec<Section>,
}

impl ChangelogEntry {
    /// Create a new changelog entry
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Add a section, dropping it when empty
    pub fn add_section(&mut self, section: Section) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clgen_core::config::Headings;

    fn config() -> ChangelogConfig {
        ChangelogConfig {
            headings: Headings::new()
                .with("fix", "Bug Fixes")
                .with("feat", "Features")
                .with("docs", "Documentation"),
            ..Default::default()
        }
    }

    #[test]
    fn test_values_created_on_first_use() {
        let mut doc = ChangelogDocument::new("v1.0.0");
        assert!(doc.get("feat").is_none());

        doc.values("feat").push("Add login".to_string());
        doc.values("feat").push("Add logout".to_string());

        assert_eq!(
            doc.get("feat"),
            Some(&["Add login".to_string(), "Add logout".to_string()][..])
        );
    }

    #[test]
    fn test_entry_follows_configured_heading_order() {
        let mut doc = ChangelogDocument::new("v1.0.0");
        doc.values("feat").push("A".to_string());
        doc.values("fix").push("B".to_string());
        doc.others.push("C".to_string());
        doc.breaking_changes.push("D".to_string());

        let entry = doc.to_entry(&config());
        let titles: Vec<_> = entry.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Bug Fixes", "Features", "Others", "BREAKING CHANGES"]
        );
    }

    #[test]
    fn test_entry_skips_empty_sections() {
        let mut doc = ChangelogDocument::new("v1.0.0");
        doc.values("docs").push("Write guide".to_string());
        doc.values("unconfigured").push("Lost".to_string());

        let entry = doc.to_entry(&config());
        assert_eq!(entry.sections.len(), 1);
        assert_eq!(entry.sections[0].kind, SectionKind::Heading);
        assert_eq!(entry.sections[0].title, "Documentation");
    }
}
