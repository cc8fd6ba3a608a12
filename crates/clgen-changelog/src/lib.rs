//! clgen Changelog - Commit classification and changelog rendering
//!
//! Subjects are classified by configurable, start-anchored regex stages;
//! titles are grouped under configured headings and rendered as Markdown.

pub mod breaking;
pub mod capture;
pub mod classifier;
pub mod formatter;
pub mod generator;
pub mod types;

pub use breaking::BreakingChangeDetector;
pub use classifier::{ClassificationResult, TitleClassifier, TypeMatch};
pub use generator::ChangelogGenerator;
pub use types::{ChangelogDocument, ChangelogEntry, Section, SectionKind};
