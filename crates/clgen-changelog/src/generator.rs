//! Changelog generation

use clgen_core::config::ChangelogConfig;
use clgen_core::error::Result;
use clgen_git::CommitInfo;
use tracing::{debug, info, instrument};

use crate::breaking::BreakingChangeDetector;
use crate::capture::Substitution;
use crate::classifier::{TitleClassifier, TypeMatch};
use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::types::{ChangelogDocument, ChangelogEntry};

/// Changelog generator
///
/// Compiles the configured patterns once and runs every commit through
/// preprocessing, classification, postprocessing and breaking change
/// detection.
pub struct ChangelogGenerator {
    classifier: TitleClassifier,
    detector: BreakingChangeDetector,
    preprocessing: Option<Substitution>,
    postprocessing: Option<Substitution>,
    formatter: Box<dyn ChangelogFormatter>,
    config: ChangelogConfig,
}

impl ChangelogGenerator {
    /// Create a new generator with the markdown formatter
    pub fn new(config: ChangelogConfig) -> Result<Self> {
        let preprocessing = config
            .preprocessing
            .as_ref()
            .map(|p| Substitution::new("preprocessing.search", p))
            .transpose()?;
        let postprocessing = config
            .postprocessing
            .as_ref()
            .map(|p| Substitution::new("postprocessing.search", p))
            .transpose()?;

        Ok(Self {
            classifier: TitleClassifier::new(&config)?,
            detector: BreakingChangeDetector::new(&config)?,
            preprocessing,
            postprocessing,
            formatter: Box::new(MarkdownFormatter::new()),
            config,
        })
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Collect every commit into a document, in the given order
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate(&self, title: &str, commits: &[CommitInfo]) -> ChangelogDocument {
        info!(title, commit_count = commits.len(), "generating changelog");
        let mut doc = ChangelogDocument::new(title);

        for commit in commits {
            self.process_commit(&mut doc, commit);
        }

        debug!(
            others = doc.others.len(),
            breaking = doc.breaking_changes.len(),
            "changelog collected"
        );
        doc
    }

    /// Classify one commit into the document
    pub fn process_commit(&self, doc: &mut ChangelogDocument, commit: &CommitInfo) {
        let subject = match &self.preprocessing {
            Some(pre) => pre.apply(commit.subject()),
            None => commit.subject().to_string(),
        };

        let classified = self.classifier.classify(&subject);

        let title = match &self.postprocessing {
            Some(post) => post.apply(&classified.title),
            None => classified.title,
        };

        let heading_key = match classified.type_match {
            TypeMatch::SupportedType => self.config.heading_key_for(&classified.type_token),
            TypeMatch::Others => None,
        };
        match heading_key {
            Some(key) => doc.values(key).push(title.clone()),
            None => doc.others.push(title.clone()),
        }

        let inline = classified.is_breaking_change.then_some(title);
        let explicit = self
            .detector
            .detect(commit.lines())
            .filter(|text| !text.is_empty());

        if let Some(breaking) = explicit.or(inline).filter(|text| !text.is_empty()) {
            debug!(hash = %commit.short_hash, %breaking, "breaking change recorded");
            doc.breaking_changes.push(breaking);
        }
    }

    /// Lay out a document in configured section order
    pub fn layout(&self, doc: &ChangelogDocument) -> ChangelogEntry {
        doc.to_entry(&self.config)
    }

    /// Format a document to string
    pub fn format(&self, doc: &ChangelogDocument) -> String {
        self.formatter.format(&self.layout(doc))
    }

    /// Generate and format in one step
    #[instrument(skip(self, commits), fields(commit_count = commits.len()))]
    pub fn generate_formatted(&self, title: &str, commits: &[CommitInfo]) -> String {
        let doc = self.generate(title, commits);
        let output = self.format(&doc);
        debug!(output_len = output.len(), "changelog formatted");
        output
    }
}
