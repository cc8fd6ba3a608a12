//! CLI definition and command handling

pub mod output;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use clgen_changelog::ChangelogGenerator;
use clgen_core::config::{
    load_config_or_default, write_default_config, DEFAULT_CONFIG_FILE, DEFAULT_RELEASE_TITLE,
};
use clgen_core::error::ChangelogError;
use clgen_git::{resolve_range, GitRepo, SINCE_LAST_RELEASE};

/// Generate a Markdown changelog from Conventional-Commit styled messages
#[derive(Debug, Parser)]
#[command(name = "clgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Commit range: `~..HEAD` (since the previous release), `v1.0.0..HEAD`, `HEAD`, ...
    #[arg(required_unless_present = "init")]
    pub commits: Option<String>,

    /// Release title, also used to find the previous release for `~..`
    #[arg(short, long, default_value = DEFAULT_RELEASE_TITLE)]
    pub title: String,

    /// Configuration file (YAML, or TOML with a .toml extension)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub conf: PathBuf,

    /// Repository path
    #[arg(short, long, default_value = ".")]
    pub repo: PathBuf,

    /// Write the changelog to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write a starter configuration to the --conf path and exit
    #[arg(long)]
    pub init: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown document
    #[default]
    Text,
    /// JSON document
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        if self.init {
            write_default_config(&self.conf)?;
            output::success(&format!("Configuration written to {}", self.conf.display()));
            return Ok(());
        }

        let range = self
            .commits
            .as_deref()
            .context("a commit range is required")?;
        info!(range, title = %self.title, conf = %self.conf.display(), "generating changelog");

        let (config, source) = load_config_or_default(&self.conf)?;
        if source.is_none() {
            output::warning(&format!(
                "Missing '{}' config file, using default values...",
                self.conf.display()
            ));
        }

        let repo = GitRepo::open(&self.repo)?;

        let tags = if range.starts_with(SINCE_LAST_RELEASE) {
            repo.tags()?
        } else {
            Vec::new()
        };
        let resolution = resolve_range(range, &self.title, &tags);
        if let Some(warning) = &resolution.warning {
            output::warning(warning);
        }

        let commits = repo.iter_commits(&resolution.range)?;

        let generator = ChangelogGenerator::new(config)?;
        let doc = generator.generate(&self.title, &commits);

        let rendered = match self.format {
            OutputFormat::Text => generator.format(&doc),
            OutputFormat::Json => serde_json::to_string_pretty(&generator.layout(&doc))
                .map_err(|e| ChangelogError::SerializeFailed(e.to_string()))?,
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{}\n", rendered)).map_err(|source| {
                    ChangelogError::WriteFailed {
                        path: path.clone(),
                        source,
                    }
                })?;
                output::success(&format!("Changelog written to {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", rendered)?;
            }
        }

        Ok(())
    }
}
