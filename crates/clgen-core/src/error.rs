//! Error types for clgen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ClgenError
pub type Result<T> = std::result::Result<T, ClgenError>;

/// Any failure that stops a changelog run
#[derive(Debug, Error)]
pub enum ClgenError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// The configuration file exists but cannot be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// A pattern field does not hold a valid regular expression
    #[error("Invalid regular expression in {field} ('{pattern}'): {source}")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Malformed YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Malformed TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Cannot access configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Repository access failures
#[derive(Debug, Error)]
pub enum GitError {
    /// Nothing to open at an explicit repository root
    #[error("No git repository at {0}")]
    RepositoryNotFound(PathBuf),

    #[error("Cannot open repository: {0}")]
    OpenFailed(String),

    /// Commit range could not be resolved
    #[error("Invalid commit range '{range}': {reason}")]
    InvalidRange { range: String, reason: String },

    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Failures emitting the finished document
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("Cannot write changelog to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot serialize changelog: {0}")]
    SerializeFailed(String),
}
