//! clgen Core - Core library for the clgen changelog generator
//!
//! This crate provides the error taxonomy and the configuration model shared
//! by the git, changelog and CLI crates.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Headings, Processing};
pub use error::{ClgenError, Result};
