//! clgen Git - Git access for the clgen changelog generator
//!
//! This crate reads commit ranges and tags from a repository and resolves
//! the symbolic `~..` range against the repository's semver tags.

mod commits;
pub mod range;
mod repository;
mod tags;
pub mod types;

pub use range::{resolve_range, RangeResolution, SINCE_LAST_RELEASE};
pub use repository::{GitRepo, Result};
pub use types::{CommitInfo, TagInfo};
