//! Repository handle

use std::path::Path;

use git2::{ErrorCode, Repository};
use tracing::{debug, instrument};

use clgen_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// An opened repository the changelog is read from
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Open the repository rooted exactly at `path`.
    ///
    /// Parent directories are not searched: a plain directory nested inside
    /// another repository is an error.
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::open(path).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitError::RepositoryNotFound(path.to_path_buf())
            } else {
                GitError::OpenFailed(e.message().to_string())
            }
        })?;

        debug!(
            git_dir = %repo.path().display(),
            bare = repo.is_bare(),
            "repository opened"
        );
        Ok(Self { repo })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_repository_root() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();

        let repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(
            repo.repo.workdir().unwrap().canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_nested_directory_is_not_a_repository() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();

        let nested = temp.path().join("docs").join("release");
        std::fs::create_dir_all(&nested).unwrap();

        let result = GitRepo::open(&nested);
        assert!(matches!(result, Err(GitError::RepositoryNotFound(path)) if path == nested));
    }

    #[test]
    fn test_open_bare_repository() {
        let temp = TempDir::new().unwrap();
        Repository::init_bare(temp.path()).unwrap();

        let repo = GitRepo::open(temp.path()).unwrap();
        assert!(repo.repo.is_bare());
    }

    #[test]
    fn test_missing_repository() {
        let temp = TempDir::new().unwrap();
        let result = GitRepo::open(&temp.path().join("missing"));
        assert!(matches!(result, Err(GitError::RepositoryNotFound(_))));
    }
}
