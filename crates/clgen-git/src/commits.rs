//! Commit history operations

use git2::{Oid, RevparseMode, Revwalk, Sort};
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;
use clgen_core::error::GitError;

impl GitRepo {
    /// Iterate the commits selected by a revision range, newest first.
    ///
    /// Accepts the forms `git log` does for a single argument: `REV` (all
    /// ancestors of REV), `A..B` (reachable from B but not A) and `A...B`
    /// (symmetric difference).
    #[instrument(skip(self))]
    pub fn iter_commits(&self, range: &str) -> Result<Vec<CommitInfo>> {
        let revwalk = self.revwalk_for(range)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(range, count = commits.len(), "collected commits");
        Ok(commits)
    }

    fn revwalk_for(&self, range: &str) -> Result<Revwalk<'_>> {
        let invalid = |e: git2::Error| GitError::InvalidRange {
            range: range.to_string(),
            reason: e.message().to_string(),
        };

        let spec = self.repo.revparse(range).map_err(invalid)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let from = spec.from().map(|o| o.id());
        let to = spec.to().map(|o| o.id());

        if spec.mode().contains(RevparseMode::SINGLE) {
            let from = from.ok_or_else(|| GitError::InvalidRange {
                range: range.to_string(),
                reason: "no revision".to_string(),
            })?;
            revwalk.push(from)?;
            return Ok(revwalk);
        }

        let (from, to) = match (from, to) {
            (Some(from), Some(to)) => (from, to),
            (None, Some(to)) => (self.head_oid().map_err(invalid)?, to),
            (Some(from), None) => (from, self.head_oid().map_err(invalid)?),
            (None, None) => {
                return Err(GitError::InvalidRange {
                    range: range.to_string(),
                    reason: "empty range".to_string(),
                })
            }
        };

        revwalk.push(to)?;
        if spec.mode().contains(RevparseMode::MERGE_BASE) {
            revwalk.push(from)?;
            let base = self.repo.merge_base(from, to)?;
            revwalk.hide(base)?;
        } else {
            revwalk.hide(from)?;
        }

        Ok(revwalk)
    }

    fn head_oid(&self) -> std::result::Result<Oid, git2::Error> {
        self.repo.head()?.peel_to_commit().map(|c| c.id())
    }
}

fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    CommitInfo::new(
        &commit.id().to_string(),
        String::from_utf8_lossy(commit.message_bytes()),
    )
}
