//! Tag listing

use git2::{ObjectType, Oid};
use tracing::{debug, instrument, trace};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;

impl GitRepo {
    /// Every tag that resolves to a commit, sorted by name.
    ///
    /// Annotated tags are peeled to their commit.
    /// Tags on trees or blobs are skipped.
    #[instrument(skip(self))]
    pub fn tags(&self) -> Result<Vec<TagInfo>> {
        let mut tags = Vec::new();

        self.repo.tag_foreach(|oid, refname| {
            let refname = String::from_utf8_lossy(refname);
            let name = refname.strip_prefix("refs/tags/").unwrap_or(&*refname);
            match self.resolve_tag(oid, name) {
                Some(tag) => tags.push(tag),
                None => trace!(tag = name, "tag does not point to a commit"),
            }
            true
        })?;

        tags.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(count = tags.len(), "tags listed");
        Ok(tags)
    }

    fn resolve_tag(&self, oid: Oid, name: &str) -> Option<TagInfo> {
        let commit = self
            .repo
            .find_object(oid, None)
            .and_then(|object| object.peel(ObjectType::Commit))
            .ok()?;
        Some(TagInfo::new(name, commit.id().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use tempfile::TempDir;

    fn tagged_repo() -> (TempDir, Oid) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();

        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let head = repo
            .commit(Some("HEAD"), &sig, &sig, "feat: first", &tree, &[])
            .unwrap();

        let commit = repo.find_object(head, None).unwrap();
        repo.tag_lightweight("v2.0.0", &commit, false).unwrap();
        repo.tag("v1.0.0", &commit, &sig, "Release 1.0.0\n", false)
            .unwrap();
        repo.tag_lightweight("nightly", &commit, false).unwrap();
        repo.tag_lightweight("tree-tag", tree.as_object(), false)
            .unwrap();

        (temp, head)
    }

    #[test]
    fn test_tags_sorted_by_name() {
        let (temp, _) = tagged_repo();
        let repo = GitRepo::open(temp.path()).unwrap();

        let names: Vec<_> = repo.tags().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["nightly", "v1.0.0", "v2.0.0"]);
    }

    #[test]
    fn test_annotated_tag_peeled_to_commit() {
        let (temp, head) = tagged_repo();
        let repo = GitRepo::open(temp.path()).unwrap();
        let tags = repo.tags().unwrap();

        let annotated = tags.iter().find(|t| t.name == "v1.0.0").unwrap();
        assert_eq!(annotated.commit_hash, head.to_string());

        let lightweight = tags.iter().find(|t| t.name == "v2.0.0").unwrap();
        assert_eq!(lightweight.commit_hash, head.to_string());
    }

    #[test]
    fn test_repository_without_tags() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();
        let repo = GitRepo::open(temp.path()).unwrap();

        assert!(repo.tags().unwrap().is_empty());
    }
}
