// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::commit::Commit;
use crate::error::{CvetError, GitError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository providing commit retrieval.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            CvetError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                CvetError::Git(GitError::NotARepository)
            } else {
                CvetError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Resolve a reference (SHA, branch name, HEAD, ...) to a commit id.
    fn resolve_commit(&self, reference: &str) -> Result<Oid> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            CvetError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            CvetError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit.id())
    }

    /// Resolve a destination branch, trying the local name first and the
    /// origin remote second. Returns None when neither exists.
    fn resolve_branch(&self, branch: &str) -> Option<Oid> {
        if branch.is_empty() {
            return None;
        }

        for candidate in [branch.to_string(), format!("origin/{}", branch)] {
            if let Ok(oid) = self.resolve_commit(&candidate) {
                return Some(oid);
            }
        }

        tracing::debug!("Branch {:?} not found locally or on origin", branch);
        None
    }

    /// Build the commit for a single reference.
    pub fn commit_from_ref(&self, reference: &str) -> Result<Commit> {
        let oid = self.resolve_commit(reference)?;
        let commit = self.inner.find_commit(oid).map_err(|e| {
            CvetError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", oid, e.message()),
            })
        })?;

        Ok(Commit::from_message(
            oid.to_string(),
            commit.message().unwrap_or(""),
        ))
    }

    /// Resolve the commits a run should check, oldest first.
    ///
    /// An explicit `from..to` range is walked as given (`to` defaults to
    /// HEAD when omitted). A single commit is bounded below by the
    /// destination branch when that branch resolves; otherwise just the
    /// named commit is checked. Merge commits are skipped.
    pub fn commits_to_check(&self, commit: &str, branch: &str) -> Result<Vec<Commit>> {
        if let Some((from, to)) = commit.split_once("..") {
            let to = if to.is_empty() { "HEAD" } else { to };
            return self.walk_range(self.resolve_commit(from)?, self.resolve_commit(to)?);
        }

        let tip = self.resolve_commit(commit)?;
        match self.resolve_branch(branch) {
            Some(base) => self.walk_range(base, tip),
            None => Ok(vec![self.commit_from_ref(commit)?]),
        }
    }

    /// Walk `base..tip`, oldest first, skipping merges.
    fn walk_range(&self, base: Oid, tip: Oid) -> Result<Vec<Commit>> {
        let mut revwalk = self.inner.revwalk().map_err(|e| {
            CvetError::Git(GitError::CommandFailed {
                command: "revwalk".to_string(),
                message: e.message().to_string(),
            })
        })?;

        revwalk
            .set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)
            .map_err(|e| {
                CvetError::Git(GitError::CommandFailed {
                    command: "revwalk.set_sorting".to_string(),
                    message: e.message().to_string(),
                })
            })?;

        revwalk.push(tip).map_err(|e| {
            CvetError::Git(GitError::CommandFailed {
                command: "revwalk.push".to_string(),
                message: e.message().to_string(),
            })
        })?;
        revwalk.hide(base).map_err(|e| {
            CvetError::Git(GitError::CommandFailed {
                command: "revwalk.hide".to_string(),
                message: e.message().to_string(),
            })
        })?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| {
                CvetError::Git(GitError::CommandFailed {
                    command: "revwalk".to_string(),
                    message: e.message().to_string(),
                })
            })?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                CvetError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;

            if commit.parent_count() > 1 {
                tracing::debug!("Skipping merge commit {}", oid);
                continue;
            }

            commits.push(Commit::from_message(
                oid.to_string(),
                commit.message().unwrap_or(""),
            ));
        }

        Ok(commits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn add_commit(repo: &Git2Repo, message: &str) -> Oid {
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let tree_id = {
            let mut index = repo.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.find_tree(tree_id).unwrap();

        let parent = repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn create_test_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        let wrapper = Repository::open(dir.path()).unwrap();
        (dir, wrapper)
    }

    #[test]
    fn test_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let result = Repository::open(dir.path());
        assert!(matches!(
            result,
            Err(CvetError::Git(GitError::NotARepository))
        ));
    }

    #[test]
    fn test_commit_from_ref() {
        let (_dir, repo) = create_test_repo();
        add_commit(
            repo.inner(),
            "net: fix checksum\n\nbody line\n\nSigned-off-by: a@b.c",
        );

        let commit = repo.commit_from_ref("HEAD").unwrap();
        assert_eq!(commit.subject, "net: fix checksum");
        assert_eq!(commit.body, vec!["body line", "", "Signed-off-by: a@b.c"]);
    }

    #[test]
    fn test_explicit_range_oldest_first() {
        let (_dir, repo) = create_test_repo();
        let c1 = add_commit(repo.inner(), "base: initial");
        let c2 = add_commit(repo.inner(), "net: second");
        let c3 = add_commit(repo.inner(), "fs: third");

        let commits = repo
            .commits_to_check(&format!("{}..HEAD", c1), "")
            .unwrap();
        let hashes: Vec<&str> = commits.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec![c2.to_string(), c3.to_string()]);
    }

    #[test]
    fn test_single_commit_without_branch() {
        let (_dir, repo) = create_test_repo();
        add_commit(repo.inner(), "base: initial");
        let head = add_commit(repo.inner(), "net: tip");

        let commits = repo.commits_to_check("HEAD", "no-such-branch").unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, head.to_string());
    }

    #[test]
    fn test_commit_bounded_by_branch() {
        let (_dir, repo) = create_test_repo();
        let c1 = add_commit(repo.inner(), "base: initial");
        let base = repo.inner().find_commit(c1).unwrap();
        repo.inner().branch("base", &base, false).unwrap();

        let c2 = add_commit(repo.inner(), "net: second");
        let c3 = add_commit(repo.inner(), "fs: third");

        let commits = repo.commits_to_check("HEAD", "base").unwrap();
        let hashes: Vec<String> = commits.iter().map(|c| c.hash.clone()).collect();
        assert_eq!(hashes, vec![c2.to_string(), c3.to_string()]);
    }

    #[test]
    fn test_unknown_reference_fails() {
        let (_dir, repo) = create_test_repo();
        add_commit(repo.inner(), "base: initial");
        assert!(repo.commits_to_check("no-such-ref", "").is_err());
    }
}
