// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::Commit;
use crate::config::CheckConfig;

use super::body::check_body;
use super::subject::check_subject;
use super::validator::{CheckIssue, CheckResult};

/// Rule engine applying the validation policy to commits.
#[derive(Debug, Clone)]
pub struct CheckEngine {
    config: CheckConfig,
}

impl CheckEngine {
    /// Create a new engine with the given policy.
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// The engine's policy.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Validate one commit.
    ///
    /// Subject first; a structural subject failure makes the body
    /// unparseable (no subsystem), so the body check is skipped for that
    /// commit. On success the commit's derived `subsystem` and
    /// `revert_commit` fields are filled in.
    pub fn check_commit(&self, commit: &mut Commit) -> CheckResult {
        let mut result = CheckResult::new(&commit.hash, &commit.subject);

        match check_subject(&self.config, &commit.subject) {
            Ok(report) => {
                commit.subsystem = report.subsystem;
                commit.revert_commit = report.revert;

                if let Err(err) = check_body(&self.config, commit, report.found_fixes) {
                    result.issues.push(CheckIssue::from(&err));
                }
            }
            Err(err) => result.issues.push(CheckIssue::from(&err)),
        }

        result
    }

    /// Validate a sequence of commits.
    ///
    /// Every commit is checked; failures never abort the run. An empty
    /// list yields an empty result set, which callers treat as success.
    /// Bug-reference state cannot leak between commits: each commit's
    /// reports are local to its own `check_commit` call.
    pub fn check_commits(&self, commits: &mut [Commit]) -> Vec<CheckResult> {
        commits
            .iter_mut()
            .map(|commit| self.check_commit(commit))
            .collect()
    }
}
