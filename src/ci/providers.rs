// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CI provider detection.

use std::env;

/// Commit and branch pair extracted from a CI provider's environment.
///
/// All fields are empty when no supported provider is detected; callers
/// fall back to explicit arguments in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiEnvironment {
    /// Commit to check (the pull request head for PR builds).
    pub commit: String,
    /// Branch the change is destined for.
    pub dst_branch: String,
    /// Branch the change comes from; empty for direct (non-PR) builds.
    pub src_branch: String,
}

impl CiEnvironment {
    /// Whether this looks like a pull-request build.
    pub fn is_pull_request(&self) -> bool {
        !self.src_branch.is_empty()
    }
}

/// One CI provider's variable set.
///
/// Detection walks [`PROVIDERS`] in order and the first provider whose
/// presence variable is set wins, so adding a provider is a data change.
#[derive(Debug)]
pub struct Provider {
    /// Provider name, for logging.
    pub name: &'static str,
    /// Variable whose presence identifies the provider. Being set to an
    /// empty string still counts as present.
    pub presence_var: &'static str,
    /// Variable holding the commit to check.
    pub commit_var: &'static str,
    /// Variable holding the source branch; empty or unset on direct builds.
    pub src_branch_var: &'static str,
    /// Variable holding the destination branch.
    pub dst_branch_var: &'static str,
}

/// Supported providers, in detection priority order.
pub const PROVIDERS: &[Provider] = &[
    Provider {
        name: "TravisCI",
        presence_var: "TRAVIS",
        commit_var: "TRAVIS_PULL_REQUEST_SHA",
        src_branch_var: "TRAVIS_PULL_REQUEST_BRANCH",
        dst_branch_var: "TRAVIS_BRANCH",
    },
    Provider {
        name: "Jenkins",
        presence_var: "ghprbPullId",
        commit_var: "ghprbActualCommit",
        src_branch_var: "ghprbSourceBranch",
        dst_branch_var: "ghprbTargetBranch",
    },
];

/// Inspect the process environment for a supported CI provider.
///
/// Never fails: when no provider's presence variable is set, all fields
/// of the returned value are empty.
pub fn detect_ci_environment() -> CiEnvironment {
    for provider in PROVIDERS {
        if env::var_os(provider.presence_var).is_none() {
            continue;
        }

        let ci = CiEnvironment {
            commit: var_or_empty(provider.commit_var),
            dst_branch: var_or_empty(provider.dst_branch_var),
            src_branch: var_or_empty(provider.src_branch_var),
        };

        if ci.is_pull_request() {
            tracing::debug!(
                "Detected {} pull request build: {} -> {}",
                provider.name,
                ci.src_branch,
                ci.dst_branch
            );
        } else {
            tracing::debug!(
                "Detected {} build on branch {}",
                provider.name,
                ci.dst_branch
            );
        }

        return ci;
    }

    CiEnvironment::default()
}

fn var_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ci::testenv;

    #[test]
    fn test_travis_pull_request() {
        let _guard = testenv::lock_clean_env();
        testenv::set_vars(&[
            ("TRAVIS", "true"),
            ("TRAVIS_BRANCH", "master"),
            ("TRAVIS_PULL_REQUEST_SHA", "travis-pull-request-sha"),
            ("TRAVIS_PULL_REQUEST_BRANCH", "travis-pr"),
        ]);

        let ci = detect_ci_environment();
        assert_eq!(ci.commit, "travis-pull-request-sha");
        assert_eq!(ci.dst_branch, "master");
        assert_eq!(ci.src_branch, "travis-pr");
        assert!(ci.is_pull_request());
    }

    #[test]
    fn test_travis_direct_build() {
        let _guard = testenv::lock_clean_env();
        testenv::set_vars(&[
            ("TRAVIS", "true"),
            ("TRAVIS_BRANCH", "master"),
            ("TRAVIS_PULL_REQUEST_SHA", "travis-pull-request-sha"),
            // Set but empty: a direct push build.
            ("TRAVIS_PULL_REQUEST_BRANCH", ""),
        ]);

        let ci = detect_ci_environment();
        assert_eq!(ci.commit, "travis-pull-request-sha");
        assert_eq!(ci.dst_branch, "master");
        assert_eq!(ci.src_branch, "");
        assert!(!ci.is_pull_request());
    }

    #[test]
    fn test_jenkins_pull_request() {
        let _guard = testenv::lock_clean_env();
        testenv::set_vars(&[
            ("ghprbPullId", "42"),
            ("ghprbActualCommit", "jenkins-sha"),
            ("ghprbSourceBranch", "feature"),
            ("ghprbTargetBranch", "main"),
        ]);

        let ci = detect_ci_environment();
        assert_eq!(ci.commit, "jenkins-sha");
        assert_eq!(ci.dst_branch, "main");
        assert_eq!(ci.src_branch, "feature");
    }

    #[test]
    fn test_provider_priority_order() {
        let _guard = testenv::lock_clean_env();
        testenv::set_vars(&[
            ("TRAVIS", "true"),
            ("TRAVIS_BRANCH", "master"),
            ("TRAVIS_PULL_REQUEST_SHA", "travis-sha"),
            ("ghprbPullId", "42"),
            ("ghprbActualCommit", "jenkins-sha"),
        ]);

        // Travis comes first in the table.
        let ci = detect_ci_environment();
        assert_eq!(ci.commit, "travis-sha");
    }

    #[test]
    fn test_no_provider_detected() {
        let _guard = testenv::lock_clean_env();
        let ci = detect_ci_environment();
        assert_eq!(ci, CiEnvironment::default());
        assert!(ci.commit.is_empty());
    }

    #[test]
    fn test_presence_means_set_not_nonempty() {
        let _guard = testenv::lock_clean_env();
        // TRAVIS set to empty still identifies the provider.
        testenv::set_vars(&[("TRAVIS", ""), ("TRAVIS_PULL_REQUEST_SHA", "sha1")]);

        let ci = detect_ci_environment();
        assert_eq!(ci.commit, "sha1");
        assert_eq!(ci.dst_branch, "");
    }
}
