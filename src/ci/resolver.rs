// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Resolution of the commit and branch to check.

use crate::error::{ConfigError, CvetError, Result};

use super::branch::ignore_source_branch;
use super::providers::detect_ci_environment;

/// Destination branch assumed when none is given.
pub const DEFAULT_BRANCH: &str = "main";

/// The commit and destination branch a run will check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTarget {
    /// Commit or range to check.
    pub commit: String,
    /// Destination branch.
    pub branch: String,
    /// Ignore pattern matched by the CI source branch, if any.
    pub ignored_branch: Option<String>,
}

/// Combine positional arguments and the CI environment into a target.
///
/// With no arguments the CI environment decides; failing to find a commit
/// there is a usage error. One argument names the commit (or range) with
/// the destination branch defaulting to "main"; two name both. Anything
/// more is a usage error.
pub fn resolve_target(args: &[String], ignore_branches: &[String]) -> Result<CheckTarget> {
    match args {
        [] => {
            let ci = detect_ci_environment();
            if ci.commit.is_empty() {
                return Err(CvetError::Config(ConfigError::NoCommit));
            }

            let matched = ignore_source_branch(&ci.commit, &ci.src_branch, ignore_branches);
            let ignored_branch = if matched.is_empty() {
                None
            } else {
                Some(matched)
            };

            Ok(CheckTarget {
                commit: ci.commit,
                branch: ci.dst_branch,
                ignored_branch,
            })
        }
        [commit] => Ok(CheckTarget {
            commit: commit.clone(),
            branch: DEFAULT_BRANCH.to_string(),
            ignored_branch: None,
        }),
        [commit, branch] => Ok(CheckTarget {
            commit: commit.clone(),
            branch: branch.clone(),
            ignored_branch: None,
        }),
        _ => Err(CvetError::Config(ConfigError::TooManyArguments {
            count: args.len(),
        })),
    }
}
