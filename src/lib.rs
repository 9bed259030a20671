// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cvet - commit message conformance checker
//!
//! A CI tool that verifies each commit in a range against a formatting
//! policy: subsystem-prefixed subject lines, bug-reference and sign-off
//! directives, and Unicode-aware line-length limits with their exemptions.
//!
//! # Example
//!
//! ```no_run
//! use cvet::config::{CheckConfig, PolicyConfig};
//! use cvet::git::Repository;
//! use cvet::rules::CheckEngine;
//!
//! let config = CheckConfig::from_policy(&PolicyConfig::default()).unwrap();
//! let repo = Repository::open_current().unwrap();
//! let mut commits = repo.commits_to_check("HEAD", "main").unwrap();
//!
//! let engine = CheckEngine::new(config);
//! for result in engine.check_commits(&mut commits) {
//!     println!("{}: {}", result.hash, result.is_valid());
//! }
//! ```

// Module declarations
pub mod ci;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::{CheckConfig, PolicyConfig};
pub use error::{CvetError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cvet.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
