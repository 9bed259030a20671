// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the policy structure that can be loaded from cvet.toml.

use serde::{Deserialize, Serialize};

/// Default maximum subject line length, in codepoints.
pub const DEFAULT_MAX_SUBJECT_LINE_LENGTH: usize = 75;

/// Default maximum body line length, in codepoints.
pub const DEFAULT_MAX_BODY_LINE_LENGTH: usize = 72;

/// Default bug-reference keyword.
pub const DEFAULT_FIXES_STRING: &str = "Fixes";

/// Default sign-off keyword.
pub const DEFAULT_SOB_STRING: &str = "Signed-off-by";

/// The validation policy for a run.
///
/// Loaded from cvet.toml when present; command-line flags override
/// individual fields afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Whether a bug-reference directive is mandatory.
    pub need_fixes: bool,

    /// Whether a sign-off line is mandatory.
    pub need_sobs: bool,

    /// Keyword introducing a bug reference.
    pub fixes_string: String,

    /// Keyword introducing a sign-off line.
    pub sob_string: String,

    /// Subsystem exempt from the bug-reference requirement
    /// (e.g. a release-commit subsystem). Empty means no exemption.
    pub ignore_fixes_subsystem: String,

    /// Maximum subject line length in codepoints (0 disables).
    pub max_subject_line_length: usize,

    /// Maximum body line length in codepoints (0 disables).
    pub max_body_line_length: usize,

    /// Source-branch regex patterns whose commits skip the directive
    /// requirements. Each pattern must match the whole branch name.
    pub ignore_branches: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            need_fixes: true,
            need_sobs: true,
            fixes_string: DEFAULT_FIXES_STRING.to_string(),
            sob_string: DEFAULT_SOB_STRING.to_string(),
            ignore_fixes_subsystem: String::new(),
            max_subject_line_length: DEFAULT_MAX_SUBJECT_LINE_LENGTH,
            max_body_line_length: DEFAULT_MAX_BODY_LINE_LENGTH,
            ignore_branches: Vec::new(),
        }
    }
}

impl PolicyConfig {
    /// Load the policy from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load the policy from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}
