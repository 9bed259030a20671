// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cvet.
//!
//! This module handles loading and parsing the validation policy from
//! files and defaults, and compiling it into its runtime form.

pub mod default;
pub mod loader;
mod schema;

pub use default::default_config;
pub use schema::{
    PolicyConfig, DEFAULT_FIXES_STRING, DEFAULT_MAX_BODY_LINE_LENGTH,
    DEFAULT_MAX_SUBJECT_LINE_LENGTH, DEFAULT_SOB_STRING,
};

use crate::error::Result;
use crate::rules::directive::{FixesMatcher, SignOffMatcher};

/// Compiled validation policy.
///
/// The runtime form of [`PolicyConfig`]: the bug-reference pattern is
/// compiled once here and shared read-only across all commits of a run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Whether a bug-reference directive is mandatory.
    pub need_fixes: bool,
    /// Whether a sign-off line is mandatory.
    pub need_sobs: bool,
    /// Keyword introducing a bug reference.
    pub fixes_string: String,
    /// Keyword introducing a sign-off line.
    pub sob_string: String,
    /// Subsystem exempt from the bug-reference requirement.
    pub ignore_fixes_subsystem: String,
    /// Maximum subject line length in codepoints (0 disables).
    pub max_subject_line_length: usize,
    /// Maximum body line length in codepoints (0 disables).
    pub max_body_line_length: usize,
    /// Compiled bug-reference matcher.
    pub fixes: FixesMatcher,
    /// Sign-off matcher.
    pub sign_off: SignOffMatcher,
}

impl CheckConfig {
    /// Compile a policy into its runtime form.
    pub fn from_policy(policy: &PolicyConfig) -> Result<Self> {
        Ok(Self {
            need_fixes: policy.need_fixes,
            need_sobs: policy.need_sobs,
            fixes_string: policy.fixes_string.clone(),
            sob_string: policy.sob_string.clone(),
            ignore_fixes_subsystem: policy.ignore_fixes_subsystem.clone(),
            max_subject_line_length: policy.max_subject_line_length,
            max_body_line_length: policy.max_body_line_length,
            fixes: FixesMatcher::new(&policy.fixes_string)?,
            sign_off: SignOffMatcher::new(&policy.sob_string),
        })
    }
}
