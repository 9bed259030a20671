// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Directive matchers for bug references and sign-off lines.

use crate::error::{ConfigError, CvetError, Result};
use regex::Regex;

/// Matcher for a bug-reference directive such as `Fixes #123`.
///
/// The keyword is matched case-insensitively anywhere in the line, followed
/// by an optional colon with optional surrounding whitespace, then a
/// `#<digits>` token. No whitespace is permitted between `#` and the digits,
/// so `Fixes #1` matches while `Fixes # 1` does not. A line may carry
/// several references; one match is enough.
#[derive(Debug, Clone)]
pub struct FixesMatcher {
    keyword: String,
    pattern: Regex,
}

impl FixesMatcher {
    /// Compile a matcher for the given keyword.
    pub fn new(keyword: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"(?i){}\s*:?\s*#\d+", regex::escape(keyword)))
            .map_err(|e| {
                CvetError::Config(ConfigError::InvalidValue {
                    key: "fixes-string".to_string(),
                    message: e.to_string(),
                })
            })?;

        Ok(Self {
            keyword: keyword.to_string(),
            pattern,
        })
    }

    /// The configured keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Whether the line contains at least one reference.
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Matcher for a sign-off directive such as `Signed-off-by: A <a@b.c>`.
///
/// The line must start with the exact keyword: any indentation, even a
/// single space or tab, invalidates it. Trailing content of any length is
/// accepted.
#[derive(Debug, Clone)]
pub struct SignOffMatcher {
    keyword: String,
}

impl SignOffMatcher {
    /// Create a matcher for the given keyword.
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }

    /// The configured keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Whether the untrimmed line starts with the keyword.
    pub fn matches(&self, line: &str) -> bool {
        line.starts_with(&self.keyword)
    }
}
