// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

/// A commit under inspection.
///
/// `subsystem` and `revert_commit` are derived fields: both start out
/// empty/false and are filled in by subject validation. `subsystem` is
/// non-empty exactly when the subject parsed successfully.
#[derive(Debug, Clone, Default)]
pub struct Commit {
    /// Opaque commit identifier (SHA or symbolic reference).
    pub hash: String,
    /// First line of the message.
    pub subject: String,
    /// Prefix before the first top-level colon in the subject.
    pub subsystem: String,
    /// Message lines following the subject. Blank and whitespace-only
    /// lines keep their positions.
    pub body: Vec<String>,
    /// Whether the subject matches the revert form.
    pub revert_commit: bool,
}

impl Commit {
    /// Create a commit from its parts.
    pub fn new(hash: impl Into<String>, subject: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            hash: hash.into(),
            subject: subject.into(),
            subsystem: String::new(),
            body,
            revert_commit: false,
        }
    }

    /// Build a commit from a raw git message.
    ///
    /// The subject is the first line. A single blank line separating the
    /// subject from the body is dropped; everything after it is kept
    /// verbatim, including interior blank lines.
    pub fn from_message(hash: impl Into<String>, message: &str) -> Self {
        let mut lines = message.lines();
        let subject = lines.next().unwrap_or("").to_string();

        let mut body: Vec<String> = lines.map(str::to_string).collect();
        if body.first().is_some_and(|l| l.trim().is_empty()) {
            body.remove(0);
        }

        Self {
            hash: hash.into(),
            subject,
            subsystem: String::new(),
            body,
            revert_commit: false,
        }
    }

    /// Short form of the hash for display.
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}
