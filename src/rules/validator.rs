// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::error::ValidationError;
use console::style;

/// A single validation issue.
#[derive(Debug, Clone)]
pub struct CheckIssue {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Body line number the issue refers to, when applicable.
    pub line: Option<usize>,
}

impl CheckIssue {
    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let mut output = format!(
            "{} {} {}",
            style("✗").red().bold(),
            style(&self.code).red(),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

impl From<&ValidationError> for CheckIssue {
    fn from(err: &ValidationError) -> Self {
        let (code, suggestion, line) = match err {
            ValidationError::EmptySubject => ("empty-subject", None, None),
            ValidationError::SubjectTooLong { max, .. } => (
                "subject-max-length",
                Some(format!("Shorten the subject to {} characters or less", max)),
                None,
            ),
            ValidationError::MissingSubsystem => (
                "missing-subsystem",
                Some("Prefix the subject with the affected area: '<subsystem>: <description>'".to_string()),
                None,
            ),
            ValidationError::BareRevert => (
                "bare-revert",
                Some("Quote the subject of the reverted commit".to_string()),
                None,
            ),
            ValidationError::EmptyBody => (
                "empty-body",
                Some("Describe the change in the commit body".to_string()),
                None,
            ),
            ValidationError::WhitespaceBody => ("whitespace-body", None, None),
            ValidationError::MissingDescription => (
                "missing-description",
                Some("Describe the change before the trailer lines".to_string()),
                None,
            ),
            ValidationError::BodyLineTooLong { line, max, .. } => (
                "body-max-line-length",
                Some(format!("Wrap body lines at {} characters", max)),
                Some(*line),
            ),
            ValidationError::MissingSignOff { keyword } => (
                "missing-sign-off",
                Some(format!("Add a '{}: Your Name <email>' line", keyword)),
                None,
            ),
            ValidationError::MissingFixes { keyword } => (
                "missing-fixes",
                Some(format!("Reference the resolved issue, e.g. '{}: #123'", keyword)),
                None,
            ),
            ValidationError::CommitsFailed { .. } => ("commits-failed", None, None),
        };

        Self {
            code: code.to_string(),
            message: err.to_string(),
            suggestion,
            line,
        }
    }
}

/// Result of validating one commit.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Commit identifier.
    pub hash: String,
    /// The commit's subject line.
    pub subject: String,
    /// Validation issues; empty means the commit passed.
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    /// Create an empty result for a commit.
    pub fn new(hash: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            subject: subject.into(),
            issues: Vec::new(),
        }
    }

    /// Check if validation passed.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let short_hash = &self.hash[..7.min(self.hash.len())];
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        println!("{} {} {}", status, style(short_hash).cyan(), self.subject);

        for issue in &self.issues {
            println!("  {}", issue.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.hash,
            "subject": self.subject,
            "issues": self.issues.iter().map(|i| {
                serde_json::json!({
                    "code": i.code,
                    "message": i.message,
                    "suggestion": i.suggestion,
                    "line": i.line,
                })
            }).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }
}
