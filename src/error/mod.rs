// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cvet application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cvet operations.
#[derive(Error, Debug)]
pub enum CvetError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
///
/// Covers malformed invocations as well as bad policy values, whether they
/// arrive from the command line or from a `cvet.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Too many arguments: expected [<commit-or-range>] [<branch>], got {count}")]
    TooManyArguments { count: usize },

    #[error("Cannot determine commit to check: no arguments given and no supported CI environment detected")]
    NoCommit,
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Failed to resolve branch: {message}")]
    BranchFailed { message: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Validation-related errors.
///
/// The structural variants (empty subject, missing subsystem, bare revert,
/// empty body) terminate a commit's validation immediately; the policy
/// variants report the rule that was broken.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Empty or whitespace-only subject line")]
    EmptySubject,

    #[error("Subject line too long: {length} characters (max: {max})")]
    SubjectTooLong { length: usize, max: usize },

    #[error("Subject has no subsystem prefix (expected '<subsystem>: <description>')")]
    MissingSubsystem,

    #[error("Revert subject names no commit to revert")]
    BareRevert,

    #[error("Empty commit body")]
    EmptyBody,

    #[error("Commit body contains only whitespace")]
    WhitespaceBody,

    #[error("Commit body has no description (sign-off lines alone are not a body)")]
    MissingDescription,

    #[error("Body line {line} too long: {length} characters (max: {max})")]
    BodyLineTooLong {
        line: usize,
        length: usize,
        max: usize,
    },

    #[error("No '{keyword}' line found in body")]
    MissingSignOff { keyword: String },

    #[error("No '{keyword}' reference found in subject or body")]
    MissingFixes { keyword: String },

    #[error("{count} commit(s) failed validation")]
    CommitsFailed { count: usize },
}

/// Result type alias for cvet operations.
pub type Result<T> = std::result::Result<T, CvetError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CvetError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
