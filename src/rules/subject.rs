// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Subject line validation.

use crate::config::CheckConfig;
use crate::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Subject shape: a subsystem token free of whitespace and colons,
    /// terminated by a colon.
    static ref SUBSYSTEM_REGEX: Regex = Regex::new(r"^([^:\s]+):").unwrap();
}

/// Outcome of a successful subject validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectReport {
    /// The subsystem prefix.
    pub subsystem: String,
    /// Whether the subject is a revert.
    pub revert: bool,
    /// Whether the subject carries a bug reference.
    pub found_fixes: bool,
}

/// Validate a commit subject line.
///
/// The length limit is enforced on the raw subject before any structural
/// parsing, so an overlong subject fails even when otherwise well formed.
/// Revert subjects (`Revert "foo: bar"`) have their subsystem parsed from
/// the reverted subject with a leading quote stripped; a bare revert with
/// no target is rejected.
pub fn check_subject(
    config: &CheckConfig,
    subject: &str,
) -> Result<SubjectReport, ValidationError> {
    if subject.trim().is_empty() {
        return Err(ValidationError::EmptySubject);
    }

    let length = subject.chars().count();
    let max = config.max_subject_line_length;
    if max > 0 && length > max {
        return Err(ValidationError::SubjectTooLong { length, max });
    }

    let (target, revert) = match revert_target(subject) {
        RevertForm::Bare => return Err(ValidationError::BareRevert),
        RevertForm::Target(target) => (target, true),
        RevertForm::NotARevert => (subject, false),
    };

    let subsystem = SUBSYSTEM_REGEX
        .captures(target)
        .map(|captures| captures[1].to_string())
        .ok_or(ValidationError::MissingSubsystem)?;

    // Scan the raw subject so references inside a quoted revert count too.
    let found_fixes = config.fixes.matches(subject);

    Ok(SubjectReport {
        subsystem,
        revert,
        found_fixes,
    })
}

enum RevertForm<'a> {
    NotARevert,
    Bare,
    Target(&'a str),
}

/// Classify a subject's revert form.
///
/// Only a leading "revert" token counts: the keyword must be followed by
/// whitespace (or nothing, which is the bare error form). Subjects such as
/// `revertfoo: bar` or `revert: bar` are ordinary subjects.
fn revert_target(subject: &str) -> RevertForm<'_> {
    let matched = subject
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("revert"));
    if !matched {
        return RevertForm::NotARevert;
    }

    let rest = &subject[6..];
    if rest.trim().is_empty() {
        return RevertForm::Bare;
    }
    if !rest.starts_with(char::is_whitespace) {
        return RevertForm::NotARevert;
    }

    let target = rest.trim_start();
    RevertForm::Target(target.strip_prefix('"').unwrap_or(target))
}
