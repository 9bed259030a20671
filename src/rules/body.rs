// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit body validation.

use crate::commit::Commit;
use crate::config::CheckConfig;
use crate::error::ValidationError;

use super::length;

/// Outcome of a successful body validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyReport {
    /// Whether a bug reference was seen in the subject or body.
    pub found_fixes: bool,
}

/// Validate a commit's body lines.
///
/// `subject_found_fixes` carries the subject validation's bug-reference
/// result forward so the body requirement can be satisfied by either.
///
/// Directive detection and the length check are independent passes over
/// each line: a line may satisfy the bug-reference rule and still fail the
/// length limit. Sign-off lines are exempt from the limit (addresses can be
/// arbitrarily long), and revert commits skip the length check for the
/// whole body since they reproduce another commit's text.
pub fn check_body(
    config: &CheckConfig,
    commit: &Commit,
    subject_found_fixes: bool,
) -> Result<BodyReport, ValidationError> {
    if commit.body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }

    let mut found_fixes = subject_found_fixes;
    let mut found_sign_off = false;
    let mut found_text = false;
    let mut found_description = false;

    for (index, line) in commit.body.iter().enumerate() {
        let is_sign_off = config.sign_off.matches(line);
        found_sign_off |= is_sign_off;

        if config.fixes.matches(line) {
            found_fixes = true;
        }

        if !line.trim().is_empty() {
            found_text = true;
            if !is_sign_off {
                found_description = true;
            }
        }

        if !commit.revert_commit
            && !is_sign_off
            && length::exceeds_limit(line, config.max_body_line_length)
        {
            return Err(ValidationError::BodyLineTooLong {
                line: index + 1,
                length: line.chars().count(),
                max: config.max_body_line_length,
            });
        }
    }

    if !found_text {
        return Err(ValidationError::WhitespaceBody);
    }
    if !found_description {
        return Err(ValidationError::MissingDescription);
    }

    if config.need_sobs && !found_sign_off {
        return Err(ValidationError::MissingSignOff {
            keyword: config.sob_string.clone(),
        });
    }

    if config.need_fixes && !found_fixes && commit.subsystem != config.ignore_fixes_subsystem {
        return Err(ValidationError::MissingFixes {
            keyword: config.fixes_string.clone(),
        });
    }

    Ok(BodyReport { found_fixes })
}
