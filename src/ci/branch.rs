// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Source-branch ignore matching.

use regex::Regex;

/// Test whether a source branch matches any ignore pattern.
///
/// Returns the first matching pattern, or an empty string when the branch
/// is empty, the list is empty, or nothing matches. Patterns must match
/// the whole branch name; empty patterns are inert, and patterns that fail
/// to compile are skipped with a warning.
///
/// The result is advisory: callers relax the directive requirements for a
/// matching branch, they do not skip the run.
pub fn ignore_source_branch(commit: &str, src_branch: &str, patterns: &[String]) -> String {
    if src_branch.is_empty() {
        return String::new();
    }

    for pattern in patterns {
        if pattern.is_empty() {
            continue;
        }

        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(re) => {
                if re.is_match(src_branch) {
                    tracing::debug!(
                        "Commit {}: source branch {:?} matches ignore pattern {:?}",
                        commit,
                        src_branch,
                        pattern
                    );
                    return pattern.clone();
                }
            }
            Err(e) => {
                tracing::warn!("Skipping unparseable branch pattern {:?}: {}", pattern, e);
            }
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_ignore_source_branch_table() {
        let cases: &[(&str, &str, &[&str], &str)] = &[
            ("", "", &[], ""),
            ("commit", "", &[], ""),
            ("commit", "", &[""], ""),
            ("commit", "", &["", ""], ""),
            ("commit", "branch", &[], ""),
            ("commit", "branch", &[""], ""),
            ("commit", "branch", &["branch"], "branch"),
            ("commit", "branch", &["b.*"], "b.*"),
            ("commit", "branch", &["^b.*h$"], "^b.*h$"),
        ];

        for (commit, src_branch, list, expected) in cases {
            let result = ignore_source_branch(commit, src_branch, &patterns(list));
            assert_eq!(&result, expected, "src {:?} patterns {:?}", src_branch, list);
        }
    }

    #[test]
    fn test_match_is_full_string_not_substring() {
        assert_eq!(
            ignore_source_branch("commit", "feature-branch", &patterns(&["branch"])),
            ""
        );
        assert_eq!(
            ignore_source_branch("commit", "branch-2", &patterns(&["branch"])),
            ""
        );
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        let list = patterns(&["nope", "b.*", "branch"]);
        assert_eq!(ignore_source_branch("commit", "branch", &list), "b.*");
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        let list = patterns(&["(", "branch"]);
        assert_eq!(ignore_source_branch("commit", "branch", &list), "branch");
    }
}
