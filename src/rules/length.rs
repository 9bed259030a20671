// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Line-length policy.

/// Check whether a line breaks the length limit.
///
/// Length is measured in Unicode codepoints, not bytes. A line longer than
/// `limit` is still acceptable when any of these hold:
///
/// - it is a single whitespace-delimited token (a long URL or hash),
/// - it starts with whitespace (quoted or preformatted content),
/// - its first character is not alphabetic (symbol/digit-led lines that
///   usually embed identifiers or markers).
///
/// A `limit` of 0 disables the check.
pub fn exceeds_limit(line: &str, limit: usize) -> bool {
    if limit == 0 {
        return false;
    }

    let length = line.chars().count();
    if length <= limit {
        return false;
    }

    if line.starts_with(char::is_whitespace) {
        return false;
    }

    let mut tokens = line.split_whitespace();
    tokens.next();
    if tokens.next().is_none() {
        // single word
        return false;
    }

    match line.chars().next() {
        Some(first) => first.is_alphabetic(),
        None => false,
    }
}
