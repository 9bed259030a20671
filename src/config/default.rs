// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::PolicyConfig;

/// Get the default policy.
pub fn default_config() -> PolicyConfig {
    PolicyConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cvet configuration file
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Require a bug reference ("Fixes: #123") in each commit
need_fixes = true

# Require a sign-off line in each commit body
need_sobs = true

# Directive keywords
fixes_string = "Fixes"
sob_string = "Signed-off-by"

# Commits under this subsystem never need a bug reference
ignore_fixes_subsystem = "release"

# Line length limits in characters (0 disables)
max_subject_line_length = 75
max_body_line_length = 72

# Source branches whose commits skip the directive requirements.
# Each pattern must match the whole branch name.
ignore_branches = ["^release-.*$", "^merge/.*$"]
"#
}
