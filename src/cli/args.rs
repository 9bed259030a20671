// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// cvet - commit message conformance checker
///
/// Verifies that each commit in a range follows the project's commit
/// message policy. Run without arguments inside a supported CI system to
/// check the commits of the current build.
#[derive(Parser, Debug)]
#[command(name = "cvet")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message conformance checker", long_about = None)]
pub struct Cli {
    /// Commit or range to check, optionally followed by the destination
    /// branch: [<commit-or-range>] [<branch>]. Omit both to auto-detect
    /// from the CI environment.
    #[arg(value_name = "TARGET")]
    pub target: Vec<String>,

    /// Do not require a bug-reference directive
    #[arg(long)]
    pub no_fixes: bool,

    /// Do not require a sign-off line
    #[arg(long)]
    pub no_sign_off: bool,

    /// Keyword introducing a bug reference (default: "Fixes")
    #[arg(long, value_name = "KEYWORD")]
    pub fixes_string: Option<String>,

    /// Keyword introducing a sign-off line (default: "Signed-off-by")
    #[arg(long, value_name = "KEYWORD")]
    pub sob_string: Option<String>,

    /// Subsystem exempt from the bug-reference requirement
    #[arg(long, value_name = "SUBSYSTEM")]
    pub ignore_fixes_for: Option<String>,

    /// Maximum subject line length in characters (0 disables)
    #[arg(long, value_name = "COUNT")]
    pub max_subject_length: Option<usize>,

    /// Maximum body line length in characters (0 disables)
    #[arg(long, value_name = "COUNT")]
    pub max_body_length: Option<usize>,

    /// Source branch pattern exempt from the directive requirements
    /// (repeatable; full-match regex)
    #[arg(long, value_name = "REGEX")]
    pub ignore_branch: Vec<String>,

    /// Write an example cvet.toml to the current directory and exit
    #[arg(long)]
    pub init_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::parse_from(["cvet"]);
        assert!(cli.target.is_empty());
        assert!(!cli.no_fixes);
        assert!(!cli.no_sign_off);
    }

    #[test]
    fn test_parse_target() {
        let cli = Cli::parse_from(["cvet", "HEAD~5..HEAD", "main"]);
        assert_eq!(cli.target, vec!["HEAD~5..HEAD", "main"]);
    }

    #[test]
    fn test_parse_policy_flags() {
        let cli = Cli::parse_from([
            "cvet",
            "--no-fixes",
            "--sob-string",
            "Acked-by",
            "--max-body-length",
            "100",
            "HEAD",
        ]);
        assert!(cli.no_fixes);
        assert_eq!(cli.sob_string.as_deref(), Some("Acked-by"));
        assert_eq!(cli.max_body_length, Some(100));
        assert_eq!(cli.target, vec!["HEAD"]);
    }

    #[test]
    fn test_parse_repeatable_ignore_branch() {
        let cli = Cli::parse_from([
            "cvet",
            "--ignore-branch",
            "^release-.*$",
            "--ignore-branch",
            "staging",
        ]);
        assert_eq!(cli.ignore_branch, vec!["^release-.*$", "staging"]);
    }

    #[test]
    fn test_parse_init_config() {
        let cli = Cli::parse_from(["cvet", "--init-config"]);
        assert!(cli.init_config);
        assert!(cli.target.is_empty());
    }

    #[test]
    fn test_parse_format() {
        let cli = Cli::parse_from(["cvet", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
