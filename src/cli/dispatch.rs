// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;

use crate::ci::resolve_target;
use crate::config::{CheckConfig, PolicyConfig};
use crate::error::{CvetError, Result, ResultExt, ValidationError};
use crate::git::Repository;
use crate::rules::CheckEngine;

use super::args::{Cli, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    if cli.init_config {
        return run_init_config();
    }

    let mut policy = if let Some(config_path) = &cli.config {
        PolicyConfig::load_from(config_path)?
    } else {
        PolicyConfig::load()?
    };
    apply_overrides(&cli, &mut policy);

    let target = resolve_target(&cli.target, &policy.ignore_branches)?;
    if let Some(pattern) = &target.ignored_branch {
        tracing::info!(
            "Source branch matches ignore pattern {:?}: not requiring directives",
            pattern
        );
        policy.need_fixes = false;
        policy.need_sobs = false;
    }

    let config = CheckConfig::from_policy(&policy)?;

    let repo = Repository::open_current()?;
    let mut commits = repo.commits_to_check(&target.commit, &target.branch)?;
    tracing::debug!(
        "Checking {} commit(s) from {:?} against branch {:?}",
        commits.len(),
        target.commit,
        target.branch
    );

    let engine = CheckEngine::new(config);
    let results = engine.check_commits(&mut commits);

    let failed = results.iter().filter(|r| !r.is_valid()).count();
    for result in &results {
        result.print(cli.format);
    }

    if failed > 0 {
        return Err(CvetError::Validation(ValidationError::CommitsFailed {
            count: failed,
        }));
    }

    if cli.format != Some(OutputFormat::Json) {
        if results.is_empty() {
            println!("{} no commits to check", style("✓").green().bold());
        } else {
            println!(
                "{} {} commit(s) checked",
                style("✓").green().bold(),
                results.len()
            );
        }
    }

    Ok(())
}

/// Write an example configuration file to the current directory.
fn run_init_config() -> Result<()> {
    use crate::config::default::example_config;

    let config_path = std::path::Path::new("cvet.toml");
    if config_path.exists() {
        return Err(CvetError::WithContext {
            context: "init-config".to_string(),
            message: "cvet.toml already exists".to_string(),
        });
    }

    std::fs::write(config_path, example_config()).context("Failed to write cvet.toml")?;

    println!("{} created cvet.toml", style("✓").green().bold());
    Ok(())
}

/// Apply command-line overrides on top of the loaded policy.
fn apply_overrides(cli: &Cli, policy: &mut PolicyConfig) {
    if cli.no_fixes {
        policy.need_fixes = false;
    }
    if cli.no_sign_off {
        policy.need_sobs = false;
    }
    if let Some(ref fixes_string) = cli.fixes_string {
        policy.fixes_string = fixes_string.clone();
    }
    if let Some(ref sob_string) = cli.sob_string {
        policy.sob_string = sob_string.clone();
    }
    if let Some(ref subsystem) = cli.ignore_fixes_for {
        policy.ignore_fixes_subsystem = subsystem.clone();
    }
    if let Some(max) = cli.max_subject_length {
        policy.max_subject_line_length = max;
    }
    if let Some(max) = cli.max_body_length {
        policy.max_body_line_length = max;
    }
    policy
        .ignore_branches
        .extend(cli.ignore_branch.iter().cloned());
}
