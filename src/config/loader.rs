// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, CvetError, Result};
use std::path::{Path, PathBuf};

use super::schema::PolicyConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["cvet.toml", ".cvet.toml", ".config/cvet.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let cvet_config = config_dir.join("cvet").join("config.toml");
        if cvet_config.exists() {
            return Some(cvet_config);
        }
    }

    None
}

/// Load the policy from the default locations.
pub fn load_config() -> Result<PolicyConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(PolicyConfig::default())
        }
    }
}

/// Load the policy from a specific path.
pub fn load_config_from(path: &Path) -> Result<PolicyConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CvetError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CvetError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse a policy from a TOML string.
pub fn parse_config(content: &str) -> Result<PolicyConfig> {
    toml::from_str(content).map_err(|e| {
        CvetError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_gives_defaults() {
        let policy = parse_config("").unwrap();
        assert_eq!(policy.max_subject_line_length, 75);
        assert_eq!(policy.max_body_line_length, 72);
        assert!(policy.need_fixes);
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
need_fixes = false
fixes_string = "Closes"
ignore_fixes_subsystem = "release"
max_body_line_length = 80
ignore_branches = ["^release-.*$", "staging"]
"#;
        let policy = parse_config(toml).unwrap();
        assert!(!policy.need_fixes);
        assert!(policy.need_sobs);
        assert_eq!(policy.fixes_string, "Closes");
        assert_eq!(policy.ignore_fixes_subsystem, "release");
        assert_eq!(policy.max_body_line_length, 80);
        assert_eq!(policy.ignore_branches, vec!["^release-.*$", "staging"]);
    }

    #[test]
    fn test_parse_bad_toml_fails() {
        assert!(parse_config("need_fixes = ").is_err());
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = load_config_from(Path::new("/no/such/cvet.toml"));
        assert!(matches!(
            result,
            Err(CvetError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_find_config_file_from() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("cvet.toml"), "need_fixes = true\n").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert!(found.ends_with("cvet.toml"));
    }
}
