//! Configuration file support for apk-deps.
//!
//! The configuration is a CSV file with a header row and exactly one data
//! row. Loading checks the file's shape, validation checks the values and
//! turns them into an [`AppConfig`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dependency_resolution::domain::RepoSource;
use crate::shared::{ApkError, Result};

/// Columns every configuration file must have, in sorted order.
pub const REQUIRED_KEYS: [&str; 5] = [
    "ascii_tree",
    "filter_substring",
    "package_name",
    "repo_mode",
    "repo_url_or_path",
];

const VALID_REPO_MODES: [&str; 3] = ["local", "remote", "test"];
const VALID_ASCII_TREE_MODES: [&str; 2] = ["on", "off"];

/// The single data row, as written in the file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ConfigRow {
    pub package_name: String,
    pub repo_url_or_path: String,
    pub repo_mode: String,
    pub ascii_tree: String,
    pub filter_substring: String,
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub package_name: String,
    pub source: RepoSource,
    pub ascii_tree: bool,
    pub filter: String,
}

fn config_error(details: impl Into<String>) -> anyhow::Error {
    ApkError::ConfigError {
        details: details.into(),
    }
    .into()
}

/// Load the single configuration row from `path`.
///
/// Fields are trimmed. Columns beyond the required ones are ignored.
pub fn load_config(path: &Path) -> Result<ConfigRow> {
    if !path.exists() {
        return Err(config_error(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| config_error(format!("Failed to read configuration file: {}", e)))?;

    let headers = reader
        .headers()
        .map_err(|e| config_error(format!("Malformed CSV header: {}", e)))?
        .clone();

    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| config_error(format!("Malformed CSV: {}", e)))?;

    let row = match rows.as_slice() {
        [] => return Err(config_error("Configuration file is empty.")),
        [row] => row,
        _ => {
            return Err(config_error(format!(
                "Configuration file must contain exactly one row, found {}.",
                rows.len()
            )))
        }
    };

    let missing: Vec<&str> = REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| !headers.iter().any(|header| header == *key))
        .collect();
    if !missing.is_empty() {
        return Err(config_error(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    row.deserialize(Some(&headers))
        .map_err(|e| config_error(format!("Malformed CSV row: {}", e)))
}

/// Validate a loaded row. All problems are reported together, one per line.
pub fn validate_config(row: ConfigRow) -> Result<AppConfig> {
    let mut errors = Vec::new();

    if row.package_name.is_empty() {
        errors.push("package_name must not be empty.".to_string());
    }

    let repo = row.repo_url_or_path.as_str();
    let is_url = repo.starts_with("http://") || repo.starts_with("https://");
    if repo.is_empty() {
        errors.push("repo_url_or_path must be set.".to_string());
    } else if !is_url && !Path::new(repo).exists() {
        errors.push(format!(
            "repo_url_or_path must be an existing path or an http(s) URL (got '{}').",
            repo
        ));
    }

    let mode_valid = VALID_REPO_MODES.contains(&row.repo_mode.as_str());
    if !mode_valid {
        errors.push(format!(
            "repo_mode must be one of: {} (got '{}').",
            VALID_REPO_MODES.join(", "),
            row.repo_mode
        ));
    }

    if !VALID_ASCII_TREE_MODES.contains(&row.ascii_tree.as_str()) {
        errors.push(format!(
            "ascii_tree must be one of: {} (got '{}').",
            VALID_ASCII_TREE_MODES.join(", "),
            row.ascii_tree
        ));
    }

    if mode_valid && !repo.is_empty() {
        match (row.repo_mode.as_str(), is_url) {
            ("remote", false) => {
                errors.push("repo_mode 'remote' requires an http:// or https:// URL.".to_string())
            }
            ("local" | "test", true) => errors.push(format!(
                "repo_mode '{}' requires a filesystem path, not a URL.",
                row.repo_mode
            )),
            _ => {}
        }
    }

    if !errors.is_empty() {
        return Err(config_error(errors.join("\n")));
    }

    let source = match row.repo_mode.as_str() {
        "remote" => RepoSource::Remote(row.repo_url_or_path),
        "test" => RepoSource::GraphFile(PathBuf::from(row.repo_url_or_path)),
        _ => RepoSource::Local(PathBuf::from(row.repo_url_or_path)),
    };

    Ok(AppConfig {
        package_name: row.package_name,
        source,
        ascii_tree: row.ascii_tree == "on",
        filter: row.filter_substring,
    })
}

/// Load and validate in one step.
pub fn load_app_config(path: &Path) -> Result<AppConfig> {
    validate_config(load_config(path)?)
}
