/// End-to-end tests for CSV configuration loading and validation.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to the reported error and exit code, using `assert_cmd` and `tempfile`.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write raw CSV content to `config.csv` inside `dir`.
fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.csv");
    fs::write(&path, content).unwrap();
    path
}

/// Create a repository directory with a minimal plain-text index.
fn write_repository(dir: &Path) -> PathBuf {
    fs::write(dir.join("APKINDEX"), "P:busybox\nD:musl\n\nP:musl\n").unwrap();
    dir.to_path_buf()
}

// ============================================================================
// Shape of the file
// ============================================================================

mod loading_tests {
    use super::*;

    #[test]
    fn test_empty_config_file() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "package_name,repo_url_or_path,repo_mode,ascii_tree,filter_substring\n",
        );

        cargo_bin_cmd!("apk-deps")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Configuration file is empty."));
    }

    #[test]
    fn test_two_rows_rejected() {
        let dir = TempDir::new().unwrap();
        let repo = write_repository(dir.path());
        let row = format!("busybox,{},local,off,\n", repo.display());
        let config = write_config(
            dir.path(),
            &format!(
                "package_name,repo_url_or_path,repo_mode,ascii_tree,filter_substring\n{}{}",
                row, row
            ),
        );

        cargo_bin_cmd!("apk-deps")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("exactly one row"));
    }

    #[test]
    fn test_missing_columns_listed() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path(), "package_name,repo_mode\nbusybox,remote\n");

        cargo_bin_cmd!("apk-deps")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "Missing required fields: ascii_tree, filter_substring, repo_url_or_path",
            ));
    }

    #[test]
    fn test_hint_is_shown() {
        let dir = TempDir::new().unwrap();
        let config = write_config(dir.path(), "");

        cargo_bin_cmd!("apk-deps")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("💡 Hint:"));
    }
}

// ============================================================================
// Values
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_all_problems_reported_together() {
        let dir = TempDir::new().unwrap();
        let config = write_config(
            dir.path(),
            "package_name,repo_url_or_path,repo_mode,ascii_tree,filter_substring\n\
             ,/nonexistent/mirror,ftp,maybe,\n",
        );

        cargo_bin_cmd!("apk-deps")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("package_name must not be empty."))
            .stderr(predicate::str::contains("repo_mode must be one of"))
            .stderr(predicate::str::contains("ascii_tree must be one of"));
    }

    #[test]
    fn test_remote_mode_with_path() {
        let dir = TempDir::new().unwrap();
        let repo = write_repository(dir.path());
        let config = write_config(
            dir.path(),
            &format!(
                "package_name,repo_url_or_path,repo_mode,ascii_tree,filter_substring\nbusybox,{},remote,off,\n",
                repo.display()
            ),
        );

        cargo_bin_cmd!("apk-deps")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("requires an http:// or https:// URL"));
    }

    #[test]
    fn test_valid_config_is_echoed_to_stderr() {
        let dir = TempDir::new().unwrap();
        let repo = write_repository(dir.path());
        let config = write_config(
            dir.path(),
            &format!(
                "package_name,repo_url_or_path,repo_mode,ascii_tree,filter_substring\nbusybox,{},local,on,zz\n",
                repo.display()
            ),
        );

        cargo_bin_cmd!("apk-deps")
            .arg(&config)
            .assert()
            .success()
            .stderr(predicate::str::contains("package_name: busybox"))
            .stderr(predicate::str::contains("filter_substring: zz"));
    }
}
