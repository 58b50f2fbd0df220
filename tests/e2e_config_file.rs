/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Create a directory holding a copy of the fixture report and snapshot.
fn create_test_analysis() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["report.json", "snapshot.json"] {
        fs::copy(fixtures_path().join(name), dir.path().join(name)).unwrap();
    }
    dir
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn report(dir: &TempDir) -> PathBuf {
    dir.path().join("report.json")
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_config_next_to_report_is_used() {
        let dir = create_test_analysis();
        write_config(
            &dir.path().join("component-tree.config.yml"),
            "format: json\nmax_depth: DIRECTORY\n",
        );

        let output = cargo_bin_cmd!("component-tree")
            .arg("-r")
            .arg(report(&dir))
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["key"], "my-app");
        assert!(json["children"][0].get("children").is_none());
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = create_test_analysis();

        cargo_bin_cmd!("component-tree")
            .arg("-r")
            .arg(report(&dir))
            .assert()
            .success()
            .stdout(predicate::str::starts_with("My App (my-app)\n"));
    }

    #[test]
    fn test_invalid_discovered_config_fails() {
        let dir = create_test_analysis();
        write_config(
            &dir.path().join("component-tree.config.yml"),
            "branch: [unclosed\n",
        );

        cargo_bin_cmd!("component-tree")
            .arg("-r")
            .arg(report(&dir))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }
}

// ============================================================================
// Explicit Config Path Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = create_test_analysis();

        cargo_bin_cmd!("component-tree")
            .arg("-r")
            .arg(report(&dir))
            .arg("-c")
            .arg(dir.path().join("missing.yml"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_max_depth_in_config_fails() {
        let dir = create_test_analysis();
        let config = dir.path().join("custom.yml");
        write_config(&config, "max_depth: MODULE\n");

        cargo_bin_cmd!("component-tree")
            .arg("-r")
            .arg(report(&dir))
            .arg("-c")
            .arg(&config)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid max depth: MODULE"));
    }

    #[test]
    fn test_unknown_fields_are_warned_about() {
        let dir = create_test_analysis();
        let config = dir.path().join("custom.yml");
        write_config(&config, "format: tree\ncolour: always\n");

        cargo_bin_cmd!("component-tree")
            .arg("-r")
            .arg(report(&dir))
            .arg("-c")
            .arg(&config)
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(predicate::str::contains("unknown config field will be ignored"))
            .stderr(predicate::str::contains("colour"));
    }

    #[test]
    fn test_branch_and_snapshot_from_config() {
        let dir = create_test_analysis();
        let config = dir.path().join("custom.yml");
        write_config(
            &config,
            "format: json\nsnapshot: snapshot.json\nbranch:\n  name: feature\n  type: branch\n",
        );

        // run from elsewhere: the snapshot path is relative to the config file
        let output = cargo_bin_cmd!("component-tree")
            .current_dir(std::env::temp_dir())
            .arg("-r")
            .arg(report(&dir))
            .arg("-c")
            .arg(&config)
            .output()
            .unwrap();

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["db_key"], "my-app:BRANCH:feature");
        assert_eq!(
            json["children"][0]["children"][0]["uuid"],
            "44444444-4444-4444-8444-444444444444"
        );
    }
}

// ============================================================================
// CLI / Config Merging Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = create_test_analysis();
        write_config(&dir.path().join("component-tree.config.yml"), "format: json\n");

        cargo_bin_cmd!("component-tree")
            .arg("-r")
            .arg(report(&dir))
            .args(["-f", "tree"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("My App (my-app)\n"));
    }

    #[test]
    fn test_cli_branch_overrides_config() {
        let dir = create_test_analysis();
        write_config(
            &dir.path().join("component-tree.config.yml"),
            "format: json\nbranch:\n  name: feature\n  type: branch\n",
        );

        let output = cargo_bin_cmd!("component-tree")
            .arg("-r")
            .arg(report(&dir))
            .args(["-b", "main"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["db_key"], "my-app");
    }

    #[test]
    fn test_config_durations_are_logged() {
        let dir = create_test_analysis();
        write_config(
            &dir.path().join("component-tree.config.yml"),
            "compute_durations: true\n",
        );

        cargo_bin_cmd!("component-tree")
            .arg("-r")
            .arg(report(&dir))
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(predicate::str::contains("visitor duration"));
    }
}
