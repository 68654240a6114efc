use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tslint_runner() -> Command {
    Command::cargo_bin("tslint-runner").unwrap()
}

#[test]
fn test_command_prints_the_tslint_invocation() {
    let temp = TempDir::new().unwrap();
    tslint_runner()
        .current_dir(temp.path())
        .args([
            "command",
            "--no-options-file",
            "-c",
            "tslint.json",
            "--exclude",
            "vendor/**",
            "-f",
            "json",
            "src/a.ts",
        ])
        .assert()
        .success()
        .stdout(
            "node_modules/.bin/tslint --config 'tslint.json' --exclude 'vendor/**' \
             --format 'json' -- 'src/a.ts'\n",
        );
}

#[test]
fn test_command_with_reporter_defaults_to_json() {
    let temp = TempDir::new().unwrap();
    tslint_runner()
        .current_dir(temp.path())
        .args(["command", "--no-options-file", "-r", "verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format 'json'"));
}

#[test]
fn test_command_reads_the_options_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".tslint-runner.json"),
        r#"{"tslintExecutable": "bin/tslint", "force": true, "paths": {"a.ts": true, "b.ts": false}}"#,
    )
    .unwrap();

    tslint_runner()
        .current_dir(temp.path())
        .args(["command"])
        .assert()
        .success()
        .stdout("bin/tslint --force -- 'a.ts'\n");
}

#[test]
fn test_invalid_options_file_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".tslint-runner.json"), "{ nope").unwrap();

    tslint_runner()
        .current_dir(temp.path())
        .args(["command"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Failed to load the options file"));
}

#[test]
fn test_unknown_reporter_fails() {
    let temp = TempDir::new().unwrap();
    tslint_runner()
        .current_dir(temp.path())
        .args(["run", "--no-options-file", "-r", "junit"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Unknown reporter 'junit'"));
}

#[test]
fn test_invalid_fail_on_is_a_usage_error() {
    tslint_runner()
        .args(["run", "--fail-on", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid failOn value"));
}

#[test]
fn test_init_creates_options_file() {
    let temp = TempDir::new().unwrap();
    tslint_runner()
        .args(["init", "--cwd", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created options file"));

    let written = fs::read_to_string(temp.path().join(".tslint-runner.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["format"], "json");

    tslint_runner()
        .args(["init", "--cwd", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[cfg(unix)]
mod run {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Write an executable script that plays the linter
    fn fake_tslint(dir: &Path, stdout: &str, exit_code: i32) -> PathBuf {
        let path = dir.join("fake-tslint");
        let script = format!("#!/bin/sh\ncat <<'JSON'\n{stdout}\nJSON\nexit {exit_code}\n");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    const WARNING_ONLY: &str = r#"[{"name": "src/a.ts", "failure": "Missing semicolon", "ruleName": "semicolon", "ruleSeverity": "WARNING", "startPosition": {"line": 0, "character": 9}}]"#;

    #[test]
    fn test_run_exits_with_policy_code() {
        let temp = TempDir::new().unwrap();
        let tslint = fake_tslint(temp.path(), WARNING_ONLY, 0);

        tslint_runner()
            .current_dir(temp.path())
            .args(["run", "--no-options-file", "-f", "json", "--fail-on", "warning"])
            .arg("--tslint-executable")
            .arg(&tslint)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("Missing semicolon"));
    }

    #[test]
    fn test_run_with_fail_on_error_passes_warnings() {
        let temp = TempDir::new().unwrap();
        let tslint = fake_tslint(temp.path(), WARNING_ONLY, 0);

        tslint_runner()
            .current_dir(temp.path())
            .args(["run", "--no-options-file", "-f", "json"])
            .arg("--tslint-executable")
            .arg(&tslint)
            .assert()
            .code(0)
            .stderr(predicate::str::contains("No lints were found"));
    }

    #[test]
    fn test_run_with_verbose_reporter() {
        let temp = TempDir::new().unwrap();
        let tslint = fake_tslint(temp.path(), WARNING_ONLY, 0);

        tslint_runner()
            .current_dir(temp.path())
            .args(["run", "--no-options-file", "-r", "verbose"])
            .arg("--tslint-executable")
            .arg(&tslint)
            .assert()
            .code(0)
            .stdout(predicate::str::contains("WARNING: (semicolon) src/a.ts[1, 10]: Missing semicolon"));
    }

    #[test]
    fn test_run_prints_report() {
        let temp = TempDir::new().unwrap();
        let tslint = fake_tslint(temp.path(), WARNING_ONLY, 0);

        tslint_runner()
            .current_dir(temp.path())
            .args(["run", "--no-options-file", "-f", "json", "--print-report"])
            .arg("--tslint-executable")
            .arg(&tslint)
            .assert()
            .code(0)
            .stdout(predicate::str::contains("\"src/a.ts\""));
    }

    #[test]
    fn test_run_with_malformed_report() {
        let temp = TempDir::new().unwrap();
        let tslint = fake_tslint(temp.path(), "[{ broken", 0);

        tslint_runner()
            .current_dir(temp.path())
            .args(["run", "--no-options-file", "-f", "json"])
            .arg("--tslint-executable")
            .arg(&tslint)
            .assert()
            .code(5)
            .stderr(predicate::str::contains("Failed to decode the lint report"));
    }

    #[test]
    fn test_run_passes_unknown_exit_codes_through() {
        let temp = TempDir::new().unwrap();
        let tslint = fake_tslint(temp.path(), "", 9);

        tslint_runner()
            .current_dir(temp.path())
            .args(["run", "--no-options-file", "-f", "json"])
            .arg("--tslint-executable")
            .arg(&tslint)
            .assert()
            .code(9);
    }

    #[test]
    fn test_run_reporter_with_prose_format_is_invalid() {
        let temp = TempDir::new().unwrap();
        let tslint = fake_tslint(temp.path(), "", 0);

        tslint_runner()
            .current_dir(temp.path())
            .args(["run", "--no-options-file", "-f", "prose", "-r", "summary"])
            .arg("--tslint-executable")
            .arg(&tslint)
            .assert()
            .code(4);
    }
}
