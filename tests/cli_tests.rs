//! # CLI Tests / 命令行测试
//!
//! Runs the `cybertest` binary end to end. A small `sh` script stands in for
//! pytest so the tests do not depend on a Python installation.
//!
//! 端到端运行 `cybertest` 可执行文件。使用一个小的 `sh` 脚本代替 pytest，
//! 因此测试不依赖 Python 环境。

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn cybertest() -> Command {
    let mut cmd = Command::cargo_bin("cybertest").unwrap();
    cmd.env("NO_COLOR", "1").arg("--lang").arg("en");
    cmd
}

/// A missing target is rejected before anything runs.
#[test]
fn test_missing_target_is_rejected() {
    let workspace = common::setup_workspace();
    cybertest()
        .current_dir(workspace.dir.path())
        .arg("run")
        .arg("does_not_exist.py")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file or folder"));
}

/// An explicitly named config file must exist.
#[test]
fn test_missing_explicit_config_fails() {
    let workspace = common::setup_workspace();
    cybertest()
        .current_dir(workspace.dir.path())
        .arg("--config")
        .arg("missing.toml")
        .arg("run")
        .arg(&workspace.file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_init_writes_config_once() {
    let workspace = common::setup_workspace();
    cybertest()
        .current_dir(workspace.dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let written = fs::read_to_string(workspace.dir.path().join("cybertest.toml")).unwrap();
    assert!(written.contains("runner = [\"python3\", \"-m\", \"pytest\"]"));

    cybertest()
        .current_dir(workspace.dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[cfg(unix)]
mod scripted_runner_tests {
    use super::*;

    #[test]
    fn test_passing_run_succeeds() {
        let workspace = common::setup_workspace();
        cybertest()
            .current_dir(workspace.dir.path())
            .arg("--runner")
            .arg("sh -c 'echo 5 passed in 0.02s' runner")
            .arg("run")
            .arg(&workspace.file)
            .assert()
            .success()
            .stdout(predicate::str::contains("=== OUTPUT ==="))
            .stdout(predicate::str::contains("T:5 P:5 F:0 E:0 S:0 | FILE:test_math.py"))
            .stdout(predicate::str::contains("> RUN COMPLETE (OK)"));
    }

    #[test]
    fn test_failing_run_exits_nonzero() {
        let workspace = common::setup_workspace();
        cybertest()
            .current_dir(workspace.dir.path())
            .arg("--runner")
            .arg("sh -c 'echo 3 passed, 1 failed; exit 1' runner")
            .arg("run")
            .arg("--flag")
            .arg("-x")
            .arg(&workspace.folder)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("[FLAG] -x"))
            .stdout(predicate::str::contains("ISSUE | code=1 | T:4 P:3 F:1 E:0 S:0 | FOLDER:tests"));
    }

    #[test]
    fn test_config_file_supplies_runner() {
        let workspace = common::setup_workspace();
        fs::write(
            workspace.dir.path().join("cybertest.toml"),
            "runner = [\"sh\", \"-c\", \"echo 2 skipped\", \"runner\"]\n",
        )
        .unwrap();
        cybertest()
            .current_dir(workspace.dir.path())
            .arg("run")
            .arg(&workspace.file)
            .assert()
            .success()
            .stdout(predicate::str::contains("T:2 P:0 F:0 E:0 S:2"));
    }

    #[test]
    fn test_json_history_and_html_export() {
        let workspace = common::setup_workspace();
        let report = workspace.dir.path().join("out/report.html");
        let output = cybertest()
            .current_dir(workspace.dir.path())
            .arg("--runner")
            .arg("sh -c 'echo \"1 passed <ok>\"' runner")
            .arg("run")
            .arg("--json")
            .arg("--export")
            .arg(&report)
            .arg(&workspace.file)
            .arg(&workspace.folder)
            .output()
            .unwrap();

        assert!(output.status.success());
        let history: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let entries = history.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["target_name"], "test_math.py");
        assert_eq!(entries[1]["target_name"], "tests");
        assert_eq!(entries[1]["counts"]["passed"], 1);

        let html = fs::read_to_string(&report).unwrap();
        assert!(html.contains("<pre>"));
        assert!(html.contains("1 passed &lt;ok&gt;"));
        assert!(html.contains("FOLDER:"));
    }

    #[test]
    fn test_text_export_is_the_snapshot() {
        let workspace = common::setup_workspace();
        let report = workspace.dir.path().join("report.txt");
        cybertest()
            .current_dir(workspace.dir.path())
            .arg("--runner")
            .arg("sh -c 'echo oops >&2; exit 4' runner")
            .arg("run")
            .arg("--export")
            .arg(&report)
            .arg(&workspace.file)
            .assert()
            .code(1);

        let text = fs::read_to_string(&report).unwrap();
        assert!(text.starts_with("[BOOT] pytest engaged on FILE:\n"));
        assert!(text.contains("=== ERRORS ===\noops\n"));
        assert!(text.ends_with("\n[EXIT CODE] 4\n"));
    }
}
