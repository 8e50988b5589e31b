// Shared test helpers for integration tests
#![allow(dead_code)]

use cybertest::core::execution::RunnerInvoker;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// A stand-in runner: `sh -c <script> runner [flag] <target>`.
/// Inside the script the flag and target are `$1`/`$2` (or just `$1`).
pub fn scripted_runner(script: &str) -> Vec<String> {
    vec![
        "sh".to_string(),
        "-c".to_string(),
        script.to_string(),
        "runner".to_string(),
    ]
}

pub fn scripted_invoker(script: &str) -> RunnerInvoker {
    RunnerInvoker::new(scripted_runner(script))
}

/// A temp directory holding one test file and one test folder.
pub struct Workspace {
    pub dir: TempDir,
    pub file: PathBuf,
    pub folder: PathBuf,
}

pub fn setup_workspace() -> Workspace {
    let dir = tempdir().expect("Failed to create temporary directory");
    let folder = dir.path().join("tests");
    fs::create_dir_all(&folder).expect("Failed to create tests folder");
    let file = folder.join("test_math.py");
    fs::write(&file, "def test_add():\n    assert 1 + 1 == 2\n").expect("Failed to write test file");
    Workspace { dir, file, folder }
}
