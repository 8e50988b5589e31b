//! # Runner Invocation Unit Tests / 运行器调用单元测试
//!
//! Exercises `RunnerInvoker::execute` against real child processes:
//! spawn failures, separated stream capture, and argument ordering.
//!
//! 使用真实子进程测试 `RunnerInvoker::execute`：启动失败、分离的输出捕获以及参数顺序。

mod common;

use cybertest::core::execution::RunnerInvoker;
use cybertest::core::models::{RunResult, RunnerFlag};
use std::path::Path;

#[cfg(test)]
mod spawn_failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_runner_binary_yields_synthetic_result() {
        let invoker = RunnerInvoker::new(["this_runner_definitely_does_not_exist_12345", "-m", "pytest"]);
        let result = invoker.execute(Path::new("tests"), &RunnerFlag::Normal).await;

        assert_eq!(result.exit_code, 1);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.contains("this_runner_definitely_does_not_exist_12345"));
    }

    #[tokio::test]
    async fn test_empty_entrypoint_yields_synthetic_result() {
        let invoker = RunnerInvoker::new(Vec::<String>::new());
        let result = invoker.execute(Path::new("tests"), &RunnerFlag::Quiet).await;

        assert_eq!(result.exit_code, RunResult::SPAWN_FAILURE_CODE);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.contains("no runner command configured"));
    }
}

#[cfg(all(test, unix))]
mod capture_tests {
    use super::*;
    use crate::common::scripted_invoker;

    #[tokio::test]
    async fn test_nonexistent_target_reports_through_runner() {
        let invoker = RunnerInvoker::new(["ls"]);
        let result = invoker
            .execute(Path::new("/definitely/missing/target_dir"), &RunnerFlag::Normal)
            .await;

        assert_ne!(result.exit_code, 0);
        assert!(!result.stderr.is_empty());
    }

    #[tokio::test]
    async fn test_stdout_and_stderr_are_captured_separately() {
        let invoker = scripted_invoker("echo out-line; echo err-line >&2; exit 3");
        let result = invoker.execute(Path::new("t.py"), &RunnerFlag::Normal).await;

        assert_eq!(result.stdout, "out-line\n");
        assert_eq!(result.stderr, "err-line\n");
        assert_eq!(result.exit_code, 3);
    }

    #[tokio::test]
    async fn test_flag_precedes_target() {
        let invoker = scripted_invoker("printf '%s|' \"$@\"");
        let result = invoker.execute(Path::new("dir with space"), &RunnerFlag::FailFast).await;

        assert_eq!(result.stdout, "-x|dir with space|");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_sentinel_flag_is_not_passed() {
        let invoker = scripted_invoker("printf '%s|' \"$@\"");
        let result = invoker.execute(Path::new("t.py"), &RunnerFlag::Normal).await;

        assert_eq!(result.stdout, "t.py|");
    }

    #[tokio::test]
    async fn test_shell_metacharacters_are_not_interpreted() {
        let invoker = scripted_invoker("printf '%s' \"$1\"");
        let result = invoker
            .execute(Path::new("$(echo injected); touch /tmp/nope"), &RunnerFlag::Normal)
            .await;

        assert_eq!(result.stdout, "$(echo injected); touch /tmp/nope");
    }

    #[tokio::test]
    async fn test_large_stderr_does_not_block_stdout() {
        let invoker = scripted_invoker(
            "i=0; while [ $i -lt 5000 ]; do echo \"noise $i\" >&2; echo \"line $i\"; i=$((i+1)); done",
        );
        let result = invoker.execute(Path::new("t.py"), &RunnerFlag::Normal).await;

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout.lines().count(), 5000);
        assert_eq!(result.stderr.lines().count(), 5000);
    }

    #[tokio::test]
    async fn test_signal_exit_is_negative() {
        let invoker = scripted_invoker("kill -9 $$");
        let result = invoker.execute(Path::new("t.py"), &RunnerFlag::Normal).await;

        assert_eq!(result.exit_code, -9);
    }
}
