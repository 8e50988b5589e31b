//! # Runner Invocation Module / 运行器调用模块
//!
//! This module launches the external test runner for one target and hands
//! back whatever it produced. The argument vector is
//! `[entrypoint..., flag?, target]` and is executed directly, never through
//! a shell, so paths and flags cannot inject commands.
//!
//! 此模块针对一个目标启动外部测试运行器并返回其产出。
//! 参数向量为 `[entrypoint..., flag?, target]`，直接执行而不经过 shell，
//! 因此路径和开关无法注入命令。
//!
//! `execute` waits for the child with no timeout and no cancellation: it
//! resolves only once the runner has exited or failed to start.

use std::ffi::OsString;
use std::path::Path;

use crate::{
    core::models::{RunResult, RunnerFlag},
    infra::command,
};

/// Launches the configured runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerInvoker {
    entrypoint: Vec<String>,
}

impl RunnerInvoker {
    /// Creates an invoker for the given program and leading arguments,
    /// e.g. `["python3", "-m", "pytest"]`.
    pub fn new<I, S>(entrypoint: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entrypoint: entrypoint.into_iter().map(Into::into).collect(),
        }
    }

    /// The full argument vector for one run, program first.
    pub fn build_args(&self, target_path: &Path, flag: &RunnerFlag) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.entrypoint.iter().map(OsString::from).collect();
        if let Some(flag) = flag.as_arg() {
            args.push(flag.into());
        }
        args.push(target_path.as_os_str().to_owned());
        args
    }

    /// Runs the runner once against `target_path`.
    ///
    /// Never fails: if the process cannot be started the result carries an
    /// empty stdout, a description in stderr and exit code 1.
    pub async fn execute(&self, target_path: &Path, flag: &RunnerFlag) -> RunResult {
        let Some((program, leading)) = self.entrypoint.split_first() else {
            tracing::warn!("runner entrypoint is empty");
            return RunResult::spawn_failure(
                "Unexpected error running tests: no runner command configured",
            );
        };

        tracing::debug!(args = ?self.build_args(target_path, flag), "launching runner");

        let mut cmd = tokio::process::Command::new(program);
        cmd.args(leading);
        if let Some(flag) = flag.as_arg() {
            cmd.arg(flag);
        }
        cmd.arg(target_path).kill_on_drop(true);

        match command::spawn_and_capture(cmd).await {
            Ok(captured) => RunResult {
                stdout: captured.stdout,
                stderr: captured.stderr,
                exit_code: command::exit_code_of(&captured.status),
            },
            Err(e) => {
                tracing::warn!(%program, error = %e, "failed to run runner");
                RunResult::spawn_failure(format!(
                    "Unexpected error running tests: failed to run '{}': {}",
                    program, e
                ))
            }
        }
    }
}

impl Default for RunnerInvoker {
    fn default() -> Self {
        Self::new(crate::core::config::default_runner())
    }
}
