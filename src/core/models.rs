//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures that flow through a run:
//! the request handed to the runner, the raw captured result, the parsed
//! counters and the immutable history entry.
//!
//! 此模块定义了一次运行中流转的核心数据结构：
//! 交给运行器的请求、原始捕获结果、解析出的计数以及不可变的历史条目。

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::error::SessionError;

/// Whether the run targets a single file or a whole folder.
/// 运行目标是单个文件还是整个文件夹。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    File,
    Directory,
}

impl TargetKind {
    /// Label used in banners and history lines.
    pub fn label(&self) -> &'static str {
        match self {
            TargetKind::File => "FILE",
            TargetKind::Directory => "FOLDER",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A runner switch chosen from the fixed set, or passed through verbatim.
///
/// `Normal` is the sentinel meaning "no extra switch". Values outside the
/// known set are kept as `Other` and handed to the runner unchanged.
///
/// 从固定集合中选择的运行器开关，或原样透传。
/// `Normal` 是表示"不添加额外开关"的哨兵值。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunnerFlag {
    #[default]
    Normal,
    /// `-q`
    Quiet,
    /// `-vv`
    ExtraVerbose,
    /// `-x`
    FailFast,
    Other(String),
}

impl RunnerFlag {
    /// The flags offered to users, sentinel first.
    pub const CHOICES: [RunnerFlag; 4] = [
        RunnerFlag::Normal,
        RunnerFlag::Quiet,
        RunnerFlag::ExtraVerbose,
        RunnerFlag::FailFast,
    ];

    /// Interprets an optional raw flag. Absent, empty and any casing of
    /// "normal" all map to the sentinel.
    pub fn from_option(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => RunnerFlag::Normal,
            Some(s) if s.eq_ignore_ascii_case("normal") => RunnerFlag::Normal,
            Some("-q") => RunnerFlag::Quiet,
            Some("-vv") => RunnerFlag::ExtraVerbose,
            Some("-x") => RunnerFlag::FailFast,
            Some(other) => RunnerFlag::Other(other.to_string()),
        }
    }

    /// The argument to append to the runner command line, if any.
    pub fn as_arg(&self) -> Option<&str> {
        match self {
            RunnerFlag::Normal => None,
            RunnerFlag::Quiet => Some("-q"),
            RunnerFlag::ExtraVerbose => Some("-vv"),
            RunnerFlag::FailFast => Some("-x"),
            RunnerFlag::Other(s) => Some(s.as_str()),
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, RunnerFlag::Normal)
    }
}

impl fmt::Display for RunnerFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg().unwrap_or("Normal"))
    }
}

impl From<&str> for RunnerFlag {
    fn from(raw: &str) -> Self {
        RunnerFlag::from_option(Some(raw))
    }
}

/// One user-triggered run. Consumed by `Session::run`.
/// 一次由用户触发的运行。由 `Session::run` 消费。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    target_path: PathBuf,
    target_kind: TargetKind,
    flag: RunnerFlag,
}

impl RunRequest {
    /// Builds a request, rejecting an empty target path.
    pub fn new(
        target_path: impl Into<PathBuf>,
        target_kind: TargetKind,
        flag: RunnerFlag,
    ) -> Result<Self, SessionError> {
        let target_path = target_path.into();
        if target_path.as_os_str().is_empty() {
            return Err(SessionError::EmptyTarget);
        }
        Ok(Self {
            target_path,
            target_kind,
            flag,
        })
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn target_kind(&self) -> TargetKind {
        self.target_kind
    }

    pub fn flag(&self) -> &RunnerFlag {
        &self.flag
    }
}

/// Raw outcome of one runner invocation, exit code reported verbatim.
/// 一次运行器调用的原始结果，退出码原样报告。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl RunResult {
    /// Exit code used when the runner could not be started at all.
    pub const SPAWN_FAILURE_CODE: i32 = 1;

    /// The synthetic result returned when the runner could not be spawned.
    pub fn spawn_failure(message: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: message.into(),
            exit_code: Self::SPAWN_FAILURE_CODE,
        }
    }

    /// The text handed to the summary parser: stdout, a newline, then stderr.
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Per-category counters derived from runner output.
///
/// `total` is always the sum of the four categories; it is never read
/// from the runner's own text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCounts {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub errors: u64,
    pub skipped: u64,
}

impl TestCounts {
    /// The total saturates at `u64::MAX`; the summary parser never hands in
    /// counters whose sum exceeds it.
    pub fn new(passed: u64, failed: u64, errors: u64, skipped: u64) -> Self {
        Self {
            total: passed
                .saturating_add(failed)
                .saturating_add(errors)
                .saturating_add(skipped),
            passed,
            failed,
            errors,
            skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Classification of a completed run for display.
/// 已完成运行的展示分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Ok,
    Issue,
}

impl RunStatus {
    /// `Ok` iff the runner exited 0 and reported no failures or errors.
    pub fn classify(exit_code: i32, counts: &TestCounts) -> Self {
        if exit_code == 0 && counts.failed == 0 && counts.errors == 0 {
            RunStatus::Ok
        } else {
            RunStatus::Issue
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, RunStatus::Ok)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Ok => f.write_str("OK"),
            RunStatus::Issue => f.write_str("ISSUE"),
        }
    }
}

/// An immutable record of one completed run, including everything that was
/// shown to the user for it.
///
/// 一次已完成运行的不可变记录，包括当时展示给用户的全部内容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    timestamp: DateTime<Local>,
    target_kind: TargetKind,
    target_name: String,
    flag_used: RunnerFlag,
    exit_code: i32,
    counts: TestCounts,
    full_output: String,
}

impl HistoryEntry {
    pub fn new(
        timestamp: DateTime<Local>,
        target_kind: TargetKind,
        target_name: impl Into<String>,
        flag_used: RunnerFlag,
        exit_code: i32,
        counts: TestCounts,
        full_output: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            target_kind,
            target_name: target_name.into(),
            flag_used,
            exit_code,
            counts,
            full_output: full_output.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn target_kind(&self) -> TargetKind {
        self.target_kind
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn flag_used(&self) -> &RunnerFlag {
        &self.flag_used
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn counts(&self) -> &TestCounts {
        &self.counts
    }

    /// The snapshot text, suitable for re-display or export.
    pub fn full_output(&self) -> &str {
        &self.full_output
    }

    pub fn status(&self) -> RunStatus {
        RunStatus::classify(self.exit_code, &self.counts)
    }

    /// One-line summary used by history lists.
    ///
    /// `HH:MM:SS | OK | code=0 | T:6 P:3 F:1 E:0 S:2 | FILE:test_x.py`
    pub fn summary_line(&self) -> String {
        let c = &self.counts;
        format!(
            "{} | {} | code={} | T:{} P:{} F:{} E:{} S:{} | {}:{}",
            self.timestamp.format("%H:%M:%S"),
            self.status(),
            self.exit_code,
            c.total,
            c.passed,
            c.failed,
            c.errors,
            c.skipped,
            self.target_kind.label(),
            self.target_name,
        )
    }
}
