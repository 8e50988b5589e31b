//! # Session Controller Module / 会话控制模块
//!
//! A `Session` owns the runner invoker, the summary parser and the run
//! history. Each call to [`Session::run`] drives one run end to end and
//! commits exactly one history entry.
//!
//! `Session` 拥有运行器调用器、摘要解析器和运行历史。
//! 每次调用 [`Session::run`] 都会完整驱动一次运行并提交恰好一条历史记录。
//!
//! ## Usage contract / 使用约定
//!
//! A session serves one caller at a time. `run` takes `&mut self`, so the
//! borrow checker rules out overlapping runs on the same session; callers that
//! share a session across tasks must serialize access themselves and keep
//! their trigger disabled while a run is in flight.
//!
//! 会话同一时间只服务一个调用者。

use chrono::Local;

use crate::{
    core::{
        config::SessionConfig,
        execution::RunnerInvoker,
        history::HistoryStore,
        models::{HistoryEntry, RunRequest, RunResult, RunnerFlag, TargetKind},
        parser::{PytestSummaryParser, SummaryParser},
    },
    infra::fs::target_name,
};

pub const OUTPUT_HEADER: &str = "=== OUTPUT ===";
pub const ERRORS_HEADER: &str = "=== ERRORS ===";

pub struct Session<P: SummaryParser = PytestSummaryParser> {
    invoker: RunnerInvoker,
    parser: P,
    history: HistoryStore,
}

impl Session<PytestSummaryParser> {
    /// A session that runs pytest through `invoker`.
    pub fn new(invoker: RunnerInvoker) -> Self {
        Self::with_parser(invoker, PytestSummaryParser::new())
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(RunnerInvoker::new(config.runner.iter().cloned()))
    }
}

impl<P: SummaryParser> Session<P> {
    /// A session that understands a different output format.
    pub fn with_parser(invoker: RunnerInvoker, parser: P) -> Self {
        Self {
            invoker,
            parser,
            history: HistoryStore::new(),
        }
    }

    /// Runs the request, records the outcome and returns the new entry.
    pub async fn run(&mut self, request: RunRequest) -> HistoryEntry {
        let result = self
            .invoker
            .execute(request.target_path(), request.flag())
            .await;
        let counts = self.parser.parse(&result.combined_output());
        let snapshot = render_snapshot(&request, &result);

        let entry = HistoryEntry::new(
            Local::now(),
            request.target_kind(),
            target_name(request.target_path()),
            request.flag().clone(),
            result.exit_code,
            counts,
            snapshot,
        );

        tracing::info!(
            name = entry.target_name(),
            exit_code = entry.exit_code(),
            status = %entry.status(),
            total = counts.total,
            "run recorded"
        );

        self.history.record(entry.clone());
        entry
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }
}

/// The banner printed before the runner starts.
pub fn render_banner(target_path: &std::path::Path, kind: TargetKind, flag: &RunnerFlag) -> String {
    let mut banner = format!(
        "[BOOT] pytest engaged on {}:\n{}\n",
        kind.label(),
        target_path.display()
    );
    if !flag.is_normal() {
        banner.push_str(&format!("[FLAG] {flag}\n"));
    }
    banner.push('\n');
    banner
}

/// Everything shown to the user for one run, in display order:
/// banner, output block, error block, exit code line.
pub fn render_snapshot(request: &RunRequest, result: &RunResult) -> String {
    let mut snapshot = render_banner(request.target_path(), request.target_kind(), request.flag());
    if !result.stdout.is_empty() {
        snapshot.push_str(OUTPUT_HEADER);
        snapshot.push('\n');
        snapshot.push_str(&result.stdout);
        snapshot.push('\n');
    }
    if !result.stderr.is_empty() {
        snapshot.push_str(ERRORS_HEADER);
        snapshot.push('\n');
        snapshot.push_str(&result.stderr);
        snapshot.push('\n');
    }
    snapshot.push_str(&format!("\n[EXIT CODE] {}\n", result.exit_code));
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(flag: RunnerFlag) -> RunRequest {
        RunRequest::new("tests/test_math.py", TargetKind::File, flag).unwrap()
    }

    #[test]
    fn snapshot_with_all_sections() {
        let result = RunResult {
            stdout: "1 passed in 0.01s".to_string(),
            stderr: "warning".to_string(),
            exit_code: 0,
        };
        let snapshot = render_snapshot(&request(RunnerFlag::Quiet), &result);
        assert_eq!(
            snapshot,
            "[BOOT] pytest engaged on FILE:\ntests/test_math.py\n[FLAG] -q\n\n\
             === OUTPUT ===\n1 passed in 0.01s\n\
             === ERRORS ===\nwarning\n\
             \n[EXIT CODE] 0\n"
        );
    }

    #[test]
    fn snapshot_omits_empty_sections() {
        let result = RunResult::spawn_failure("boom");
        let snapshot = render_snapshot(&request(RunnerFlag::Normal), &result);
        assert!(!snapshot.contains("[FLAG]"));
        assert!(!snapshot.contains(OUTPUT_HEADER));
        assert!(snapshot.contains("=== ERRORS ===\nboom\n"));
        assert!(snapshot.ends_with("\n[EXIT CODE] 1\n"));
    }

    #[test]
    fn snapshot_is_deterministic() {
        let result = RunResult {
            stdout: "3 passed".into(),
            stderr: String::new(),
            exit_code: 0,
        };
        let req = request(RunnerFlag::FailFast);
        assert_eq!(render_snapshot(&req, &result), render_snapshot(&req, &result));
    }
}
