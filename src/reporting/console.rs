//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the per-run summary panel and the run history list
//! to the terminal, with colour coding and internationalization support.
//!
//! 此模块在终端中打印每次运行的摘要面板和运行历史列表，支持彩色显示和国际化。

use colored::*;

use crate::core::history::HistoryStore;
use crate::core::models::{HistoryEntry, RunStatus};
use crate::infra::t;

/// Prints the summary panel for one completed run.
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   Target  : FILE:test_math.py
///   Flag    : -q
///   Total   : 6
///   Passed  : 3
///   Failed  : 1
///   Errors  : 0
///   Skipped : 2
///   Exit    : 1
///   > RUN COMPLETE (ISSUES)
/// ```
pub fn print_run_summary(entry: &HistoryEntry, locale: &str) {
    let counts = entry.counts();
    println!("\n{}", t!("summary.banner", locale = locale).bold());
    println!(
        "  {:<9}: {}:{}",
        t!("summary.target", locale = locale),
        entry.target_kind(),
        entry.target_name().cyan()
    );
    println!("  {:<9}: {}", t!("summary.flag", locale = locale), entry.flag_used());
    println!("  {:<9}: {}", t!("summary.total", locale = locale), counts.total);
    println!(
        "  {:<9}: {}",
        t!("summary.passed", locale = locale),
        counts.passed.to_string().green()
    );
    println!(
        "  {:<9}: {}",
        t!("summary.failed", locale = locale),
        colour_if_nonzero(counts.failed)
    );
    println!(
        "  {:<9}: {}",
        t!("summary.errors", locale = locale),
        colour_if_nonzero(counts.errors)
    );
    println!(
        "  {:<9}: {}",
        t!("summary.skipped", locale = locale),
        counts.skipped.to_string().yellow()
    );
    println!("  {:<9}: {}", t!("summary.exit_code", locale = locale), entry.exit_code());

    match entry.status() {
        RunStatus::Ok => println!("  {}", t!("summary.complete_ok", locale = locale).green().bold()),
        RunStatus::Issue => println!("  {}", t!("summary.complete_issues", locale = locale).red().bold()),
    }
}

fn colour_if_nonzero(n: u64) -> ColoredString {
    if n > 0 {
        n.to_string().red()
    } else {
        n.to_string().normal()
    }
}

/// Prints the retained runs, newest first, with their display index.
pub fn print_history(history: &HistoryStore, locale: &str) {
    println!(
        "\n{}",
        t!("history.banner", locale = locale, count = history.capacity()).bold()
    );
    if history.is_empty() {
        println!("  {}", t!("history.empty", locale = locale).dimmed());
        return;
    }
    for (i, entry) in history.list().rev().enumerate() {
        let line = entry.summary_line();
        let line = match entry.status() {
            RunStatus::Ok => line.green(),
            RunStatus::Issue => line.red(),
        };
        println!("  [{i}] {line}");
    }
}

/// Prints the full snapshot of an entry, as it was shown when the run finished.
pub fn print_snapshot(entry: &HistoryEntry) {
    print!("{}", entry.full_output());
}
