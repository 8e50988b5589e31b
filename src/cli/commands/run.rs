//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command, which runs each target in
//! turn through a single session and reports the results.
//!
//! 此模块实现了 `run` 命令，它通过同一个会话依次运行每个目标并报告结果。

use anyhow::{Context, Result, bail};
use colored::*;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use crate::{
    core::{
        config::SessionConfig,
        models::{HistoryEntry, RunRequest, RunnerFlag},
        session::Session,
    },
    infra::{fs::detect_target_kind, t},
    reporting::{
        console::{print_history, print_run_summary, print_snapshot},
        export::export_entry,
    },
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `config` - Session settings (runner entrypoint, language)
/// * `targets` - Files or folders to run, in order
/// * `flag` - Runner flag applied to every target
/// * `export` - Optional path to save the last run's snapshot
/// * `json` - Print the history as JSON instead of panels
/// * `locale` - Locale for console messages
///
/// # Returns
/// `ExitCode::SUCCESS` if every run classified OK, otherwise exit code 1.
pub async fn execute(
    config: &SessionConfig,
    targets: Vec<PathBuf>,
    flag: RunnerFlag,
    export: Option<&Path>,
    json: bool,
    locale: &str,
) -> Result<ExitCode> {
    let requests = build_requests(targets, &flag, locale)?;
    let mut session = Session::from_config(config);
    let mut all_ok = true;

    for request in requests {
        if !json {
            println!(
                "{}",
                t!(
                    "run.running",
                    locale = locale,
                    kind = request.target_kind(),
                    path = request.target_path().display()
                )
                .blue()
            );
        }

        let entry = session.run(request).await;
        all_ok &= entry.status().is_ok();

        if !json {
            print_snapshot(&entry);
            print_run_summary(&entry, locale);
        }
    }

    if json {
        let entries: Vec<&HistoryEntry> = session.history().list().collect();
        let output = serde_json::to_string_pretty(&entries).context("Failed to serialize run history")?;
        println!("{}", output);
    } else {
        print_history(session.history(), locale);
    }

    if let (Some(path), Some(latest)) = (export, session.history().latest()) {
        export_entry(latest, path)?;
        if !json {
            println!(
                "\n{}",
                t!("run.exported", locale = locale, path = path.display()).green()
            );
        }
    }

    if !json {
        if all_ok {
            println!("\n{}", t!("run.all_ok", locale = locale).green().bold());
        } else {
            println!("\n{}", t!("run.some_issues", locale = locale).red().bold());
        }
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Checks that every target exists before anything runs.
fn build_requests(targets: Vec<PathBuf>, flag: &RunnerFlag, locale: &str) -> Result<Vec<RunRequest>> {
    targets
        .into_iter()
        .map(|target| {
            let Some(kind) = detect_target_kind(&target) else {
                bail!(t!("run.target_missing", locale = locale, path = target.display()).to_string());
            };
            Ok(RunRequest::new(target, kind, flag.clone())?)
        })
        .collect()
}
