//! # Session Command Module / 会话命令模块
//!
//! The interactive front-end: pick a file or folder, pick a flag, run it,
//! browse the last runs and save their output. Prompts are not shown while
//! a run is in flight, so the session only ever has one caller.
//!
//! 交互式前端：选择文件或文件夹及开关并运行，浏览最近的运行并保存其输出。
//! 运行进行中不会显示提示，因此会话始终只有一个调用者。

use anyhow::Result;
use colored::*;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::{process::ExitCode, time::Duration};

use crate::{
    core::{
        config::SessionConfig,
        history::HistoryStore,
        models::{RunRequest, RunnerFlag, TargetKind},
        session::Session,
    },
    infra::{fs::expand_user_path, t},
    reporting::{
        console::{print_history, print_run_summary, print_snapshot},
        export::export_entry,
    },
};

const BOOT_LINES: [&str; 9] = [
    "[CYBERTEST v1.0.0] initializing diagnostic core...",
    "[OK]   loading neon theme shaders",
    "[OK]   linking pytest runtime module",
    "[OK]   scanning local filesystem for test targets",
    "[OK]   entropy pool charged",
    "[SYS]  console interface online",
    "",
    "[HINT] select a file or folder to begin test run.",
    "",
];

const BOOT_LINE_DELAY: Duration = Duration::from_millis(160);

enum MenuAction {
    Run(TargetKind),
    History,
    Export,
    Quit,
}

/// Runs the interactive session until the user quits.
pub async fn execute(config: &SessionConfig, locale: &str) -> Result<ExitCode> {
    let theme = ColorfulTheme::default();
    let mut session = Session::from_config(config);

    play_boot_sequence().await;

    loop {
        match prompt_menu(&theme, locale)? {
            MenuAction::Run(kind) => {
                let Some(request) = prompt_request(&theme, kind, locale)? else {
                    continue;
                };
                println!(
                    "{}",
                    t!(
                        "run.running",
                        locale = locale,
                        kind = kind,
                        path = request.target_path().display()
                    )
                    .blue()
                );
                let entry = session.run(request).await;
                print_snapshot(&entry);
                print_run_summary(&entry, locale);
                print_history(session.history(), locale);
            }
            MenuAction::History => {
                let Some(index) = prompt_history_entry(&theme, session.history(), locale)? else {
                    continue;
                };
                let entry = session.history().get(index)?;
                println!("\n{}", t!("session.history_view", locale = locale).cyan().bold());
                print_snapshot(entry);
                print_run_summary(entry, locale);
            }
            MenuAction::Export => {
                let Some(index) = prompt_history_entry(&theme, session.history(), locale)? else {
                    continue;
                };
                let entry = session.history().get(index)?;
                let path: String = Input::with_theme(&theme)
                    .with_prompt(t!("session.export_path_prompt", locale = locale))
                    .default("cybertest-output.txt".to_string())
                    .interact_text()?;
                let path = expand_user_path(&path);
                match export_entry(entry, &path) {
                    Ok(_) => println!(
                        "{}",
                        t!("run.exported", locale = locale, path = path.display()).green()
                    ),
                    Err(e) => eprintln!("{} {:#}", "Error:".red(), e),
                }
            }
            MenuAction::Quit => break,
        }
    }

    println!("{}", t!("session.goodbye", locale = locale).dimmed());
    Ok(ExitCode::SUCCESS)
}

/// Prints the boot banner one line per tick.
async fn play_boot_sequence() {
    let mut ticker = tokio::time::interval(BOOT_LINE_DELAY);
    for line in BOOT_LINES {
        ticker.tick().await;
        println!("{}", line.cyan());
    }
}

fn prompt_menu(theme: &ColorfulTheme, locale: &str) -> Result<MenuAction> {
    let items = [
        t!("session.menu_run_file", locale = locale),
        t!("session.menu_run_folder", locale = locale),
        t!("session.menu_history", locale = locale),
        t!("session.menu_export", locale = locale),
        t!("session.menu_quit", locale = locale),
    ];
    let choice = Select::with_theme(theme)
        .with_prompt(t!("session.menu_prompt", locale = locale))
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(match choice {
        Some(0) => MenuAction::Run(TargetKind::File),
        Some(1) => MenuAction::Run(TargetKind::Directory),
        Some(2) => MenuAction::History,
        Some(3) => MenuAction::Export,
        _ => MenuAction::Quit,
    })
}

/// Asks for a target and a flag. Returns `None` when the target does not exist.
fn prompt_request(theme: &ColorfulTheme, kind: TargetKind, locale: &str) -> Result<Option<RunRequest>> {
    let prompt = match kind {
        TargetKind::File => t!("session.path_prompt_file", locale = locale),
        TargetKind::Directory => t!("session.path_prompt_folder", locale = locale),
    };
    let raw: String = Input::with_theme(theme).with_prompt(prompt).interact_text()?;
    let path = expand_user_path(&raw);

    let exists = match kind {
        TargetKind::File => path.is_file(),
        TargetKind::Directory => path.is_dir(),
    };
    if !exists {
        println!(
            "{}",
            t!("run.target_missing", locale = locale, path = path.display()).red()
        );
        return Ok(None);
    }
    println!(
        "{}",
        t!("session.target_locked", locale = locale, path = path.display()).green()
    );

    let flags: Vec<String> = RunnerFlag::CHOICES.iter().map(ToString::to_string).collect();
    let choice = Select::with_theme(theme)
        .with_prompt(t!("session.flag_prompt", locale = locale))
        .items(&flags)
        .default(0)
        .interact()?;
    let flag = RunnerFlag::CHOICES[choice].clone();

    Ok(Some(RunRequest::new(path, kind, flag)?))
}

/// Lets the user pick a retained run, newest first. Returns its display index.
fn prompt_history_entry(
    theme: &ColorfulTheme,
    history: &HistoryStore,
    locale: &str,
) -> Result<Option<usize>> {
    if history.is_empty() {
        println!("{}", t!("session.no_history", locale = locale).yellow());
        return Ok(None);
    }
    let lines: Vec<String> = history.list().rev().map(|entry| entry.summary_line()).collect();
    let choice = Select::with_theme(theme)
        .with_prompt(t!("session.history_prompt", locale = locale))
        .items(&lines)
        .default(0)
        .interact_opt()?;
    Ok(choice)
}
