//! # Command-Line Interface / 命令行接口
//!
//! Builds the `cybertest` argument parser, resolves configuration and locale,
//! and dispatches to the `run`, `session` and `init` commands.
//!
//! 构建 `cybertest` 参数解析器，解析配置和语言区域，并分发到 `run`、`session` 和 `init` 命令。

pub mod commands;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;
use std::{env, ffi::OsString, path::PathBuf, process::ExitCode};

use crate::{
    core::{
        config::{self, SessionConfig},
        models::RunnerFlag,
    },
    infra::t,
};

/// What the user asked for, independent of clap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub lang: Option<String>,
    pub config: Option<PathBuf>,
    pub runner: Option<String>,
    pub command: CliCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run {
        targets: Vec<PathBuf>,
        flag: RunnerFlag,
        export: Option<PathBuf>,
        json: bool,
    },
    Session,
    Init {
        force: bool,
    },
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language(args: &[OsString]) -> Option<String> {
    args.iter()
        .position(|arg| arg == "--lang")
        .and_then(|pos| args.get(pos + 1))
        .map(|lang| lang.to_string_lossy().into_owned())
}

fn build_cli(locale: &str) -> Command {
    Command::new("cybertest")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.config", locale = locale).to_string())
                .value_name("CONFIG")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("runner")
                .long("runner")
                .help(t!("cli.runner", locale = locale).to_string())
                .value_name("COMMAND")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cli.cmd_run_about", locale = locale).to_string())
                .arg(
                    Arg::new("targets")
                        .help(t!("cli.arg_targets", locale = locale).to_string())
                        .value_name("TARGET")
                        .required(true)
                        .num_args(1..)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("flag")
                        .short('f')
                        .long("flag")
                        .help(t!("cli.arg_flag", locale = locale).to_string())
                        .value_name("FLAG")
                        .allow_hyphen_values(true)
                        .default_value("Normal")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("export")
                        .short('o')
                        .long("export")
                        .help(t!("cli.arg_export", locale = locale).to_string())
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("cli.arg_json", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("session").about(t!("cli.cmd_session_about", locale = locale).to_string()),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("cli.arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn args_from_matches(matches: &ArgMatches) -> Option<CliArgs> {
    let command = match matches.subcommand()? {
        ("run", run_matches) => CliCommand::Run {
            targets: run_matches
                .get_many::<PathBuf>("targets")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            flag: RunnerFlag::from_option(run_matches.get_one::<String>("flag").map(String::as_str)),
            export: run_matches.get_one::<PathBuf>("export").cloned(),
            json: run_matches.get_flag("json"),
        },
        ("session", _) => CliCommand::Session,
        ("init", init_matches) => CliCommand::Init {
            force: init_matches.get_flag("force"),
        },
        _ => return None,
    };

    Some(CliArgs {
        lang: matches.get_one::<String>("lang").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        runner: matches.get_one::<String>("runner").cloned(),
        command,
    })
}

/// Parses an explicit argument list (program name first).
pub fn try_parse_args_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let language = pre_parse_language(&args).unwrap_or_else(|| "en".to_string());
    parse_with_locale(&args, &language)
}

fn parse_with_locale(args: &[OsString], locale: &str) -> Result<CliArgs, clap::Error> {
    let mut cli = build_cli(locale);
    let matches = cli.clone().try_get_matches_from(args)?;
    args_from_matches(&matches)
        .ok_or_else(|| cli.error(clap::error::ErrorKind::MissingSubcommand, "a subcommand is required"))
}

/// Parses the process arguments, exiting with clap's message on error.
/// Help text follows `--lang`, then the system locale.
pub fn parse_args() -> CliArgs {
    let args: Vec<OsString> = env::args_os().collect();
    let help_locale = pre_parse_language(&args)
        .or_else(sys_locale::get_locale)
        .unwrap_or_else(|| "en".to_string());
    parse_with_locale(&args, &help_locale).unwrap_or_else(|e| e.exit())
}

/// Loads the configuration and picks the locale: `--lang`, then the config
/// file's `language`, then the system locale.
fn resolve_config(args: &CliArgs) -> Result<(SessionConfig, String)> {
    let (config_path, required) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (PathBuf::from(config::DEFAULT_CONFIG_FILE), false),
    };
    let from_file = required || config_path.exists();
    let mut session_config = config::load_config(&config_path, required)?;

    let locale = crate::init_locale(
        args.lang
            .as_deref()
            .or(from_file.then_some(session_config.language.as_str())),
    );
    if from_file {
        eprintln!(
            "{}",
            t!("config.loaded", locale = &locale, path = config_path.display()).dimmed()
        );
    }

    if let Some(command_line) = &args.runner {
        session_config.set_runner_command_line(command_line)?;
    }
    session_config.language = locale.clone();
    Ok((session_config, locale))
}

/// Runs the parsed command and returns the process exit code.
pub async fn process_command(args: CliArgs) -> Result<ExitCode> {
    if let CliCommand::Init { force } = &args.command {
        let locale = crate::init_locale(args.lang.as_deref());
        let output = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
        commands::init::execute(&output, *force, &locale)?;
        return Ok(ExitCode::SUCCESS);
    }

    let (session_config, locale) = resolve_config(&args)?;

    match args.command {
        CliCommand::Run {
            targets,
            flag,
            export,
            json,
        } => {
            commands::run::execute(&session_config, targets, flag, export.as_deref(), json, &locale)
                .await
        }
        CliCommand::Session => commands::session::execute(&session_config, &locale).await,
        CliCommand::Init { .. } => Ok(ExitCode::SUCCESS),
    }
}
