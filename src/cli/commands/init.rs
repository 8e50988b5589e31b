//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a default
//! `cybertest.toml` configuration file.
//!
//! 此模块实现了 `init` 命令，用于写出默认的 `cybertest.toml` 配置文件。

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::Path};

use crate::{core::config, infra::t};

const CONFIG_PREAMBLE: &str = r#"# cybertest configuration / cybertest 配置

# Language for console messages / 控制台消息的语言
language = "en"

# Program and leading arguments used to launch pytest.
# The flag and the target path are appended to this list.
# 用于启动 pytest 的程序及前置参数。开关和目标路径会追加在其后。
"#;

/// The starter file, with the runner this platform uses by default.
fn default_config() -> String {
    let runner = toml::Value::from(config::default_runner());
    format!("{CONFIG_PREAMBLE}runner = {runner}\n")
}

/// Executes the init command with the provided arguments.
///
/// # Arguments
/// * `output` - Path for the new configuration file
/// * `force` - Whether to overwrite an existing file
/// * `locale` - Language for messages
pub fn execute(output: &Path, force: bool, locale: &str) -> Result<()> {
    if output.exists() && !force {
        println!(
            "{}",
            t!("init.file_exists", locale = locale, path = output.display()).red()
        );
        println!("{}", t!("init.use_force", locale = locale).yellow());
        return Ok(());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| t!("init.write_failed", locale = locale, path = parent.display()).to_string())?;
    }

    fs::write(output, default_config())
        .with_context(|| t!("init.write_failed", locale = locale, path = output.display()).to_string())?;

    println!(
        "{}",
        t!("init.success", locale = locale, path = output.display()).green()
    );
    println!("{}", t!("init.next_steps", locale = locale));

    Ok(())
}
