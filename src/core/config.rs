//! # Configuration Module / 配置模块
//!
//! Loads `cybertest.toml`. Only two settings exist: the message language and
//! the runner entrypoint.
//!
//! 加载 `cybertest.toml`。只有两项设置：消息语言和运行器入口命令。

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "cybertest.toml";

/// Settings shared by every run of a session.
/// 会话中每次运行共享的设置。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// The language for console messages (e.g., "en", "zh-CN").
    /// 控制台消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// Program and leading arguments used to launch the runner.
    /// 用于启动运行器的程序及其前置参数。
    #[serde(default = "default_runner")]
    pub runner: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            runner: default_runner(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// The interpreter-module form of pytest for this platform.
pub fn default_runner() -> Vec<String> {
    let python = if cfg!(windows) { "python" } else { "python3" };
    vec![python.to_string(), "-m".to_string(), "pytest".to_string()]
}

impl SessionConfig {
    /// Replaces the runner with a command line split by shell-word rules.
    pub fn set_runner_command_line(&mut self, command_line: &str) -> Result<()> {
        let parts = shlex::split(command_line)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse runner command: {}", command_line))?;
        if parts.is_empty() {
            bail!("Runner command is empty.");
        }
        self.runner = parts;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.runner.is_empty() || self.runner[0].trim().is_empty() {
            bail!("`runner` must name a program to launch.");
        }
        Ok(())
    }
}

/// Parses a configuration from TOML text.
pub fn parse_config(content: &str) -> Result<SessionConfig> {
    let config: SessionConfig = toml::from_str(content).context("Invalid cybertest configuration")?;
    config.validate()?;
    Ok(config)
}

/// Loads the configuration at `path`.
///
/// When `required` is false a missing file yields the defaults; a file that
/// exists but does not parse is always an error.
pub fn load_config(path: &Path, required: bool) -> Result<SessionConfig> {
    if !path.exists() && !required {
        return Ok(SessionConfig::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn runner_override() {
        let config = parse_config("language = \"zh-CN\"\nrunner = [\"pytest\"]\n").unwrap();
        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.runner, ["pytest"]);
    }

    #[test]
    fn empty_runner_is_rejected() {
        assert!(parse_config("runner = []").is_err());
    }

    #[test]
    fn command_line_is_split_into_words() {
        let mut config = SessionConfig::default();
        config
            .set_runner_command_line("\"/opt/my python/bin/python\" -m pytest")
            .unwrap();
        assert_eq!(config.runner, ["/opt/my python/bin/python", "-m", "pytest"]);
        assert!(config.set_runner_command_line("   ").is_err());
        assert!(config.set_runner_command_line("\"unterminated").is_err());
    }
}
