//! # cybertest Library / cybertest 库
//!
//! This library provides the core functionality for cybertest, a terminal
//! front-end that launches pytest against a file or folder, summarizes the
//! pass/fail/error/skip counts and keeps the last few runs for recall.
//!
//! 此库为 cybertest 提供核心功能。cybertest 是一个终端前端，
//! 针对文件或文件夹启动 pytest，汇总通过/失败/错误/跳过的数量，并保留最近几次运行以供回看。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, runner invocation, summary parsing, history and the session controller
//! - `infra` - Infrastructure services like process capture and file system helpers
//! - `reporting` - Console summaries and text/HTML export
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、运行器调用、摘要解析、历史记录和会话控制器
//! - `infra` - 基础设施服务，如进程输出捕获和文件系统工具
//! - `reporting` - 控制台摘要和文本/HTML 导出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::models;
pub use core::session::Session;

/// Picks the message locale and activates it.
///
/// Tries, in order: the explicit request, the system locale. Each candidate
/// is matched in full (e.g. "zh-CN") and then by language code (e.g. "en"
/// from "en-US"); the final fallback is "en". Returns the locale in use.
pub fn init_locale(requested: Option<&str>) -> String {
    let available_locales = rust_i18n::available_locales!();
    let system = sys_locale::get_locale();

    let lang = requested
        .into_iter()
        .chain(system.as_deref())
        .find_map(|candidate| {
            if available_locales.contains(&candidate) {
                return Some(candidate.to_string());
            }
            candidate
                .split(['-', '_'])
                .next()
                .filter(|lang_code| available_locales.contains(lang_code))
                .map(str::to_string)
        })
        .unwrap_or_else(|| "en".to_string());

    rust_i18n::set_locale(&lang);
    lang
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
