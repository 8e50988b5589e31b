//! # Core Module / 核心模块
//!
//! This module contains the core functionality of cybertest: data models,
//! configuration, runner invocation, summary parsing, run history and the
//! session controller that ties them together.
//!
//! 此模块包含 cybertest 的核心功能：数据模型、配置、运行器调用、
//! 摘要解析、运行历史以及将它们串联起来的会话控制器。

pub mod config;
pub mod error;
pub mod execution;
pub mod history;
pub mod models;
pub mod parser;
pub mod session;

// Re-exports
pub use error::SessionError;
pub use execution::RunnerInvoker;
pub use history::HistoryStore;
pub use parser::{PytestSummaryParser, SummaryParser};
pub use session::Session;
