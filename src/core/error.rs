//! # Core Errors / 核心错误
//!
//! Typed errors surfaced by the core. Runner failures are never errors here:
//! they are encoded in `RunResult` and classified as `ISSUE`.
//!
//! 核心模块暴露的类型化错误。运行器失败在此处从不视为错误：
//! 它们被编码在 `RunResult` 中并归类为 `ISSUE`。

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A run was requested without a target path.
    #[error("no target selected: the target path is empty")]
    EmptyTarget,
    /// A history lookup addressed an entry that is not retained.
    #[error("history entry {index} not found ({len} entries retained)")]
    HistoryNotFound { index: usize, len: usize },
}
