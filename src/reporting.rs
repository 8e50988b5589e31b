//! # Reporting Module / 报告模块
//!
//! This module handles the display and export of run results. It prints
//! colourful summaries and history lists to the console, and saves run
//! snapshots as plain text or HTML.
//!
//! 此模块处理运行结果的展示和导出。它在控制台打印彩色摘要和历史列表，
//! 并将运行快照保存为纯文本或 HTML。

pub mod console;
pub mod export;
pub mod html;

// Re-export common reporting functions
pub use console::{print_history, print_run_summary, print_snapshot};
pub use export::{ExportFormat, export_entry};
pub use html::render_html;
