//! # Export Module / 导出模块
//!
//! Saves the snapshot of a history entry as plain text or HTML.
//!
//! 将历史条目的快照保存为纯文本或 HTML。

use anyhow::Result;
use std::path::Path;

use crate::{core::models::HistoryEntry, infra::fs::write_text, reporting::html::render_html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Html,
}

impl ExportFormat {
    /// `.html` and `.htm` select HTML; anything else is plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
                ExportFormat::Html
            }
            _ => ExportFormat::Text,
        }
    }
}

pub fn render(entry: &HistoryEntry, format: ExportFormat) -> String {
    match format {
        ExportFormat::Text => entry.full_output().to_string(),
        ExportFormat::Html => render_html(entry.full_output()),
    }
}

/// Writes the entry's snapshot to `path`, choosing the format from its extension.
pub fn export_entry(entry: &HistoryEntry, path: &Path) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path);
    write_text(path, &render(entry, format))?;
    Ok(format)
}
