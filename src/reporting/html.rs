//! # HTML Export Module / HTML 导出模块
//!
//! Wraps a run snapshot in a minimal, self-contained HTML page. The snapshot
//! is placed inside a `<pre>` block so the terminal layout survives; `maud`
//! escapes it.
//!
//! 将运行快照包装为一个最小的独立 HTML 页面。快照放在 `<pre>` 块中以保留终端排版，
//! 由 `maud` 负责转义。

use maud::{DOCTYPE, PreEscaped, html};

/// Embedded CSS for the exported page.
/// 导出页面的内嵌 CSS。
const HTML_STYLE: &str = r#"
body { background:#050814; color:#f5f5f5; font-family:Consolas,monospace; }
h2 { color:#00f5ff; }
pre { background:#0b1020; padding:1rem; border:1px solid #3dffb8; color:#e0e0ff; white-space:pre-wrap; }
"#;

/// Renders `snapshot` as an HTML document.
pub fn render_html(snapshot: &str) -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "pytest output" }
                style { (PreEscaped(HTML_STYLE)) }
            }
            body {
                h2 { "CYBERTEST // pytest output" }
                pre { (snapshot) }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_escaped_inside_pre() {
        let page = render_html("<script>alert('x')</script> & done");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<pre>&lt;script&gt;"));
        assert!(page.contains("&amp; done</pre>"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn page_has_title_and_heading() {
        let page = render_html("[EXIT CODE] 0\n");
        assert!(page.contains("<title>pytest output</title>"));
        assert!(page.contains("CYBERTEST // pytest output"));
        assert!(page.contains("[EXIT CODE] 0\n</pre>"));
    }
}
