//! # Summary Parser Module / 摘要解析模块
//!
//! Turns free-form runner output into `TestCounts`. The heuristic here
//! follows pytest's closing line, e.g. `3 passed, 1 failed, 2 skipped in 0.12s`.
//! Other output formats plug in through the `SummaryParser` trait.
//!
//! 将运行器的自由文本输出转换为 `TestCounts`。此处的启发式规则对应 pytest 的结尾摘要行。
//! 其它输出格式可以通过 `SummaryParser` trait 接入。
//!
//! ## Known limitation / 已知限制
//!
//! Every matching line is counted. A runner that prints the same summary
//! twice, or a per-file summary followed by a grand total, is counted twice.
//!
//! `error` and `errors` are searched for separately, so `2 errors` matches
//! both words and adds 4 to the error count.
//!
//! Only ASCII digits are read as counts.
//!
//! 每一条匹配的行都会被计数。若运行器重复打印摘要，结果会被重复累计。
//! `error` 与 `errors` 分别搜索，因此 `2 errors` 会使错误数增加 4。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::TestCounts;

/// Anything that can derive counters from a runner's text output.
/// Implementations must be total: any input yields counts, never a fault.
pub trait SummaryParser {
    fn parse(&self, combined_output: &str) -> TestCounts;
}

/// Substrings that mark a line as a candidate summary line.
const CANDIDATE_MARKERS: [&str; 4] = [" passed", " failed", " skipped", " error"];

#[derive(Debug, Clone, Copy)]
enum Category {
    Passed,
    Failed,
    Errors,
    Skipped,
}

/// One search per category word. `error` also matches the head of `errors`.
static COUNT_PATTERNS: Lazy<Vec<(Regex, Category)>> = Lazy::new(|| {
    [
        ("passed", Category::Passed),
        ("failed", Category::Failed),
        ("error", Category::Errors),
        ("errors", Category::Errors),
        ("skipped", Category::Skipped),
    ]
    .into_iter()
    .map(|(word, category)| {
        // `[0-9]` rather than `\d`: `\d` is Unicode-aware but `u64::from_str` is not.
        let pattern = Regex::new(&format!(r"([0-9]+)\s+{word}")).expect("count pattern is valid");
        (pattern, category)
    })
    .collect()
});

/// Parser for pytest's textual summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PytestSummaryParser;

impl PytestSummaryParser {
    pub fn new() -> Self {
        Self
    }
}

impl SummaryParser for PytestSummaryParser {
    fn parse(&self, combined_output: &str) -> TestCounts {
        let (mut passed, mut failed, mut errors, mut skipped) = (0u64, 0u64, 0u64, 0u64);
        let mut total = 0u64;

        for line in combined_output
            .lines()
            .filter(|line| CANDIDATE_MARKERS.iter().any(|m| line.contains(m)))
        {
            for (pattern, category) in COUNT_PATTERNS.iter() {
                for caps in pattern.captures_iter(line) {
                    // Digits that overflow u64 are not a count worth keeping.
                    let Ok(value) = caps[1].parse::<u64>() else {
                        continue;
                    };
                    // Neither is a count that would push the total past u64.
                    let Some(next_total) = total.checked_add(value) else {
                        continue;
                    };
                    total = next_total;
                    let bucket = match category {
                        Category::Passed => &mut passed,
                        Category::Failed => &mut failed,
                        Category::Errors => &mut errors,
                        Category::Skipped => &mut skipped,
                    };
                    *bucket += value;
                }
            }
        }

        TestCounts::new(passed, failed, errors, skipped)
    }
}
