use crate::parser::ParseFailure;
use crate::source::{Position, Range};
use regex::Regex;
use std::sync::LazyLock;

/// 失败消息里的 `:<line>:<column>`
static LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(\d+):(\d+)").expect("location pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub range: Range,
    pub message: String,
    pub source: String,
}

impl Diagnostic {
    pub const SOURCE: &'static str = "weft";

    pub fn error(range: Range, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            range,
            message: message.into(),
            source: Self::SOURCE.to_string(),
        }
    }

    /// 一次解析失败对应一条诊断, 位置取消息里最后一个 `:<line>:<column>`
    ///
    /// 找不到位置时落在文档开头
    pub fn from_parse_failure(failure: &ParseFailure) -> Self {
        let range = failure_location(&failure.message)
            .map(|(line, column)| {
                let line = line.saturating_sub(1);
                let start = column.saturating_sub(1);
                Range::new(Position::new(line, start), Position::new(line, start + 1))
            })
            .unwrap_or(Range::new(Position::new(0, 0), Position::new(0, 1)));

        Self::error(range, failure.message.clone())
    }
}

fn failure_location(message: &str) -> Option<(u32, u32)> {
    let caps = LOCATION.captures_iter(message).last()?;
    let line = caps[1].parse().ok()?;
    let column = caps[2].parse().ok()?;
    Some((line, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_comes_from_last_location_suffix() {
        let failure = ParseFailure::new("Expected ')' at file:///a.wf:3:7");
        let diagnostic = Diagnostic::from_parse_failure(&failure);
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.range,
            Range::new(Position::new(2, 6), Position::new(2, 7))
        );
        assert_eq!(diagnostic.message, failure.message);
        assert_eq!(diagnostic.source, "weft");
    }

    #[test]
    fn missing_location_falls_back_to_document_start() {
        let diagnostic = Diagnostic::from_parse_failure(&ParseFailure::new("boom"));
        assert_eq!(
            diagnostic.range,
            Range::new(Position::new(0, 0), Position::new(0, 1))
        );
    }

    #[test]
    fn oversized_numbers_are_ignored() {
        let failure = ParseFailure::new("bad at x:99999999999:1");
        assert_eq!(
            Diagnostic::from_parse_failure(&failure).range.start,
            Position::new(0, 0)
        );
    }
}
