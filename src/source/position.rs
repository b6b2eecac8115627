use serde::{Deserialize, Serialize};

/// 编辑器坐标: 0-based 行号与字符列
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// 由 1-based 声明位置构造覆盖标识符文本的区间
    ///
    /// `line`/`column` 为 0 (内置符号) 时返回 None
    pub fn of_identifier(line: usize, column: usize, name: &str) -> Option<Self> {
        if line == 0 || column == 0 {
            return None;
        }
        let line = (line - 1) as u32;
        let start = (column - 1) as u32;
        let end = start + name.chars().count() as u32;
        Some(Self::new(Position::new(line, start), Position::new(line, end)))
    }
}

/// 编辑器列号的计数单位 (LSP 的 positionEncoding)
///
/// 引擎内部的列按字符计, 只在与编辑器交换坐标时换算
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionEncoding {
    Utf8,
    /// 协议默认值
    #[default]
    Utf16,
    Utf32,
}

impl PositionEncoding {
    /// 一个字符占多少个单位
    pub fn units(self, c: char) -> usize {
        match self {
            PositionEncoding::Utf8 => c.len_utf8(),
            PositionEncoding::Utf16 => c.len_utf16(),
            PositionEncoding::Utf32 => 1,
        }
    }
}
