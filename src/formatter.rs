//! 基于文本的格式化: 不依赖语法树, 任何输入都返回结果
//!
//! 流程: 展开花括号 -> 逐行重排 (缩进 / 补 `;` / 规范空格) -> 用 `\n` 拼接

mod braces;
mod line;

use braces::expand_braces;
use line::LineParts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// 每级缩进的空格数
    pub tab_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { tab_size: 4 }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, source: &str) -> String {
        let expanded = expand_braces(source);

        let mut output: Vec<String> = Vec::new();
        let mut indent_level: usize = 0;
        let mut previous_blank = false;

        for raw in expanded.split('\n') {
            let trimmed = raw.trim();

            // 连续空行只留一行
            if trimmed.is_empty() {
                if !previous_blank {
                    output.push(String::new());
                }
                previous_blank = true;
                continue;
            }
            previous_blank = false;

            if trimmed.starts_with('}') || trimmed.starts_with(']') {
                indent_level = indent_level.saturating_sub(1);
            }

            let parts = LineParts::split(trimmed);
            let indent = " ".repeat(indent_level * self.config.tab_size);
            output.push(format!("{}{}", indent, parts.render()));

            if parts.opens_block() {
                indent_level += 1;
            }
        }

        output.join("\n")
    }
}

/// `Formatter` 的便捷入口
pub fn format_source(source: &str, tab_size: usize) -> String {
    Formatter::with_config(FormatConfig { tab_size }).format(source)
}

#[cfg(test)]
mod tests;
