use regex::Regex;
use std::sync::LazyLock;

/// 按顺序作用于字符串以外的代码片段
static SPACING_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"\s*(==|!=|<=|>=|=>|[-+*/%]=|=)\s*", " ${1} "),
        (r",\s*", ", "),
        (r":\s*", ": "),
        (r"\)\s*\{", ") {"),
        (r"\b(if|while|fn|import)\s*\(", "${1} ("),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("spacing rule"), replacement))
    .collect()
});

/// 片段末尾 `;` 前的空白 (`{` 后面的保留)
static SPACE_BEFORE_SEMICOLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\s{])\s+;$").expect("semicolon rule"));

/// 一行去掉首尾空白后的代码部分与行尾注释
pub(super) struct LineParts<'a> {
    code: &'a str,
    comment: Option<&'a str>,
}

impl<'a> LineParts<'a> {
    pub(super) fn split(trimmed: &'a str) -> Self {
        match comment_start(trimmed) {
            Some(i) => Self {
                code: trimmed[..i].trim_end(),
                comment: Some(&trimmed[i..]),
            },
            None => Self {
                code: trimmed,
                comment: None,
            },
        }
    }

    /// 规范化后的整行 (不含缩进)
    pub(super) fn render(&self) -> String {
        let mut line = normalize_spacing(self.code);
        if self.needs_semicolon() {
            line.push(';');
        }
        if let Some(comment) = self.comment {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(comment);
        }
        line
    }

    /// 下一行要多缩进一级
    pub(super) fn opens_block(&self) -> bool {
        self.code.ends_with('{') || self.code.ends_with('[')
    }

    fn needs_semicolon(&self) -> bool {
        let code = self.code;
        if code.is_empty() {
            return false;
        }
        let ends_open = code.ends_with([';', ',', '{', '[', '}']);
        let closes_block = code.starts_with('}');
        let control_head = ["if", "while", "else"]
            .iter()
            .any(|keyword| starts_with_keyword(code, keyword));
        let function_head = code.starts_with("fn ");
        let property = code.contains(':') && !code.starts_with("import");

        !(ends_open || closes_block || control_head || function_head || property)
    }
}

fn starts_with_keyword(code: &str, keyword: &str) -> bool {
    code.strip_prefix(keyword).is_some_and(|rest| {
        !rest
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

/// 代码 / 字符串片段, 字符串未闭合时延伸到行尾
fn segments(code: &str) -> Vec<(bool, &str)> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut chars = code.char_indices();

    while let Some((i, c)) = chars.next() {
        match quote {
            None if c == '"' || c == '\'' => {
                if start < i {
                    result.push((false, &code[start..i]));
                }
                start = i;
                quote = Some(c);
            }
            None => {}
            Some(_) if c == '\\' => {
                chars.next();
            }
            Some(q) if c == q => {
                result.push((true, &code[start..i + 1]));
                start = i + 1;
                quote = None;
            }
            Some(_) => {}
        }
    }
    if start < code.len() {
        result.push((quote.is_some(), &code[start..]));
    }
    result
}

/// 字符串以外第一个 `//` 的位置
fn comment_start(line: &str) -> Option<usize> {
    let mut offset = 0;
    for (is_string, segment) in segments(line) {
        if !is_string {
            if let Some(i) = segment.find("//") {
                return Some(offset + i);
            }
        }
        offset += segment.len();
    }
    None
}

fn normalize_spacing(code: &str) -> String {
    let mut out = String::with_capacity(code.len() + 8);
    for (is_string, segment) in segments(code) {
        if is_string {
            out.push_str(segment);
            continue;
        }
        let mut text = segment.to_string();
        for (rule, replacement) in SPACING_RULES.iter() {
            text = rule.replace_all(&text, *replacement).into_owned();
        }
        let text = SPACE_BEFORE_SEMICOLON.replace(&text, "${1};");
        out.push_str(&text);
    }
    out.trim().to_string()
}
