use super::cursor::clamp_offset;
use super::resolve;
use crate::analyzer::SymbolInfo;
use regex::Regex;
use std::sync::LazyLock;

/// `(` 之前的调用目标: `name` 或 `obj.name`
static CALL_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)?)\s*$")
        .expect("call target pattern")
});

/// detail 里的第一个括号参数表; detail 的其它部分不能带括号
static PARAMETER_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("parameter list pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHelp {
    pub label: String,
    pub parameters: Vec<String>,
    pub active_parameter: usize,
}

/// 向后找最近的 `(` 并按逗号数确定当前参数
///
/// 不跟踪括号深度: 嵌套调用里的结果可能落到内层调用上
pub fn signature_help(text: &str, offset: usize, locals: &[SymbolInfo]) -> Option<SignatureHelp> {
    let before = &text[..clamp_offset(text, offset)];
    let paren = before.rfind('(')?;

    let caps = CALL_TARGET.captures(&before[..paren])?;
    let target = caps.get(1)?.as_str();

    let symbol = match target.split_once('.') {
        Some((object, member)) => resolve(object, locals)?.member(member)?,
        None => resolve(target, locals)?,
    };

    let list = PARAMETER_LIST.captures(&symbol.detail)?.get(1)?.as_str();
    let parameters = list
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    Some(SignatureHelp {
        label: symbol.detail.clone(),
        parameters,
        active_parameter: before[paren + 1..].matches(',').count(),
    })
}
