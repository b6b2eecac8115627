use super::cursor::identifier_at;
use super::resolve;
use crate::analyzer::SymbolInfo;

/// Markdown 悬停文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hover {
    pub contents: String,
}

pub fn hover(text: &str, offset: usize, locals: &[SymbolInfo]) -> Option<Hover> {
    let name = identifier_at(text, offset)?;
    let symbol = resolve(name, locals)?;

    let mut contents = format!("```weft\n{}\n```", symbol.detail);
    if let Some(doc) = &symbol.documentation {
        contents.push_str("\n\n");
        contents.push_str(doc);
    }
    Some(Hover { contents })
}
