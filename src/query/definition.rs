use super::cursor::identifier_at;
use super::resolve;
use crate::analyzer::SymbolInfo;
use crate::source::{DocumentId, Range};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionTarget {
    pub document: DocumentId,
    pub range: Range,
}

/// 跳转到声明处; 内置符号没有位置, 不产生结果
pub fn definition(
    document: &DocumentId,
    text: &str,
    offset: usize,
    locals: &[SymbolInfo],
) -> Option<DefinitionTarget> {
    let name = identifier_at(text, offset)?;
    let symbol = resolve(name, locals).filter(|s| s.is_navigable())?;
    let range = Range::of_identifier(symbol.line, symbol.column, name)?;

    Some(DefinitionTarget {
        document: document.clone(),
        range,
    })
}
