use crate::analyzer::{SymbolInfo, SymbolKind};
use crate::source::Range;

/// 大纲里展示的类别 (参数按变量展示)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineKind {
    Variable,
    Constant,
    Function,
    Module,
    Property,
}

impl From<SymbolKind> for OutlineKind {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Variable | SymbolKind::Parameter => OutlineKind::Variable,
            SymbolKind::Constant => OutlineKind::Constant,
            SymbolKind::Function => OutlineKind::Function,
            SymbolKind::Module => OutlineKind::Module,
            SymbolKind::Property => OutlineKind::Property,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub name: String,
    pub kind: OutlineKind,
    pub detail: String,
    pub range: Range,
}

/// 扁平大纲: 每个有声明位置的本地符号一条
pub fn outline(locals: &[SymbolInfo]) -> Vec<OutlineEntry> {
    locals
        .iter()
        .filter_map(|symbol| {
            let range = Range::of_identifier(symbol.line, symbol.column, &symbol.name)?;
            Some(OutlineEntry {
                name: symbol.name.clone(),
                kind: symbol.kind.into(),
                detail: symbol.detail.clone(),
                range,
            })
        })
        .collect()
}
