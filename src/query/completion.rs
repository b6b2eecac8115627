use super::cursor::{clamp_offset, line_number, line_start};
use super::resolve;
use crate::analyzer::{SymbolInfo, SymbolKind, global_catalog};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// `obj.` 紧挨着光标
static MEMBER_ACCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\.$").expect("member access pattern")
});

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionItem {
    pub label: String,
    pub kind: SymbolKind,
    pub detail: String,
    pub documentation: Option<String>,
    /// 可调用符号补全为 `name(`
    pub insert_text: Option<String>,
}

impl From<&SymbolInfo> for CompletionItem {
    fn from(symbol: &SymbolInfo) -> Self {
        Self {
            label: symbol.name.clone(),
            kind: symbol.kind,
            detail: symbol.detail.clone(),
            documentation: symbol.documentation.clone(),
            insert_text: symbol.is_callable().then(|| format!("{}(", symbol.name)),
        }
    }
}

pub fn completion(text: &str, offset: usize, locals: &[SymbolInfo]) -> Vec<CompletionItem> {
    let offset = clamp_offset(text, offset);
    let line_prefix = &text[line_start(text, offset)..offset];

    // 行注释里不补全
    if line_prefix.contains("//") {
        return Vec::new();
    }

    // `obj.`: 只给成员, 不再混入普通候选
    if let Some(caps) = MEMBER_ACCESS.captures(line_prefix) {
        let members = resolve(&caps[1], locals).and_then(SymbolInfo::members);
        if let Some(members) = members {
            return members.iter().map(CompletionItem::from).collect();
        }
    }

    // 内置先入, 本地后入; 同名时本地覆盖内置
    let line = line_number(text, offset);
    let mut items: IndexMap<&str, CompletionItem> = IndexMap::new();
    for symbol in global_catalog().iter() {
        items.insert(&symbol.name, symbol.into());
    }
    for symbol in locals.iter().filter(|s| s.line < line) {
        items.insert(&symbol.name, symbol.into());
    }

    items.into_values().collect()
}
