//! 编辑器查询: 每次请求都基于当前文本与符号表完整求值一次, 不保留状态

mod completion;
mod cursor;
mod definition;
mod hover;
mod outline;
mod signature;

pub use completion::{CompletionItem, completion};
pub use cursor::{identifier_at, line_number, line_start};
pub use definition::{DefinitionTarget, definition};
pub use hover::{Hover, hover};
pub use outline::{OutlineEntry, OutlineKind, outline};
pub use signature::{SignatureHelp, signature_help};

use crate::analyzer::{SymbolInfo, global_catalog};

/// 名字解析: 先本地 (后声明者优先), 再内置表
///
/// 不按行过滤, 整篇文档的声明都可见
pub fn resolve<'a>(name: &str, locals: &'a [SymbolInfo]) -> Option<&'a SymbolInfo> {
    locals
        .iter()
        .rev()
        .find(|symbol| symbol.name == name)
        .or_else(|| global_catalog().get(name))
}

#[cfg(test)]
mod tests;
