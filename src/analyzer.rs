mod cache;
mod catalog;
mod collect;
mod info;

pub use cache::AstCache;
pub use catalog::{GlobalCatalog, global_catalog};
pub use collect::{collect_symbols, infer_type};
pub use info::{SymbolInfo, SymbolKind};
