use crate::ast::Program;
use crate::source::DocumentId;
use std::collections::HashMap;
use std::sync::Arc;

/// 每个文档最近一次解析成功的语法树
///
/// 解析失败时不动旧条目; 只有关闭文档才会移除
#[derive(Debug, Default)]
pub struct AstCache {
    entries: HashMap<DocumentId, Arc<Program>>,
}

impl AstCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整体替换该文档的语法树, 读者拿到的要么是旧树要么是新树
    pub fn store(&mut self, id: DocumentId, program: Program) -> Arc<Program> {
        let program = Arc::new(program);
        self.entries.insert(id, Arc::clone(&program));
        program
    }

    pub fn get(&self, id: &DocumentId) -> Option<Arc<Program>> {
        self.entries.get(id).cloned()
    }

    pub fn remove(&mut self, id: &DocumentId) -> Option<Arc<Program>> {
        self.entries.remove(id)
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.entries.contains_key(id)
    }
}
