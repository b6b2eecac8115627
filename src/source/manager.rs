use std::collections::HashMap;

use crate::source::{DocumentId, SourceFile};

/// 当前打开的文档集合
#[derive(Debug, Default)]
pub struct SourceManager {
    files: HashMap<DocumentId, SourceFile>,
}

impl SourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开或整篇替换文档内容 (textDocument/didOpen, didChange)
    pub fn update_file(&mut self, id: DocumentId, src: String) -> &SourceFile {
        // 重新创建 SourceFile 以重算 line_starts
        let file = SourceFile::new(id.clone(), src);
        self.files.insert(id.clone(), file);
        &self.files[&id]
    }

    pub fn get_file(&self, id: &DocumentId) -> Option<&SourceFile> {
        self.files.get(id)
    }

    pub fn remove_file(&mut self, id: &DocumentId) -> Option<SourceFile> {
        self.files.remove(id)
    }
}
