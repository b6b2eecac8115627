use crate::analyzer::{AstCache, SymbolInfo, collect_symbols};
use crate::ast::Program;
use crate::config::Config;
use crate::diagnostics::Diagnostic;
use crate::formatter::format_source;
use crate::parser::{SourceParser, WeftParser};
use crate::query::{
    self, CompletionItem, DefinitionTarget, Hover, OutlineEntry, SignatureHelp,
};
use crate::source::{DocumentId, Position, PositionEncoding, Range, SourceFile, SourceManager};
use log::{debug, trace};
use std::sync::Arc;

/// 整篇替换文本的编辑
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

/// 编辑器查询的入口
///
/// 持有最新文本与最近一次解析成功的语法树; 查询本身无状态
pub struct Engine {
    config: Config,
    parser: Box<dyn SourceParser>,
    sources: SourceManager,
    asts: AstCache,
    encoding: PositionEncoding,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self::with_parser(config, WeftParser)
    }

    pub fn with_parser(config: Config, parser: impl SourceParser + 'static) -> Self {
        Self {
            config,
            parser: Box::new(parser),
            sources: SourceManager::new(),
            asts: AstCache::new(),
            encoding: PositionEncoding::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn position_encoding(&self) -> PositionEncoding {
        self.encoding
    }

    /// 编辑器坐标的列单位, 由 initialize 协商决定
    pub fn set_position_encoding(&mut self, encoding: PositionEncoding) {
        self.encoding = encoding;
    }

    /// 打开 / 修改文档, 返回该文档完整的诊断集合 (空集合表示清除)
    ///
    /// 解析失败时保留上一棵成功的语法树
    pub fn update_document(&mut self, id: DocumentId, text: String) -> Vec<Diagnostic> {
        let file = self.sources.update_file(id.clone(), text);

        match self.parser.parse(&file.src, &id) {
            Ok(program) => {
                debug!("parsed {}: {} statements", id, program.statements.len());
                self.asts.store(id, program);
                Vec::new()
            }
            Err(failure) => {
                debug!(
                    "parse failed for {} (stale tree kept: {}): {}",
                    id,
                    self.asts.contains(&id),
                    failure
                );
                let mut diagnostic = Diagnostic::from_parse_failure(&failure);
                diagnostic.range = file.encode_range(diagnostic.range, self.encoding);
                vec![diagnostic]
            }
        }
    }

    pub fn close_document(&mut self, id: &DocumentId) {
        debug!("closed {}", id);
        self.sources.remove_file(id);
        self.asts.remove(id);
    }

    pub fn text(&self, id: &DocumentId) -> Option<&str> {
        self.sources.get_file(id).map(|file| file.src.as_str())
    }

    pub fn program(&self, id: &DocumentId) -> Option<Arc<Program>> {
        self.asts.get(id)
    }

    /// 最近一次成功解析出的本地符号
    pub fn symbols(&self, id: &DocumentId) -> Vec<SymbolInfo> {
        self.asts
            .get(id)
            .map(|program| collect_symbols(&program))
            .unwrap_or_default()
    }

    /// 编辑器坐标 -> (文档, 字节偏移)
    fn cursor(&self, id: &DocumentId, position: Position) -> Option<(&SourceFile, usize)> {
        let file = self.sources.get_file(id)?;
        let offset = file.offset_at(
            position.line as usize,
            position.character as usize,
            self.encoding,
        )?;
        Some((file, offset))
    }

    pub fn completion(&self, id: &DocumentId, position: Position) -> Vec<CompletionItem> {
        let Some((file, offset)) = self.cursor(id, position) else {
            return Vec::new();
        };
        let items = query::completion(&file.src, offset, &self.symbols(id));
        trace!("completion {}@{:?}: {} items", id, position, items.len());
        items
    }

    pub fn hover(&self, id: &DocumentId, position: Position) -> Option<Hover> {
        let (file, offset) = self.cursor(id, position)?;
        query::hover(&file.src, offset, &self.symbols(id))
    }

    pub fn definition(&self, id: &DocumentId, position: Position) -> Option<DefinitionTarget> {
        let (file, offset) = self.cursor(id, position)?;
        let mut target = query::definition(id, &file.src, offset, &self.symbols(id))?;
        target.range = file.encode_range(target.range, self.encoding);
        Some(target)
    }

    pub fn signature_help(&self, id: &DocumentId, position: Position) -> Option<SignatureHelp> {
        let (file, offset) = self.cursor(id, position)?;
        query::signature_help(&file.src, offset, &self.symbols(id))
    }

    pub fn document_symbols(&self, id: &DocumentId) -> Vec<OutlineEntry> {
        let mut entries = query::outline(&self.symbols(id));
        if let Some(file) = self.sources.get_file(id) {
            for entry in &mut entries {
                entry.range = file.encode_range(entry.range, self.encoding);
            }
        }
        entries
    }

    /// 格式化整篇文档; `tab_size` 缺省时用配置里的值
    pub fn format(&self, id: &DocumentId, tab_size: Option<usize>) -> Option<TextEdit> {
        let file = self.sources.get_file(id)?;
        let tab_size = tab_size.unwrap_or(self.config.tab_size);
        let new_text = format_source(&file.src, tab_size);
        trace!("format {} with tab size {}", id, tab_size);

        Some(TextEdit {
            range: Range::new(Position::new(0, 0), file.end_position(self.encoding)),
            new_text,
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
