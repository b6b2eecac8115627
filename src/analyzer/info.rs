/// 符号类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Variable,  // let
    Constant,  // const
    Function,  // fn 声明 / 内置函数
    Parameter, // 函数参数
    Module,    // import 进来的名字 / 内置命名空间
    Property,  // 对象字面量的键 / 命名空间成员常量
}

/// 一个被声明的名字
///
/// 本地符号的 `line` / `column` 是声明处的 1-based 位置;
/// 内置符号两者都是 0, 表示不可跳转
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolInfo {
    pub name: String,
    pub kind: SymbolKind,
    /// 展示用的签名 / 类型文本, e.g. `let x: number`, `fn add(a, b)`
    pub detail: String,
    pub documentation: Option<String>,
    pub line: usize,
    pub column: usize,
    pub members: Option<Vec<SymbolInfo>>,
}

impl SymbolInfo {
    pub fn new(name: impl Into<String>, kind: SymbolKind, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            detail: detail.into(),
            documentation: None,
            line: 0,
            column: 0,
            members: None,
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn with_members(mut self, members: Vec<SymbolInfo>) -> Self {
        self.members = Some(members);
        self
    }

    /// 有真实声明位置 (本地符号)
    pub fn is_navigable(&self) -> bool {
        self.line > 0
    }

    pub fn is_callable(&self) -> bool {
        self.kind == SymbolKind::Function
    }

    /// 非空成员列表
    pub fn members(&self) -> Option<&[SymbolInfo]> {
        self.members.as_deref().filter(|m| !m.is_empty())
    }

    pub fn member(&self, name: &str) -> Option<&SymbolInfo> {
        self.members()?.iter().find(|m| m.name == name)
    }
}
