use crate::utils::Node;
pub use crate::utils::Span;

// --- 顶级结构 ---

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub span: Span,
}

// --- 语句 ---

#[derive(Debug, Clone, PartialEq)]
pub enum StatementData {
    /// let x = 1; / const y = "a";
    VarDeclaration(VarDeclaration),
    /// fn add(a, b) { ... }
    FunctionDeclaration(FunctionDeclaration),
    /// import { a, b } from "lib";
    ImportDeclaration(ImportDeclaration),

    // --- 控制流 ---
    If {
        condition: Expression,
        then_branch: Vec<Statement>,
        /// else if 被包成只含一条 If 语句的 else 分支
        else_branch: Option<Vec<Statement>>,
    },
    While {
        condition: Expression,
        body: Vec<Statement>,
    },
    /// 裸代码块 { ... }
    Block {
        body: Vec<Statement>,
    },
    Return(Option<Expression>),
    Break,
    Continue,

    Expression(Expression),
}
pub type Statement = Node<StatementData>;

impl StatementData {
    /// 控制流语句下挂的嵌套语句序列 (body / then_branch / else_branch), 按源码顺序
    ///
    /// 函数体不在此列, 由调用方单独处理
    pub fn nested_blocks(&self) -> Vec<&[Statement]> {
        match self {
            StatementData::If {
                then_branch,
                else_branch,
                ..
            } => {
                let mut blocks = vec![then_branch.as_slice()];
                if let Some(else_branch) = else_branch {
                    blocks.push(else_branch.as_slice());
                }
                blocks
            }
            StatementData::While { body, .. } | StatementData::Block { body } => vec![body.as_slice()],
            _ => Vec::new(),
        }
    }
}

/// 变量 / 常量声明
///
/// `line` / `column` 是被声明标识符的 1-based 位置
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub identifier: String,
    pub is_constant: bool,
    pub initializer: Option<Expression>,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Vec<Statement>,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    pub specifiers: Vec<ImportSpecifier>,
    pub source: String,
    pub line: usize,
    pub column: usize,
}

/// 被导入的单个名字及其位置
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    pub name: String,
    pub line: usize,
    pub column: usize,
}

// --- 表达式 ---

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionData {
    // --- 字面量 ---
    NumericLiteral(f64),
    StringLiteral(String),
    /// [1, 2, 3]
    ArrayLiteral(Vec<Expression>),
    /// {a: 1, "b": 2}
    ObjectLiteral(Vec<ObjectProperty>),
    /// fn(a, b) { ... } 或 (a, b) => a + b
    Lambda {
        parameters: Vec<String>,
        body: LambdaBody,
    },

    /// 标识符 (true / false / null 也在这里)
    Identifier(String),

    // --- 访问 ---
    /// obj.prop
    Member {
        target: Box<Expression>,
        property: String,
    },
    /// arr[index]
    Index {
        target: Box<Expression>,
        index: Box<Expression>,
    },
    /// f(a, b)
    Call {
        callee: Box<Expression>,
        args: Vec<Expression>,
    },

    // --- 运算 ---
    Unary {
        op: UnaryOp,
        expr: Box<Expression>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Assign {
        op: AssignOp,
        target: Box<Expression>,
        value: Box<Expression>,
    },
}
pub type Expression = Node<ExpressionData>;

#[derive(Debug, Clone, PartialEq)]
pub enum LambdaBody {
    Expression(Box<Expression>),
    Block(Vec<Statement>),
}

/// 对象字面量的一个键值对, 位置指向键
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub key: String,
    pub value: Expression,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    Assign,      // =
    PlusAssign,  // +=
    MinusAssign, // -=
    MulAssign,   // *=
    DivAssign,   // /=
    ModAssign,   // %=
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod, // Arithmetic
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte, // Comparison
    And,
    Or, // Logical
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg, // -
    Not, // !
}
