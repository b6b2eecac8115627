mod expr;
mod stmt;

use crate::ast::*;
use crate::lexer::Lexer;
use crate::source::{DocumentId, SourceFile};
use crate::token::{Token, TokenKind};
use crate::token_stream::TokenStream;
use crate::utils::{Node, Span};

/// 解析器内部错误 (首个错误即终止解析)
#[derive(Debug, Clone)]
pub struct ParseError {
    pub expected: String,
    pub found: TokenKind,
    pub span: Span,
    pub message: String,
}

impl ParseError {
    /// 转成对外的失败信息, 消息以 `:<line>:<column>` 结尾
    pub fn into_failure(self, file: &SourceFile) -> ParseFailure {
        let (line, column, _) = file.lookup_location(self.span.start);
        ParseFailure {
            message: format!("{} at {}:{}:{}", self.message, file.id, line, column),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// 最大嵌套层数: 递归下降的层数加上左结合链 (`a + b + c`, `a.b.c`) 的节数
///
/// 超过即报错, 递归和语法树深度都因此有界
pub const MAX_NESTING: usize = 128;

/// 解析失败: 对引擎来说只有一条带位置的消息
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseFailure {
    pub message: String,
}

impl ParseFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 解析器协作方: 源码 -> Program
///
/// 引擎只依赖这个接口, 任何实现都可以替换默认的 [`WeftParser`]
pub trait SourceParser {
    fn parse(&self, source: &str, document: &DocumentId) -> Result<Program, ParseFailure>;
}

/// weft 语言的默认解析器
#[derive(Debug, Default, Clone, Copy)]
pub struct WeftParser;

impl SourceParser for WeftParser {
    fn parse(&self, source: &str, document: &DocumentId) -> Result<Program, ParseFailure> {
        let file = SourceFile::new(document.clone(), source.to_string());
        let mut parser = Parser::new(&file);
        parser.parse_program().map_err(|e| e.into_failure(&file))
    }
}

pub struct Parser<'a> {
    file: &'a SourceFile,
    stream: TokenStream<'a>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(file: &'a SourceFile) -> Self {
        Self {
            file,
            stream: TokenStream::new(Lexer::new(&file.src)),
            depth: 0,
        }
    }

    pub fn make_node<T>(&self, data: T, span: Span) -> Node<T> {
        Node::new(span, data)
    }

    // --- Token 检查与消费 (TokenStream Wrapper) ---

    pub fn peek(&mut self) -> Token {
        self.stream.peek(0)
    }

    pub fn peek_nth(&mut self, n: usize) -> Token {
        self.stream.peek(n)
    }

    pub fn check(&mut self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub fn check_nth(&mut self, n: usize, kind: TokenKind) -> bool {
        self.stream.peek(n).kind == kind
    }

    pub fn is_at_end(&mut self) -> bool {
        self.peek().kind == TokenKind::EOF
    }

    pub fn advance(&mut self) -> Token {
        self.stream.advance()
    }

    pub fn consume(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// 强制匹配，失败则报错
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if let Some(token) = self.consume(kind) {
            return Ok(token);
        }
        let current = self.peek();
        let message = format!(
            "Expected '{}', but found '{}'",
            kind.as_str(),
            self.describe(current)
        );
        Err(self.error_at(current, kind.as_str(), message))
    }

    pub fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// 获取 Token 文本
    pub fn text(&self, token: Token) -> &'a str {
        let src: &'a str = &self.file.src;
        token.span.text(src).unwrap_or("")
    }

    /// Token 起点的 1-based (行, 列)
    pub fn location(&self, token: Token) -> (usize, usize) {
        let (line, column, _) = self.file.lookup_location(token.span.start);
        (line, column)
    }

    pub fn previous_span(&self) -> Span {
        self.stream.last_span
    }

    pub fn error_at(&self, token: Token, expected: &str, message: String) -> ParseError {
        ParseError {
            expected: expected.to_string(),
            found: token.kind,
            span: token.span,
            message,
        }
    }

    /// 在新的一层里解析, 返回后恢复层数
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let saved = self.depth;
        self.deepen()?;
        let result = parse(self);
        self.depth = saved;
        result
    }

    /// 加深一层, 超过 [`MAX_NESTING`] 时在当前 Token 处报错
    pub fn deepen(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            let current = self.peek();
            let message = format!("Nesting deeper than {} levels", MAX_NESTING);
            return Err(self.error_at(current, "shallower nesting", message));
        }
        self.depth += 1;
        Ok(())
    }

    /// 报错时展示的 Token 文本
    fn describe(&self, token: Token) -> String {
        match token.kind {
            TokenKind::EOF => TokenKind::EOF.as_str().to_string(),
            _ => self.text(token).to_string(),
        }
    }

    /// 去掉首尾引号并处理转义
    pub fn unescape_string(&self, raw: &str) -> String {
        let quote = raw.chars().next().filter(|q| *q == '"' || *q == '\'');
        let inner = match quote {
            Some(q) if raw.len() >= 2 => raw[1..].strip_suffix(q).unwrap_or(&raw[1..]),
            _ => raw,
        };

        let mut out = String::with_capacity(inner.len());
        let mut rest = inner.chars();
        while let Some(c) = rest.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            let escaped = match rest.next() {
                Some('n') => '\n',
                Some('r') => '\r',
                Some('t') => '\t',
                Some('0') => '\0',
                Some('u') if rest.as_str().starts_with('{') => {
                    let body = &rest.as_str()[1..];
                    let Some(close) = body.find('}') else { break };
                    let decoded = u32::from_str_radix(&body[..close], 16)
                        .ok()
                        .and_then(char::from_u32);
                    // 跳过 "{...}"
                    rest = body[close + 1..].chars();
                    match decoded {
                        Some(ch) => ch,
                        None => continue,
                    }
                }
                Some(other) => other,
                None => break,
            };
            out.push(escaped);
        }
        out
    }

    /// 解析入口：Program
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let start_span = self.peek().span;
        let mut statements = Vec::new();

        while !self.is_at_end() {
            // 空语句
            if self.match_token(&[TokenKind::Semicolon]) {
                continue;
            }
            statements.push(self.parse_statement()?);
        }

        Ok(Program {
            statements,
            span: start_span.to(self.previous_span()),
        })
    }
}
