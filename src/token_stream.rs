use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::utils::Span;
use std::collections::VecDeque;

/// 带任意前瞻的 Token 缓冲
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    buffer: VecDeque<Token>,
    pub last_span: Span,
}

impl<'a> TokenStream<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            buffer: VecDeque::new(),
            last_span: Span::new(0, 0),
        }
    }

    fn fill(&mut self, n: usize) {
        while self.buffer.len() <= n {
            if self.buffer.back().is_some_and(|t| t.kind == TokenKind::EOF) {
                break;
            }
            let tok = self.lexer.next_token();
            self.buffer.push_back(tok);
        }
    }

    /// 越过 EOF 的前瞻一律返回 EOF
    pub fn peek(&mut self, n: usize) -> Token {
        self.fill(n);
        match self.buffer.get(n).or(self.buffer.back()) {
            Some(tok) => *tok,
            None => Token::new(TokenKind::EOF, self.last_span.end, self.last_span.end),
        }
    }

    pub fn advance(&mut self) -> Token {
        self.fill(0);
        let tok = match self.buffer.front() {
            // EOF 留在缓冲区里, 反复 advance 不会越界
            Some(tok) if tok.kind == TokenKind::EOF => *tok,
            Some(_) => self.buffer.pop_front().unwrap_or_else(|| self.eof()),
            None => self.eof(),
        };
        self.last_span = tok.span;
        tok
    }

    fn eof(&self) -> Token {
        Token::new(TokenKind::EOF, self.last_span.end, self.last_span.end)
    }
}
