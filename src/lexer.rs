use crate::token::{Token, TokenKind};
use core::iter::Peekable;
use core::str::Chars;

pub struct Lexer<'a> {
    src: &'a str,
    chars: Peekable<Chars<'a>>,
    current_position: usize,
    start_position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.chars().peekable(),
            current_position: 0,
            start_position: 0,
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.start_position, self.current_position)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.current_position += c.len_utf8();
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn peek_next_is(&self, expected: char) -> bool {
        let mut lookahead = self.chars.clone();
        lookahead.next();
        lookahead.next() == Some(expected)
    }

    fn peek_next_is_digit(&self) -> bool {
        let mut lookahead = self.chars.clone();
        lookahead.next();
        lookahead.next().is_some_and(|c| c.is_ascii_digit())
    }
}

impl<'a> Lexer<'a> {
    pub fn next_token(&mut self) -> Token {
        // 1. 跳过空白与注释 (换行在 weft 里不是语句分隔符)
        self.skip_trivia();

        self.start_position = self.current_position;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::EOF);
        };

        match c {
            c if is_ident_start(c) => self.scan_identifier(),
            c if c.is_ascii_digit() => self.scan_number(),
            '"' | '\'' => self.scan_string(c),
            _ => self.scan_symbol(),
        }
    }

    /// 符号按最长匹配: 先试两个字符, 再试一个; 表里没有的字符是 ERROR
    fn scan_symbol(&mut self) -> Token {
        if let Some(next) = self.peek() {
            let end = self.current_position + next.len_utf8();
            if let Some(kind) = TokenKind::lookup_symbol(&self.src[self.start_position..end]) {
                self.advance();
                return self.make_token(kind);
            }
        }

        let text = &self.src[self.start_position..self.current_position];
        self.make_token(TokenKind::lookup_symbol(text).unwrap_or(TokenKind::ERROR))
    }

    // --- 辅助函数 ---

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '/' && self.peek_next_is('/') {
                self.skip_comment_line();
            } else {
                break;
            }
        }
    }

    fn skip_comment_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn scan_identifier(&mut self) -> Token {
        // 首字符已经被 advance 消耗
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.src[self.start_position..self.current_position];
        let kind = TokenKind::lookup_keyword(text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }

    fn scan_number(&mut self) -> Token {
        self.consume_digits();
        if self.peek() == Some('.') && self.peek_next_is_digit() {
            self.advance();
            self.consume_digits();
        }
        self.make_token(TokenKind::Number)
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_string(&mut self, quote: char) -> Token {
        while let Some(c) = self.peek() {
            match c {
                c if c == quote => {
                    self.advance();
                    return self.make_token(TokenKind::StringLiteral);
                }
                '\\' => {
                    self.advance();
                    self.advance();
                } // 转义
                '\n' => return self.make_token(TokenKind::ERROR), // 禁止跨行字符串
                _ => {
                    self.advance();
                }
            }
        }
        self.make_token(TokenKind::ERROR)
    }
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
