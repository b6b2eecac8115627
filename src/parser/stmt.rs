use crate::ast::*;
use crate::parser::{ParseResult, Parser};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// 解析一条语句 (结尾的 `;` 可省略)
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let token = self.peek();

        match token.kind {
            TokenKind::Let | TokenKind::Const => self.parse_var_declaration(),
            // fn name(...) 是声明, fn(...) 是匿名函数表达式
            TokenKind::Fn if self.check_nth(1, TokenKind::Identifier) => {
                self.parse_function_declaration()
            }
            TokenKind::Import => self.parse_import_declaration(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::LeftBrace => {
                let start_span = token.span;
                let body = self.parse_block()?;
                Ok(self.make_node(
                    StatementData::Block { body },
                    start_span.to(self.previous_span()),
                ))
            }
            TokenKind::Return => self.parse_return(),
            TokenKind::Break | TokenKind::Continue => {
                self.advance();
                let data = if token.kind == TokenKind::Break {
                    StatementData::Break
                } else {
                    StatementData::Continue
                };
                self.finish_statement();
                Ok(self.make_node(data, token.span))
            }
            _ => {
                let expr = self.parse_expression()?;
                let span = expr.span;
                self.finish_statement();
                Ok(self.make_node(StatementData::Expression(expr), span))
            }
        }
    }

    /// let NAME (= EXPR)? ;
    /// const NAME = EXPR ;
    fn parse_var_declaration(&mut self) -> ParseResult<Statement> {
        let keyword = self.advance();
        let is_constant = keyword.kind == TokenKind::Const;

        let name_token = self.expect(TokenKind::Identifier)?;
        let identifier = self.text(name_token).to_string();
        let (line, column) = self.location(name_token);

        let initializer = if self.match_token(&[TokenKind::Assign]) {
            Some(self.parse_expression()?)
        } else if is_constant {
            // 常量必须初始化
            let found = self.peek();
            return Err(self.error_at(
                found,
                "=",
                format!("Constant '{}' must be initialized", identifier),
            ));
        } else {
            None
        };

        let span = keyword.span.to(self.previous_span());
        self.finish_statement();

        Ok(self.make_node(
            StatementData::VarDeclaration(VarDeclaration {
                identifier,
                is_constant,
                initializer,
                line,
                column,
            }),
            span,
        ))
    }

    /// fn NAME(a, b) { ... }
    fn parse_function_declaration(&mut self) -> ParseResult<Statement> {
        let start_span = self.expect(TokenKind::Fn)?.span;

        let name_token = self.expect(TokenKind::Identifier)?;
        let name = self.text(name_token).to_string();
        let (line, column) = self.location(name_token);

        let parameters = self.parse_param_list()?;
        let body = self.parse_block()?;

        Ok(self.make_node(
            StatementData::FunctionDeclaration(FunctionDeclaration {
                name,
                parameters,
                body,
                line,
                column,
            }),
            start_span.to(self.previous_span()),
        ))
    }

    /// 解析 import 语句
    /// Examples:
    ///   import { sin, cos } from "math";
    ///   import utils from "./utils";
    fn parse_import_declaration(&mut self) -> ParseResult<Statement> {
        let keyword = self.expect(TokenKind::Import)?;
        let (line, column) = self.location(keyword);

        let mut specifiers = Vec::new();
        if self.match_token(&[TokenKind::LeftBrace]) {
            while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
                specifiers.push(self.parse_import_specifier()?);
                if !self.match_token(&[TokenKind::Comma]) {
                    break;
                }
            }
            self.expect(TokenKind::RightBrace)?;
        } else {
            specifiers.push(self.parse_import_specifier()?);
        }

        self.expect(TokenKind::From)?;
        let source_token = self.expect(TokenKind::StringLiteral)?;
        let source = self.unescape_string(self.text(source_token));

        let span = keyword.span.to(self.previous_span());
        self.finish_statement();

        Ok(self.make_node(
            StatementData::ImportDeclaration(ImportDeclaration {
                specifiers,
                source,
                line,
                column,
            }),
            span,
        ))
    }

    fn parse_import_specifier(&mut self) -> ParseResult<ImportSpecifier> {
        let name_token = self.expect(TokenKind::Identifier)?;
        let (line, column) = self.location(name_token);
        Ok(ImportSpecifier {
            name: self.text(name_token).to_string(),
            line,
            column,
        })
    }

    /// if COND { ... } else if COND { ... } else { ... }
    /// 条件两侧的括号只是普通的分组表达式
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let start_span = self.expect(TokenKind::If)?.span;
        let condition = self.parse_expression()?;
        let then_branch = self.parse_block()?;

        let else_branch = if self.match_token(&[TokenKind::Else]) {
            if self.check(TokenKind::If) {
                // else if: 包成只含一条 If 语句的分支
                Some(vec![self.nested(Self::parse_if)?])
            } else {
                Some(self.parse_block()?)
            }
        } else {
            None
        };

        Ok(self.make_node(
            StatementData::If {
                condition,
                then_branch,
                else_branch,
            },
            start_span.to(self.previous_span()),
        ))
    }

    fn parse_while(&mut self) -> ParseResult<Statement> {
        let start_span = self.expect(TokenKind::While)?.span;
        let condition = self.parse_expression()?;
        let body = self.parse_block()?;

        Ok(self.make_node(
            StatementData::While { condition, body },
            start_span.to(self.previous_span()),
        ))
    }

    fn parse_return(&mut self) -> ParseResult<Statement> {
        let start_span = self.expect(TokenKind::Return)?.span;

        let value = if self.check(TokenKind::Semicolon)
            || self.check(TokenKind::RightBrace)
            || self.is_at_end()
        {
            None
        } else {
            Some(self.parse_expression()?)
        };

        let span = start_span.to(self.previous_span());
        self.finish_statement();
        Ok(self.make_node(StatementData::Return(value), span))
    }

    /// 解析代码块 { stmt* }
    pub fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        self.nested(Self::parse_block_body)
    }

    fn parse_block_body(&mut self) -> ParseResult<Vec<Statement>> {
        self.expect(TokenKind::LeftBrace)?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if self.match_token(&[TokenKind::Semicolon]) {
                continue;
            }
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenKind::RightBrace)?;
        Ok(statements)
    }

    /// 参数列表 (a, b, c) 允许尾逗号
    pub fn parse_param_list(&mut self) -> ParseResult<Vec<String>> {
        self.expect(TokenKind::LeftParen)?;
        let mut params = Vec::new();

        while !self.check(TokenKind::RightParen) && !self.is_at_end() {
            let name_token = self.expect(TokenKind::Identifier)?;
            params.push(self.text(name_token).to_string());

            if !self.match_token(&[TokenKind::Comma]) {
                break;
            }
        }

        self.expect(TokenKind::RightParen)?;
        Ok(params)
    }

    /// 可选的语句结束符
    fn finish_statement(&mut self) {
        self.match_token(&[TokenKind::Semicolon]);
    }
}
