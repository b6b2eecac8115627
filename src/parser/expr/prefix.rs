use crate::ast::*;
use crate::parser::{ParseResult, Parser};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    pub fn parse_prefix(&mut self) -> ParseResult<Expression> {
        let token = self.peek();

        match token.kind {
            // === 字面量 ===
            TokenKind::Number => self.parse_number_literal(),
            TokenKind::StringLiteral => {
                self.advance();
                let value = self.unescape_string(self.text(token));
                Ok(self.make_node(ExpressionData::StringLiteral(value), token.span))
            }

            // === 标识符 ===
            TokenKind::Identifier => {
                self.advance();
                let name = self.text(token).to_string();
                Ok(self.make_node(ExpressionData::Identifier(name), token.span))
            }

            // === 前缀运算 ===
            TokenKind::Minus | TokenKind::Bang => self.parse_unary(),

            // === 分组 / 箭头函数 ===
            TokenKind::LeftParen => {
                if self.looks_like_arrow_params() {
                    self.parse_arrow_lambda()
                } else {
                    self.parse_group()
                }
            }

            // === 数组 / 对象 ===
            TokenKind::LeftBracket => self.parse_array_literal(),
            TokenKind::LeftBrace => self.parse_object_literal(),

            // === 匿名函数 fn(a) { ... } ===
            TokenKind::Fn => self.parse_fn_lambda(),

            TokenKind::ERROR => {
                let message = format!("Invalid token '{}'", self.text(token));
                Err(self.error_at(token, "Expression", message))
            }
            _ => {
                let message = format!(
                    "Unexpected token at start of expression: '{}'",
                    if token.kind == TokenKind::EOF {
                        TokenKind::EOF.as_str()
                    } else {
                        self.text(token)
                    }
                );
                Err(self.error_at(token, "Expression", message))
            }
        }
    }

    fn parse_number_literal(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        // 移除数字中的下划线 (e.g. 1_000.5)
        let text = self.text(token).replace('_', "");

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                Ok(self.make_node(ExpressionData::NumericLiteral(value), token.span))
            }
            _ => Err(self.error_at(
                token,
                "number",
                format!("Invalid number literal '{}'", text),
            )),
        }
    }

    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let op_token = self.advance();
        let op = if op_token.kind == TokenKind::Minus {
            UnaryOp::Neg
        } else {
            UnaryOp::Not
        };

        let operand = self.parse_expression_bp(super::UNARY)?;
        let span = op_token.span.to(operand.span);

        Ok(self.make_node(
            ExpressionData::Unary {
                op,
                expr: Box::new(operand),
            },
            span,
        ))
    }

    fn parse_group(&mut self) -> ParseResult<Expression> {
        self.expect(TokenKind::LeftParen)?;
        let mut inner = self.parse_expression()?;
        let end = self.expect(TokenKind::RightParen)?;
        // 分组不产生节点, 只扩展 span
        inner.span = inner.span.to(end.span);
        Ok(inner)
    }

    /// 当前 '(' 是否开启箭头函数的参数列表: `(a, b) =>`
    fn looks_like_arrow_params(&mut self) -> bool {
        let mut i = 1; // 0 is '('
        if self.check_nth(i, TokenKind::RightParen) {
            return self.check_nth(i + 1, TokenKind::FatArrow);
        }

        loop {
            if !self.check_nth(i, TokenKind::Identifier) {
                return false;
            }
            i += 1;
            match self.peek_nth(i).kind {
                TokenKind::Comma => i += 1,
                TokenKind::RightParen => return self.check_nth(i + 1, TokenKind::FatArrow),
                _ => return false,
            }
        }
    }

    /// (a, b) => expr 或 (a, b) => { ... }
    fn parse_arrow_lambda(&mut self) -> ParseResult<Expression> {
        let start_span = self.peek().span;
        let parameters = self.parse_param_list()?;
        self.expect(TokenKind::FatArrow)?;

        let body = if self.check(TokenKind::LeftBrace) {
            LambdaBody::Block(self.parse_block()?)
        } else {
            LambdaBody::Expression(Box::new(self.parse_expression()?))
        };

        Ok(self.make_node(
            ExpressionData::Lambda { parameters, body },
            start_span.to(self.previous_span()),
        ))
    }

    /// fn(a, b) { ... }
    fn parse_fn_lambda(&mut self) -> ParseResult<Expression> {
        let start_span = self.expect(TokenKind::Fn)?.span;
        let parameters = self.parse_param_list()?;
        let body = LambdaBody::Block(self.parse_block()?);

        Ok(self.make_node(
            ExpressionData::Lambda { parameters, body },
            start_span.to(self.previous_span()),
        ))
    }

    /// 解析数组字面量
    /// 语法: [expr, expr, ...] (支持尾后逗号)
    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let start_span = self.expect(TokenKind::LeftBracket)?.span;
        let mut elements = Vec::new();

        while !self.check(TokenKind::RightBracket) && !self.is_at_end() {
            elements.push(self.parse_expression()?);
            if !self.match_token(&[TokenKind::Comma]) {
                break;
            }
        }

        let end_span = self.expect(TokenKind::RightBracket)?.span;
        Ok(self.make_node(
            ExpressionData::ArrayLiteral(elements),
            start_span.to(end_span),
        ))
    }

    /// 解析对象字面量
    /// 语法: {key: expr, "key": expr, short} (支持尾后逗号)
    fn parse_object_literal(&mut self) -> ParseResult<Expression> {
        let start_span = self.expect(TokenKind::LeftBrace)?.span;
        let mut properties = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            let key_token = self.peek();
            let key = match key_token.kind {
                TokenKind::Identifier | TokenKind::Number => self.text(key_token).to_string(),
                TokenKind::StringLiteral => self.unescape_string(self.text(key_token)),
                _ => {
                    let message = format!(
                        "Expected property name, but found '{}'",
                        self.text(key_token)
                    );
                    return Err(self.error_at(key_token, "property name", message));
                }
            };
            self.advance();
            let (line, column) = self.location(key_token);

            let value = if key_token.kind == TokenKind::Identifier && !self.check(TokenKind::Colon) {
                // 简写 {a} 等价于 {a: a}
                self.make_node(ExpressionData::Identifier(key.clone()), key_token.span)
            } else {
                self.expect(TokenKind::Colon)?;
                self.parse_expression()?
            };

            properties.push(ObjectProperty {
                key,
                value,
                line,
                column,
            });

            if !self.match_token(&[TokenKind::Comma]) {
                break;
            }
        }

        let end_span = self.expect(TokenKind::RightBrace)?.span;
        Ok(self.make_node(
            ExpressionData::ObjectLiteral(properties),
            start_span.to(end_span),
        ))
    }
}
