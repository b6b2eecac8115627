use crate::ast::*;
use crate::parser::{ParseResult, Parser};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    pub fn parse_postfix(&mut self, base: Expression) -> ParseResult<Expression> {
        let token = self.peek();

        match token.kind {
            // Call: func(a, b)
            TokenKind::LeftParen => {
                let args = self.parse_call_args()?;
                let span = base.span.to(self.previous_span());
                Ok(self.make_node(
                    ExpressionData::Call {
                        callee: Box::new(base),
                        args,
                    },
                    span,
                ))
            }

            // Member: obj.prop
            TokenKind::Dot => {
                self.advance(); // eat .
                let name_token = self.expect(TokenKind::Identifier)?;
                let property = self.text(name_token).to_string();
                let span = base.span.to(name_token.span);

                Ok(self.make_node(
                    ExpressionData::Member {
                        target: Box::new(base),
                        property,
                    },
                    span,
                ))
            }

            // Index: arr[i]
            TokenKind::LeftBracket => {
                self.advance(); // 吃掉 '['
                let index = self.parse_expression()?;
                let end_token = self.expect(TokenKind::RightBracket)?;
                let span = base.span.to(end_token.span);

                Ok(self.make_node(
                    ExpressionData::Index {
                        target: Box::new(base),
                        index: Box::new(index),
                    },
                    span,
                ))
            }

            _ => Ok(base),
        }
    }

    /// 解析调用参数 (1, 2, x) 允许尾逗号
    fn parse_call_args(&mut self) -> ParseResult<Vec<Expression>> {
        self.expect(TokenKind::LeftParen)?;
        let mut args = Vec::new();

        while !self.check(TokenKind::RightParen) && !self.is_at_end() {
            args.push(self.parse_expression()?);
            if !self.match_token(&[TokenKind::Comma]) {
                break;
            }
        }

        self.expect(TokenKind::RightParen)?;
        Ok(args)
    }
}
